use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Shared handle to the error that triggered an `UnpackZipError`
///
/// The handle is reference counted, so the same cause may also be held by other error contexts.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Fallback text when neither a message nor a cause is present
const DEFAULT_DESCRIPTION: &str = "failed to unpack ZIP archive";

/// An error encountered while unpacking or reading the contents of a ZIP archive
///
/// The value is immutable once built.  `with_suppressed` consumes the value and returns a new one.
#[derive(Debug)]
pub struct UnpackZipError {
    message: Option<String>,
    cause: Option<Cause>,
    suppression_enabled: bool,
    backtrace_writable: bool,
    suppressed: Vec<Cause>,
    backtrace: Option<Backtrace>,
}

impl UnpackZipError {
    /// Creates an error without a message or a cause
    pub fn new() -> Self {
        Self::with_capture_options(None, None, true, true)
    }

    /// Creates an error carrying only a description
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        Self::with_capture_options(Some(message.into()), None, true, true)
    }

    /// Creates an error carrying a description and the underlying error
    pub fn with_message_and_cause<S: Into<String>>(message: S, cause: Cause) -> Self {
        Self::with_capture_options(Some(message.into()), Some(cause), true, true)
    }

    /// Creates an error wrapping the underlying error
    ///
    /// The description is taken from `cause` when displayed.
    pub fn from_cause(cause: Cause) -> Self {
        Self::with_capture_options(None, Some(cause), true, true)
    }

    /// Creates an error with full control over diagnostic capture
    ///
    /// # Arguments
    ///
    /// * `enable_suppression` - whether `with_suppressed` records anything
    /// * `writable_backtrace` - whether a backtrace is captured now (subject to `RUST_BACKTRACE`)
    pub(crate) fn with_capture_options(
        message: Option<String>,
        cause: Option<Cause>,
        enable_suppression: bool,
        writable_backtrace: bool,
    ) -> Self {
        let backtrace = if writable_backtrace {
            Some(Backtrace::capture())
        } else {
            None
        };
        return Self {
            message,
            cause,
            suppression_enabled: enable_suppression,
            backtrace_writable: writable_backtrace,
            suppressed: vec![],
            backtrace,
        };
    }

    /// Description given at construction, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Underlying error, if any
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Backtrace captured at construction
    ///
    /// `None` when capture was turned off for this value.  A returned backtrace may still be
    /// `BacktraceStatus::Disabled` if the environment did not ask for one.
    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }

    /// Returns `true` if a backtrace was actually resolved at construction
    pub fn has_captured_backtrace(&self) -> bool {
        matches!(
            self.backtrace.as_ref().map(Backtrace::status),
            Some(BacktraceStatus::Captured)
        )
    }

    /// Errors attached with `with_suppressed`, oldest first
    pub fn suppressed(&self) -> &[Cause] {
        &self.suppressed
    }

    pub fn is_suppression_enabled(&self) -> bool {
        self.suppression_enabled
    }

    pub fn is_backtrace_writable(&self) -> bool {
        self.backtrace_writable
    }

    /// Attaches another error that was given up in favor of this one
    ///
    /// Dropped silently when suppression is disabled.
    pub fn with_suppressed(mut self, error: Cause) -> Self {
        if self.suppression_enabled {
            self.suppressed.push(error);
        }
        self
    }
}

impl Default for UnpackZipError {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UnpackZipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.cause) {
            (Some(message), _) => f.write_str(message),
            (None, Some(cause)) => write!(f, "{}", cause),
            (None, None) => f.write_str(DEFAULT_DESCRIPTION),
        }
    }
}

impl Error for UnpackZipError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn Error + 'static))
    }
}

impl From<std::io::Error> for UnpackZipError {
    fn from(error: std::io::Error) -> Self {
        Self::from_cause(Arc::new(error))
    }
}

impl From<zip::result::ZipError> for UnpackZipError {
    fn from(error: zip::result::ZipError) -> Self {
        Self::from_cause(Arc::new(error))
    }
}
