use zipunpack::UnpackZipError;

// Kept in its own test binary: the standard library reads the variable once per process.
#[test]
fn backtrace_captured_when_enabled_test() {
    std::env::set_var("RUST_LIB_BACKTRACE", "1");
    let error = UnpackZipError::with_message("corrupted entry: foo.txt");
    assert!(error.is_backtrace_writable());
    assert!(error.backtrace().is_some(), "backtrace slot is filled");
    assert!(
        error.has_captured_backtrace(),
        "backtrace is resolved when `RUST_LIB_BACKTRACE=1`"
    );
}
