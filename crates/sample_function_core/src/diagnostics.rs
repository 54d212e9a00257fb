pub const HELLO_TEST_LOG_LINE: &str = "hello test";

/// Emits the fixed hello test line. Has no other effect.
pub fn emit_hello_test_line() {
    tracing::info!("{HELLO_TEST_LOG_LINE}");
}
