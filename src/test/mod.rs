
/// Routes `log` output to the test harness. Set `RUST_LOG=trace` to see it.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
