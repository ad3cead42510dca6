/// Install the default tracing subscriber, once.
///
/// Safe to call from multiple shells; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
}
