pub mod ring_logger;

#[allow(unused_imports)]
pub use ring_logger::{dump_log, init_logger, logged_lines};

/// Routes `log` output through the test harness.
/// RUST_LOG=trace cargo test -- --nocapture
#[allow(dead_code)]
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
