//! exactseg-test - Regression test framework for exactseg
//!
//! Provides a small regression harness in the style of `regutils`:
//! comparisons are recorded instead of panicking, and [`RegParams::cleanup`]
//! reports every failure at the end of a test.
//!
//! # Usage
//!
//! ```ignore
//! use exactseg_test::RegParams;
//!
//! let mut rp = RegParams::new("reduce");
//! rp.compare_values(4.0, labels.num_labels() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to dump intermediate results
//! - `RUST_LOG`: log specification for the shared test logger (default "info")

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{
    blocks_image, gradient_image, grid_label_map, noise_image, stripes_label_map,
};
pub use params::{RegParams, RegTestMode};

use flexi_logger::Logger;
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

/// Install a stderr logger once per test binary
///
/// Safe to call from every test; only the first call has an effect. A
/// failure to install (for instance because another logger is already
/// registered) is reported and otherwise ignored.
pub fn init_logging() {
    LOGGER_INIT.call_once(|| {
        match Logger::try_with_env_or_str("info").and_then(|logger| logger.log_to_stderr().start())
        {
            Ok(handle) => {
                log::debug!("test logger installed");
                // The logger must outlive every test in the binary.
                std::mem::forget(handle);
            }
            Err(e) => eprintln!("test logger not installed: {}", e),
        }
    });
}
