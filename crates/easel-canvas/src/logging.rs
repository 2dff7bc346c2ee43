//! Logger initialization.
//!
//! Centralizes `env_logger` setup behind the `log` facade so binaries get
//! consistent behavior without each wiring up a backend.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// `RUST_LOG` takes precedence; without it the level defaults to `info`.
/// Intended usage is early in `main`.
pub fn init() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }
        builder.init();
        log::debug!("logging initialized");
    });
}
