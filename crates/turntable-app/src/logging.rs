//! Process-wide logger setup for the binary.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install `env_logger` once. `RUST_LOG` wins over `default_filter`.
pub fn init_logging(default_filter: &str) {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .parse_filters(default_filter)
            .parse_env("RUST_LOG")
            .init();
        log::debug!("logging initialized");
    });
}
