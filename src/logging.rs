//! Logger setup
//!
//! `RUST_LOG` takes precedence. Without it, debug builds log everything from
//! `debug` up and release builds only log errors.

/// Default filter when `RUST_LOG` is unset
pub fn default_filter() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "error" }
}

/// Installs the global logger
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter()),
    )
    .try_init();
}
