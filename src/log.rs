use log::LevelFilter;

/// Environment variable that switches the default level to `Debug`.
pub const DEBUG_ENV_VAR: &str = "GRIDWORD_DEBUG";

/// Initialize logging for the gridword binaries.
///
/// # Behavior
/// - Uses `Debug` level if `debug_enabled` is true, otherwise `Info`.
/// - `RUST_LOG`, when set, overrides both.
/// - Calling it twice is harmless; the second call is ignored.
pub fn init_logger(debug_enabled: bool) {
    use std::env;
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}

/// Whether `GRIDWORD_DEBUG` is present in the environment.
#[must_use]
pub fn debug_requested() -> bool {
    std::env::var(DEBUG_ENV_VAR).is_ok()
}
