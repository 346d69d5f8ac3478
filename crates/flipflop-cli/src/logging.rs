use crate::types::LogLevel;

/// Send `log` records to stderr at `level`; `RUST_LOG` overrides when set.
pub fn init(level: LogLevel) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level.into())
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env();

    // Already initialized when `run` is called more than once in-process.
    let _ = builder.try_init();
}
