//! Fixed instants for deterministic CLI runs.
//!
//! Values are local wall-clock times, so the expected strings hold in any
//! time zone.

/// `--at` value used by most tests.
pub const SAMPLE_AT: &str = "2024-03-07 13:05:09";

/// `%yyyy-MM-dd HH:mm:ss%` rendered at [`SAMPLE_AT`].
pub const SAMPLE_DEFAULT_RENDERED: &str = "2024-03-07 13:05:09";

/// `%date:yyMMdd% %time:HHmmss%` rendered at [`SAMPLE_AT`].
pub const SAMPLE_LEGACY_RENDERED: &str = "240307 130509";

/// A turn-of-year instant with single-digit fields.
pub const NEW_YEAR_AT: &str = "2009-01-02 03:04:05";
