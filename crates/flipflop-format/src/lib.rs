//! Date/time templates written with custom tokens.
//!
//! A template is ordinary text with `%...%` blocks. Inside a block, the
//! tokens `yyyy`, `yy`, `MM`, `dd`, `HH`, `mm` and `ss` stand for calendar and
//! clock fields; everything else is kept as written.
//!
//! ```
//! use chrono::{Local, TimeZone};
//!
//! let instant = Local.with_ymd_and_hms(2024, 3, 7, 13, 5, 9).unwrap();
//! assert_eq!(
//!     flipflop_format::render("%yyyy-MM-dd HH:mm:ss%", &instant),
//!     "2024-03-07 13:05:09"
//! );
//! ```
//!
//! Rendering is total: unknown tokens, unmatched `%` and blocks without any
//! token come out as literal text.

pub mod clock;
pub mod legacy;
pub mod template;
pub mod token;

pub use clock::{Clock, FixedClock, SystemClock};
pub use legacy::LEGACY_DEFAULT_TEMPLATE;
pub use template::{Dialect, Piece, Template};
pub use token::{Token, UnknownToken};

use chrono::{DateTime, TimeZone};
use std::fmt;

pub const DEFAULT_TEMPLATE: &str = "%yyyy-MM-dd HH:mm:ss%";

/// Render `template` against `instant`.
pub fn render<Tz>(template: &str, instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    Template::parse(template).render(instant)
}

/// Render `template` against the local clock, read once.
pub fn render_now(template: &str) -> String {
    render_with(template, Dialect::Blocks, &SystemClock)
}

pub fn render_with(template: &str, dialect: Dialect, clock: &dyn Clock) -> String {
    Template::parse_with(template, dialect).render(&clock.now())
}
