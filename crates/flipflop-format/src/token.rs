use chrono::format::{Item, Numeric, Pad};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar or clock field written with its custom spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    #[serde(rename = "yyyy")]
    FullYear,
    #[serde(rename = "yy")]
    ShortYear,
    #[serde(rename = "MM")]
    Month,
    #[serde(rename = "dd")]
    Day,
    #[serde(rename = "HH")]
    Hour,
    #[serde(rename = "mm")]
    Minute,
    #[serde(rename = "ss")]
    Second,
}

impl Token {
    /// Every token, longest spelling first.
    ///
    /// Matchers are built from this order so that `yyyy` is never split
    /// into `yy` + `yy`.
    pub const ALL: [Token; 7] = [
        Token::FullYear,
        Token::ShortYear,
        Token::Month,
        Token::Day,
        Token::Hour,
        Token::Minute,
        Token::Second,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Token::FullYear => "yyyy",
            Token::ShortYear => "yy",
            Token::Month => "MM",
            Token::Day => "dd",
            Token::Hour => "HH",
            Token::Minute => "mm",
            Token::Second => "ss",
        }
    }

    /// Equivalent strftime specifier understood by chrono.
    pub fn strftime(self) -> &'static str {
        match self {
            Token::FullYear => "%Y",
            Token::ShortYear => "%y",
            Token::Month => "%m",
            Token::Day => "%d",
            Token::Hour => "%H",
            Token::Minute => "%M",
            Token::Second => "%S",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Token::FullYear => "four-digit year",
            Token::ShortYear => "two-digit year (00-99)",
            Token::Month => "month (01-12)",
            Token::Day => "day of month (01-31)",
            Token::Hour => "hour, 24-hour clock (00-23)",
            Token::Minute => "minute (00-59)",
            Token::Second => "second (00-59)",
        }
    }

    /// Regex alternation over all spellings, longest first.
    pub(crate) fn alternation() -> String {
        Token::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join("|")
    }

    pub(crate) fn item(self) -> Item<'static> {
        let numeric = match self {
            Token::FullYear => Numeric::Year,
            Token::ShortYear => Numeric::YearMod100,
            Token::Month => Numeric::Month,
            Token::Day => Numeric::Day,
            Token::Hour => Numeric::Hour,
            Token::Minute => Numeric::Minute,
            Token::Second => Numeric::Second,
        };
        Item::Numeric(numeric, Pad::Zero)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string is not exactly one token spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken(pub String);

impl fmt::Display for UnknownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown token: {:?}", self.0)
    }
}

impl std::error::Error for UnknownToken {}

impl FromStr for Token {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownToken(s.to_string()))
    }
}
