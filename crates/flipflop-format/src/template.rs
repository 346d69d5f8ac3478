use chrono::format::Item;
use chrono::{DateTime, TimeZone};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::legacy;
use crate::token::Token;

/// A `%`-delimited block with a non-empty body.
static BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%[^%]+%").unwrap());

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&Token::alternation()).unwrap());

/// Which block grammar a template is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// `%yyyy-MM-dd HH:mm:ss%`: any `%...%` block, tokens anywhere in the body.
    #[default]
    Blocks,
    /// `%date:yyMMdd% %time:HHmmss%`: prefixed blocks restricted to date or
    /// time letters.
    Prefixed,
}

/// One resolved unit of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Literal(String),
    Token(Token),
}

/// A parsed template, ready to be rendered any number of times.
///
/// Parsing never fails: anything that is not a recognized block is kept as
/// literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    pieces: Vec<Piece>,
}

impl Template {
    pub fn parse(source: &str) -> Self {
        Self::parse_with(source, Dialect::Blocks)
    }

    pub fn parse_with(source: &str, dialect: Dialect) -> Self {
        let mut pieces = PieceBuffer::default();
        match dialect {
            Dialect::Blocks => parse_blocks(source, &mut pieces),
            Dialect::Prefixed => legacy::parse_prefixed(source, &mut pieces),
        }
        Self {
            source: source.to_string(),
            pieces: pieces.finish(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.pieces.iter().filter_map(|piece| match piece {
            Piece::Token(token) => Some(*token),
            Piece::Literal(_) => None,
        })
    }

    pub fn has_tokens(&self) -> bool {
        self.tokens().next().is_some()
    }

    /// Render against `instant` in its own time zone.
    pub fn render<Tz>(&self, instant: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        instant.format_with_items(self.items()).to_string()
    }

    /// Native strftime pattern producing the same output as [`Template::render`].
    ///
    /// Literal `%` characters are escaped as `%%`.
    pub fn to_strftime(&self) -> String {
        let mut pattern = String::with_capacity(self.source.len());
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => pattern.push_str(&text.replace('%', "%%")),
                Piece::Token(token) => pattern.push_str(token.strftime()),
            }
        }
        pattern
    }

    fn items(&self) -> impl Iterator<Item = Item<'_>> + Clone {
        self.pieces.iter().map(|piece| match piece {
            Piece::Literal(text) => Item::Literal(text.as_str()),
            Piece::Token(token) => token.item(),
        })
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::parse(source)
    }
}

/// Accumulates pieces, merging adjacent literals.
#[derive(Default)]
pub(crate) struct PieceBuffer {
    pieces: Vec<Piece>,
}

impl PieceBuffer {
    pub(crate) fn literal(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Piece::Literal(last)) = self.pieces.last_mut() {
            last.push_str(text);
        } else {
            self.pieces.push(Piece::Literal(text.to_string()));
        }
    }

    pub(crate) fn token(&mut self, token: Token) {
        self.pieces.push(Piece::Token(token));
    }

    fn finish(self) -> Vec<Piece> {
        self.pieces
    }
}

fn parse_blocks(source: &str, pieces: &mut PieceBuffer) {
    let mut cursor = 0;
    for block in BLOCK_REGEX.find_iter(source) {
        pieces.literal(&source[cursor..block.start()]);

        let raw = block.as_str();
        let body = &raw[1..raw.len() - 1];
        if TOKEN_REGEX.is_match(body) {
            push_body(body, pieces);
        } else {
            // No token inside: the block stays as written, delimiters included.
            pieces.literal(raw);
        }
        cursor = block.end();
    }
    pieces.literal(&source[cursor..]);
}

fn push_body(body: &str, pieces: &mut PieceBuffer) {
    let mut cursor = 0;
    for found in TOKEN_REGEX.find_iter(body) {
        pieces.literal(&body[cursor..found.start()]);
        match found.as_str().parse::<Token>() {
            Ok(token) => pieces.token(token),
            Err(_) => pieces.literal(found.as_str()),
        }
        cursor = found.end();
    }
    pieces.literal(&body[cursor..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    fn instant() -> DateTime<FixedOffset> {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(13, 5, 9)
            .unwrap()
            .and_local_timezone(offset)
            .unwrap()
    }

    #[test]
    fn test_parse_splits_block_into_pieces() {
        let template = Template::parse("at %HH:mm%!");
        assert_eq!(
            template.pieces(),
            &[
                Piece::Literal("at ".to_string()),
                Piece::Token(Token::Hour),
                Piece::Literal(":".to_string()),
                Piece::Token(Token::Minute),
                Piece::Literal("!".to_string()),
            ]
        );
    }

    #[test]
    fn test_full_year_not_split_into_short_years() {
        let template = Template::parse("%yyyy%");
        assert_eq!(template.pieces(), &[Piece::Token(Token::FullYear)]);
    }

    #[test]
    fn test_odd_run_of_y_keeps_remainder_literal() {
        let template = Template::parse("%yyy%");
        assert_eq!(
            template.pieces(),
            &[
                Piece::Token(Token::ShortYear),
                Piece::Literal("y".to_string())
            ]
        );
    }

    #[test]
    fn test_unrecognized_block_is_one_literal() {
        let template = Template::parse("a %foo% b");
        assert_eq!(template.pieces(), &[Piece::Literal("a %foo% b".to_string())]);
        assert!(!template.has_tokens());
    }

    #[test]
    fn test_empty_body_is_not_a_block() {
        let template = Template::parse("%%yyyy%");
        assert_eq!(
            template.pieces(),
            &[
                Piece::Literal("%".to_string()),
                Piece::Token(Token::FullYear)
            ]
        );
    }

    #[test]
    fn test_to_strftime_translates_tokens_and_escapes_percent() {
        assert_eq!(
            Template::parse("%yyyy-MM-dd HH:mm:ss%").to_strftime(),
            "%Y-%m-%d %H:%M:%S"
        );
        assert_eq!(Template::parse("%dd% 100%").to_strftime(), "%d 100%%");
    }

    #[test]
    fn test_render_uses_instant_time_zone() {
        assert_eq!(Template::parse("%HH%").render(&instant()), "13");
    }

    #[test]
    fn test_tokens_iterates_in_order() {
        let template = Template::parse("%ss% then %yy%");
        let tokens: Vec<Token> = template.tokens().collect();
        assert_eq!(tokens, vec![Token::Second, Token::ShortYear]);
    }
}
