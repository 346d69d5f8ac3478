//! Prefixed block grammar: `%date:yyMMdd%` and `%time:HHmmss%`.
//!
//! A `date` body may only contain `y`, `M` and `d`; a `time` body only `H`,
//! `m` and `s`. Inside a body, runs are read greedily (`y{2,4}`, `MM`, `dd`,
//! `HH`, `mm`, `ss`). A `yyy` run stays literal and stray single letters are
//! dropped. Blocks that break these rules are plain text.

use regex::Regex;
use std::sync::LazyLock;

use crate::template::PieceBuffer;
use crate::token::Token;

pub const LEGACY_DEFAULT_TEMPLATE: &str = "%date:yyMMdd% %time:HHmmss%";

static PREFIXED_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%date:(?P<date>[yMd]+)%|%time:(?P<time>[Hms]+)%").unwrap());

static DATE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"y{2,4}|M{2}|d{2}").unwrap());

static TIME_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"H{2}|m{2}|s{2}").unwrap());

pub(crate) fn parse_prefixed(source: &str, pieces: &mut PieceBuffer) {
    let mut cursor = 0;
    for caps in PREFIXED_BLOCK_REGEX.captures_iter(source) {
        let Some(block) = caps.get(0) else {
            continue;
        };
        pieces.literal(&source[cursor..block.start()]);

        if let Some(body) = caps.name("date") {
            push_runs(&DATE_RUN_REGEX, body.as_str(), pieces);
        } else if let Some(body) = caps.name("time") {
            push_runs(&TIME_RUN_REGEX, body.as_str(), pieces);
        }
        cursor = block.end();
    }
    pieces.literal(&source[cursor..]);
}

fn push_runs(runs: &Regex, body: &str, pieces: &mut PieceBuffer) {
    for run in runs.find_iter(body) {
        match run.as_str().parse::<Token>() {
            Ok(token) => pieces.token(token),
            Err(_) => pieces.literal(run.as_str()),
        }
    }
}
