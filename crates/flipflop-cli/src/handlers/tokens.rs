use anyhow::Result;
use flipflop_format::Token;
use serde::Serialize;

use crate::output::{emit, heading};
use crate::types::OutputFormat;

#[derive(Debug, Serialize)]
struct TokenRow {
    token: Token,
    strftime: &'static str,
    description: &'static str,
}

pub fn handle(format: OutputFormat) -> Result<()> {
    let rows: Vec<TokenRow> = Token::ALL
        .into_iter()
        .map(|token| TokenRow {
            token,
            strftime: token.strftime(),
            description: token.description(),
        })
        .collect();

    emit(format, &rows, |rows| {
        println!(
            "{}",
            heading(&format!("{:<6} {:<8} {}", "TOKEN", "STRFTIME", "MEANING"))
        );
        for row in rows {
            println!("{:<6} {:<8} {}", row.token, row.strftime, row.description);
        }
    })
}
