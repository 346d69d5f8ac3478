use anyhow::Result;
use flipflop_format::{Dialect, Template, Token};
use serde::Serialize;

use crate::output::{emit, heading};
use crate::types::OutputFormat;

#[derive(Debug, Serialize)]
struct PatternView {
    template: String,
    strftime: String,
    tokens: Vec<Token>,
}

pub fn handle(template: &str, dialect: Dialect, format: OutputFormat) -> Result<()> {
    let parsed = Template::parse_with(template, dialect);
    let view = PatternView {
        template: template.to_string(),
        strftime: parsed.to_strftime(),
        tokens: parsed.tokens().collect(),
    };

    emit(format, &view, |view| {
        println!("{}", view.strftime);
        if !view.tokens.is_empty() {
            println!();
            println!("{}", heading("Tokens:"));
            for token in &view.tokens {
                println!("  {:<6} {:<4} {}", token, token.strftime(), token.description());
            }
        }
    })
}
