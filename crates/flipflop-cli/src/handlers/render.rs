use anyhow::Result;
use flipflop_format::{Clock, Dialect, SystemClock, Template};
use serde::Serialize;

use crate::output::emit;
use crate::time::parse_instant;
use crate::types::OutputFormat;

#[derive(Debug, Serialize)]
struct RenderView {
    template: String,
    rendered: String,
    instant: String,
}

pub fn handle(
    template: &str,
    dialect: Dialect,
    at: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let instant = match at {
        Some(text) => parse_instant(text)?,
        None => SystemClock.now(),
    };

    let parsed = Template::parse_with(template, dialect);
    if !parsed.has_tokens() {
        log::warn!("template contains no recognized tokens; output is the template itself");
    }

    let view = RenderView {
        template: template.to_string(),
        rendered: parsed.render(&instant),
        instant: instant.to_rfc3339(),
    };

    emit(format, &view, |view| println!("{}", view.rendered))
}
