use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::types::OutputFormat;

/// JSON envelope for command results.
#[derive(Debug, Serialize)]
pub struct CommandResult<T>
where
    T: Serialize,
{
    pub content: T,
}

impl<T> CommandResult<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self { content }
    }
}

/// Print `content` as JSON, or run `plain` for the text view.
pub fn emit<T, F>(format: OutputFormat, content: &T, plain: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T),
{
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&CommandResult::new(content))?;
            println!("{}", json);
        }
        OutputFormat::Plain => plain(content),
    }
    Ok(())
}

/// Bold heading when stdout is a terminal.
pub fn heading(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
