//! `.properties` file formatter.

use std::fmt::Write as _;

use stencil_core::{
    application::ports::PropertiesFormatter,
    domain::EngineProperties,
    error::{Context, StencilResult},
};
use tracing::instrument;

/// Writes `key=value` lines as read by `java.util.Properties`.
#[derive(Debug, Clone, Default)]
pub struct JavaPropertiesFormatter {
    header: Vec<String>,
}

impl JavaPropertiesFormatter {
    /// Create a formatter without header comments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `#` comment line above the properties.
    pub fn with_header_line(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }
}

impl PropertiesFormatter for JavaPropertiesFormatter {
    #[instrument(skip_all, fields(count = properties.len()))]
    fn format(&self, properties: &EngineProperties) -> StencilResult<String> {
        let mut out = String::new();

        for line in &self.header {
            // A lone CR also ends a line for the properties loader.
            for part in line.split(['\n', '\r']).filter(|part| !part.is_empty()) {
                writeln!(out, "# {part}").context("writing header")?;
            }
        }

        for (key, value) in properties.iter() {
            writeln!(out, "{}={}", escape(key, true), escape(value, false))
                .context("writing property")?;
        }

        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "properties"
    }
}

/// Escape per the `java.util.Properties` load rules.
fn escape(text: &str, is_key: bool) -> String {
    let mut escaped = String::with_capacity(text.len());

    for (index, ch) in text.chars().enumerate() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{c}' => escaped.push_str("\\f"),
            ' ' if is_key || index == 0 => escaped.push_str("\\ "),
            ':' | '=' | '#' | '!' if is_key => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }

    escaped
}
