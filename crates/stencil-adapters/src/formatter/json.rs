//! JSON formatter.

use stencil_core::{
    application::{ApplicationError, ports::PropertiesFormatter},
    domain::EngineProperties,
    error::StencilResult,
};

/// Pretty-printed JSON object of string values.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl PropertiesFormatter for JsonFormatter {
    fn format(&self, properties: &EngineProperties) -> StencilResult<String> {
        let mut out = serde_json::to_string_pretty(properties).map_err(|e| {
            ApplicationError::FormattingFailed {
                reason: e.to_string(),
            }
        })?;
        out.push('\n');
        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
