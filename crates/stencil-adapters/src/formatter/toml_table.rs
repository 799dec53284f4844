//! TOML formatter.

use stencil_core::{
    application::{ApplicationError, ports::PropertiesFormatter},
    domain::EngineProperties,
    error::StencilResult,
};

/// Top-level TOML table; dotted keys are quoted, so they stay flat.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlFormatter;

impl TomlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl PropertiesFormatter for TomlFormatter {
    fn format(&self, properties: &EngineProperties) -> StencilResult<String> {
        toml::to_string(properties).map_err(|e| {
            ApplicationError::FormattingFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn extension(&self) -> &'static str {
        "toml"
    }
}
