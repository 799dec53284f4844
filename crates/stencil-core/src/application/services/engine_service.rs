//! Engine Service - configure, format and export engine properties.
//!
//! This service coordinates the export workflow:
//! 1. Run the configurator against a fresh property map
//! 2. Format the map
//! 3. Write it to the filesystem

use std::path::Path;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{EngineConfigurator, Filesystem, PropertiesFormatter},
    },
    domain::EngineProperties,
    error::StencilResult,
};

/// Engine property service.
pub struct EngineService {
    configurator: Box<dyn EngineConfigurator>,
    formatter: Box<dyn PropertiesFormatter>,
    filesystem: Box<dyn Filesystem>,
}

impl EngineService {
    /// Create a new engine service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stencil_core::application::{EngineService, ModeConfigurator};
    ///
    /// let service = EngineService::new(
    ///     Box::new(ModeConfigurator::new(true)),
    ///     formatter,  // impl PropertiesFormatter
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        configurator: Box<dyn EngineConfigurator>,
        formatter: Box<dyn PropertiesFormatter>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            configurator,
            formatter,
            filesystem,
        }
    }

    /// Properties the configurator produces on an empty map.
    pub fn properties(&self) -> EngineProperties {
        let mut properties = EngineProperties::new();
        self.configurator.configure(&mut properties);
        properties
    }

    /// Configured properties in the formatter's syntax.
    pub fn render(&self) -> StencilResult<String> {
        self.formatter.format(&self.properties())
    }

    /// Conventional file extension of the formatter in use.
    pub fn extension(&self) -> &'static str {
        self.formatter.extension()
    }

    /// Write the rendered properties to `path`.
    ///
    /// Missing parent directories are created. An existing file is only
    /// replaced when `overwrite` is set.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn export(&self, path: &Path, overwrite: bool) -> StencilResult<()> {
        if self.filesystem.exists(path) && !overwrite {
            return Err(ApplicationError::OutputExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = self.render()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, &content)?;

        info!(bytes = content.len(), "Engine properties exported");
        Ok(())
    }
}
