//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stencil-adapters` crate provides formatter and filesystem
//! implementations; property sinks are implemented here for the std maps.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::path::Path;

use crate::domain::EngineProperties;
use crate::error::StencilResult;

/// Write-only key/value target owned by a template engine.
///
/// Writing an existing key overwrites it. Sinks never report failure.
pub trait PropertySink {
    fn set_property(&mut self, key: &str, value: &str);
}

impl PropertySink for EngineProperties {
    fn set_property(&mut self, key: &str, value: &str) {
        self.insert(key, value);
    }
}

impl<S: BuildHasher> PropertySink for HashMap<String, String, S> {
    fn set_property(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }
}

impl PropertySink for BTreeMap<String, String> {
    fn set_property(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }
}

/// Port for anything that prepares a template engine's properties.
///
/// Implemented by:
/// - `stencil_core::application::ModeConfigurator` (production/development)
pub trait EngineConfigurator: Send + Sync {
    /// Write this configurator's properties into `sink`.
    fn configure(&self, sink: &mut dyn PropertySink);
}

/// Port for serializing engine properties.
///
/// Implemented by:
/// - `stencil_adapters::formatter::JavaPropertiesFormatter`
/// - `stencil_adapters::formatter::JsonFormatter`
/// - `stencil_adapters::formatter::TomlFormatter`
pub trait PropertiesFormatter: Send + Sync {
    fn format(&self, properties: &EngineProperties) -> StencilResult<String>;

    /// Conventional file extension, without the dot.
    fn extension(&self) -> &'static str;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StencilResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_twice(sink: &mut dyn PropertySink) {
        sink.set_property("k", "first");
        sink.set_property("k", "second");
    }

    #[test]
    fn hash_map_sink_overwrites() {
        let mut map: HashMap<String, String> = HashMap::new();
        write_twice(&mut map);
        assert_eq!(map.get("k").map(String::as_str), Some("second"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn btree_map_sink_overwrites() {
        let mut map: BTreeMap<String, String> = BTreeMap::new();
        write_twice(&mut map);
        assert_eq!(map.get("k").map(String::as_str), Some("second"));
    }

    #[test]
    fn engine_properties_sink_overwrites() {
        let mut props = EngineProperties::new();
        write_twice(&mut props);
        assert_eq!(props.get("k"), Some("second"));
    }
}
