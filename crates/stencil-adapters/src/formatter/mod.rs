//! Property formatters.
//!
//! Each formatter serializes an [`EngineProperties`] map into one text
//! syntax. Output order is the map's (sorted) key order.
//!
//! [`EngineProperties`]: stencil_core::domain::EngineProperties

mod java_properties;
mod json;
mod toml_table;

pub use java_properties::JavaPropertiesFormatter;
pub use json::JsonFormatter;
pub use toml_table::TomlFormatter;
