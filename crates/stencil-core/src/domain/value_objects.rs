//! Domain value objects: RenderMode and its option record.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! `RenderMode` is the two-state replacement for the boolean "production"
//! flag; each variant owns exactly one [`ModeOptions`] record, and the
//! configurator writes whatever that record says.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Property keys and fixed values understood by the template engine.
pub mod keys {
    /// Which resource loader(s) the engine should use.
    pub const RESOURCE_LOADER: &str = "resource.loader";
    /// Implementing class of the `class` resource loader.
    pub const CLASS_LOADER_CLASS: &str = "class.resource.loader.class";
    /// Whether loaded templates are cached.
    pub const CLASS_LOADER_CACHE: &str = "class.resource.loader.cache";
    /// Seconds between staleness checks; `0` means never re-check.
    pub const CLASS_LOADER_MODIFICATION_CHECK: &str =
        "class.resource.loader.modificationCheckInterval";
    /// Undefined references raise instead of rendering empty.
    pub const STRICT_REFERENCES: &str = "runtime.references.strict";

    /// Name of the classpath-based loader.
    pub const CLASS_LOADER_NAME: &str = "class";
    /// Loader implementation reading templates from packaged resources.
    pub const CLASSPATH_LOADER_IMPL: &str =
        "org.apache.velocity.runtime.resource.loader.ClasspathResourceLoader";
}

// ── RenderMode ───────────────────────────────────────────────────────────────

/// Deployment mode of the template engine.
///
/// Production favours throughput: templates ship packaged and read-only, so
/// they are cached forever. Development favours feedback: no caching and
/// strict references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Production,
    Development,
}

impl RenderMode {
    /// Map the externally supplied boolean flag onto a mode.
    pub const fn from_production_flag(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }

    /// The option record applied for this mode.
    pub const fn options(self) -> ModeOptions {
        match self {
            Self::Production => ModeOptions::PRODUCTION,
            Self::Development => ModeOptions::DEVELOPMENT,
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" | "true" => Ok(Self::Production),
            "development" | "dev" | "false" => Ok(Self::Development),
            _ => Err(DomainError::InvalidMode { value: s.into() }),
        }
    }
}

// ── ModeOptions ──────────────────────────────────────────────────────────────

/// Loader and runtime options associated with one [`RenderMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModeOptions {
    pub cache_enabled: bool,
    /// `None` leaves the engine default untouched.
    pub modification_check_interval: Option<u64>,
    pub strict_references: bool,
}

impl ModeOptions {
    pub const PRODUCTION: Self = Self {
        cache_enabled: true,
        modification_check_interval: Some(0),
        strict_references: false,
    };

    pub const DEVELOPMENT: Self = Self {
        cache_enabled: false,
        modification_check_interval: None,
        strict_references: true,
    };

    /// Key/value pairs this record contributes, in write order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![(keys::CLASS_LOADER_CACHE, self.cache_enabled.to_string())];
        if let Some(interval) = self.modification_check_interval {
            entries.push((keys::CLASS_LOADER_MODIFICATION_CHECK, interval.to_string()));
        }
        entries.push((keys::STRICT_REFERENCES, self.strict_references.to_string()));
        entries
    }
}
