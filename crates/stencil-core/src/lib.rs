//! Stencil Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stencil
//! tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stencil-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ModeConfigurator, EngineService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (PropertySink, Formatter, Filesystem)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stencil-adapters (Infrastructure)    │
//! │ (JavaPropertiesFormatter, LocalFs, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (RenderMode, ArtifactCoordinate, ...)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use stencil_core::prelude::*;
//!
//! let mut engine: HashMap<String, String> = HashMap::new();
//! ModeConfigurator::new(false).configure(&mut engine);
//! assert_eq!(engine["runtime.references.strict"], "true");
//!
//! let coordinate = ArtifactCoordinate::of("org.example", "widget");
//! assert_eq!(coordinate.to_string(), "org.example:widget:null:null");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EngineService, ModeConfigurator,
        ports::{EngineConfigurator, Filesystem, PropertiesFormatter, PropertySink},
    };
    pub use crate::domain::{ArtifactCoordinate, EngineProperties, ModeOptions, RenderMode};
    pub use crate::error::{StencilError, StencilResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
