//! Mode-based engine configurator.
//!
//! Selects the production or development option set once, at construction,
//! and writes it into any [`PropertySink`] on every `configure` call.

use tracing::debug;

use crate::{
    application::ports::{EngineConfigurator, PropertySink},
    domain::{ModeOptions, RenderMode, keys},
};

/// Configures a template engine for classpath loading in one of two modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeConfigurator {
    mode: RenderMode,
}

impl ModeConfigurator {
    /// Build from the external "production" flag.
    pub const fn new(production: bool) -> Self {
        Self::for_mode(RenderMode::from_production_flag(production))
    }

    pub const fn for_mode(mode: RenderMode) -> Self {
        Self { mode }
    }

    pub const fn mode(&self) -> RenderMode {
        self.mode
    }

    fn apply(options: ModeOptions, sink: &mut dyn PropertySink) {
        for (key, value) in options.entries() {
            sink.set_property(key, &value);
        }
    }
}

impl EngineConfigurator for ModeConfigurator {
    fn configure(&self, sink: &mut dyn PropertySink) {
        debug!(mode = %self.mode, "Configuring template engine");

        sink.set_property(keys::RESOURCE_LOADER, keys::CLASS_LOADER_NAME);
        sink.set_property(keys::CLASS_LOADER_CLASS, keys::CLASSPATH_LOADER_IMPL);

        Self::apply(self.mode.options(), sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EngineProperties;
    use std::collections::HashMap;

    fn configured(configurator: ModeConfigurator) -> EngineProperties {
        let mut props = EngineProperties::new();
        configurator.configure(&mut props);
        props
    }

    fn assert_loader_keys(props: &EngineProperties) {
        assert_eq!(props.get(keys::RESOURCE_LOADER), Some("class"));
        assert_eq!(
            props.get(keys::CLASS_LOADER_CLASS),
            Some("org.apache.velocity.runtime.resource.loader.ClasspathResourceLoader")
        );
    }

    #[test]
    fn default_is_production() {
        assert_eq!(ModeConfigurator::default().mode(), RenderMode::Production);
    }

    #[test]
    fn flag_selects_mode() {
        assert_eq!(ModeConfigurator::new(true).mode(), RenderMode::Production);
        assert_eq!(ModeConfigurator::new(false).mode(), RenderMode::Development);
    }

    #[test]
    fn production_writes_cache_interval_and_lenient_references() {
        let props = configured(ModeConfigurator::new(true));

        assert_loader_keys(&props);
        assert_eq!(props.get("class.resource.loader.cache"), Some("true"));
        assert_eq!(
            props.get("class.resource.loader.modificationCheckInterval"),
            Some("0")
        );
        assert_eq!(props.get("runtime.references.strict"), Some("false"));
        assert_eq!(props.len(), 5);
    }

    #[test]
    fn development_writes_no_cache_and_strict_references() {
        let props = configured(ModeConfigurator::new(false));

        assert_loader_keys(&props);
        assert_eq!(props.get("class.resource.loader.cache"), Some("false"));
        assert_eq!(props.get("runtime.references.strict"), Some("true"));
        assert!(!props.contains_key("class.resource.loader.modificationCheckInterval"));
        assert_eq!(props.len(), 4);
    }

    #[test]
    fn overwrites_existing_keys() {
        let mut sink: HashMap<String, String> = HashMap::new();
        sink.insert(keys::CLASS_LOADER_CACHE.into(), "maybe".into());
        sink.insert("unrelated".into(), "kept".into());

        ModeConfigurator::new(true).configure(&mut sink);

        assert_eq!(sink[keys::CLASS_LOADER_CACHE], "true");
        assert_eq!(sink["unrelated"], "kept");
    }

    #[test]
    fn later_call_overwrites_but_never_removes() {
        let mut props = EngineProperties::new();
        ModeConfigurator::new(true).configure(&mut props);
        ModeConfigurator::new(false).configure(&mut props);

        assert_eq!(props.get(keys::CLASS_LOADER_CACHE), Some("false"));
        assert_eq!(props.get(keys::STRICT_REFERENCES), Some("true"));
        assert_eq!(props.get(keys::CLASS_LOADER_MODIFICATION_CHECK), Some("0"));
    }

    #[test]
    fn configure_is_repeatable() {
        let configurator = ModeConfigurator::new(false);
        assert_eq!(configured(configurator), configured(configurator));
    }
}
