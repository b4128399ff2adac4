//! Builder pattern for FilterEngine

use crate::config::EngineConfig;
use crate::engine::FilterEngine;
use crate::error::Result;
use std::collections::HashMap;
use std::path::PathBuf;
use trigger_filter_core::StaticRegistry;

/// Builder for FilterEngine
///
/// # Example
///
/// ```rust,ignore
/// use trigger_filter_sdk::{FilterEngineBuilder, StaticRegistry, ValueKind};
///
/// let engine = FilterEngineBuilder::new()
///     .with_config_file("filters.yaml")
///     .with_scope("raids", StaticRegistry::new().with_attribute("amount", ValueKind::Number))
///     .build()?;
/// ```
pub struct FilterEngineBuilder {
    config: Option<EngineConfig>,
    config_file: Option<PathBuf>,
    scopes: Vec<(String, StaticRegistry)>,
    enable_tracing: Option<bool>,
}

impl FilterEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: None,
            config_file: None,
            scopes: Vec::new(),
            enable_tracing: None,
        }
    }

    /// Use an explicit configuration
    ///
    /// Ignored when a config file is also set; the file wins.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Read the configuration from a YAML file at build time
    ///
    /// Takes precedence over [`with_config`](Self::with_config).
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Register a scope directly; it replaces a configured scope of the same name
    pub fn with_scope(mut self, name: impl Into<String>, registry: StaticRegistry) -> Self {
        self.scopes.push((name.into(), registry));
        self
    }

    /// Enable tracing, overriding the configuration
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.enable_tracing = Some(enable);
        self
    }

    /// Build the engine
    pub fn build(self) -> Result<FilterEngine> {
        let mut config = match (&self.config_file, self.config) {
            (Some(path), explicit) => {
                if explicit.is_some() {
                    tracing::warn!(
                        "Both a config and a config file were given, using {}",
                        path.display()
                    );
                }
                tracing::info!("Loading filter configuration from {}", path.display());
                EngineConfig::from_file(path)?
            }
            (None, explicit) => explicit.unwrap_or_default(),
        };
        if let Some(enable) = self.enable_tracing {
            config.enable_tracing = enable;
        }

        let mut registries = HashMap::new();
        for (name, scope) in &config.scopes {
            registries.insert(name.clone(), scope.registry()?);
        }
        for (name, registry) in self.scopes {
            registries.insert(name, registry);
        }

        tracing::info!(
            "Filter engine ready with {} scopes (placeholders: {:?})",
            registries.len(),
            config.placeholder_policy
        );
        Ok(FilterEngine::new(config, registries))
    }
}

impl Default for FilterEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlaceholderPolicy, ScopeConfig};
    use std::io::Write;
    use trigger_filter_core::ValueKind;

    #[test]
    fn test_defaults_without_config() {
        let engine = FilterEngineBuilder::new().build().unwrap();
        assert!(engine.scopes().is_empty());
        assert!(engine.config().validate_on_load);
    }

    #[test]
    fn test_config_file_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"placeholder_policy: prune\nscopes:\n  raids:\n    preset: alert.raid\n")
            .unwrap();

        let explicit = EngineConfig::new()
            .with_placeholder_policy(PlaceholderPolicy::Reject)
            .with_scope("commands", ScopeConfig::preset("command"));
        let engine = FilterEngineBuilder::new()
            .with_config(explicit)
            .with_config_file(file.path())
            .build()
            .unwrap();

        assert_eq!(engine.config().placeholder_policy, PlaceholderPolicy::Prune);
        assert_eq!(engine.scopes(), vec!["raids"]);
    }

    #[test]
    fn test_direct_scope_and_tracing_override() {
        let config = EngineConfig::new()
            .enable_tracing(true)
            .with_scope("raids", ScopeConfig::preset("alert.raid"));
        let engine = FilterEngineBuilder::new()
            .with_config(config)
            .with_scope("raids", StaticRegistry::new().with_attribute("viewers", ValueKind::Number))
            .enable_tracing(false)
            .build()
            .unwrap();

        assert!(!engine.config().enable_tracing);
        assert!(!engine.registry("raids").unwrap().contains("amount"));
    }
}
