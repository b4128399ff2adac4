//! Configuration types for FilterEngine

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use trigger_filter_core::registry::{presets, AttributeDef};
use trigger_filter_core::StaticRegistry;

/// Main engine configuration
///
/// ```yaml
/// placeholder_policy: prune
/// scopes:
///   alerts.tip:
///     preset: alert.tip
///   commands:
///     preset: command
///     attributes:
///       - name: isModerator
///         kind: string
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Feature scopes and their registries
    #[serde(default)]
    pub scopes: BTreeMap<String, ScopeConfig>,

    /// Validate persisted trees against the scope registry when loading
    #[serde(default = "default_validate_on_load")]
    pub validate_on_load: bool,

    /// What to do with unconfigured group slots on load and save
    #[serde(default)]
    pub placeholder_policy: PlaceholderPolicy,

    /// Record rule traces in decisions
    #[serde(default)]
    pub enable_tracing: bool,
}

fn default_validate_on_load() -> bool {
    true
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            scopes: BTreeMap::new(),
            validate_on_load: true,
            placeholder_policy: PlaceholderPolicy::default(),
            enable_tracing: false,
        }
    }

    /// Parse a YAML configuration
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Add a scope
    pub fn with_scope(mut self, name: impl Into<String>, scope: ScopeConfig) -> Self {
        self.scopes.insert(name.into(), scope);
        self
    }

    pub fn with_placeholder_policy(mut self, policy: PlaceholderPolicy) -> Self {
        self.placeholder_policy = policy;
        self
    }

    pub fn validate_on_load(mut self, enable: bool) -> Self {
        self.validate_on_load = enable;
        self
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.enable_tracing = enable;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry definition of one scope: a preset plus extra attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Built-in registry ("command", "keyword", "alert.<hook>")
    #[serde(default)]
    pub preset: Option<String>,

    /// Attributes added to (or overriding) the preset
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
}

impl ScopeConfig {
    pub fn preset(name: impl Into<String>) -> Self {
        Self {
            preset: Some(name.into()),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, def: AttributeDef) -> Self {
        self.attributes.push(def);
        self
    }

    /// Build the registry described by this scope
    pub fn registry(&self) -> Result<StaticRegistry> {
        let mut registry = match &self.preset {
            Some(name) => presets::by_name(name).ok_or_else(|| {
                SdkError::ConfigError(format!("unknown registry preset '{}'", name))
            })?,
            None => StaticRegistry::new(),
        };
        for def in &self.attributes {
            registry.insert(def.name.clone(), def.kind);
        }
        Ok(registry)
    }
}

/// Handling of `null` group slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderPolicy {
    /// Keep them; evaluation and rendering skip them
    #[default]
    Skip,
    /// Refuse trees that contain them
    Reject,
    /// Drop them
    Prune,
}
