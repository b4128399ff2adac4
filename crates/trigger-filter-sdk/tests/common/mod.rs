//! Common test utilities for SDK integration tests

use std::io::Write;
use tempfile::NamedTempFile;
use trigger_filter_sdk::{FilterDecision, FilterEngine, FilterEngineBuilder};

/// Test helper to build a FilterEngine from inline YAML configuration
pub struct TestEngine {
    config_yaml: String,
}

impl TestEngine {
    /// Create a test engine from a YAML configuration
    pub fn new(config_yaml: &str) -> Self {
        Self {
            config_yaml: config_yaml.trim().to_string(),
        }
    }

    /// Build the engine through a config file on disk
    pub fn build(&self) -> FilterEngine {
        let mut file = NamedTempFile::new().expect("Failed to create temp config");
        file.write_all(self.config_yaml.as_bytes())
            .expect("Failed to write temp config");

        FilterEngineBuilder::new()
            .with_config_file(file.path())
            .build()
            .expect("Failed to build engine")
    }

    /// Decide a persisted tree against a JSON event
    pub fn decide(&self, scope: &str, tree_json: &str, event: serde_json::Value) -> FilterDecision {
        self.build()
            .decide_json(scope, tree_json, &event)
            .expect("Failed to decide")
    }
}

/// Configuration with the scopes used across the integration tests
#[allow(dead_code)]
pub const ALERTS_YAML: &str = r#"
enable_tracing: true
scopes:
  alerts.tip:
    preset: alert.tip
  alerts.sub:
    preset: alert.sub
  commands:
    preset: command
    attributes:
      - name: isModerator
        kind: string
"#;
