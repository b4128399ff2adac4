//! FilterEngine - the entry point used by features that own filter trees

use crate::config::{EngineConfig, PlaceholderPolicy};
use crate::error::{Result, SdkError};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use trigger_filter_core::editor::prune_placeholders;
use trigger_filter_core::filter::validate_group;
use trigger_filter_core::{
    render_group, FilterEditor, FilterNode, Group, StaticRegistry, ValidationError,
};
use trigger_filter_runtime::{evaluate_group, evaluate_with_trace, EventContext, RuleTrace};

/// Outcome of evaluating an event against a filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterDecision {
    pub matched: bool,
    /// Canonical text of the filter that was applied
    pub summary: String,
    /// Per-rule outcomes, filled when tracing is enabled
    pub traces: Vec<RuleTrace>,
}

/// Filter engine with one attribute registry per scope
///
/// The engine is immutable once built and can be shared between threads.
pub struct FilterEngine {
    config: EngineConfig,
    registries: HashMap<String, StaticRegistry>,
}

impl FilterEngine {
    pub(crate) fn new(config: EngineConfig, registries: HashMap<String, StaticRegistry>) -> Self {
        Self { config, registries }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Names of the configured scopes, sorted
    pub fn scopes(&self) -> Vec<&str> {
        let mut scopes: Vec<&str> = self.registries.keys().map(String::as_str).collect();
        scopes.sort_unstable();
        scopes
    }

    pub fn registry(&self, scope: &str) -> Result<&StaticRegistry> {
        self.registries
            .get(scope)
            .ok_or_else(|| SdkError::UnknownScope(scope.to_string()))
    }

    /// Editor bound to a scope's registry
    pub fn editor(&self, scope: &str) -> Result<FilterEditor<'_>> {
        Ok(FilterEditor::new(self.registry(scope)?))
    }

    /// Parse a persisted tree for a scope
    pub fn load_tree(&self, scope: &str, json: &str) -> Result<Group> {
        let registry = self.registry(scope)?;
        let tree = Group::from_json_str(json).map_err(|e| {
            tracing::warn!("Rejected persisted filter for scope '{}': {}", scope, e);
            e
        })?;
        let tree = self.apply_placeholder_policy(tree)?;

        if self.config.validate_on_load {
            validate_group(&tree, registry).map_err(|e| {
                tracing::warn!("Persisted filter for scope '{}' is invalid: {}", scope, e);
                e
            })?;
        }
        Ok(tree)
    }

    /// Serialize a tree for persistence
    pub fn save_tree(&self, tree: &Group) -> Result<String> {
        let tree = self.apply_placeholder_policy(tree.clone())?;
        Ok(tree.to_json_string()?)
    }

    /// Build the event context for a scope from a JSON event payload
    pub fn context_from_json(&self, scope: &str, payload: &JsonValue) -> Result<EventContext> {
        Ok(EventContext::from_json(payload, self.registry(scope)?)?)
    }

    /// Returns true if the event passes the filter
    pub fn matches(&self, tree: &Group, ctx: &EventContext) -> bool {
        evaluate_group(tree, ctx)
    }

    /// Evaluate and describe the decision
    pub fn decide(&self, tree: &Group, ctx: &EventContext) -> FilterDecision {
        let (matched, traces) = if self.config.enable_tracing {
            evaluate_with_trace(tree, ctx)
        } else {
            (evaluate_group(tree, ctx), Vec::new())
        };

        let summary = render_group(tree);
        tracing::debug!("Filter '{}' matched: {}", summary, matched);

        FilterDecision {
            matched,
            summary,
            traces,
        }
    }

    /// Load a persisted tree and a JSON event for a scope, then decide
    pub fn decide_json(
        &self,
        scope: &str,
        tree_json: &str,
        event: &JsonValue,
    ) -> Result<FilterDecision> {
        let tree = self.load_tree(scope, tree_json)?;
        let ctx = self.context_from_json(scope, event)?;
        Ok(self.decide(&tree, &ctx))
    }

    fn apply_placeholder_policy(&self, tree: Group) -> Result<Group> {
        match self.config.placeholder_policy {
            PlaceholderPolicy::Skip => Ok(tree),
            PlaceholderPolicy::Prune => Ok(prune_placeholders(&tree)),
            PlaceholderPolicy::Reject => match first_placeholder(&tree) {
                Some(index) => Err(ValidationError::UnconfiguredGroup { index }.into()),
                None => Ok(tree),
            },
        }
    }
}

/// Index of the first placeholder (depth first), relative to its own group
fn first_placeholder(group: &Group) -> Option<usize> {
    group.items.iter().enumerate().find_map(|(index, item)| match item {
        None => Some(index),
        Some(FilterNode::Group(nested)) => first_placeholder(nested),
        Some(FilterNode::Rule(_)) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigger_filter_core::{BooleanOp, ComparatorKind, Rule, TypedValue, ValueKind};

    fn engine(config: EngineConfig) -> FilterEngine {
        let mut registries = HashMap::new();
        registries.insert(
            "raids".to_string(),
            StaticRegistry::new().with_attribute("amount", ValueKind::Number),
        );
        FilterEngine::new(config, registries)
    }

    #[test]
    fn test_unknown_scope() {
        let engine = engine(EngineConfig::new());
        assert!(matches!(engine.registry("tips"), Err(SdkError::UnknownScope(_))));
        assert!(engine.editor("tips").is_err());
        assert_eq!(engine.scopes(), vec!["raids"]);
    }

    #[test]
    fn test_first_placeholder() {
        let tree = Group::default()
            .with_rule(Rule::new(
                "amount",
                ValueKind::Number,
                ComparatorKind::Gt,
                TypedValue::Num(1.0),
            ))
            .with_group(Group::new(BooleanOp::Or).with_rule(Rule::new(
                "amount",
                ValueKind::Number,
                ComparatorKind::Lt,
                TypedValue::Num(9.0),
            )).with_placeholder());
        assert_eq!(first_placeholder(&tree), Some(1));
        assert_eq!(first_placeholder(&Group::default()), None);
    }

    #[test]
    fn test_decide_without_tracing_has_no_traces() {
        let engine = engine(EngineConfig::new());
        let tree = Group::default().with_rule(Rule::new(
            "amount",
            ValueKind::Number,
            ComparatorKind::Gt,
            TypedValue::Num(10.0),
        ));
        let decision = engine.decide(&tree, &EventContext::new().with("amount", 20.0));
        assert!(decision.matched);
        assert_eq!(decision.summary, "amount gt 10");
        assert!(decision.traces.is_empty());
    }
}
