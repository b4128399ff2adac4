//! Attribute registries
//!
//! A registry maps attribute names to value kinds. Each feature that owns a
//! filter tree (an alert hook, a command filter, a keyword filter) supplies its
//! own registry; the engine only queries it.

pub mod presets;

use crate::types::ValueKind;
use serde::{Deserialize, Serialize};

/// Lookup of attribute kinds
pub trait AttributeRegistry {
    /// Kind of `attribute`, `ValueKind::String` when unknown
    fn resolve_kind(&self, attribute: &str) -> ValueKind;

    /// Ordered `(attribute, kind)` pairs for editor pick-lists
    fn attributes(&self) -> Vec<(String, ValueKind)>;
}

/// A single registered attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDef {
    pub name: String,
    pub kind: ValueKind,
}

/// Registry backed by an ordered attribute list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticRegistry {
    attributes: Vec<AttributeDef>,
}

impl StaticRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an attribute; re-registering replaces the kind in place
    pub fn with_attribute(mut self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.insert(name, kind);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, kind: ValueKind) {
        let name = name.into();
        match self.attributes.iter_mut().find(|def| def.name == name) {
            Some(def) => def.kind = kind,
            None => self.attributes.push(AttributeDef { name, kind }),
        }
    }

    /// Add every attribute of `other` (later definitions win)
    pub fn extend(&mut self, other: &StaticRegistry) {
        for def in &other.attributes {
            self.insert(def.name.clone(), def.kind);
        }
    }

    pub fn get(&self, name: &str) -> Option<ValueKind> {
        self.attributes
            .iter()
            .find(|def| def.name == name)
            .map(|def| def.kind)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl AttributeRegistry for StaticRegistry {
    fn resolve_kind(&self, attribute: &str) -> ValueKind {
        self.get(attribute).unwrap_or_default()
    }

    fn attributes(&self) -> Vec<(String, ValueKind)> {
        self.attributes
            .iter()
            .map(|def| (def.name.clone(), def.kind))
            .collect()
    }
}

impl FromIterator<(String, ValueKind)> for StaticRegistry {
    fn from_iter<I: IntoIterator<Item = (String, ValueKind)>>(iter: I) -> Self {
        let mut registry = StaticRegistry::new();
        for (name, kind) in iter {
            registry.insert(name, kind);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_attribute_defaults_to_string() {
        let registry = StaticRegistry::new().with_attribute("amount", ValueKind::Number);
        assert_eq!(registry.resolve_kind("amount"), ValueKind::Number);
        assert_eq!(registry.resolve_kind("nickname"), ValueKind::String);
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let registry = StaticRegistry::new()
            .with_attribute("tier", ValueKind::Tier)
            .with_attribute("amount", ValueKind::Number)
            .with_attribute("tier", ValueKind::Any);
        assert_eq!(
            registry.attributes(),
            vec![
                ("tier".to_string(), ValueKind::Any),
                ("amount".to_string(), ValueKind::Number),
            ]
        );
    }

    #[test]
    fn test_registry_deserializes_from_list() {
        let registry: StaticRegistry = serde_json::from_str(
            r#"[{"name": "rewardId", "kind": "reward"}, {"name": "service", "kind": "service"}]"#,
        )
        .unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve_kind("rewardId"), ValueKind::Reward);
    }
}
