//! Event contexts
//!
//! An event context is the read-only snapshot of an event that filters are
//! evaluated against, e.g. `{"amount": 150, "tier": "Prime"}` for a sub alert.

use crate::error::{Result, RuntimeError};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use trigger_filter_core::{AttributeRegistry, Tier, TypedValue, ValueKind};

/// Read access to observed attribute values
pub trait ContextLookup {
    fn lookup(&self, attribute: &str) -> Option<&TypedValue>;
}

/// Attribute values observed for one event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventContext {
    values: HashMap<String, TypedValue>,
}

impl EventContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<TypedValue>) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<TypedValue>) {
        self.values.insert(attribute.into(), value.into());
    }

    pub fn get(&self, attribute: &str) -> Option<&TypedValue> {
        self.values.get(attribute)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build a context from a raw JSON event payload
    ///
    /// Each field is read according to the kind the registry reports for it.
    /// `null` fields are treated as absent; nested arrays and objects are
    /// skipped unless the attribute is a reward (`{"id": .., "name": ..}`).
    pub fn from_json(payload: &JsonValue, registry: &dyn AttributeRegistry) -> Result<Self> {
        let object = payload.as_object().ok_or_else(|| {
            RuntimeError::InvalidPayload(format!("expected an object, got {}", payload))
        })?;

        let mut context = EventContext::new();
        for (attribute, raw) in object {
            let kind = registry.resolve_kind(attribute);
            match read_value(attribute, kind, raw)? {
                Some(value) => context.insert(attribute.clone(), value),
                None => tracing::debug!("Skipping event field '{}' ({})", attribute, raw),
            }
        }
        Ok(context)
    }
}

fn read_value(attribute: &str, kind: ValueKind, raw: &JsonValue) -> Result<Option<TypedValue>> {
    let invalid = |reason: &str| RuntimeError::InvalidContextValue {
        attribute: attribute.to_string(),
        kind,
        reason: format!("{} ({})", reason, raw),
    };

    let value = match (kind, raw) {
        (_, JsonValue::Null) => return Ok(None),
        (ValueKind::Reward, JsonValue::Object(map)) => {
            let id = map
                .get("id")
                .and_then(scalar_text)
                .ok_or_else(|| invalid("reward object without id"))?;
            let name = map.get("name").and_then(scalar_text).unwrap_or_default();
            TypedValue::RewardVal { id, name }
        }
        (_, JsonValue::Array(_) | JsonValue::Object(_)) => return Ok(None),

        (ValueKind::Number, JsonValue::Number(n)) => {
            TypedValue::Num(n.as_f64().ok_or_else(|| invalid("number out of range"))?)
        }
        (ValueKind::Number, JsonValue::String(s)) => TypedValue::Num(
            s.trim()
                .parse()
                .map_err(|_| invalid("expected a number"))?,
        ),
        (ValueKind::Number, _) => return Err(invalid("expected a number")),

        (ValueKind::Tier, JsonValue::String(s)) => {
            TypedValue::TierVal(s.parse::<Tier>().map_err(|e| invalid(e.as_str()))?)
        }
        (ValueKind::Tier, JsonValue::Number(n)) => TypedValue::TierVal(
            n.as_f64()
                .and_then(Tier::from_number)
                .filter(|tier| *tier != Tier::Prime)
                .ok_or_else(|| invalid("expected tier 1, 2 or 3"))?,
        ),
        (ValueKind::Tier, _) => return Err(invalid("expected a tier")),

        (ValueKind::Any, JsonValue::Number(n)) => {
            TypedValue::Num(n.as_f64().ok_or_else(|| invalid("number out of range"))?)
        }

        (kind, scalar) => {
            let text = scalar_text(scalar).ok_or_else(|| invalid("expected a scalar"))?;
            match kind {
                ValueKind::Service => TypedValue::ServiceVal(text),
                ValueKind::Reward => TypedValue::RewardVal {
                    id: text,
                    name: String::new(),
                },
                _ => TypedValue::Str(text),
            }
        }
    };

    Ok(Some(value))
}

fn scalar_text(raw: &JsonValue) -> Option<String> {
    match raw {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl ContextLookup for EventContext {
    fn lookup(&self, attribute: &str) -> Option<&TypedValue> {
        self.values.get(attribute)
    }
}

impl ContextLookup for HashMap<String, TypedValue> {
    fn lookup(&self, attribute: &str) -> Option<&TypedValue> {
        self.get(attribute)
    }
}

impl From<HashMap<String, TypedValue>> for EventContext {
    fn from(values: HashMap<String, TypedValue>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>> FromIterator<(K, TypedValue)> for EventContext {
    fn from_iter<I: IntoIterator<Item = (K, TypedValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
