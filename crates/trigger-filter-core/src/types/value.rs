//! Typed values carried by rules and event contexts

use super::kind::ValueKind;
use super::tier::Tier;
use std::borrow::Cow;
use std::fmt;

/// A rule value or an observed event value
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Str(String),
    Num(f64),
    TierVal(Tier),
    ServiceVal(String),
    RewardVal { id: String, name: String },
}

impl TypedValue {
    pub fn str(value: impl Into<String>) -> Self {
        TypedValue::Str(value.into())
    }

    pub fn service(id: impl Into<String>) -> Self {
        TypedValue::ServiceVal(id.into())
    }

    pub fn reward(id: impl Into<String>, name: impl Into<String>) -> Self {
        TypedValue::RewardVal {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The narrowest kind this value is a representation of
    pub fn natural_kind(&self) -> ValueKind {
        match self {
            TypedValue::Str(_) => ValueKind::String,
            TypedValue::Num(_) => ValueKind::Number,
            TypedValue::TierVal(_) => ValueKind::Tier,
            TypedValue::ServiceVal(_) => ValueKind::Service,
            TypedValue::RewardVal { .. } => ValueKind::Reward,
        }
    }

    /// Numeric coercion; `None` when the value has no numeric reading
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TypedValue::Num(n) => Some(*n),
            TypedValue::TierVal(tier) => Some(tier.as_number()),
            TypedValue::Str(s) | TypedValue::ServiceVal(s) => s.trim().parse().ok(),
            TypedValue::RewardVal { id, .. } => id.trim().parse().ok(),
        }
    }

    /// Text coercion; identifiers for services and rewards, tokens for tiers
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            TypedValue::Str(s) | TypedValue::ServiceVal(s) => Cow::Borrowed(s),
            TypedValue::RewardVal { id, .. } => Cow::Borrowed(id),
            TypedValue::TierVal(tier) => Cow::Borrowed(tier.token()),
            TypedValue::Num(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Identifier of a service or reward
    pub fn identifier(&self) -> Option<&str> {
        match self {
            TypedValue::ServiceVal(id) | TypedValue::RewardVal { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// Entries of an `includes` literal, split on commas and trimmed
pub fn includes_entries(literal: &str) -> impl Iterator<Item = &str> {
    literal.split(',').map(str::trim)
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::Str(value.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        TypedValue::Str(value)
    }
}

impl From<f64> for TypedValue {
    fn from(value: f64) -> Self {
        TypedValue::Num(value)
    }
}

impl From<i64> for TypedValue {
    fn from(value: i64) -> Self {
        TypedValue::Num(value as f64)
    }
}

impl From<Tier> for TypedValue {
    fn from(value: Tier) -> Self {
        TypedValue::TierVal(value)
    }
}
