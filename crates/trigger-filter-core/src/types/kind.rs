//! Value kinds and the comparator legality table

use super::comparator::ComparatorKind;
use super::tier::Tier;
use super::value::TypedValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a rule's raw value is interpreted
///
/// The kind of an attribute comes from the attribute registry; it is never
/// inferred from the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[default]
    String,
    Number,
    /// One of Prime, 1, 2, 3
    Tier,
    /// Opaque service identifier (e.g. a donation platform)
    Service,
    /// Channel point reward (id + display name)
    Reward,
    /// Accepts string, ordering and parity comparators
    Any,
}

impl ValueKind {
    pub const ALL: [ValueKind; 6] = [
        ValueKind::String,
        ValueKind::Number,
        ValueKind::Tier,
        ValueKind::Service,
        ValueKind::Reward,
        ValueKind::Any,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Tier => "tier",
            ValueKind::Service => "service",
            ValueKind::Reward => "reward",
            ValueKind::Any => "any",
        }
    }

    /// Returns true if `comparator` may be used on attributes of this kind
    pub fn allows(&self, comparator: ComparatorKind) -> bool {
        match comparator {
            ComparatorKind::Present | ComparatorKind::Eq | ComparatorKind::Neq => true,
            ComparatorKind::IsEven | ComparatorKind::IsOdd => {
                matches!(self, ValueKind::Number | ValueKind::Any)
            }
            ComparatorKind::Lt
            | ComparatorKind::LtEq
            | ComparatorKind::Gt
            | ComparatorKind::GtEq => !matches!(self, ValueKind::String),
            ComparatorKind::Contains | ComparatorKind::Includes => {
                matches!(self, ValueKind::String | ValueKind::Any)
            }
        }
    }

    /// Legal comparators in editor pick-list order
    pub fn legal_comparators(&self) -> Vec<ComparatorKind> {
        ComparatorKind::ALL
            .into_iter()
            .filter(|c| self.allows(*c))
            .collect()
    }

    /// Value given to a freshly inserted rule
    pub fn default_value(&self) -> TypedValue {
        match self {
            ValueKind::Number => TypedValue::Num(0.0),
            ValueKind::Tier => TypedValue::TierVal(Tier::Prime),
            ValueKind::Service => TypedValue::ServiceVal("tiltify".to_string()),
            ValueKind::Reward => TypedValue::RewardVal {
                id: String::new(),
                name: String::new(),
            },
            ValueKind::String | ValueKind::Any => TypedValue::Str(String::new()),
        }
    }

    /// Returns true if `value` is a valid representation for this kind
    pub fn fits(&self, value: &TypedValue) -> bool {
        matches!(
            (self, value),
            (ValueKind::String, TypedValue::Str(_))
                | (ValueKind::Number, TypedValue::Num(_))
                | (ValueKind::Tier, TypedValue::TierVal(_))
                | (ValueKind::Service, TypedValue::ServiceVal(_))
                | (ValueKind::Reward, TypedValue::RewardVal { .. })
                | (ValueKind::Any, TypedValue::Str(_))
                | (ValueKind::Any, TypedValue::Num(_))
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueKind::ALL
            .into_iter()
            .find(|k| k.token() == s)
            .ok_or_else(|| format!("unknown value kind '{}'", s))
    }
}
