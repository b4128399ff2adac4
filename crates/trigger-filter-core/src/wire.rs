//! Serialized tree format
//!
//! The persisted shape of a filter tree:
//!
//! ```json
//! {
//!   "operator": "and",
//!   "items": [
//!     { "type": "amount", "comparator": "gt", "value": 100, "typeof": "number" },
//!     null,
//!     { "operator": "or", "items": [] }
//!   ]
//! }
//! ```
//!
//! Reward rules may carry a `"name"` next to the reward id in `"value"`.
//! Decoding is strict: anything that does not fit this shape is rejected with
//! [`CoreError::MalformedSerializedTree`].

use crate::error::{CoreError, Result};
use crate::filter::{FilterNode, Group, Rule};
use crate::types::{BooleanOp, ComparatorKind, Tier, TypedValue, ValueKind};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// Wire form of a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupJson {
    pub operator: BooleanOp,
    pub items: Vec<Option<NodeJson>>,
}

/// Wire form of a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleJson {
    #[serde(rename = "type")]
    pub attribute: String,
    pub comparator: ComparatorKind,
    pub value: JsonValue,
    #[serde(rename = "typeof")]
    pub kind: ValueKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Wire form of a group item; groups are recognized by their `items` key
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeJson {
    Group(GroupJson),
    Rule(RuleJson),
}

impl<'de> Deserialize<'de> for NodeJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(D::Error::custom(format!(
                "expected a rule or group object, got {}",
                value
            )));
        }
        if value.get("items").is_some() {
            GroupJson::deserialize(value)
                .map(NodeJson::Group)
                .map_err(D::Error::custom)
        } else {
            RuleJson::deserialize(value)
                .map(NodeJson::Rule)
                .map_err(D::Error::custom)
        }
    }
}

// ============================================================================
// Model -> wire
// ============================================================================

impl From<Group> for GroupJson {
    fn from(group: Group) -> Self {
        GroupJson {
            operator: group.operator,
            items: group
                .items
                .into_iter()
                .map(|item| item.map(NodeJson::from))
                .collect(),
        }
    }
}

impl From<FilterNode> for NodeJson {
    fn from(node: FilterNode) -> Self {
        match node {
            FilterNode::Rule(rule) => NodeJson::Rule(rule.into()),
            FilterNode::Group(group) => NodeJson::Group(group.into()),
        }
    }
}

impl From<Rule> for RuleJson {
    fn from(rule: Rule) -> Self {
        let (value, name) = encode_value(rule.value);
        RuleJson {
            attribute: rule.attribute,
            comparator: rule.comparator,
            value,
            kind: rule.kind,
            name,
        }
    }
}

fn encode_value(value: TypedValue) -> (JsonValue, Option<String>) {
    match value {
        TypedValue::Str(s) | TypedValue::ServiceVal(s) => (JsonValue::String(s), None),
        TypedValue::Num(n) => (encode_number(n), None),
        TypedValue::TierVal(tier) => (JsonValue::String(tier.token().to_string()), None),
        TypedValue::RewardVal { id, name } => {
            let name = if name.is_empty() { None } else { Some(name) };
            (JsonValue::String(id), name)
        }
    }
}

// Integral values are written as integers so trees read naturally.
// Non-finite numbers never pass validation and are written as null.
fn encode_number(n: f64) -> JsonValue {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        JsonValue::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    }
}

// ============================================================================
// Wire -> model
// ============================================================================

impl TryFrom<GroupJson> for Group {
    type Error = CoreError;

    fn try_from(json: GroupJson) -> Result<Self> {
        let items = json
            .items
            .into_iter()
            .map(|item| item.map(FilterNode::try_from).transpose())
            .collect::<Result<Vec<_>>>()?;
        Ok(Group {
            operator: json.operator,
            items,
        })
    }
}

impl TryFrom<NodeJson> for FilterNode {
    type Error = CoreError;

    fn try_from(json: NodeJson) -> Result<Self> {
        match json {
            NodeJson::Rule(rule) => Ok(FilterNode::Rule(rule.try_into()?)),
            NodeJson::Group(group) => Ok(FilterNode::Group(group.try_into()?)),
        }
    }
}

impl TryFrom<RuleJson> for Rule {
    type Error = CoreError;

    fn try_from(json: RuleJson) -> Result<Self> {
        let value = decode_value(&json)?;
        Ok(Rule {
            attribute: json.attribute,
            kind: json.kind,
            comparator: json.comparator,
            value,
        })
    }
}

fn decode_value(json: &RuleJson) -> Result<TypedValue> {
    let mismatch = || {
        CoreError::MalformedSerializedTree(format!(
            "rule '{}': value {} does not fit typeof '{}'",
            json.attribute, json.value, json.kind
        ))
    };

    if json.name.is_some() && json.kind != ValueKind::Reward {
        return Err(CoreError::MalformedSerializedTree(format!(
            "rule '{}': only reward rules carry a name",
            json.attribute
        )));
    }

    match (json.kind, &json.value) {
        (ValueKind::String | ValueKind::Any, JsonValue::String(s)) => {
            Ok(TypedValue::Str(s.clone()))
        }
        (ValueKind::Number | ValueKind::Any, JsonValue::Number(n)) => {
            n.as_f64().map(TypedValue::Num).ok_or_else(mismatch)
        }
        (ValueKind::Tier, JsonValue::String(s)) => s
            .parse::<Tier>()
            .map(TypedValue::TierVal)
            .map_err(|_| mismatch()),
        (ValueKind::Service, JsonValue::String(s)) => Ok(TypedValue::ServiceVal(s.clone())),
        (ValueKind::Reward, JsonValue::String(id)) => Ok(TypedValue::RewardVal {
            id: id.clone(),
            name: json.name.clone().unwrap_or_default(),
        }),
        _ => Err(mismatch()),
    }
}

// ============================================================================
// Serde integration for the model types
// ============================================================================

fn de_error<E: serde::de::Error>(err: CoreError) -> E {
    match err {
        CoreError::MalformedSerializedTree(message) => E::custom(message),
        other => E::custom(other),
    }
}

impl Serialize for Group {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        GroupJson::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Group {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let json = GroupJson::deserialize(deserializer)?;
        Group::try_from(json).map_err(de_error)
    }
}

impl Serialize for FilterNode {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        NodeJson::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FilterNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let json = NodeJson::deserialize(deserializer)?;
        FilterNode::try_from(json).map_err(de_error)
    }
}

impl Group {
    /// Parse a persisted tree
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_value(json: JsonValue) -> Result<Self> {
        Ok(serde_json::from_value(json)?)
    }

    /// Serialize to the persisted form
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_value(&self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }
}
