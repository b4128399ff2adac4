//! Boolean operators joining the items of a group

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Group operator, applied uniformly at every item boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BooleanOp {
    #[default]
    #[serde(rename = "and")]
    And,
    #[serde(rename = "or")]
    Or,
    /// acc && !item
    #[serde(rename = "and not")]
    AndNot,
    /// acc || !item
    #[serde(rename = "or not")]
    OrNot,
}

impl BooleanOp {
    pub const ALL: [BooleanOp; 4] = [
        BooleanOp::And,
        BooleanOp::Or,
        BooleanOp::AndNot,
        BooleanOp::OrNot,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            BooleanOp::And => "and",
            BooleanOp::Or => "or",
            BooleanOp::AndNot => "and not",
            BooleanOp::OrNot => "or not",
        }
    }

    /// Returns true if items after the first are negated before combining
    pub fn is_negated(&self) -> bool {
        matches!(self, BooleanOp::AndNot | BooleanOp::OrNot)
    }

    /// Returns true if the underlying combinator is a conjunction
    pub fn is_conjunction(&self) -> bool {
        matches!(self, BooleanOp::And | BooleanOp::AndNot)
    }

    /// Fold one item result into the accumulator
    pub fn combine(&self, acc: bool, item: bool) -> bool {
        let item = if self.is_negated() { !item } else { item };
        if self.is_conjunction() {
            acc && item
        } else {
            acc || item
        }
    }
}

impl fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for BooleanOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BooleanOp::ALL
            .into_iter()
            .find(|op| op.token() == s)
            .ok_or_else(|| format!("unknown operator '{}'", s))
    }
}
