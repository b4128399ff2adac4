//! Comparators usable in filter rules

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rule comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparatorKind {
    /// Equal (eq)
    #[serde(rename = "eq")]
    Eq,
    /// Not equal (neq)
    #[serde(rename = "neq")]
    Neq,
    /// Less than (lt)
    #[serde(rename = "lt")]
    Lt,
    /// Less than or equal (lt-eq)
    #[serde(rename = "lt-eq")]
    LtEq,
    /// Greater than (gt)
    #[serde(rename = "gt")]
    Gt,
    /// Greater than or equal (gt-eq)
    #[serde(rename = "gt-eq")]
    GtEq,
    /// Substring match (co)
    #[serde(rename = "co")]
    Contains,
    /// Membership in a comma separated list (includes)
    #[serde(rename = "includes")]
    Includes,
    /// Attribute is present in the event (pr)
    #[serde(rename = "pr")]
    Present,
    #[serde(rename = "is-even")]
    IsEven,
    #[serde(rename = "is-odd")]
    IsOdd,
}

impl ComparatorKind {
    /// Every comparator, in editor pick-list order
    pub const ALL: [ComparatorKind; 11] = [
        ComparatorKind::IsEven,
        ComparatorKind::IsOdd,
        ComparatorKind::Lt,
        ComparatorKind::LtEq,
        ComparatorKind::Contains,
        ComparatorKind::Eq,
        ComparatorKind::Neq,
        ComparatorKind::Present,
        ComparatorKind::Includes,
        ComparatorKind::Gt,
        ComparatorKind::GtEq,
    ];

    /// Wire token, also used by the renderer
    pub fn token(&self) -> &'static str {
        match self {
            ComparatorKind::Eq => "eq",
            ComparatorKind::Neq => "neq",
            ComparatorKind::Lt => "lt",
            ComparatorKind::LtEq => "lt-eq",
            ComparatorKind::Gt => "gt",
            ComparatorKind::GtEq => "gt-eq",
            ComparatorKind::Contains => "co",
            ComparatorKind::Includes => "includes",
            ComparatorKind::Present => "pr",
            ComparatorKind::IsEven => "is-even",
            ComparatorKind::IsOdd => "is-odd",
        }
    }

    /// Returns true for numeric ordering comparators
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            ComparatorKind::Lt | ComparatorKind::LtEq | ComparatorKind::Gt | ComparatorKind::GtEq
        )
    }

    pub fn is_parity(&self) -> bool {
        matches!(self, ComparatorKind::IsEven | ComparatorKind::IsOdd)
    }

    /// Returns true if the comparator ignores the rule value
    pub fn is_unary(&self) -> bool {
        matches!(
            self,
            ComparatorKind::Present | ComparatorKind::IsEven | ComparatorKind::IsOdd
        )
    }
}

impl fmt::Display for ComparatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ComparatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparatorKind::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or_else(|| format!("unknown comparator '{}'", s))
    }
}
