//! Subscription tiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription tier; `Prime` is its own tier, not an alias of tier 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Prime")]
    Prime,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Prime, Tier::One, Tier::Two, Tier::Three];

    pub fn token(&self) -> &'static str {
        match self {
            Tier::Prime => "Prime",
            Tier::One => "1",
            Tier::Two => "2",
            Tier::Three => "3",
        }
    }

    /// Numeric form used by ordering comparators (Prime sorts below tier 1)
    pub fn as_number(&self) -> f64 {
        match self {
            Tier::Prime => 0.0,
            Tier::One => 1.0,
            Tier::Two => 2.0,
            Tier::Three => 3.0,
        }
    }

    pub fn from_number(n: f64) -> Option<Tier> {
        Tier::ALL.into_iter().find(|t| t.as_number() == n)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|t| t.token() == s)
            .ok_or_else(|| format!("unknown tier '{}'", s))
    }
}
