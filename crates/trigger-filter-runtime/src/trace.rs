//! Rule traces recorded while evaluating a tree

use serde::Serialize;

/// Outcome of one rule during a traced evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleTrace {
    /// Rendered rule, e.g. "amount gt 100"
    pub rule: String,
    /// Observed value as text, `None` when the attribute was absent
    pub observed: Option<String>,
    pub result: bool,
}

impl RuleTrace {
    pub fn new(rule: String, observed: Option<String>, result: bool) -> Self {
        Self {
            rule,
            observed,
            result,
        }
    }
}
