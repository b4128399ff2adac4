//! Trigger Filter Runtime - evaluation of filter trees
//!
//! This crate decides whether an event satisfies a filter tree:
//! - Event contexts (attribute name to typed value)
//! - The comparator evaluator for single rules
//! - The tree evaluator folding group results
//! - Rule traces for debugging decisions

pub mod comparator;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod trace;

pub use comparator::evaluate_rule;
pub use context::{ContextLookup, EventContext};
pub use error::{Result, RuntimeError};
pub use evaluator::{evaluate, evaluate_group, evaluate_with_trace};
pub use trace::RuleTrace;
