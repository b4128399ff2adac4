//! Type system for trigger filters
//!
//! This module contains:
//! - Value kinds and the comparator legality table
//! - Comparators and boolean operators
//! - Subscription tiers
//! - Typed rule and context values

pub mod comparator;
pub mod kind;
pub mod operator;
pub mod tier;
pub mod value;

pub use comparator::ComparatorKind;
pub use kind::ValueKind;
pub use operator::BooleanOp;
pub use tier::Tier;
pub use value::{includes_entries, TypedValue};
