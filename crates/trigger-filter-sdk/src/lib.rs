//! Trigger Filter SDK
//!
//! High-level API for features that own filter trees: named scopes with
//! their attribute registries, loading and saving persisted trees, and
//! deciding whether an event passes a filter.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;

// Re-export main types
pub use builder::FilterEngineBuilder;
pub use config::{EngineConfig, PlaceholderPolicy, ScopeConfig};
pub use engine::{FilterDecision, FilterEngine};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use trigger_filter_core::{
    BooleanOp, ComparatorKind, FilterEditor, FilterNode, Group, Rule, StaticRegistry, Tier,
    TypedValue, ValueKind,
};
pub use trigger_filter_runtime::{EventContext, RuleTrace};
