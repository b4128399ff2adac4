//! Trigger Filter Core - data model for event filter trees
//!
//! This crate provides the building blocks shared by the runtime and the SDK:
//! - Value kinds, comparators, boolean operators and typed values
//! - The filter tree (rules and groups) with validation
//! - Attribute registries that map attribute names to value kinds
//! - The serialized wire format
//! - The canonical renderer and the tree editor operations

pub mod editor;
pub mod error;
pub mod filter;
pub mod registry;
pub mod render;
pub mod types;
pub mod wire;

// Re-export commonly used types
pub use editor::FilterEditor;
pub use error::{CoreError, ValidationError};
pub use filter::{FilterNode, Group, Rule};
pub use registry::{AttributeRegistry, StaticRegistry};
pub use render::{render, render_group, NO_FILTER};
pub use types::{BooleanOp, ComparatorKind, Tier, TypedValue, ValueKind};
