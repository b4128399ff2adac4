//! Filter tree model
//!
//! A filter tree is a root [`Group`] whose items are rules, nested groups, or
//! `None` placeholders for nested groups that have not been configured yet.
//!
//! ```text
//! Group { And, [
//!     Rule(amount gt 100),
//!     Group { Or, [Rule(tier eq Prime), Rule(tier eq 3)] },
//!     None,
//! ]}
//! ```

mod node;
mod validate;

pub use node::{FilterNode, Group, Rule};
pub use validate::{validate_group, validate_node, validate_rule};
