//! Construction-time validation of rules and trees

use super::node::{FilterNode, Group, Rule};
use crate::error::ValidationError;
use crate::registry::AttributeRegistry;
use crate::types::{includes_entries, ComparatorKind, TypedValue};

/// Validate a single rule against the registry
pub fn validate_rule(rule: &Rule, registry: &dyn AttributeRegistry) -> Result<(), ValidationError> {
    let registered = registry.resolve_kind(&rule.attribute);
    if registered != rule.kind {
        return Err(ValidationError::KindMismatch {
            attribute: rule.attribute.clone(),
            registered,
            actual: rule.kind,
        });
    }

    if !rule.kind.allows(rule.comparator) {
        return Err(ValidationError::IllegalComparator {
            attribute: rule.attribute.clone(),
            kind: rule.kind,
            comparator: rule.comparator,
        });
    }

    if let TypedValue::Num(n) = rule.value {
        if !n.is_finite() {
            return Err(ValidationError::NonFiniteNumber {
                attribute: rule.attribute.clone(),
            });
        }
    }

    if rule.comparator == ComparatorKind::Includes {
        return validate_includes(rule);
    }

    if !rule.kind.fits(&rule.value) {
        return Err(ValidationError::ValueKindMismatch {
            attribute: rule.attribute.clone(),
            kind: rule.kind,
            value: rule.value.to_string(),
        });
    }

    Ok(())
}

// A blank literal is the editor's unconfigured state and is accepted;
// otherwise every entry must be non-empty.
fn validate_includes(rule: &Rule) -> Result<(), ValidationError> {
    let literal = match &rule.value {
        TypedValue::Str(literal) => literal,
        other => {
            return Err(ValidationError::MalformedIncludes {
                attribute: rule.attribute.clone(),
                reason: format!("expected a text list, got {}", other.natural_kind()),
            })
        }
    };

    if literal.trim().is_empty() {
        return Ok(());
    }

    if let Some(position) = includes_entries(literal).position(str::is_empty) {
        return Err(ValidationError::MalformedIncludes {
            attribute: rule.attribute.clone(),
            reason: format!("entry {} is empty", position + 1),
        });
    }

    Ok(())
}

/// Validate a node and everything below it
pub fn validate_node(
    node: &FilterNode,
    registry: &dyn AttributeRegistry,
) -> Result<(), ValidationError> {
    match node {
        FilterNode::Rule(rule) => validate_rule(rule, registry),
        FilterNode::Group(group) => validate_group(group, registry),
    }
}

/// Validate every rule of a tree; placeholders are accepted
pub fn validate_group(
    group: &Group,
    registry: &dyn AttributeRegistry,
) -> Result<(), ValidationError> {
    group
        .present_items()
        .try_for_each(|item| validate_node(item, registry))
}
