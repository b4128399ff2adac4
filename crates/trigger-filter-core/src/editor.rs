//! Tree editor operations
//!
//! Every operation takes the current tree by reference and returns a new one.
//! A `path` is the list of item indices leading from the root group to the
//! group being edited; `&[]` addresses the root. Paths or indices that do not
//! point at anything leave the tree unchanged.
//!
//! A path that ends on a placeholder slot addresses a fresh `and` group in
//! its place; the slot is only materialized when the edit changes something.

use crate::error::ValidationError;
use crate::filter::{validate_node, validate_rule, FilterNode, Group, Rule};
use crate::registry::AttributeRegistry;
use crate::types::{BooleanOp, ComparatorKind, ValueKind};

/// Editor bound to the registry of the feature that owns the tree
pub struct FilterEditor<'r> {
    registry: &'r dyn AttributeRegistry,
}

impl<'r> FilterEditor<'r> {
    pub fn new(registry: &'r dyn AttributeRegistry) -> Self {
        Self { registry }
    }

    /// Attributes offered when adding a rule
    pub fn attributes(&self) -> Vec<(String, ValueKind)> {
        self.registry.attributes()
    }

    /// Comparators offered for an attribute
    pub fn comparators_for(&self, attribute: &str) -> Vec<ComparatorKind> {
        self.registry.resolve_kind(attribute).legal_comparators()
    }

    /// Append a rule with the default value for the attribute's kind
    pub fn insert_rule(
        &self,
        tree: &Group,
        path: &[usize],
        attribute: &str,
        comparator: ComparatorKind,
    ) -> Result<Group, ValidationError> {
        let kind = self.registry.resolve_kind(attribute);
        let rule = Rule::new(attribute, kind, comparator, kind.default_value());
        validate_rule(&rule, self.registry)?;

        Ok(edit_group_at(tree, path, |group| {
            group.items.push(Some(FilterNode::Rule(rule)));
            true
        }))
    }

    /// Append a placeholder slot for a nested group
    pub fn insert_group(&self, tree: &Group, path: &[usize]) -> Group {
        edit_group_at(tree, path, |group| {
            group.items.push(None);
            true
        })
    }

    /// Replace the item at `index`
    pub fn update_item(
        &self,
        tree: &Group,
        path: &[usize],
        index: usize,
        new_node: Option<FilterNode>,
    ) -> Result<Group, ValidationError> {
        if let Some(node) = &new_node {
            validate_node(node, self.registry)?;
        }

        Ok(edit_group_at(tree, path, |group| match group.items.get_mut(index) {
            Some(slot) if *slot != new_node => {
                *slot = new_node;
                true
            }
            _ => false,
        }))
    }

    /// Remove the item at `index`
    pub fn delete_item(&self, tree: &Group, path: &[usize], index: usize) -> Group {
        edit_group_at(tree, path, |group| {
            if index < group.items.len() {
                group.items.remove(index);
                true
            } else {
                false
            }
        })
    }

    /// Change the operator of the addressed group
    pub fn set_operator(&self, tree: &Group, path: &[usize], operator: BooleanOp) -> Group {
        edit_group_at(tree, path, |group| {
            let changed = group.operator != operator;
            group.operator = operator;
            changed
        })
    }
}

/// Drop every placeholder slot, at every depth
pub fn prune_placeholders(tree: &Group) -> Group {
    Group {
        operator: tree.operator,
        items: tree
            .present_items()
            .map(|item| match item {
                FilterNode::Rule(rule) => Some(FilterNode::Rule(rule.clone())),
                FilterNode::Group(group) => Some(FilterNode::Group(prune_placeholders(group))),
            })
            .collect(),
    }
}

fn edit_group_at<F>(tree: &Group, path: &[usize], edit: F) -> Group
where
    F: FnOnce(&mut Group) -> bool,
{
    let mut updated = tree.clone();
    let changed = match locate_mut(&mut updated, path) {
        Some(group) => edit(group),
        None => {
            tracing::debug!("Editor path {:?} does not address a group, tree unchanged", path);
            false
        }
    };

    if changed {
        updated
    } else {
        tree.clone()
    }
}

fn locate_mut<'a>(group: &'a mut Group, path: &[usize]) -> Option<&'a mut Group> {
    let Some((first, rest)) = path.split_first() else {
        return Some(group);
    };

    let slot = group.items.get_mut(*first)?;
    if slot.is_none() && rest.is_empty() {
        *slot = Some(FilterNode::Group(Group::default()));
    }

    match slot {
        Some(FilterNode::Group(nested)) => locate_mut(nested, rest),
        _ => None,
    }
}
