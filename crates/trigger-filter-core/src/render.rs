//! Canonical text form of filter trees
//!
//! Rendering is for display and diffing only; it is not parsed back.
//!
//! ```text
//! amount gt 100 and (tier eq Prime or message includes ['!hype', '!raid'])
//! ```

use crate::filter::{FilterNode, Group, Rule};
use crate::types::{includes_entries, ComparatorKind, TypedValue, ValueKind};
use std::fmt;

/// Rendered form of a tree with nothing to evaluate
pub const NO_FILTER: &str = "no filter configured";

/// Render any node; a group with nothing to render yields [`NO_FILTER`]
pub fn render(node: &FilterNode) -> String {
    match node {
        FilterNode::Rule(rule) => render_rule(rule),
        FilterNode::Group(group) => render_group(group),
    }
}

/// Render a root group
pub fn render_group(group: &Group) -> String {
    let rendered = render_items(group);
    if rendered.is_empty() {
        NO_FILTER.to_string()
    } else {
        rendered
    }
}

fn render_items(group: &Group) -> String {
    let parts: Vec<String> = group
        .present_items()
        .filter_map(|item| match item {
            FilterNode::Rule(rule) => Some(render_rule(rule)),
            FilterNode::Group(nested) => {
                let inner = render_items(nested);
                (!inner.is_empty()).then(|| format!("({})", inner))
            }
        })
        .collect();
    parts.join(&format!(" {} ", group.operator))
}

/// Render a single rule
pub fn render_rule(rule: &Rule) -> String {
    if rule.comparator.is_unary() {
        return format!("{} {}", rule.attribute, rule.comparator);
    }

    if rule.comparator == ComparatorKind::Includes {
        let text = rule.value.as_text();
        let entries: Vec<String> = includes_entries(&text)
            .map(|entry| format!("'{}'", entry))
            .collect();
        return format!("{} {} [{}]", rule.attribute, rule.comparator, entries.join(", "));
    }

    format!("{} {} {}", rule.attribute, rule.comparator, render_value(rule))
}

// Only string attributes quote their value; `any` renders it bare
fn render_value(rule: &Rule) -> String {
    match (&rule.value, rule.kind) {
        (TypedValue::Str(s), ValueKind::String) => format!("'{}'", s),
        (other, _) => other.as_text().into_owned(),
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_rule(self))
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_group(self))
    }
}
