//! Rules, groups and the node union

use crate::error::ValidationError;
use crate::registry::AttributeRegistry;
use crate::types::{BooleanOp, ComparatorKind, TypedValue, ValueKind};

/// A leaf condition
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Attribute name looked up in the event context (e.g. "amount")
    pub attribute: String,
    /// Kind resolved from the registry when the rule was built
    pub kind: ValueKind,
    pub comparator: ComparatorKind,
    pub value: TypedValue,
}

impl Rule {
    /// Create a rule without consulting a registry
    pub fn new(
        attribute: impl Into<String>,
        kind: ValueKind,
        comparator: ComparatorKind,
        value: TypedValue,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            kind,
            comparator,
            value,
        }
    }

    /// Create a rule whose kind comes from `registry`, validating the result
    pub fn build(
        registry: &dyn AttributeRegistry,
        attribute: impl Into<String>,
        comparator: ComparatorKind,
        value: TypedValue,
    ) -> Result<Self, ValidationError> {
        let attribute = attribute.into();
        let kind = registry.resolve_kind(&attribute);
        let rule = Rule::new(attribute, kind, comparator, value);
        super::validate_rule(&rule, registry)?;
        Ok(rule)
    }
}

/// An internal node; one operator joins every item boundary
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub operator: BooleanOp,
    /// `None` marks a nested group slot that was never configured
    pub items: Vec<Option<FilterNode>>,
}

impl Group {
    /// Create an empty group
    pub fn new(operator: BooleanOp) -> Self {
        Self {
            operator,
            items: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.items.push(Some(FilterNode::Rule(rule)));
        self
    }

    pub fn with_group(mut self, group: Group) -> Self {
        self.items.push(Some(FilterNode::Group(group)));
        self
    }

    pub fn with_placeholder(mut self) -> Self {
        self.items.push(None);
        self
    }

    /// Items that take part in evaluation and rendering
    pub fn present_items(&self) -> impl Iterator<Item = &FilterNode> {
        self.items.iter().flatten()
    }

    /// Returns true if no item would take part in evaluation
    pub fn has_no_constraints(&self) -> bool {
        self.present_items().next().is_none()
    }

    pub fn placeholder_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_none()).count()
    }

    /// Get all rules in this group (flattened, depth first)
    pub fn all_rules(&self) -> Vec<&Rule> {
        let mut result = Vec::new();
        self.collect_rules(&mut result);
        result
    }

    fn collect_rules<'a>(&'a self, result: &mut Vec<&'a Rule>) {
        for item in self.present_items() {
            match item {
                FilterNode::Rule(rule) => result.push(rule),
                FilterNode::Group(group) => group.collect_rules(result),
            }
        }
    }
}

/// A rule or a nested group
#[derive(Debug, Clone, PartialEq)]
pub enum FilterNode {
    Rule(Rule),
    Group(Group),
}

impl From<Rule> for FilterNode {
    fn from(rule: Rule) -> Self {
        FilterNode::Rule(rule)
    }
}

impl From<Group> for FilterNode {
    fn from(group: Group) -> Self {
        FilterNode::Group(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StaticRegistry;

    fn amount_gt(n: f64) -> Rule {
        Rule::new("amount", ValueKind::Number, ComparatorKind::Gt, TypedValue::Num(n))
    }

    #[test]
    fn test_default_group_is_empty_and() {
        let group = Group::default();
        assert_eq!(group.operator, BooleanOp::And);
        assert!(group.items.is_empty());
        assert!(group.has_no_constraints());
    }

    #[test]
    fn test_placeholders_are_not_constraints() {
        let group = Group::new(BooleanOp::Or).with_placeholder().with_placeholder();
        assert_eq!(group.items.len(), 2);
        assert_eq!(group.placeholder_count(), 2);
        assert!(group.has_no_constraints());
    }

    #[test]
    fn test_all_rules_flattens_nested_groups() {
        let group = Group::default()
            .with_rule(amount_gt(1.0))
            .with_placeholder()
            .with_group(Group::new(BooleanOp::Or).with_rule(amount_gt(2.0)));
        let rules = group.all_rules();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].value, TypedValue::Num(2.0));
    }

    #[test]
    fn test_build_resolves_kind_from_registry() {
        let registry = StaticRegistry::new().with_attribute("amount", ValueKind::Number);
        let rule =
            Rule::build(&registry, "amount", ComparatorKind::Gt, TypedValue::Num(5.0)).unwrap();
        assert_eq!(rule.kind, ValueKind::Number);

        let error = Rule::build(&registry, "message", ComparatorKind::Gt, TypedValue::str("hi"))
            .unwrap_err();
        assert!(matches!(error, ValidationError::IllegalComparator { .. }));
    }
}
