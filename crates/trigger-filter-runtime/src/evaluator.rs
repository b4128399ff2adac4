//! Tree evaluation
//!
//! Groups fold their present items left to right. The first item seeds the
//! accumulator; each later item is combined with the group's operator, which
//! negates the item first for `and not` / `or not`. Placeholders are skipped
//! and a group with nothing to evaluate is `true`.

use crate::comparator::evaluate_rule;
use crate::context::ContextLookup;
use crate::trace::RuleTrace;
use trigger_filter_core::render::render_rule;
use trigger_filter_core::{FilterNode, Group};

/// Evaluate any node against an event context
pub fn evaluate<C: ContextLookup + ?Sized>(node: &FilterNode, ctx: &C) -> bool {
    match node {
        FilterNode::Rule(rule) => evaluate_rule(rule, ctx.lookup(&rule.attribute)),
        FilterNode::Group(group) => evaluate_group(group, ctx),
    }
}

/// Evaluate a group (typically the root of a filter tree)
pub fn evaluate_group<C: ContextLookup + ?Sized>(group: &Group, ctx: &C) -> bool {
    let result = fold(group, |item| evaluate(item, ctx));
    tracing::debug!(
        "Group '{}' with {} items evaluated to {}",
        group.operator,
        group.items.len(),
        result
    );
    result
}

/// Evaluate a group, recording the outcome of every rule
pub fn evaluate_with_trace<C: ContextLookup + ?Sized>(
    group: &Group,
    ctx: &C,
) -> (bool, Vec<RuleTrace>) {
    let mut traces = Vec::new();
    let result = traced_group(group, ctx, &mut traces);
    (result, traces)
}

fn traced_group<C: ContextLookup + ?Sized>(
    group: &Group,
    ctx: &C,
    traces: &mut Vec<RuleTrace>,
) -> bool {
    fold(group, |item| match item {
        FilterNode::Rule(rule) => {
            let observed = ctx.lookup(&rule.attribute);
            let result = evaluate_rule(rule, observed);
            traces.push(RuleTrace::new(
                render_rule(rule),
                observed.map(|value| value.to_string()),
                result,
            ));
            result
        }
        FilterNode::Group(nested) => traced_group(nested, ctx, &mut *traces),
    })
}

// Every present item is evaluated, so traces cover the whole tree.
fn fold<F>(group: &Group, mut eval: F) -> bool
where
    F: FnMut(&FilterNode) -> bool,
{
    let mut items = group.present_items();
    let Some(first) = items.next() else {
        return true;
    };

    let seed = eval(first);
    items.fold(seed, |acc, item| {
        let item_result = eval(item);
        group.operator.combine(acc, item_result)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EventContext;
    use trigger_filter_core::{BooleanOp, ComparatorKind, Rule, TypedValue, ValueKind};

    fn flag(name: &str) -> Rule {
        Rule::new(name, ValueKind::Number, ComparatorKind::Eq, TypedValue::Num(1.0))
    }

    fn ctx(a: bool, b: bool, c: bool) -> EventContext {
        let as_num = |v: bool| TypedValue::Num(if v { 1.0 } else { 0.0 });
        EventContext::new()
            .with("a", as_num(a))
            .with("b", as_num(b))
            .with("c", as_num(c))
    }

    fn all_contexts() -> Vec<(bool, bool, bool, EventContext)> {
        let mut out = Vec::new();
        for a in [false, true] {
            for b in [false, true] {
                for c in [false, true] {
                    out.push((a, b, c, ctx(a, b, c)));
                }
            }
        }
        out
    }

    #[test]
    fn test_empty_group_is_true() {
        for operator in BooleanOp::ALL {
            assert!(evaluate_group(&Group::new(operator), &EventContext::new()));
        }
    }

    #[test]
    fn test_first_item_seeds_accumulator() {
        let group = Group::new(BooleanOp::AndNot).with_rule(flag("a"));
        assert!(evaluate_group(&group, &ctx(true, false, false)));
        assert!(!evaluate_group(&group, &ctx(false, false, false)));
    }

    #[test]
    fn test_negated_operators() {
        let and_not = Group::new(BooleanOp::AndNot).with_rule(flag("a")).with_rule(flag("b"));
        let or_not = Group::new(BooleanOp::OrNot).with_rule(flag("a")).with_rule(flag("b"));
        for (a, b, _, context) in all_contexts() {
            assert_eq!(evaluate_group(&and_not, &context), a && !b);
            assert_eq!(evaluate_group(&or_not, &context), a || !b);
        }
    }

    #[test]
    fn test_fold_is_left_to_right() {
        let group = Group::new(BooleanOp::AndNot)
            .with_rule(flag("a"))
            .with_rule(flag("b"))
            .with_rule(flag("c"));
        for (a, b, c, context) in all_contexts() {
            assert_eq!(evaluate_group(&group, &context), a && !b && !c);
        }
    }

    #[test]
    fn test_placeholders_are_skipped() {
        let group = Group::new(BooleanOp::OrNot)
            .with_placeholder()
            .with_rule(flag("a"))
            .with_placeholder()
            .with_rule(flag("b"));
        for (a, b, _, context) in all_contexts() {
            assert_eq!(evaluate_group(&group, &context), a || !b);
        }
    }

    #[test]
    fn test_nested_group() {
        let tree = Group::new(BooleanOp::And)
            .with_rule(flag("a"))
            .with_group(Group::new(BooleanOp::Or).with_rule(flag("b")).with_rule(flag("c")));
        for (a, b, c, context) in all_contexts() {
            assert_eq!(evaluate_group(&tree, &context), a && (b || c));
        }
    }

    #[test]
    fn test_trace_covers_every_rule() {
        let tree = Group::new(BooleanOp::And)
            .with_rule(flag("a"))
            .with_group(Group::new(BooleanOp::Or).with_rule(flag("b")).with_rule(flag("missing")));
        let (result, traces) = evaluate_with_trace(&tree, &ctx(false, true, false));
        assert!(!result);
        assert_eq!(traces.len(), 3);
        assert_eq!(traces[0], RuleTrace::new("a eq 1".to_string(), Some("0".to_string()), false));
        assert_eq!(traces[2].observed, None);
        assert_eq!(result, evaluate_group(&tree, &ctx(false, true, false)));
    }
}
