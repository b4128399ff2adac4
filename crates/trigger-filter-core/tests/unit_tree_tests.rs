//! Unit tests for the filter tree model
//!
//! Covers the wire format, the canonical renderer and the editor operations
//! working together on realistic trees.

use serde_json::json;
use trigger_filter_core::registry::presets;
use trigger_filter_core::*;

fn tip_tree() -> Group {
    Group::new(BooleanOp::And)
        .with_rule(Rule::new(
            "amount",
            ValueKind::Number,
            ComparatorKind::GtEq,
            TypedValue::Num(5.5),
        ))
        .with_placeholder()
        .with_group(
            Group::new(BooleanOp::OrNot)
                .with_rule(Rule::new(
                    "service",
                    ValueKind::Service,
                    ComparatorKind::Eq,
                    TypedValue::service("kofi"),
                ))
                .with_rule(Rule::new(
                    "message",
                    ValueKind::String,
                    ComparatorKind::Includes,
                    TypedValue::str("!skip, !mute"),
                ))
                .with_placeholder(),
        )
        .with_group(Group::new(BooleanOp::Or))
}

// =============================================================================
// Wire format
// =============================================================================

#[test]
fn test_round_trip_preserves_placeholders() {
    let tree = tip_tree();
    let json = tree.to_json_string().unwrap();
    let decoded = Group::from_json_str(&json).unwrap();
    assert_eq!(decoded, tree);
    assert!(decoded.items[1].is_none());
}

#[test]
fn test_round_trip_every_value_kind() {
    let tree = Group::new(BooleanOp::AndNot)
        .with_rule(Rule::new(
            "tier",
            ValueKind::Tier,
            ComparatorKind::Neq,
            TypedValue::TierVal(Tier::Three),
        ))
        .with_rule(Rule::new(
            "rewardId",
            ValueKind::Reward,
            ComparatorKind::Eq,
            TypedValue::reward("r-7", ""),
        ))
        .with_rule(Rule::new("param", ValueKind::Any, ComparatorKind::IsOdd, TypedValue::Num(-2.0)))
        .with_rule(Rule::new(
            "param",
            ValueKind::Any,
            ComparatorKind::Contains,
            TypedValue::str("x"),
        ));
    let decoded = Group::from_json_value(tree.to_json_value().unwrap()).unwrap();
    assert_eq!(decoded, tree);
}

#[test]
fn test_serialized_shape() {
    let tree = Group::new(BooleanOp::OrNot)
        .with_placeholder()
        .with_rule(Rule::new(
            "tier",
            ValueKind::Tier,
            ComparatorKind::Eq,
            TypedValue::TierVal(Tier::Prime),
        ));
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({
            "operator": "or not",
            "items": [
                null,
                { "type": "tier", "comparator": "eq", "value": "Prime", "typeof": "tier" }
            ]
        })
    );
}

#[test]
fn test_filter_node_serde() {
    let node: FilterNode = serde_json::from_value(json!({
        "type": "amount", "comparator": "is-even", "value": 0, "typeof": "number"
    }))
    .unwrap();
    assert!(matches!(
        node,
        FilterNode::Rule(ref rule) if rule.comparator == ComparatorKind::IsEven
    ));

    let node: FilterNode =
        serde_json::from_value(json!({ "operator": "or", "items": [null] })).unwrap();
    assert_eq!(node, FilterNode::Group(Group::new(BooleanOp::Or).with_placeholder()));
}

#[test]
fn test_malformed_trees_are_errors() {
    let cases = [
        "[]",
        r#"{"operator": "and"}"#,
        r#"{"operator": "and", "items": [{"type": "amount"}]}"#,
        r#"{"operator": "and", "items": [
            {"type": "amount", "comparator": "gt", "value": 1, "typeof": "float"}
        ]}"#,
        r#"{"operator": "and", "items": [
            {"type": "tier", "comparator": "eq", "value": 1, "typeof": "tier"}
        ]}"#,
        r#"{"operator": "and", "items": [
            {"type": "m", "comparator": "eq", "value": "x", "typeof": "string", "name": "n"}
        ]}"#,
    ];
    for case in cases {
        assert!(
            matches!(Group::from_json_str(case), Err(CoreError::MalformedSerializedTree(_))),
            "{}",
            case
        );
    }
}

// =============================================================================
// Renderer
// =============================================================================

#[test]
fn test_render_realistic_tree() {
    assert_eq!(
        render_group(&tip_tree()),
        "amount gt-eq 5.5 and (service eq kofi or not message includes ['!skip', '!mute'])"
    );
}

#[test]
fn test_render_is_stable() {
    let tree = tip_tree();
    assert_eq!(render_group(&tree), render_group(&tree.clone()));
    assert_eq!(tree.to_string(), render_group(&tree));
}

#[test]
fn test_render_sentinel() {
    assert_eq!(render(&FilterNode::Group(Group::default())), NO_FILTER);
    assert_eq!(render_group(&Group::default().with_group(Group::default())), NO_FILTER);
}

// =============================================================================
// Editor
// =============================================================================

#[test]
fn test_build_tree_through_editor() {
    let registry = presets::alert("tip").unwrap();
    let editor = FilterEditor::new(&registry);

    let tree = Group::default();
    let tree = editor.insert_rule(&tree, &[], "amount", ComparatorKind::Gt).unwrap();
    let tree = editor.insert_group(&tree, &[]);
    let tree = editor.set_operator(&tree, &[1], BooleanOp::Or);
    let tree = editor.insert_rule(&tree, &[1], "service", ComparatorKind::Eq).unwrap();
    let tree = editor.insert_rule(&tree, &[1], "currency", ComparatorKind::Eq).unwrap();
    let tree = editor
        .update_item(
            &tree,
            &[1],
            1,
            Some(
                Rule::new("currency", ValueKind::String, ComparatorKind::Eq, TypedValue::str("EUR"))
                    .into(),
            ),
        )
        .unwrap();

    assert_eq!(
        render_group(&tree),
        "amount gt 0 and (service eq tiltify or currency eq 'EUR')"
    );
    assert_eq!(filter::validate_group(&tree, &registry), Ok(()));
}

#[test]
fn test_delete_out_of_range_returns_input() {
    let registry = presets::alert("tip").unwrap();
    let editor = FilterEditor::new(&registry);
    let tree = tip_tree();

    assert_eq!(editor.delete_item(&tree, &[], 4), tree);
    assert_eq!(editor.delete_item(&tree, &[2], 3), tree);
    assert_eq!(editor.delete_item(&tree, &[0], 0), tree);
    assert_eq!(editor.set_operator(&tree, &[9], BooleanOp::Or), tree);
}

#[test]
fn test_edits_do_not_touch_the_input() {
    let registry = presets::alert("tip").unwrap();
    let editor = FilterEditor::new(&registry);
    let tree = tip_tree();
    let snapshot = tree.clone();

    let edited = editor.delete_item(&tree, &[2], 0);
    assert_eq!(tree, snapshot);
    assert_ne!(edited, tree);
    match &edited.items[2] {
        Some(FilterNode::Group(group)) => assert_eq!(group.items.len(), 2),
        other => panic!("Expected group, got {:?}", other),
    }
}

#[test]
fn test_unknown_attribute_is_string_kind() {
    let registry = presets::alert("raid").unwrap();
    let editor = FilterEditor::new(&registry);
    let tree = editor
        .insert_rule(&Group::default(), &[], "game", ComparatorKind::Contains)
        .unwrap();
    assert_eq!(render_group(&tree), "game co ''");
    assert!(editor
        .insert_rule(&Group::default(), &[], "game", ComparatorKind::Gt)
        .is_err());
}
