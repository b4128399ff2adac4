//! Comparator evaluation for single rules

use std::cmp::Ordering;
use trigger_filter_core::types::includes_entries;
use trigger_filter_core::{ComparatorKind, Rule, Tier, TypedValue};

/// Evaluate a rule against the observed value of its attribute
///
/// A missing value fails every comparator, `Present` included.
pub fn evaluate_rule(rule: &Rule, observed: Option<&TypedValue>) -> bool {
    let Some(observed) = observed else {
        tracing::debug!(
            "Attribute '{}' not in context, {} fails closed",
            rule.attribute,
            rule.comparator
        );
        return false;
    };

    match rule.comparator {
        ComparatorKind::Present => true,
        ComparatorKind::IsEven => parity(observed) == Some(0),
        ComparatorKind::IsOdd => parity(observed) == Some(1),
        ComparatorKind::Eq => values_equal(&rule.value, observed),
        ComparatorKind::Neq => !values_equal(&rule.value, observed),
        ComparatorKind::Lt => compare_numbers(observed, &rule.value) == Some(Ordering::Less),
        ComparatorKind::LtEq => matches!(
            compare_numbers(observed, &rule.value),
            Some(Ordering::Less | Ordering::Equal)
        ),
        ComparatorKind::Gt => compare_numbers(observed, &rule.value) == Some(Ordering::Greater),
        ComparatorKind::GtEq => matches!(
            compare_numbers(observed, &rule.value),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        ComparatorKind::Contains => observed.as_text().contains(rule.value.as_text().as_ref()),
        ComparatorKind::Includes => {
            let observed = observed.as_text();
            includes_entries(&rule.value.as_text()).any(|entry| entry == observed)
        }
    }
}

/// Typed equality, read through the rule value's representation
fn values_equal(expected: &TypedValue, observed: &TypedValue) -> bool {
    match expected {
        TypedValue::TierVal(tier) => tier_of(observed) == Some(*tier),
        TypedValue::Num(n) => observed.as_number() == Some(*n),
        TypedValue::Str(_) | TypedValue::ServiceVal(_) | TypedValue::RewardVal { .. } => {
            expected.as_text() == observed.as_text()
        }
    }
}

fn tier_of(value: &TypedValue) -> Option<Tier> {
    match value {
        TypedValue::TierVal(tier) => Some(*tier),
        TypedValue::Str(s) => s.parse().ok(),
        // Numeric tiers are 1, 2 or 3; Prime is only ever named
        TypedValue::Num(n) => Tier::from_number(*n).filter(|tier| *tier != Tier::Prime),
        _ => None,
    }
}

fn compare_numbers(observed: &TypedValue, expected: &TypedValue) -> Option<Ordering> {
    let (Some(left), Some(right)) = (observed.as_number(), expected.as_number()) else {
        tracing::debug!("Cannot order {:?} against {:?}, returning false", observed, expected);
        return None;
    };
    left.partial_cmp(&right)
}

/// Integer parity (0 or 1) of the value truncated towards zero
fn parity(value: &TypedValue) -> Option<i64> {
    let n = value.as_number().filter(|n| n.is_finite())?;
    Some((n.trunc() as i64).rem_euclid(2))
}
