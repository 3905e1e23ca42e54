//! Predicate strategy for integer columns

use super::{FilterOperator, GamePredicate, match_all};
use crate::column::GameColumn;

/// Build a predicate over an integer column. Comparisons are exact.
///
/// An unparsable value yields a match-everything predicate: malformed
/// numeric filters are silently inert, never rejected. `Contains` has
/// no meaning for integers and degrades the same way.
pub(super) fn build(
    column: GameColumn,
    operator: FilterOperator,
    value: String,
) -> GamePredicate {
    let Ok(target) = value.trim().parse::<i64>() else {
        log::debug!(
            "Integer filter value '{}' on column '{}' does not parse, clause is inert",
            value,
            column
        );
        return match_all();
    };

    Box::new(move |game| {
        let Some(actual) = column.integer_value(game) else {
            return true;
        };
        match operator {
            FilterOperator::Equal => actual == target,
            FilterOperator::NotEqual => actual != target,
            FilterOperator::GreaterThan => actual > target,
            FilterOperator::LessThan => actual < target,
            FilterOperator::GreaterOrEqual => actual >= target,
            FilterOperator::LessOrEqual => actual <= target,
            FilterOperator::Contains => true,
        }
    })
}
