//! Predicate strategy for real-valued columns

use super::{FilterOperator, GamePredicate, match_all};
use crate::column::GameColumn;

/// Absolute tolerance for equality on real columns, wide enough to
/// absorb floating representation noise in catalog data.
const EPSILON: f64 = 1e-4;

/// Build a predicate over a real column.
///
/// Equal/NotEqual compare within [`EPSILON`]; the ordering operators
/// compare directly. An unparsable value or a `Contains` clause
/// degrades to match-everything, as for integer columns.
pub(super) fn build(
    column: GameColumn,
    operator: FilterOperator,
    value: String,
) -> GamePredicate {
    let Ok(target) = value.trim().parse::<f64>() else {
        log::debug!(
            "Real filter value '{}' on column '{}' does not parse, clause is inert",
            value,
            column
        );
        return match_all();
    };

    Box::new(move |game| {
        let Some(actual) = column.real_value(game) else {
            return true;
        };
        match operator {
            FilterOperator::Equal => (actual - target).abs() < EPSILON,
            FilterOperator::NotEqual => (actual - target).abs() >= EPSILON,
            FilterOperator::GreaterThan => actual > target,
            FilterOperator::LessThan => actual < target,
            FilterOperator::GreaterOrEqual => actual >= target,
            FilterOperator::LessOrEqual => actual <= target,
            FilterOperator::Contains => true,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BoardGame;

    fn game(rating: f64) -> BoardGame {
        BoardGame::new("Test", 1, 2, 4, 30, 60, 2.0, rating, 2000)
    }

    fn matches(rating: f64, operator: FilterOperator, value: &str) -> bool {
        build(GameColumn::Rating, operator, value.to_string())(&game(rating))
    }

    #[test]
    fn test_equal_within_epsilon() {
        assert!(matches(7.5, FilterOperator::Equal, "7.5"));
        assert!(matches(7.50001, FilterOperator::Equal, "7.5"));
        assert!(!matches(7.51, FilterOperator::Equal, "7.5"));
    }

    #[test]
    fn test_not_equal_outside_epsilon() {
        assert!(matches(7.51, FilterOperator::NotEqual, "7.5"));
        assert!(!matches(7.50001, FilterOperator::NotEqual, "7.5"));
    }

    #[test]
    fn test_ordering() {
        assert!(matches(8.5, FilterOperator::GreaterThan, "7.5"));
        assert!(matches(5.5, FilterOperator::LessThan, "7.5"));
        assert!(matches(7.5, FilterOperator::GreaterOrEqual, "7.5"));
        assert!(matches(7.5, FilterOperator::LessOrEqual, "7.5"));
    }

    #[test]
    fn test_integer_literal_parses_as_real() {
        assert!(matches(7.0, FilterOperator::Equal, "7"));
    }

    // ===== Degradation paths =====

    #[test]
    fn test_unparsable_value_matches_everything() {
        assert!(matches(7.5, FilterOperator::Equal, "high"));
        assert!(matches(1.0, FilterOperator::GreaterThan, "high"));
    }

    #[test]
    fn test_contains_matches_everything() {
        assert!(matches(7.5, FilterOperator::Contains, "7"));
    }
}
