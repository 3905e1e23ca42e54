//! Predicate strategy for text columns

use super::{FilterOperator, GamePredicate};
use crate::column::GameColumn;

/// Build a predicate over a text column. Both sides are lowercased
/// before comparison, so every match is case-insensitive.
///
/// Ordering operators compare the lowercased text lexicographically.
/// The policy covers all registered operators, so nothing degrades
/// here; a kind-mismatched column (no text value) accepts everything.
pub(super) fn build(
    column: GameColumn,
    operator: FilterOperator,
    value: String,
) -> GamePredicate {
    let target = value.to_lowercase();
    Box::new(move |game| {
        let Some(text) = column.text_value(game) else {
            return true;
        };
        let actual = text.to_lowercase();
        match operator {
            FilterOperator::Equal => actual == target,
            FilterOperator::NotEqual => actual != target,
            FilterOperator::Contains => actual.contains(&target),
            FilterOperator::GreaterThan => actual > target,
            FilterOperator::LessThan => actual < target,
            FilterOperator::GreaterOrEqual => actual >= target,
            FilterOperator::LessOrEqual => actual <= target,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BoardGame;

    fn game(name: &str) -> BoardGame {
        BoardGame::new(name, 1, 2, 4, 30, 60, 2.0, 7.0, 2000)
    }

    fn matches(name: &str, operator: FilterOperator, value: &str) -> bool {
        build(GameColumn::Name, operator, value.to_string())(&game(name))
    }

    // ===== Equality =====

    #[test]
    fn test_equal_exact() {
        assert!(matches("Chess", FilterOperator::Equal, "Chess"));
        assert!(!matches("Chess", FilterOperator::Equal, "Go"));
    }

    #[test]
    fn test_equal_case_insensitive() {
        assert!(matches("Chess", FilterOperator::Equal, "chess"));
        assert!(matches("chess", FilterOperator::Equal, "CHESS"));
    }

    #[test]
    fn test_not_equal() {
        assert!(matches("Chess", FilterOperator::NotEqual, "Go"));
        assert!(!matches("Chess", FilterOperator::NotEqual, "chess"));
    }

    // ===== Containment =====

    #[test]
    fn test_contains() {
        assert!(matches("Go Fish", FilterOperator::Contains, "fish"));
        assert!(matches("Go Fish", FilterOperator::Contains, "o F"));
        assert!(!matches("Go Fish", FilterOperator::Contains, "chess"));
    }

    #[test]
    fn test_contains_empty_value_matches_everything() {
        assert!(matches("Chess", FilterOperator::Contains, ""));
    }

    // ===== Lexicographic ordering =====

    #[test]
    fn test_ordering_on_lowercased_text() {
        assert!(matches("Chess", FilterOperator::GreaterThan, "apple"));
        assert!(matches("Chess", FilterOperator::LessThan, "go"));
        assert!(matches("Chess", FilterOperator::GreaterOrEqual, "chess"));
        assert!(matches("Chess", FilterOperator::LessOrEqual, "chess"));
    }

    #[test]
    fn test_ordering_ignores_case() {
        // 'Z' < 'a' in ASCII, but lowercasing removes the gap
        assert!(matches("Zombicide", FilterOperator::GreaterThan, "azul"));
    }
}
