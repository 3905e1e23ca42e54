//! Filter clause types and typed predicate construction

mod expression;
mod integer;
mod operator;
mod real;
mod string;

pub use expression::parse_expression;
pub use operator::{FilterOperator, scan_operator};

use crate::column::{ColumnKind, GameColumn};
use crate::game::BoardGame;

/// A pure test over a game, closed over one parsed filter clause.
pub type GamePredicate = Box<dyn Fn(&BoardGame) -> bool>;

/// One parsed clause of a filter expression: column, operator, raw
/// value text. Ephemeral — built per filter call, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub column: GameColumn,
    pub operator: FilterOperator,
    pub value: String,
}

impl FilterClause {
    /// Create a new filter clause
    pub fn new(column: GameColumn, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            column,
            operator,
            value: value.into(),
        }
    }

    /// Build the predicate for this clause, dispatching on the
    /// column's kind.
    ///
    /// Building always succeeds. A clause with no defined behavior —
    /// an unparsable numeric value, or an operator the column's kind
    /// does not support — degrades to a predicate that accepts every
    /// game rather than an error, so one bad clause never blanks or
    /// aborts a filter.
    pub fn into_predicate(self) -> GamePredicate {
        match self.column.kind() {
            ColumnKind::Text => string::build(self.column, self.operator, self.value),
            ColumnKind::Integer => integer::build(self.column, self.operator, self.value),
            ColumnKind::Real => real::build(self.column, self.operator, self.value),
        }
    }
}

/// The degradation target for clauses with no defined behavior.
fn match_all() -> GamePredicate {
    Box::new(|_| true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> BoardGame {
        BoardGame::new("Chess", 1, 2, 2, 10, 60, 3.7, 8.5, 1475)
    }

    #[test]
    fn test_text_clause_dispatches_to_string_strategy() {
        let predicate =
            FilterClause::new(GameColumn::Name, FilterOperator::Equal, "chess").into_predicate();
        assert!(predicate(&chess()));
    }

    #[test]
    fn test_integer_clause_dispatches_to_integer_strategy() {
        let predicate =
            FilterClause::new(GameColumn::MinPlayers, FilterOperator::Equal, "2").into_predicate();
        assert!(predicate(&chess()));
    }

    #[test]
    fn test_real_clause_dispatches_to_real_strategy() {
        let predicate = FilterClause::new(GameColumn::Rating, FilterOperator::GreaterThan, "8.0")
            .into_predicate();
        assert!(predicate(&chess()));
    }

    #[test]
    fn test_unparsable_numeric_value_matches_everything() {
        let predicate = FilterClause::new(GameColumn::MinPlayers, FilterOperator::Equal, "abc")
            .into_predicate();
        assert!(predicate(&chess()));
    }
}
