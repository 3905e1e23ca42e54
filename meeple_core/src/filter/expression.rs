//! Comma-separated filter expression parsing

use super::{FilterClause, GamePredicate, scan_operator};
use crate::column::GameColumn;

/// Parse a filter expression into predicates, one per valid clause.
///
/// The expression splits on commas (literal commas inside values are
/// not escapable — a documented limitation). Each clause that fails
/// any parsing stage — no operator token, malformed split, unknown
/// column — is dropped on its own; the remaining clauses still apply.
/// An empty or all-whitespace expression yields no predicates,
/// meaning "match everything".
pub fn parse_expression(expression: &str) -> Vec<GamePredicate> {
    expression.split(',').filter_map(parse_clause).collect()
}

/// Parse one clause into a predicate, or `None` to drop it.
fn parse_clause(clause: &str) -> Option<GamePredicate> {
    let clause = clause.trim();
    if clause.is_empty() {
        return None;
    }

    let Some((operator, token)) = scan_operator(clause) else {
        log::debug!("No operator in clause '{}', dropping it", clause);
        return None;
    };

    // The token must split the clause into exactly two non-empty parts.
    let parts: Vec<&str> = clause.split(token).collect();
    let [left, right] = parts.as_slice() else {
        log::debug!("Clause '{}' does not split cleanly on '{}'", clause, token);
        return None;
    };
    let column_text = left.trim();
    let value_text = right.trim();
    if column_text.is_empty() || value_text.is_empty() {
        log::debug!("Clause '{}' has an empty side, dropping it", clause);
        return None;
    }

    let column = match GameColumn::resolve(column_text) {
        Ok(column) => column,
        Err(error) => {
            log::debug!("Dropping clause '{}': {}", clause, error);
            return None;
        }
    };

    Some(FilterClause::new(column, operator, value_text).into_predicate())
}
