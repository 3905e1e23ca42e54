//! Game ordering for sorted planner output

use std::cmp::Ordering;

use crate::column::{ColumnKind, GameColumn};
use crate::game::BoardGame;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Compare two games by a column for sorting.
///
/// Text columns compare case-insensitively, integer columns
/// numerically, real columns via `partial_cmp` with NaN sorted to the
/// end so the order stays total. A missing value (kind mismatch)
/// sorts after present ones. Descending reverses the comparison
/// result only; callers sort with the standard library's stable
/// `sort_by`, so equal keys keep their input order.
pub fn compare_games(
    a: &BoardGame,
    b: &BoardGame,
    column: GameColumn,
    direction: SortDirection,
) -> Ordering {
    let ordering = match column.kind() {
        ColumnKind::Text => {
            let a_text = column.text_value(a).unwrap_or(&a.name).to_lowercase();
            let b_text = column.text_value(b).unwrap_or(&b.name).to_lowercase();
            a_text.cmp(&b_text)
        }
        // Option<i64> ordering puts None (missing) first; flip it so
        // missing sorts to the end like the other kinds.
        ColumnKind::Integer => match (column.integer_value(a), column.integer_value(b)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a_value), Some(b_value)) => a_value.cmp(&b_value),
        },
        ColumnKind::Real => compare_reals(column.real_value(a), column.real_value(b)),
    };

    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn compare_reals(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            if a.is_nan() && b.is_nan() {
                Ordering::Equal
            } else if a.is_nan() {
                Ordering::Greater
            } else if b.is_nan() {
                Ordering::Less
            } else {
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
        }
    }
}
