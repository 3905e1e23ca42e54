//! Progressive filtering over the game catalog

use std::collections::HashSet;

use crate::column::GameColumn;
use crate::filter::parse_expression;
use crate::game::BoardGame;
use crate::order::{SortDirection, compare_games};

/// Owns the full catalog and the current filtered subset.
///
/// Each filter call narrows the working subset from the *previous*
/// result, not from the full catalog; [`Planner::reset`] restores the
/// full catalog. Each planner instance owns its own catalog/subset
/// pair, so independent sessions never share state.
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: HashSet<BoardGame>,
    working: HashSet<BoardGame>,
}

impl Planner {
    /// Create a planner over a catalog snapshot. Duplicate records
    /// collapse by value equality.
    pub fn new(games: impl IntoIterator<Item = BoardGame>) -> Self {
        let catalog: HashSet<BoardGame> = games.into_iter().collect();
        let working = catalog.clone();
        Self { catalog, working }
    }

    /// Filter with the default ordering: name, ascending.
    pub fn filter(&mut self, expression: &str) -> Vec<BoardGame> {
        self.filter_sorted(expression, GameColumn::Name, SortDirection::Ascending)
    }

    /// Apply a filter expression to the working subset and return the
    /// result sorted by the given column and direction.
    ///
    /// An empty expression skips clause parsing and just reorders the
    /// current subset. Otherwise every valid clause narrows the
    /// subset in turn (logical AND), and the narrowed subset replaces
    /// the previous one. The returned, sorted sequence is the
    /// candidate list for any subsequent index-based selection.
    pub fn filter_sorted(
        &mut self,
        expression: &str,
        sort_on: GameColumn,
        direction: SortDirection,
    ) -> Vec<BoardGame> {
        let expression = expression.trim();
        if !expression.is_empty() {
            let predicates = parse_expression(expression);
            let mut working = std::mem::take(&mut self.working);
            for predicate in predicates {
                working = working.into_iter().filter(|game| predicate(game)).collect();
            }
            self.working = working;
        }

        let mut games: Vec<BoardGame> = self.working.iter().cloned().collect();
        games.sort_by(|a, b| compare_games(a, b, sort_on, direction));
        games
    }

    /// Restore the working subset to the full catalog, discarding all
    /// narrowing.
    pub fn reset(&mut self) {
        self.working = self.catalog.clone();
    }

    /// Number of games in the full catalog.
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }
}
