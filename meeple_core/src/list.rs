//! The user-curated game list built through selections

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::column::GameColumn;
use crate::game::BoardGame;
use crate::order::{SortDirection, compare_games};
use crate::selection::{SelectionError, resolve_selection};

/// The target collection a user builds by selecting games from the
/// planner's filtered view. Unordered internally and unique by value
/// equality; order is computed on every read.
#[derive(Debug, Clone, Default)]
pub struct GameList {
    games: HashSet<BoardGame>,
}

impl GameList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of games in the list.
    pub fn count(&self) -> usize {
        self.games.len()
    }

    /// Remove every game from the list.
    pub fn clear(&mut self) {
        self.games.clear();
    }

    /// Game names sorted ascending, ignoring case.
    pub fn game_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.games.iter().map(|game| game.name.clone()).collect();
        names.sort_by_key(|name| name.to_lowercase());
        names
    }

    /// Add the games a selection token picks from the candidates.
    ///
    /// The candidates are name-sorted here before resolution so index
    /// numbering is stable regardless of the caller's display order.
    pub fn add(&mut self, token: &str, candidates: &[BoardGame]) -> Result<(), SelectionError> {
        let sorted = name_sorted(candidates);
        let selected: Vec<BoardGame> = resolve_selection(token, &sorted)?
            .into_iter()
            .cloned()
            .collect();
        self.games.extend(selected);
        Ok(())
    }

    /// Remove the games a selection token picks from the list's own
    /// contents (name-sorted for index stability). `all` clears the
    /// list.
    pub fn remove(&mut self, token: &str) -> Result<(), SelectionError> {
        let contents: Vec<BoardGame> = self.games.iter().cloned().collect();
        let sorted = name_sorted(&contents);
        let selected: Vec<BoardGame> = resolve_selection(token, &sorted)?
            .into_iter()
            .cloned()
            .collect();
        for game in &selected {
            self.games.remove(game);
        }
        Ok(())
    }

    /// Write the list as one name per line, name-ascending.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for name in self.game_names() {
            writeln!(writer, "{}", name)?;
        }
        writer.flush()
    }
}

fn name_sorted(games: &[BoardGame]) -> Vec<BoardGame> {
    let mut sorted = games.to_vec();
    sorted.sort_by(|a, b| compare_games(a, b, GameColumn::Name, SortDirection::Ascending));
    sorted
}
