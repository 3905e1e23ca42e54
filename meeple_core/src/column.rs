//! Column registry: named game attributes with typed accessors

use std::fmt;

use crate::game::BoardGame;

/// The columns a filter or sort can address. Every column has exactly
/// one [`ColumnKind`], which decides the predicate and comparator
/// strategy applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameColumn {
    Name,
    Rank,
    Rating,
    Difficulty,
    MinPlayers,
    MaxPlayers,
    MinTime,
    MaxTime,
    Year,
}

/// Semantic type of a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Real,
}

/// Errors from column resolution
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnError {
    /// The token matched no registered column name
    UnknownColumn(String),
}

impl fmt::Display for ColumnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnError::UnknownColumn(token) => {
                write!(f, "Unknown column: '{}'", token)
            }
        }
    }
}

impl std::error::Error for ColumnError {}

impl GameColumn {
    /// All registered columns, in display order.
    pub const ALL: [GameColumn; 9] = [
        GameColumn::Name,
        GameColumn::Rank,
        GameColumn::Rating,
        GameColumn::Difficulty,
        GameColumn::MinPlayers,
        GameColumn::MaxPlayers,
        GameColumn::MinTime,
        GameColumn::MaxTime,
        GameColumn::Year,
    ];

    /// Canonical name used in filter and sort expressions.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            GameColumn::Name => "name",
            GameColumn::Rank => "rank",
            GameColumn::Rating => "rating",
            GameColumn::Difficulty => "difficulty",
            GameColumn::MinPlayers => "minPlayers",
            GameColumn::MaxPlayers => "maxPlayers",
            GameColumn::MinTime => "minTime",
            GameColumn::MaxTime => "maxTime",
            GameColumn::Year => "year",
        }
    }

    /// The value kind this column carries.
    pub fn kind(&self) -> ColumnKind {
        match self {
            GameColumn::Name => ColumnKind::Text,
            GameColumn::Rating | GameColumn::Difficulty => ColumnKind::Real,
            GameColumn::Rank
            | GameColumn::MinPlayers
            | GameColumn::MaxPlayers
            | GameColumn::MinTime
            | GameColumn::MaxTime
            | GameColumn::Year => ColumnKind::Integer,
        }
    }

    /// Resolve a user token to a column: trimmed, case-insensitive
    /// match against the canonical name. No partial matching.
    pub fn resolve(token: &str) -> Result<GameColumn, ColumnError> {
        let trimmed = token.trim();
        Self::ALL
            .iter()
            .find(|column| column.canonical_name().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| ColumnError::UnknownColumn(trimmed.to_string()))
    }

    /// The text value of this column, if it is a text column.
    pub fn text_value<'a>(&self, game: &'a BoardGame) -> Option<&'a str> {
        match self {
            GameColumn::Name => Some(&game.name),
            _ => None,
        }
    }

    /// The integer value of this column, if it is an integer column.
    pub fn integer_value(&self, game: &BoardGame) -> Option<i64> {
        match self {
            GameColumn::Rank => Some(game.rank),
            GameColumn::MinPlayers => Some(game.min_players),
            GameColumn::MaxPlayers => Some(game.max_players),
            GameColumn::MinTime => Some(game.min_play_time),
            GameColumn::MaxTime => Some(game.max_play_time),
            GameColumn::Year => Some(game.year_published),
            _ => None,
        }
    }

    /// The real value of this column, if it is a real column.
    pub fn real_value(&self, game: &BoardGame) -> Option<f64> {
        match self {
            GameColumn::Rating => Some(game.rating),
            GameColumn::Difficulty => Some(game.difficulty),
            _ => None,
        }
    }
}

impl fmt::Display for GameColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}
