//! The board game record the engine operates on

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single game from the catalog. Immutable once constructed; the
/// engine only reads fields through [`crate::GameColumn`] accessors.
///
/// Equality and hashing are by value over all fields, so two records
/// constructed with identical data collapse to one set member. Float
/// fields take part via their bit patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardGame {
    pub name: String,
    pub rank: i64,
    pub min_players: i64,
    pub max_players: i64,
    pub min_play_time: i64,
    pub max_play_time: i64,
    pub difficulty: f64,
    pub rating: f64,
    pub year_published: i64,
}

impl BoardGame {
    /// Create a new game record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        rank: i64,
        min_players: i64,
        max_players: i64,
        min_play_time: i64,
        max_play_time: i64,
        difficulty: f64,
        rating: f64,
        year_published: i64,
    ) -> Self {
        Self {
            name: name.into(),
            rank,
            min_players,
            max_players,
            min_play_time,
            max_play_time,
            difficulty,
            rating,
            year_published,
        }
    }
}

impl PartialEq for BoardGame {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.rank == other.rank
            && self.min_players == other.min_players
            && self.max_players == other.max_players
            && self.min_play_time == other.min_play_time
            && self.max_play_time == other.max_play_time
            && self.difficulty.to_bits() == other.difficulty.to_bits()
            && self.rating.to_bits() == other.rating.to_bits()
            && self.year_published == other.year_published
    }
}

impl Eq for BoardGame {}

impl Hash for BoardGame {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.rank.hash(state);
        self.min_players.hash(state);
        self.max_players.hash(state);
        self.min_play_time.hash(state);
        self.max_play_time.hash(state);
        self.difficulty.to_bits().hash(state);
        self.rating.to_bits().hash(state);
        self.year_published.hash(state);
    }
}
