//! Selection token resolution shared by add and remove

use std::fmt;

use crate::game::BoardGame;

/// Token selecting every candidate.
pub const SELECT_ALL: &str = "all";

/// Errors from selection resolution. Unlike malformed filter clauses,
/// these are surfaced to the caller for display, never swallowed.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// The token was empty or all whitespace
    EmptyInput,
    /// A 1-based index fell outside the candidate list
    IndexOutOfRange { index: usize, count: usize },
    /// A range was inverted or ran past the candidate list
    InvalidRange {
        start: usize,
        end: usize,
        count: usize,
    },
    /// No candidate name matched the token
    NotFound(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::EmptyInput => write!(f, "Selection cannot be empty"),
            SelectionError::IndexOutOfRange { index, count } => {
                write!(f, "Index {} is out of range 1..={}", index, count)
            }
            SelectionError::InvalidRange { start, end, count } => {
                write!(
                    f,
                    "Range {}-{} is invalid for {} candidates",
                    start, end, count
                )
            }
            SelectionError::NotFound(name) => write!(f, "No game named '{}'", name),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Resolve a user token against an ordered candidate list.
///
/// The candidates are taken as already sorted — callers sort by name
/// before resolving so index numbering stays stable. The token is
/// trimmed and matched case-insensitively as: the literal `all`, a
/// 1-based index, an inclusive 1-based range `a-b`, or an exact name
/// (first match wins).
pub fn resolve_selection<'a>(
    token: &str,
    candidates: &'a [BoardGame],
) -> Result<Vec<&'a BoardGame>, SelectionError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(SelectionError::EmptyInput);
    }

    if token.eq_ignore_ascii_case(SELECT_ALL) {
        return Ok(candidates.iter().collect());
    }

    if let Some(index) = parse_index(token) {
        if index < 1 || index > candidates.len() {
            return Err(SelectionError::IndexOutOfRange {
                index,
                count: candidates.len(),
            });
        }
        return Ok(vec![&candidates[index - 1]]);
    }

    if let Some((start, end)) = parse_range(token) {
        if start < 1 || start > end || end > candidates.len() {
            return Err(SelectionError::InvalidRange {
                start,
                end,
                count: candidates.len(),
            });
        }
        return Ok(candidates[start - 1..end].iter().collect());
    }

    candidates
        .iter()
        .find(|game| game.name.eq_ignore_ascii_case(token))
        .map(|game| vec![game])
        .ok_or_else(|| SelectionError::NotFound(token.to_string()))
}

/// Parse an all-digit token as a 1-based index. Tokens too large for
/// `usize` still follow the index path (saturated, so they fail as
/// out of range) rather than falling through to a name lookup.
fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(token.parse::<usize>().unwrap_or(usize::MAX))
}

fn parse_range(token: &str) -> Option<(usize, usize)> {
    let (left, right) = token.split_once('-')?;
    Some((parse_index(left)?, parse_index(right)?))
}
