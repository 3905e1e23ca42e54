//! Operator registry: textual comparison tokens and clause scanning

use std::fmt;

/// Comparison operators usable in filter clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Equal,
    NotEqual,
    Contains,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
}

/// Registered operator tokens. Multi-character tokens are listed
/// before the single-character ones that prefix them; the scanner's
/// longest-match tie-break relies on position, not table order, but
/// the ordering keeps the table readable.
const OPERATOR_TOKENS: [(&str, FilterOperator); 7] = [
    ("==", FilterOperator::Equal),
    ("!=", FilterOperator::NotEqual),
    ("~=", FilterOperator::Contains),
    (">=", FilterOperator::GreaterOrEqual),
    ("<=", FilterOperator::LessOrEqual),
    (">", FilterOperator::GreaterThan),
    ("<", FilterOperator::LessThan),
];

/// Scan clause text for the first occurring operator token. Ties at
/// the same position go to the longest token, so `>=` is never read
/// as `>` followed by `=`. Returns `None` when no token appears,
/// which callers treat as "drop this clause silently".
pub fn scan_operator(clause: &str) -> Option<(FilterOperator, &'static str)> {
    let mut best: Option<(usize, &'static str, FilterOperator)> = None;

    for (token, operator) in OPERATOR_TOKENS {
        let Some(position) = clause.find(token) else {
            continue;
        };
        let better = match best {
            None => true,
            Some((best_position, best_token, _)) => {
                position < best_position
                    || (position == best_position && token.len() > best_token.len())
            }
        };
        if better {
            best = Some((position, token, operator));
        }
    }

    best.map(|(_, token, operator)| (operator, token))
}

impl FilterOperator {
    /// The primary token for this operator.
    pub fn token(&self) -> &'static str {
        match self {
            FilterOperator::Equal => "==",
            FilterOperator::NotEqual => "!=",
            FilterOperator::Contains => "~=",
            FilterOperator::GreaterThan => ">",
            FilterOperator::LessThan => "<",
            FilterOperator::GreaterOrEqual => ">=",
            FilterOperator::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_finds_equal() {
        assert_eq!(
            scan_operator("name == Chess"),
            Some((FilterOperator::Equal, "=="))
        );
    }

    #[test]
    fn test_scan_prefers_longer_token_at_same_position() {
        assert_eq!(
            scan_operator("rating >= 7.5"),
            Some((FilterOperator::GreaterOrEqual, ">="))
        );
        assert_eq!(
            scan_operator("rating <= 7.5"),
            Some((FilterOperator::LessOrEqual, "<="))
        );
    }

    #[test]
    fn test_scan_single_character_tokens() {
        assert_eq!(
            scan_operator("minPlayers > 2"),
            Some((FilterOperator::GreaterThan, ">"))
        );
        assert_eq!(
            scan_operator("maxTime < 90"),
            Some((FilterOperator::LessThan, "<"))
        );
    }

    #[test]
    fn test_scan_contains_token() {
        assert_eq!(
            scan_operator("name ~= Cata"),
            Some((FilterOperator::Contains, "~="))
        );
    }

    #[test]
    fn test_scan_picks_first_occurrence() {
        // "<" occurs before ">=", so it wins even though ">=" is longer
        assert_eq!(
            scan_operator("a < b >= c"),
            Some((FilterOperator::LessThan, "<"))
        );
    }

    #[test]
    fn test_scan_no_operator() {
        assert_eq!(scan_operator("just some text"), None);
        assert_eq!(scan_operator(""), None);
    }

    #[test]
    fn test_scan_without_spaces() {
        assert_eq!(
            scan_operator("minPlayers>=2"),
            Some((FilterOperator::GreaterOrEqual, ">="))
        );
    }
}
