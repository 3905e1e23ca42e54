//! Core engine for Meeple: progressive filtering, sorting and list
//! building over a fixed catalog of board games.
//!
//! The crate is split into small, composable pieces: the [`column`]
//! registry maps attribute names to typed accessors, the [`filter`]
//! module turns clause text into predicates, [`order`] builds total
//! orderings for display, [`planner`] owns the catalog and the current
//! filtered subset, and [`selection`] resolves user tokens (index,
//! range, "all" or name) against a sorted candidate list for the
//! [`list`] target collection.

pub mod catalog;
pub mod column;
pub mod filter;
pub mod game;
pub mod list;
pub mod order;
pub mod planner;
pub mod selection;

pub use catalog::{CatalogError, load_catalog};
pub use column::{ColumnError, ColumnKind, GameColumn};
pub use filter::{FilterClause, FilterOperator, GamePredicate, parse_expression, scan_operator};
pub use game::BoardGame;
pub use list::GameList;
pub use order::{SortDirection, compare_games};
pub use planner::Planner;
pub use selection::{SELECT_ALL, SelectionError, resolve_selection};
