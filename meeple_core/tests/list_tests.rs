//! End-to-end tests for building and saving a game list

use std::fs;

use assert_matches::assert_matches;
use meeple_core::{BoardGame, GameList, Planner, SelectionError};
use tempfile::TempDir;

fn catalog() -> Vec<BoardGame> {
    vec![
        BoardGame::new("Chess", 1, 2, 2, 10, 60, 3.7, 8.5, 1475),
        BoardGame::new("Monopoly", 700, 2, 6, 60, 180, 1.6, 5.5, 1935),
        BoardGame::new("Pandemic", 80, 2, 4, 45, 60, 2.4, 7.5, 2008),
        BoardGame::new("Azul", 50, 2, 4, 30, 45, 1.8, 7.8, 2017),
    ]
}

#[test]
fn test_add_from_filtered_view() {
    let mut planner = Planner::new(catalog());
    let mut list = GameList::new();

    // View: Azul, Chess, Pandemic (name order after the filter)
    let view = planner.filter("rating >= 7.5");
    list.add("2", &view).unwrap();

    assert_eq!(list.game_names(), vec!["Chess"]);
}

#[test]
fn test_add_range_then_remove_index() {
    let mut planner = Planner::new(catalog());
    let mut list = GameList::new();

    let view = planner.filter("");
    list.add("1-3", &view).unwrap();
    assert_eq!(list.game_names(), vec!["Azul", "Chess", "Monopoly"]);

    // Indexes for removal come from the list's own name order.
    list.remove("2").unwrap();
    assert_eq!(list.game_names(), vec!["Azul", "Monopoly"]);
}

#[test]
fn test_add_all_then_remove_all() {
    let mut planner = Planner::new(catalog());
    let mut list = GameList::new();

    let view = planner.filter("");
    list.add("all", &view).unwrap();
    assert_eq!(list.count(), 4);

    list.remove("all").unwrap();
    assert_eq!(list.count(), 0);
}

#[test]
fn test_selection_errors_leave_list_unchanged() {
    let mut planner = Planner::new(catalog());
    let mut list = GameList::new();
    let view = planner.filter("");

    assert_matches!(
        list.add("0", &view),
        Err(SelectionError::IndexOutOfRange { .. })
    );
    assert_matches!(
        list.add("2-99", &view),
        Err(SelectionError::InvalidRange { .. })
    );
    assert_matches!(list.add("Catan", &view), Err(SelectionError::NotFound(_)));
    assert_eq!(list.count(), 0);
}

#[test]
fn test_save_writes_one_name_per_line_sorted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("games_list.txt");

    let mut planner = Planner::new(catalog());
    let mut list = GameList::new();
    list.add("all", &planner.filter("maxPlayers <= 4")).unwrap();

    list.save(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "Azul\nChess\nPandemic\n");
}

#[test]
fn test_save_empty_list_writes_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("games_list.txt");

    GameList::new().save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
