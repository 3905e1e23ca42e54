//! Styled terminal output helpers

use console::style;
use meeple_core::BoardGame;

pub fn header(text: &str) {
    println!("{}", style(text).cyan().bold());
}

pub fn success(text: &str) {
    println!("{} {}", style("✓").green(), text);
}

pub fn error(text: &str) {
    eprintln!("{} {}", style("✗").red(), text);
}

pub fn info(text: &str) {
    println!("{}", style(text).dim());
}

/// Print a numbered view of games; the numbers are the 1-based
/// indexes selection tokens refer to.
pub fn print_view(games: &[BoardGame]) {
    if games.is_empty() {
        info("(no games match)");
        return;
    }
    for (position, game) in games.iter().enumerate() {
        println!(
            "{:>3}. {}  {}",
            style(position + 1).bold(),
            game.name,
            style(format!(
                "players {}-{}, {}-{} min, rating {:.1}, difficulty {:.1}, year {}",
                game.min_players,
                game.max_players,
                game.min_play_time,
                game.max_play_time,
                game.rating,
                game.difficulty,
                game.year_published
            ))
            .dim()
        );
    }
}

/// Print the game list contents, numbered in name order.
pub fn print_names(names: &[String]) {
    if names.is_empty() {
        info("(the game list is empty)");
        return;
    }
    for (position, name) in names.iter().enumerate() {
        println!("{:>3}. {}", style(position + 1).bold(), name);
    }
}
