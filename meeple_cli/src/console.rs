//! Interactive console session over one planner and one game list

use std::path::PathBuf;

use inquire::{InquireError, Text};
use meeple_core::{
    BoardGame, GameColumn, GameList, Planner, SortDirection, load_catalog,
};

use crate::cli::MeepleCli;
use crate::errors::CliError;
use crate::ui;

/// One parsed console command.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    List,
    Filter(String),
    Sort {
        column: GameColumn,
        direction: SortDirection,
    },
    Reset,
    Add(String),
    Remove(String),
    Show,
    Clear,
    Save(Option<PathBuf>),
    Help,
    Exit,
}

/// Parse one input line into a command. The command word is
/// case-insensitive; everything after it is the argument.
fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "list" => Ok(Command::List),
        "filter" => Ok(Command::Filter(rest.to_string())),
        "sort" => parse_sort(rest),
        "reset" => Ok(Command::Reset),
        "add" => Ok(Command::Add(rest.to_string())),
        "remove" => Ok(Command::Remove(rest.to_string())),
        "show" => Ok(Command::Show),
        "clear" => Ok(Command::Clear),
        "save" => Ok(Command::Save(if rest.is_empty() {
            None
        } else {
            Some(PathBuf::from(rest))
        })),
        "help" | "?" => Ok(Command::Help),
        "exit" | "quit" => Ok(Command::Exit),
        "" => Err("Type a command, or 'help' for the list".to_string()),
        other => Err(format!("Unknown command '{}'; try 'help'", other)),
    }
}

fn parse_sort(rest: &str) -> Result<Command, String> {
    let mut parts = rest.split_whitespace();
    let column_token = parts
        .next()
        .ok_or_else(|| "Usage: sort <column> [asc|desc]".to_string())?;
    let column = GameColumn::resolve(column_token).map_err(|error| error.to_string())?;
    let direction = match parts.next().map(str::to_lowercase).as_deref() {
        None | Some("asc") => SortDirection::Ascending,
        Some("desc") => SortDirection::Descending,
        Some(other) => return Err(format!("Unknown direction '{}'; use asc or desc", other)),
    };
    Ok(Command::Sort { column, direction })
}

/// Session state: the planner, the list being built, the current sort
/// order, and the most recently displayed view (the candidate list
/// for add selections).
struct Session {
    planner: Planner,
    list: GameList,
    sort_on: GameColumn,
    direction: SortDirection,
    view: Vec<BoardGame>,
    output: PathBuf,
}

impl Session {
    fn new(catalog: Vec<BoardGame>, output: PathBuf) -> Self {
        let mut planner = Planner::new(catalog);
        let view = planner.filter("");
        Self {
            planner,
            list: GameList::new(),
            sort_on: GameColumn::Name,
            direction: SortDirection::Ascending,
            view,
            output,
        }
    }

    /// Run one command. Returns false when the session should end.
    /// Command-level failures are printed, never fatal.
    fn dispatch(&mut self, command: Command) -> bool {
        match command {
            Command::List => {
                self.refresh_view("");
                ui::print_view(&self.view);
            }
            Command::Filter(expression) => {
                self.refresh_view(&expression);
                ui::success(&format!("{} games match", self.view.len()));
                ui::print_view(&self.view);
            }
            Command::Sort { column, direction } => {
                self.sort_on = column;
                self.direction = direction;
                self.refresh_view("");
                ui::print_view(&self.view);
            }
            Command::Reset => {
                self.planner.reset();
                self.refresh_view("");
                ui::success("Filters cleared");
            }
            Command::Add(token) => match self.list.add(&token, &self.view) {
                Ok(()) => ui::success(&format!("Game list has {} games", self.list.count())),
                Err(error) => ui::error(&error.to_string()),
            },
            Command::Remove(token) => match self.list.remove(&token) {
                Ok(()) => ui::success(&format!("Game list has {} games", self.list.count())),
                Err(error) => ui::error(&error.to_string()),
            },
            Command::Show => ui::print_names(&self.list.game_names()),
            Command::Clear => {
                self.list.clear();
                ui::success("Game list cleared");
            }
            Command::Save(path) => {
                let path = path.unwrap_or_else(|| self.output.clone());
                match self.list.save(&path) {
                    Ok(()) => ui::success(&format!(
                        "Saved {} games to '{}'",
                        self.list.count(),
                        path.display()
                    )),
                    Err(error) => ui::error(&format!("Cannot save game list: {}", error)),
                }
            }
            Command::Help => print_help(),
            Command::Exit => return false,
        }
        true
    }

    fn refresh_view(&mut self, expression: &str) {
        self.view = self
            .planner
            .filter_sorted(expression, self.sort_on, self.direction);
    }
}

fn print_help() {
    ui::header("Commands");
    ui::info("  list                   show the current filtered view");
    ui::info("  filter <expr>          narrow the view, e.g. filter minPlayers >= 2, rating > 7");
    ui::info("  sort <column> [dir]    order the view; columns: name rank rating difficulty");
    ui::info("                         minPlayers maxPlayers minTime maxTime year; dir: asc desc");
    ui::info("  reset                  drop all filters");
    ui::info("  add <selection>        add from the view: index, a-b range, 'all', or a name");
    ui::info("  remove <selection>     remove from the game list, same selection forms");
    ui::info("  show                   show the game list");
    ui::info("  clear                  empty the game list");
    ui::info("  save [file]            write the list, one name per line");
    ui::info("  exit                   leave");
}

/// Load the catalog and run the prompt loop until exit.
pub fn run(args: &MeepleCli) -> Result<(), CliError> {
    let catalog = load_catalog(&args.catalog)?;
    ui::header(&format!("Meeple — {} games in the catalog", catalog.len()));
    ui::info("Type 'help' for commands");

    let mut session = Session::new(catalog, args.output.clone());

    loop {
        let line = match Text::new(">").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(error) => return Err(CliError::Prompt(error)),
        };

        match parse_command(&line) {
            Ok(command) => {
                log::debug!("Running command {:?}", command);
                if !session.dispatch(command) {
                    return Ok(());
                }
            }
            Err(message) => ui::error(&message),
        }
    }
}
