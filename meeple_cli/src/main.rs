mod cli;
mod console;
mod errors;
mod ui;

use clap::Parser;
use env_logger::Env;

fn main() {
    let args = cli::MeepleCli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    if let Err(error) = console::run(&args) {
        ui::error(&error.to_string());
        std::process::exit(1);
    }
}
