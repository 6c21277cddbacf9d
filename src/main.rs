use clap::Parser;

use quizdrill::cli::Cli;
use quizdrill::history;
use quizdrill::parser;
use quizdrill::state::AppState;
use quizdrill::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let deck_path = std::path::PathBuf::from(&cli.deck);
    let deck_hash = history::compute_file_hash(&deck_path)?;

    let content = std::fs::read_to_string(&deck_path)
        .map_err(|e| format!("Cannot read deck file: {}", e))?;

    let deck_filename = deck_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let deck = parser::parse_deck(&content, &deck_filename, &deck_hash)?;

    let history_path = history::history_path_for(&deck_path)?;

    if cli.clear {
        history::clear_history(&history_path)?;
        eprintln!("History cleared.");
    }

    if cli.history {
        let attempts = history::load_attempts(&history_path)?;
        history::print_history(&deck, &attempts);
        return Ok(());
    }

    if let Some(ref export_path) = cli.export {
        history::export_last(&history_path, export_path)?;
        eprintln!("Attempt exported to {}", export_path);
        return Ok(());
    }

    let mut state = AppState::new(deck)?;
    state.history_path = Some(history_path);

    tui::run_tui(state)?;

    Ok(())
}
