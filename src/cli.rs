use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "quizdrill", version, about = "Terminal runner for practice quiz decks")]
pub struct Cli {
    /// Path to a deck file (markdown with YAML frontmatter)
    pub deck: String,

    /// Print recorded attempts for this deck without entering the TUI
    #[arg(long)]
    pub history: bool,

    /// Delete recorded attempts for this deck
    #[arg(long)]
    pub clear: bool,

    /// Export the most recent attempt record to a file
    #[arg(long, value_name = "path")]
    pub export: Option<String>,
}
