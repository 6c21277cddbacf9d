pub mod cli;
pub mod history;
pub mod model;
pub mod parser;
pub mod progress;
pub mod session;
pub mod state;
pub mod tui;
pub mod ui;
