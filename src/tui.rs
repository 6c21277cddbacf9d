use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::history::{self, AttemptRecord};
use crate::state::{AppState, Dialog, Runner, Screen};

pub fn run_tui(mut state: AppState) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let result = main_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();

    // Non-fatal problems (e.g. history write failed) surface once the
    // terminal is back to normal.
    if let Some(warning) = &state.history_warning {
        eprintln!("Warning: {}", warning);
    }

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            if let Event::Key(key) = event::read().map_err(|e| format!("Read error: {}", e))? {
                handle_key(key, state);
            }
        }
    }

    Ok(())
}

fn handle_key(key: KeyEvent, state: &mut AppState) {
    if state.has_dialog() {
        handle_dialog_key(key, state);
        return;
    }

    match state.screen {
        Screen::Intro => handle_intro_key(key, state),
        Screen::Working => handle_working_key(key, state),
        Screen::Review => handle_review_key(key, state),
    }
}

fn handle_intro_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter => {
            state.screen = Screen::Working;
            state.started_at = Some(chrono::Utc::now().to_rfc3339());
        }
        KeyCode::Char('q') => {
            state.should_quit = true;
        }
        _ => {}
    }
}

fn handle_working_key(key: KeyEvent, state: &mut AppState) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        match key.code {
            KeyCode::Char('q') => state.push_dialog(Dialog::ConfirmQuit),
            KeyCode::Char('r') => {
                if matches!(state.runner, Runner::Quiz(_)) {
                    state.push_dialog(Dialog::ConfirmRestart);
                }
            }
            _ => {}
        }
        return;
    }

    if key.code == KeyCode::Char('?') {
        state.push_dialog(Dialog::Help);
        return;
    }

    if matches!(state.runner, Runner::Quiz(_)) {
        handle_quiz_key(key, state);
    } else {
        handle_check_key(key, state);
    }
}

fn handle_quiz_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Up => state.cursor_up(),
        KeyCode::Down => state.cursor_down(),
        KeyCode::Char(c @ 'a'..='z') => {
            let idx = (c as u8 - b'a') as usize;
            if idx < state.current_question().options.len() {
                state.choice_cursor = idx;
                state.select_at_cursor();
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.select_at_cursor();
        }
        KeyCode::Right => {
            let completed = match &mut state.runner {
                Runner::Quiz(session) => session.advance() && session.completed(),
                Runner::Check(_) => false,
            };
            if completed {
                finish_attempt(state);
            } else {
                state.sync_cursor_to_selection();
            }
        }
        KeyCode::Left => {
            if let Runner::Quiz(session) = &mut state.runner {
                session.retreat();
            }
            state.sync_cursor_to_selection();
        }
        _ => {}
    }
}

fn handle_check_key(key: KeyEvent, state: &mut AppState) {
    let answered = match &state.runner {
        Runner::Check(check) => check.is_answered(),
        Runner::Quiz(_) => false,
    };

    if answered {
        // Explanation is on screen; any of these leaves.
        if matches!(key.code, KeyCode::Enter | KeyCode::Char('q') | KeyCode::Esc) {
            state.should_quit = true;
        }
        return;
    }

    match key.code {
        KeyCode::Up => state.cursor_up(),
        KeyCode::Down => state.cursor_down(),
        KeyCode::Char(c @ 'a'..='z') => {
            let idx = (c as u8 - b'a') as usize;
            if idx < state.current_question().options.len() {
                state.choice_cursor = idx;
                state.select_at_cursor();
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.select_at_cursor();
        }
        _ => {}
    }
}

fn handle_review_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
        }
        KeyCode::Char('r') => {
            state.push_dialog(Dialog::ConfirmRestart);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.review_scroll = state.review_scroll.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.review_scroll = state.review_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) {
    let Some(dialog) = state.top_dialog().cloned() else {
        return;
    };

    match dialog {
        Dialog::ConfirmQuit => match key.code {
            KeyCode::Enter => {
                state.should_quit = true;
            }
            KeyCode::Esc => {
                state.pop_dialog();
            }
            _ => {}
        },
        Dialog::ConfirmRestart => match key.code {
            KeyCode::Enter => {
                state.pop_dialog();
                state.restart();
            }
            KeyCode::Esc => {
                state.pop_dialog();
            }
            _ => {}
        },
        Dialog::Help => {
            state.pop_dialog();
        }
    }
}

/// The session just completed: stamp the finish time and record the
/// attempt. Recording is fire-and-forget; failure becomes a warning
/// printed after the TUI exits.
fn finish_attempt(state: &mut AppState) {
    let finished = chrono::Utc::now().to_rfc3339();
    state.finished_at = Some(finished.clone());
    state.screen = Screen::Review;
    state.review_scroll = 0;

    if let (Some(path), Runner::Quiz(session)) = (&state.history_path, &state.runner) {
        let started = state.started_at.clone().unwrap_or_else(|| finished.clone());
        let record = AttemptRecord::from_session(&state.deck, session, &started, &finished);
        if let Err(e) = history::record_attempt(path, &record) {
            state.history_warning = Some(e);
        }
    }
}
