use std::path::PathBuf;

use crate::model::{Deck, DeckMode, Question};
use crate::progress::Progress;
use crate::session::{InlineCheck, QuizSession};

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Intro,
    Working,
    Review,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    ConfirmQuit,
    ConfirmRestart,
    Help,
}

/// Which flavor of runner the deck's mode selected.
#[derive(Debug, Clone)]
pub enum Runner {
    Quiz(QuizSession),
    Check(InlineCheck),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub deck: Deck,
    pub runner: Runner,
    pub choice_cursor: usize,
    pub review_scroll: usize,
    pub dialog_stack: Vec<Dialog>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub history_path: Option<PathBuf>,
    pub history_warning: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(deck: Deck) -> Result<Self, String> {
        let runner = match deck.frontmatter.mode {
            DeckMode::Quiz => Runner::Quiz(QuizSession::new(deck.questions.clone())?),
            DeckMode::Check => {
                // Parser guarantees exactly one question for check decks.
                let question = deck
                    .questions
                    .first()
                    .cloned()
                    .ok_or_else(|| "Check deck has no question".to_string())?;
                Runner::Check(InlineCheck::new(question))
            }
        };

        Ok(Self {
            screen: Screen::Intro,
            deck,
            runner,
            choice_cursor: 0,
            review_scroll: 0,
            dialog_stack: Vec::new(),
            started_at: None,
            finished_at: None,
            history_path: None,
            history_warning: None,
            should_quit: false,
        })
    }

    pub fn current_question(&self) -> &Question {
        match &self.runner {
            Runner::Quiz(session) => session.current_question(),
            Runner::Check(check) => check.question(),
        }
    }

    pub fn progress(&self) -> Progress {
        match &self.runner {
            Runner::Quiz(session) => Progress::new(session.current_index(), session.total()),
            Runner::Check(_) => Progress::new(0, 1),
        }
    }

    pub fn answered_count(&self) -> usize {
        match &self.runner {
            Runner::Quiz(session) => session.answered_count(),
            Runner::Check(check) => usize::from(check.is_answered()),
        }
    }

    pub fn cursor_up(&mut self) {
        let n = self.current_question().options.len();
        self.choice_cursor = (self.choice_cursor + n - 1) % n;
    }

    pub fn cursor_down(&mut self) {
        let n = self.current_question().options.len();
        self.choice_cursor = (self.choice_cursor + 1) % n;
    }

    /// Record the option under the cursor as the answer.
    pub fn select_at_cursor(&mut self) {
        let idx = self.choice_cursor;
        match &mut self.runner {
            Runner::Quiz(session) => session.select_answer(idx),
            Runner::Check(check) => check.answer(idx),
        }
    }

    /// Place the cursor on the saved selection when revisiting a question.
    pub fn sync_cursor_to_selection(&mut self) {
        self.choice_cursor = match &self.runner {
            Runner::Quiz(session) => session.current_selection().unwrap_or(0),
            Runner::Check(check) => check.answered().unwrap_or(0),
        };
    }

    pub fn restart(&mut self) {
        if let Runner::Quiz(session) = &mut self.runner {
            session.restart();
        }
        self.choice_cursor = 0;
        self.review_scroll = 0;
        self.screen = Screen::Working;
        self.started_at = Some(chrono::Utc::now().to_rfc3339());
        self.finished_at = None;
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}
