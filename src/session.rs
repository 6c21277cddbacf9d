use crate::model::Question;

/// One learner attempt at a deck. Created fresh per attempt; `restart`
/// rebuilds it in place with the same questions and nothing else carried
/// over. All transitions are synchronous and run to completion.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    selected: Vec<Option<usize>>,
    completed: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Result<Self, String> {
        if questions.is_empty() {
            return Err("Cannot start a session with no questions".to_string());
        }
        let selected = vec![None; questions.len()];
        Ok(Self {
            questions,
            current: 0,
            selected,
            completed: false,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn selection(&self, position: usize) -> Option<usize> {
        self.selected.get(position).copied().flatten()
    }

    pub fn current_selection(&self) -> Option<usize> {
        self.selected[self.current]
    }

    pub fn is_current_answered(&self) -> bool {
        self.selected[self.current].is_some()
    }

    pub fn answered_count(&self) -> usize {
        self.selected.iter().filter(|s| s.is_some()).count()
    }

    /// Record `option_idx` for the current question, overwriting any prior
    /// selection for that question only. Out-of-range indices are ignored;
    /// the UI only offers valid choices. No-op once the session completed.
    pub fn select_answer(&mut self, option_idx: usize) {
        if self.completed {
            return;
        }
        if option_idx < self.current_question().options.len() {
            self.selected[self.current] = Some(option_idx);
        }
    }

    /// Move forward one question, or complete the session when already on
    /// the last one. Gated on the current question being answered. Returns
    /// false when the press was ignored.
    pub fn advance(&mut self) -> bool {
        if self.completed || !self.is_current_answered() {
            return false;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.completed = true;
        }
        true
    }

    /// Move back one question. No-op at position 0 or once completed.
    pub fn retreat(&mut self) {
        if !self.completed && self.current > 0 {
            self.current -= 1;
        }
    }

    /// Count of correctly answered questions. None until the session
    /// completed.
    pub fn score(&self) -> Option<usize> {
        if !self.completed {
            return None;
        }
        let count = self
            .questions
            .iter()
            .zip(self.selected.iter())
            .filter(|(q, sel)| **sel == Some(q.correct))
            .count();
        Some(count)
    }

    /// Fresh attempt over the same questions: position 0, every selection
    /// cleared, completion reset.
    pub fn restart(&mut self) {
        self.current = 0;
        self.selected = vec![None; self.questions.len()];
        self.completed = false;
    }

    /// Per-question breakdown of a finished attempt. Pure projection over
    /// the questions and selections; call after `completed()` is true.
    pub fn review(&self) -> Vec<ReviewEntry> {
        self.questions
            .iter()
            .zip(self.selected.iter())
            .map(|(q, sel)| ReviewEntry {
                number: q.number,
                prompt: q.prompt.clone(),
                chosen: sel.map(|i| q.options[i].clone()),
                correct_option: q.options[q.correct].clone(),
                correct: *sel == Some(q.correct),
                explanation: q.explanation.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct ReviewEntry {
    pub number: u32,
    pub prompt: String,
    /// Chosen option text, or None when the question went unanswered.
    pub chosen: Option<String>,
    pub correct_option: String,
    pub correct: bool,
    pub explanation: Option<String>,
}

/// Single-question variant: one selection, recorded once, which reveals
/// the explanation. No navigation and no score.
#[derive(Debug, Clone)]
pub struct InlineCheck {
    question: Question,
    answered: Option<usize>,
}

impl InlineCheck {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            answered: None,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn is_answered(&self) -> bool {
        self.answered.is_some()
    }

    pub fn answered(&self) -> Option<usize> {
        self.answered
    }

    /// First valid selection wins; later presses are ignored.
    pub fn answer(&mut self, option_idx: usize) {
        if self.answered.is_none() && option_idx < self.question.options.len() {
            self.answered = Some(option_idx);
        }
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.answered.map(|idx| idx == self.question.correct)
    }

    /// Explanation text, visible only once answered.
    pub fn revealed_explanation(&self) -> Option<&str> {
        if self.answered.is_some() {
            self.question.explanation.as_deref()
        } else {
            None
        }
    }
}
