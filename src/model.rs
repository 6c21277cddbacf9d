use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frontmatter {
    pub title: Option<String>,
    #[serde(default)]
    pub mode: DeckMode,
    #[serde(default)]
    pub pass_mark: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckMode {
    #[default]
    Quiz,
    Check,
}

#[derive(Debug, Clone)]
pub struct Deck {
    pub frontmatter: Frontmatter,
    pub title: String,
    pub intro: Vec<String>,
    pub questions: Vec<Question>,
    pub deck_file: String,
    pub deck_hash: String,
}

impl Deck {
    /// Pass/fail for a finished score, or None when the deck sets no
    /// pass mark.
    pub fn passes(&self, score: usize, total: usize) -> Option<bool> {
        self.frontmatter
            .pass_mark
            .map(|mark| total > 0 && score * 100 >= mark as usize * total)
    }
}

/// A single multiple-choice question. Construct via [`Question::new`],
/// which enforces the option-count and correct-index invariants.
#[derive(Debug, Clone)]
pub struct Question {
    pub number: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: Option<String>,
}

impl Question {
    pub fn new(
        number: u32,
        prompt: String,
        options: Vec<String>,
        correct: usize,
        explanation: Option<String>,
    ) -> Result<Self, String> {
        if options.len() < 2 {
            return Err(format!(
                "Question {} has {} option(s); at least 2 are required",
                number,
                options.len()
            ));
        }
        if correct >= options.len() {
            return Err(format!(
                "Question {} marks option {} correct but only has {} options",
                number,
                correct,
                options.len()
            ));
        }
        Ok(Self {
            number,
            prompt,
            options,
            correct,
            explanation,
        })
    }

    pub fn option_label(idx: usize) -> char {
        (b'a' + (idx as u8 % 26)) as char
    }
}
