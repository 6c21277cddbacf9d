use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::model::Deck;
use crate::progress::format_percent;
use crate::session::QuizSession;

/// One completed attempt, as recorded in the deck's history file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub deck: String,
    pub deck_hash: String,
    pub started_at: String,
    pub finished_at: String,
    pub duration: String,
    pub score: usize,
    pub total: usize,
    #[serde(default)]
    pub passed: Option<bool>,
    pub answers: Vec<AttemptAnswer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptAnswer {
    pub number: u32,
    pub chosen: Option<String>,
    pub correct: bool,
}

impl AttemptRecord {
    /// Snapshot a completed session. Scores an incomplete session as 0;
    /// callers only invoke this after completion.
    pub fn from_session(
        deck: &Deck,
        session: &QuizSession,
        started_at: &str,
        finished_at: &str,
    ) -> Self {
        let score = session.score().unwrap_or(0);
        let total = session.total();
        let passed = deck.passes(score, total);
        let answers = session
            .review()
            .into_iter()
            .map(|entry| AttemptAnswer {
                number: entry.number,
                chosen: entry.chosen,
                correct: entry.correct,
            })
            .collect();

        Self {
            deck: deck.deck_file.clone(),
            deck_hash: deck.deck_hash.clone(),
            started_at: started_at.to_string(),
            finished_at: finished_at.to_string(),
            duration: compute_duration(started_at, finished_at),
            score,
            total,
            passed,
            answers,
        }
    }
}

pub fn build_attempt_yaml(record: &AttemptRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!("deck: {:?}\n", record.deck));
    out.push_str(&format!("deck_hash: {:?}\n", record.deck_hash));
    out.push_str(&format!("started_at: {:?}\n", record.started_at));
    out.push_str(&format!("finished_at: {:?}\n", record.finished_at));
    out.push_str(&format!("duration: {:?}\n", record.duration));
    out.push_str(&format!("score: {}\n", record.score));
    out.push_str(&format!("total: {}\n", record.total));
    if let Some(passed) = record.passed {
        out.push_str(&format!("passed: {}\n", passed));
    }

    out.push_str("answers:\n");
    for a in &record.answers {
        out.push_str(&format!("  - number: {}\n", a.number));
        match &a.chosen {
            Some(text) => out.push_str(&format!("    chosen: {:?}\n", text)),
            None => out.push_str("    chosen: null\n"),
        }
        out.push_str(&format!("    correct: {}\n", a.correct));
    }

    out
}

/// History file for a deck, under the platform data dir. The file name
/// carries a short hash of the canonical path so identically named decks
/// in different directories do not share history.
pub fn history_path_for(deck_path: &Path) -> Result<PathBuf, String> {
    let dirs = directories::ProjectDirs::from("", "", "quizdrill")
        .ok_or_else(|| "Cannot determine data directory".to_string())?;

    let canonical = deck_path
        .canonicalize()
        .unwrap_or_else(|_| deck_path.to_path_buf());
    let path_hash = compute_str_hash(&canonical.to_string_lossy());
    let short = &path_hash[7..19]; // 12 hex chars past the "sha256:" prefix

    let stem = deck_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "deck".to_string());

    Ok(dirs
        .data_dir()
        .join("history")
        .join(format!("{}-{}.yaml", stem, short)))
}

/// Append an attempt to the history file. Attempts are stored as a
/// multi-document YAML stream, newest last.
pub fn record_attempt(history_path: &Path, record: &AttemptRecord) -> Result<(), String> {
    if let Some(parent) = history_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Cannot create history dir: {}", e))?;
    }

    let mut content = if history_path.exists() {
        fs::read_to_string(history_path)
            .map_err(|e| format!("Cannot read history: {}", e))?
    } else {
        String::new()
    };

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str("---\n");
    content.push_str(&build_attempt_yaml(record));

    atomic_write(history_path, &content)
}

pub fn load_attempts(history_path: &Path) -> Result<Vec<AttemptRecord>, String> {
    if !history_path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(history_path)
        .map_err(|e| format!("Cannot read history: {}", e))?;

    let mut attempts = Vec::new();
    for doc in serde_yaml::Deserializer::from_str(&content) {
        let record = AttemptRecord::deserialize(doc)
            .map_err(|e| format!("Corrupt history file: {} (use --clear to reset)", e))?;
        attempts.push(record);
    }
    Ok(attempts)
}

pub fn clear_history(history_path: &Path) -> Result<(), String> {
    if history_path.exists() {
        fs::remove_file(history_path).map_err(|e| format!("Cannot clear history: {}", e))?;
    }
    Ok(())
}

pub fn export_last(history_path: &Path, export_path: &str) -> Result<(), String> {
    let attempts = load_attempts(history_path)?;
    let last = attempts
        .last()
        .ok_or_else(|| "No recorded attempts to export".to_string())?;
    fs::write(export_path, build_attempt_yaml(last))
        .map_err(|e| format!("Cannot export: {}", e))
}

pub fn print_history(deck: &Deck, attempts: &[AttemptRecord]) {
    println!("Deck: {}", deck.title);
    println!("Questions: {}", deck.questions.len());
    if attempts.is_empty() {
        println!("No recorded attempts.");
        return;
    }
    println!("Attempts: {}", attempts.len());
    for a in attempts {
        let stale = if a.deck_hash != deck.deck_hash {
            "  (deck changed since)"
        } else {
            ""
        };
        let pass = match a.passed {
            Some(true) => "  pass",
            Some(false) => "  fail",
            None => "",
        };
        println!(
            "  {}  {}/{} ({}){}{}",
            a.finished_at,
            a.score,
            a.total,
            format_percent(a.score, a.total),
            pass,
            stale
        );
    }
}

fn atomic_write(path: &Path, content: &str) -> Result<(), String> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content).map_err(|e| format!("Cannot write {}: {}", tmp.display(), e))?;
    fs::rename(&tmp, path).map_err(|e| format!("Cannot rename: {}", e))?;
    Ok(())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn compute_file_hash(path: &Path) -> Result<String, String> {
    let content =
        fs::read(path).map_err(|e| format!("Cannot read file {}: {}", path.display(), e))?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    let result = hasher.finalize();
    Ok(format!("sha256:{}", hex_encode(&result)))
}

pub fn compute_str_hash(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let result = hasher.finalize();
    format!("sha256:{}", hex_encode(&result))
}

pub fn compute_duration(started: &str, finished: &str) -> String {
    if let (Ok(start), Ok(end)) = (
        chrono::DateTime::parse_from_rfc3339(started),
        chrono::DateTime::parse_from_rfc3339(finished),
    ) {
        let secs = (end - start).num_seconds().max(0);
        let h = secs / 3600;
        let m = (secs % 3600) / 60;
        let s = secs % 60;
        return format!("{:02}:{:02}:{:02}", h, m, s);
    }
    "unknown".to_string()
}
