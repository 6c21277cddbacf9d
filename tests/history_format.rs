use std::fs;

use quizdrill::history::{self, AttemptRecord};
use quizdrill::session::QuizSession;

fn completed_session() -> (quizdrill::model::Deck, QuizSession) {
    let content = fs::read_to_string("fixtures/sample_deck.md").expect("Cannot read fixture");
    let deck =
        quizdrill::parser::parse_deck(&content, "sample_deck.md", "sha256:abc123").unwrap();

    let mut session = QuizSession::new(deck.questions.clone()).unwrap();
    // Correct on the first three questions, wrong on the last two.
    for answer in [1, 1, 0, 0, 0] {
        session.select_answer(answer);
        session.advance();
    }
    assert!(session.completed());
    assert_eq!(session.score(), Some(3));

    (deck, session)
}

#[test]
fn test_build_attempt_yaml() {
    let (deck, session) = completed_session();
    let record = AttemptRecord::from_session(
        &deck,
        &session,
        "2025-01-02T10:00:00+00:00",
        "2025-01-02T10:05:30+00:00",
    );

    assert_eq!(record.score, 3);
    assert_eq!(record.total, 5);
    assert_eq!(record.duration, "00:05:30");
    // 3/5 = 60%, exactly the pass mark
    assert_eq!(record.passed, Some(true));

    let yaml = history::build_attempt_yaml(&record);
    assert!(yaml.contains("deck: \"sample_deck.md\""));
    assert!(yaml.contains("deck_hash: \"sha256:abc123\""));
    assert!(yaml.contains("score: 3"));
    assert!(yaml.contains("total: 5"));
    assert!(yaml.contains("passed: true"));
    assert!(yaml.contains("duration: \"00:05:30\""));
    assert!(yaml.contains("answers:"));
    assert!(yaml.contains("chosen: \"1.37 ohms\""));

    // Wrong answers still record what was chosen
    assert!(yaml.contains("correct: false"));

    // The whole record is well-formed YAML
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(value["score"].as_u64(), Some(3));
    assert_eq!(value["answers"].as_sequence().map(|s| s.len()), Some(5));
}

#[test]
fn test_unanswered_questions_export_null() {
    let (deck, mut session) = completed_session();
    session.restart();

    // An incomplete session snapshots with null chosen entries.
    let record = AttemptRecord::from_session(
        &deck,
        &session,
        "2025-01-02T10:00:00+00:00",
        "2025-01-02T10:00:01+00:00",
    );
    let yaml = history::build_attempt_yaml(&record);
    let null_count = yaml.matches("chosen: null").count();
    assert_eq!(null_count, 5);
}

#[test]
fn test_record_load_clear_roundtrip() {
    let (deck, session) = completed_session();

    let tmp_dir = std::env::temp_dir().join("quizdrill_test_history");
    let _ = fs::remove_dir_all(&tmp_dir);
    let path = tmp_dir.join("sample-deadbeef.yaml");

    let first = AttemptRecord::from_session(
        &deck,
        &session,
        "2025-01-02T10:00:00+00:00",
        "2025-01-02T10:05:30+00:00",
    );
    history::record_attempt(&path, &first).unwrap();

    let second = AttemptRecord::from_session(
        &deck,
        &session,
        "2025-01-03T09:00:00+00:00",
        "2025-01-03T09:04:00+00:00",
    );
    history::record_attempt(&path, &second).unwrap();

    let attempts = history::load_attempts(&path).unwrap();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0].finished_at, "2025-01-02T10:05:30+00:00");
    assert_eq!(attempts[1].finished_at, "2025-01-03T09:04:00+00:00");
    assert_eq!(attempts[1].score, 3);
    assert_eq!(attempts[1].answers.len(), 5);
    assert_eq!(attempts[1].answers[0].chosen.as_deref(), Some("1.37 ohms"));

    history::clear_history(&path).unwrap();
    assert!(!path.exists());
    assert!(history::load_attempts(&path).unwrap().is_empty());

    let _ = fs::remove_dir_all(&tmp_dir);
}

#[test]
fn test_export_last_attempt() {
    let (deck, session) = completed_session();

    let tmp_dir = std::env::temp_dir().join("quizdrill_test_export");
    let _ = fs::remove_dir_all(&tmp_dir);
    fs::create_dir_all(&tmp_dir).unwrap();
    let history_path = tmp_dir.join("history.yaml");
    let export_path = tmp_dir.join("export.yaml");

    assert!(history::export_last(&history_path, &export_path.to_string_lossy()).is_err());

    let record = AttemptRecord::from_session(
        &deck,
        &session,
        "2025-01-02T10:00:00+00:00",
        "2025-01-02T10:05:30+00:00",
    );
    history::record_attempt(&history_path, &record).unwrap();
    history::export_last(&history_path, &export_path.to_string_lossy()).unwrap();

    let exported = fs::read_to_string(&export_path).unwrap();
    assert!(exported.contains("score: 3"));

    let _ = fs::remove_dir_all(&tmp_dir);
}

#[test]
fn test_file_hash_format() {
    let tmp = std::env::temp_dir().join("quizdrill_test_hash.md");
    fs::write(&tmp, "hello").unwrap();

    let hash = history::compute_file_hash(&tmp).unwrap();
    assert!(hash.starts_with("sha256:"));
    assert_eq!(hash.len(), "sha256:".len() + 64);

    // Same content hashes the same
    assert_eq!(hash, history::compute_file_hash(&tmp).unwrap());
    assert_eq!(
        history::compute_str_hash("hello"),
        hash,
        "file and string hashing agree on identical bytes"
    );

    let _ = fs::remove_file(&tmp);
}
