use quizdrill::model::Question;
use quizdrill::progress::Progress;
use quizdrill::session::{InlineCheck, QuizSession};

fn make_questions(correct: &[usize]) -> Vec<Question> {
    correct
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            Question::new(
                (i + 1) as u32,
                format!("Question {}?", i + 1),
                vec![
                    format!("option a of q{}", i + 1),
                    format!("option b of q{}", i + 1),
                    format!("option c of q{}", i + 1),
                ],
                c,
                Some(format!("Because of q{}.", i + 1)),
            )
            .unwrap()
        })
        .collect()
}

#[test]
fn test_question_validation() {
    let err = Question::new(1, "Q?".into(), vec!["only".into()], 0, None).unwrap_err();
    assert!(err.contains("at least 2"));

    let err = Question::new(1, "Q?".into(), vec!["a".into(), "b".into()], 2, None).unwrap_err();
    assert!(err.contains("only has 2 options"));

    assert!(Question::new(1, "Q?".into(), vec!["a".into(), "b".into()], 1, None).is_ok());
}

#[test]
fn test_empty_session_rejected() {
    assert!(QuizSession::new(Vec::new()).is_err());
}

#[test]
fn test_completes_after_answering_all() {
    let mut session = QuizSession::new(make_questions(&[0, 1, 2, 0])).unwrap();

    for _ in 0..4 {
        assert!(!session.completed());
        session.select_answer(0);
        assert!(session.advance());
    }
    assert!(session.completed());

    // Completion happens exactly once; further advances are ignored.
    assert!(!session.advance());
    assert!(session.completed());
}

#[test]
fn test_advance_gated_on_answer() {
    let mut session = QuizSession::new(make_questions(&[0, 1])).unwrap();

    assert!(!session.advance());
    assert_eq!(session.current_index(), 0);

    session.select_answer(0);
    assert!(session.advance());
    assert_eq!(session.current_index(), 1);

    // Final question unanswered: advance must not complete the session.
    assert!(!session.advance());
    assert!(!session.completed());
}

#[test]
fn test_retreat_at_zero_is_noop() {
    let mut session = QuizSession::new(make_questions(&[0, 1])).unwrap();

    session.retreat();
    assert_eq!(session.current_index(), 0);

    session.select_answer(0);
    session.advance();
    session.retreat();
    assert_eq!(session.current_index(), 0);
    session.retreat();
    assert_eq!(session.current_index(), 0);
}

#[test]
fn test_score_none_until_completed() {
    let mut session = QuizSession::new(make_questions(&[0, 1])).unwrap();
    assert_eq!(session.score(), None);

    session.select_answer(0);
    session.advance();
    assert_eq!(session.score(), None);

    session.select_answer(1);
    session.advance();
    assert_eq!(session.score(), Some(2));
}

#[test]
fn test_score_all_correct_and_all_wrong() {
    let correct = [1, 0, 2, 1, 0];

    let mut session = QuizSession::new(make_questions(&correct)).unwrap();
    for &c in &correct {
        session.select_answer(c);
        session.advance();
    }
    assert_eq!(session.score(), Some(correct.len()));

    let mut session = QuizSession::new(make_questions(&correct)).unwrap();
    for &c in &correct {
        session.select_answer((c + 1) % 3);
        session.advance();
    }
    assert_eq!(session.score(), Some(0));
}

#[test]
fn test_scenario_two_of_three() {
    // correct = [1, 0, 2], learner answers [1, 1, 2]: question 2 wrong.
    let mut session = QuizSession::new(make_questions(&[1, 0, 2])).unwrap();
    for &answer in &[1, 1, 2] {
        session.select_answer(answer);
        session.advance();
    }
    assert_eq!(session.score(), Some(2));
}

#[test]
fn test_changing_selection_affects_only_current_question() {
    let mut session = QuizSession::new(make_questions(&[0, 1, 2])).unwrap();

    session.select_answer(0);
    session.select_answer(2);
    assert_eq!(session.selection(0), Some(2));
    assert_eq!(session.selection(1), None);
    assert_eq!(session.selection(2), None);

    session.advance();
    session.select_answer(1);
    assert_eq!(session.selection(0), Some(2));
    assert_eq!(session.selection(1), Some(1));
}

#[test]
fn test_select_answer_out_of_range_ignored() {
    let mut session = QuizSession::new(make_questions(&[0])).unwrap();
    session.select_answer(7);
    assert_eq!(session.selection(0), None);
    assert!(!session.advance());
}

#[test]
fn test_restart_clears_prior_attempt() {
    let correct = [1, 0, 2];
    let mut session = QuizSession::new(make_questions(&correct)).unwrap();

    for _ in 0..3 {
        session.select_answer(0);
        session.advance();
    }
    assert!(session.completed());
    let first_score = session.score();

    session.restart();
    assert_eq!(session.current_index(), 0);
    assert!(!session.completed());
    assert_eq!(session.score(), None);
    for i in 0..3 {
        assert_eq!(session.selection(i), None);
    }

    // Replay with all-correct answers; prior selections must not leak.
    for &c in &correct {
        session.select_answer(c);
        session.advance();
    }
    assert_eq!(session.score(), Some(3));
    assert_ne!(session.score(), first_score);
}

#[test]
fn test_review_projection() {
    let mut session = QuizSession::new(make_questions(&[1, 0])).unwrap();
    session.select_answer(1);
    session.advance();
    session.select_answer(2);
    session.advance();
    assert!(session.completed());

    let review = session.review();
    assert_eq!(review.len(), 2);

    assert!(review[0].correct);
    assert_eq!(review[0].chosen.as_deref(), Some("option b of q1"));
    assert_eq!(review[0].correct_option, "option b of q1");

    assert!(!review[1].correct);
    assert_eq!(review[1].chosen.as_deref(), Some("option c of q2"));
    assert_eq!(review[1].correct_option, "option a of q2");
    assert_eq!(review[1].explanation.as_deref(), Some("Because of q2."));
}

#[test]
fn test_progress_label_and_ratio() {
    let p = Progress::new(2, 10);
    assert_eq!(p.label(), "Question 3 of 10");
    assert!((p.ratio() - 0.2).abs() < 1e-9);

    assert_eq!(Progress::new(0, 1).label(), "Question 1 of 1");
    assert_eq!(Progress::new(0, 0).ratio(), 0.0);

    let bar = Progress::new(5, 10).bar(10);
    assert_eq!(bar.chars().count(), 10);
    assert_eq!(bar.chars().filter(|&c| c == '█').count(), 5);
}

#[test]
fn test_inline_check_reveals_explanation() {
    let question = Question::new(
        1,
        "Check?".into(),
        vec!["right".into(), "wrong".into()],
        0,
        Some("The explanation.".into()),
    )
    .unwrap();
    let mut check = InlineCheck::new(question);

    assert!(!check.is_answered());
    assert_eq!(check.is_correct(), None);
    assert_eq!(check.revealed_explanation(), None);

    check.answer(0);
    assert!(check.is_answered());
    assert_eq!(check.is_correct(), Some(true));
    assert_eq!(check.revealed_explanation(), Some("The explanation."));
}

#[test]
fn test_inline_check_first_answer_wins() {
    let question = Question::new(
        1,
        "Check?".into(),
        vec!["right".into(), "wrong".into()],
        0,
        None,
    )
    .unwrap();
    let mut check = InlineCheck::new(question);

    check.answer(5); // out of range, ignored
    assert!(!check.is_answered());

    check.answer(1);
    assert_eq!(check.is_correct(), Some(false));

    check.answer(0); // already answered, ignored
    assert_eq!(check.answered(), Some(1));
    assert_eq!(check.is_correct(), Some(false));
}
