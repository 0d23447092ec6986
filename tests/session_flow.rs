use std::path::PathBuf;

use quiz_player::{
    fetch_quiz, normalize, validate_fetched, Identifier, Limits, LoadError, MatchResult, Outcome,
    Phase, Quiz, QuizError, QuizKind, QuizSession, Reveal, Score,
};
use tokio::sync::oneshot;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn region(id: &str) -> Identifier {
    Identifier::Region(id.to_string())
}

fn slots(answers: &[&str]) -> QuizSession {
    QuizSession::new(
        answers
            .iter()
            .enumerate()
            .map(|(i, a)| (Identifier::Slot(i), *a)),
    )
    .unwrap()
}

#[test]
fn test_map_session_scores_and_finishes() {
    let mut session =
        QuizSession::new([(region("a"), "Kraków"), (region("b"), "Gdańsk")]).unwrap();

    assert_eq!(
        session.try_match("krakow"),
        MatchResult::Hit {
            id: region("a"),
            score: Score::new(1, 2)
        }
    );
    assert!(!session.entry(&region("b")).unwrap().is_solved());
    assert_eq!(session.phase(), Phase::Active);

    assert_eq!(
        session.try_match("gdansk"),
        MatchResult::Hit {
            id: region("b"),
            score: Score::new(2, 2)
        }
    );
    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.outcome(), Some(Outcome::Completed));
}

#[test]
fn test_solved_count_never_decreases() {
    let mut session = slots(&["Wisła", "Odra", "Warta", "Odra"]);
    let inputs = ["wisla", "", "x", "ODRA", "odra", "odra", "warta", "bug", "wisla"];

    let mut previous = session.solved_count();
    for input in inputs {
        session.try_match(input);
        assert!(session.solved_count() >= previous);
        assert_eq!(
            session.solved_count(),
            session.entries().iter().filter(|e| e.is_solved()).count()
        );
        previous = session.solved_count();
    }
    assert!(session.is_finished());
}

#[test]
fn test_normalize_properties() {
    assert_eq!(normalize("Łódź"), normalize("lodz"));
    for s in ["Łódź", "ŻÓŁW", "", "mixed Case ąę"] {
        assert_eq!(normalize(&normalize(s)), normalize(s));
    }
}

#[test]
fn test_duplicate_answers_in_order() {
    let mut session = slots(&["Paris", "Paris"]);
    assert!(matches!(
        session.try_match("paris"),
        MatchResult::Hit { id: Identifier::Slot(0), .. }
    ));
    assert!(matches!(
        session.try_match("paris"),
        MatchResult::Hit { id: Identifier::Slot(1), .. }
    ));
}

#[test]
fn test_give_up_reveals_and_freezes() {
    let mut session = slots(&["Warszawa", "Praga", "Wilno"]);
    session.try_match("praga");
    session.give_up();

    assert_eq!(session.score(), Score::new(1, 3));
    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.reveal_of(&Identifier::Slot(1)), Some(Reveal::Correct));
    assert_eq!(session.reveal_of(&Identifier::Slot(0)), Some(Reveal::Missed));
    assert_eq!(session.reveal_of(&Identifier::Slot(2)), Some(Reveal::Missed));

    let reveals: Vec<_> = session.entries().iter().map(|e| e.revealed()).collect();
    assert_eq!(session.try_match("warszawa"), MatchResult::NoMatch);
    session.give_up();
    let after: Vec<_> = session.entries().iter().map(|e| e.revealed()).collect();
    assert_eq!(reveals, after);
    assert_eq!(session.solved_count(), 1);
}

#[test]
fn test_empty_answer_set_produces_no_session() {
    let result = QuizSession::new(Vec::<(Identifier, &str)>::new());
    assert!(matches!(result, Err(QuizError::MalformedQuizData(_))));
}

#[test]
fn test_demo_map_quiz() {
    let quiz = Quiz::from_json(demo("polish-cities-map.json")).unwrap();
    assert_eq!(quiz.kind(), QuizKind::Map);
    assert_eq!(quiz.payload().id.as_deref(), Some("polish-cities-map"));

    let mut session = quiz.new_session();
    let ids: Vec<_> = session.entries().iter().map(|e| e.id().clone()).collect();
    assert_eq!(ids, vec![region("krk"), region("gdn"), region("ldz"), region("waw")]);

    assert!(session.try_match("LODZ").is_hit());
    assert_eq!(session.revealed_label(&region("ldz")), Some("Łódź"));
    assert_eq!(session.revealed_label(&region("waw")), None);

    let results = {
        session.give_up();
        session.results().unwrap()
    };
    assert_eq!(results.score, Score::new(1, 4));
    assert_eq!(results.outcome, Outcome::GaveUp);
    assert_eq!(results.correct, vec![region("ldz")]);
    assert_eq!(results.missed.len(), 3);
}

#[test]
fn test_demo_files_pass_validation() {
    for name in ["polish-cities-map.json", "capitals-matching.json", "polish-rivers.json"] {
        let fetched = quiz_player::load_quiz_from_path(demo(name)).unwrap();
        assert!(
            validate_fetched(&fetched, &Limits::default()).is_empty(),
            "{} should be valid",
            name
        );
    }
}

#[tokio::test]
async fn test_fetch_then_play_matching_quiz() {
    let (_abort_tx, abort_rx) = oneshot::channel();
    let fetched = fetch_quiz(demo("capitals-matching.json"), abort_rx).await;
    let quiz = Quiz::from_fetched(fetched).unwrap();
    assert_eq!(quiz.kind(), QuizKind::MatchingQuiz);
    assert_eq!(
        quiz.payload().headers,
        Some(["Państwo".to_string(), "Stolica".to_string()])
    );

    let mut session = quiz.new_session();
    assert_eq!(session.entries()[2].prompt(), Some("Litwa"));
    for answer in ["warszawa", "PRAGA", "wilno", "berlin"] {
        assert!(session.try_match(answer).is_hit());
    }
    assert_eq!(session.outcome(), Some(Outcome::Completed));
    assert!(session.results().unwrap().missed.is_empty());
}

#[tokio::test]
async fn test_aborted_fetch_never_becomes_a_quiz() {
    let (abort_tx, abort_rx) = oneshot::channel();
    abort_tx.send(()).unwrap();
    let fetched = fetch_quiz(demo("polish-rivers.json"), abort_rx).await;
    assert!(matches!(fetched, Err(LoadError::Aborted)));
    assert!(matches!(
        Quiz::from_fetched(fetched),
        Err(QuizError::DataUnavailable(LoadError::Aborted))
    ));
}
