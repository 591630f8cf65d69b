//! End-to-end session flows through a headless AppRunner with a scripted
//! backend and scripted key events.

use std::sync::Arc;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use mocktui::{
    api::{
        types::{
            AnswerScores, FinalFeedbackRequest, FinalReport, OverallScores, ScoreFeedback,
            StartInterviewRequest, StartInterviewResponse, SubmitAnswerRequest,
            SubmitAnswerResponse,
        },
        ApiError, InterviewBackend,
    },
    core::state::{AppState, SessionPhase, MAX_QUESTIONS},
    infrastructure::{
        config::Config,
        tui::{event_source::EventSource, Event},
    },
    integration::app_runner::AppRunner,
};

/// Backend double: numbered questions, fixed scores, canned report.
struct ScriptedBackend;

#[async_trait]
impl InterviewBackend for ScriptedBackend {
    async fn start_interview(
        &self,
        request: &StartInterviewRequest,
    ) -> Result<StartInterviewResponse, ApiError> {
        assert_eq!(request.user_id, "demo-user-1");
        Ok(StartInterviewResponse {
            session_id: format!("session-{}", request.role.len()),
            question: "Question 1".to_string(),
        })
    }

    async fn submit_answer(
        &self,
        request: &SubmitAnswerRequest,
    ) -> Result<SubmitAnswerResponse, ApiError> {
        let asked: u32 = request
            .question
            .rsplit(' ')
            .next()
            .and_then(|n| n.parse().ok())
            .expect("questions are numbered");
        Ok(SubmitAnswerResponse {
            scores: AnswerScores {
                communication_score: Some(8.0),
                technical_score: Some(7.0),
                confidence_score: Some(6.0),
                feedback: ScoreFeedback::default(),
            },
            next_question: format!("Question {}", asked + 1),
        })
    }

    async fn final_feedback(
        &self,
        request: &FinalFeedbackRequest,
    ) -> Result<FinalReport, ApiError> {
        assert!(!request.session_id.is_empty());
        Ok(FinalReport {
            overall_scores: OverallScores {
                communication: Some(8.0),
                technical: Some(7.0),
                confidence: Some(6.0),
            },
            strengths: vec!["Consistent".to_string()],
            weaknesses: vec!["Terse".to_string()],
            improvement_plan: vec!["Practice aloud".to_string()],
        })
    }
}

fn test_config() -> Config {
    Config {
        api_base_url: "http://localhost:8000".to_string(),
        user_id: "demo-user-1".to_string(),
        roles: vec![
            "Machine Learning Engineer".to_string(),
            "Data Analyst".to_string(),
        ],
        ..Config::default()
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Step the runner until the predicate holds, or fail.
async fn settle(runner: &mut AppRunner<'_>, what: &str, pred: impl Fn(&AppState) -> bool) {
    for _ in 0..500 {
        runner
            .run_one_cycle_for_tests()
            .await
            .expect("cycle should not fail");
        if pred(runner.state()) {
            return;
        }
    }
    panic!("runner never reached: {what}");
}

#[tokio::test]
async fn test_start_interview_creates_session() {
    let mut runner =
        AppRunner::new_headless(test_config(), Arc::new(ScriptedBackend), EventSource::test([]));

    runner.set_event_source_for_tests(EventSource::test([key(KeyCode::Enter)]));
    settle(&mut runner, "active session", |s| {
        s.active_session().is_some()
    })
    .await;

    let session = runner.state().active_session().expect("session");
    assert_eq!(session.role, "Machine Learning Engineer");
    assert_eq!(session.question_count, 1);
    assert_eq!(session.current_question, "Question 1");
}

#[tokio::test]
async fn test_ten_rounds_then_automatic_report() {
    let mut runner =
        AppRunner::new_headless(test_config(), Arc::new(ScriptedBackend), EventSource::test([]));

    runner.set_event_source_for_tests(EventSource::test([key(KeyCode::Enter)]));
    settle(&mut runner, "active session", |s| {
        s.active_session().is_some()
    })
    .await;

    for round in 1..MAX_QUESTIONS {
        runner.set_event_source_for_tests(EventSource::test([
            key(KeyCode::Char('o')),
            key(KeyCode::Char('k')),
            ctrl('s'),
        ]));
        settle(&mut runner, "next question adopted", |s| {
            s.active_session()
                .is_some_and(|session| session.question_count == round + 1)
        })
        .await;
        assert!(
            runner.state().final_report().is_none(),
            "round {round} must not produce a report"
        );
        assert!(runner.state().last_scores().is_some());
    }

    // Answering question 10 ends the interview without user action.
    runner.set_event_source_for_tests(EventSource::test([
        key(KeyCode::Char('o')),
        key(KeyCode::Char('k')),
        ctrl('s'),
    ]));
    settle(&mut runner, "final report", |s| s.final_report().is_some()).await;

    match &runner.state().session {
        SessionPhase::Reported { role, report } => {
            assert_eq!(role, "Machine Learning Engineer");
            assert_eq!(report.strengths, vec!["Consistent"]);
        }
        other => panic!("expected Reported, got {other:?}"),
    }
}

#[tokio::test]
async fn test_end_interview_shortcut_skips_remaining_questions() {
    let mut runner =
        AppRunner::new_headless(test_config(), Arc::new(ScriptedBackend), EventSource::test([]));

    runner.set_event_source_for_tests(EventSource::test([key(KeyCode::Enter)]));
    settle(&mut runner, "active session", |s| {
        s.active_session().is_some()
    })
    .await;

    runner.set_event_source_for_tests(EventSource::test([ctrl('e')]));
    settle(&mut runner, "final report", |s| s.final_report().is_some()).await;

    assert!(matches!(
        runner.state().session,
        SessionPhase::Reported { .. }
    ));
}

#[tokio::test]
async fn test_new_interview_returns_to_role_selection() {
    let mut runner =
        AppRunner::new_headless(test_config(), Arc::new(ScriptedBackend), EventSource::test([]));

    runner.set_event_source_for_tests(EventSource::test([key(KeyCode::Enter)]));
    settle(&mut runner, "active session", |s| {
        s.active_session().is_some()
    })
    .await;
    runner.set_event_source_for_tests(EventSource::test([ctrl('e')]));
    settle(&mut runner, "final report", |s| s.final_report().is_some()).await;

    runner.set_event_source_for_tests(EventSource::test([key(KeyCode::Enter)]));
    settle(&mut runner, "role selection", |s| {
        matches!(s.session, SessionPhase::Idle)
    })
    .await;
}

#[tokio::test]
async fn test_empty_answer_is_rejected_without_a_backend_call() {
    let mut runner =
        AppRunner::new_headless(test_config(), Arc::new(ScriptedBackend), EventSource::test([]));

    runner.set_event_source_for_tests(EventSource::test([key(KeyCode::Enter)]));
    settle(&mut runner, "active session", |s| {
        s.active_session().is_some()
    })
    .await;

    runner.set_event_source_for_tests(EventSource::test([ctrl('s')]));
    settle(&mut runner, "validation message", |s| {
        s.system.status_message.as_deref() == Some("Please type an answer.")
    })
    .await;

    // Still on question 1, nothing was submitted.
    let session = runner.state().active_session().expect("session");
    assert_eq!(session.question_count, 1);
    assert!(!runner.state().system.request_in_flight);
}
