//! Failure-path behavior: a backend that cannot be reached must leave the
//! session untouched and surface a blocking notification.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use mocktui::{
    api::HttpBackend,
    core::state::{AppState, SessionPhase},
    infrastructure::{
        config::Config,
        tui::{event_source::EventSource, Event},
    },
    integration::app_runner::AppRunner,
};

fn test_config() -> Config {
    Config {
        // Nothing listens here; every call fails at the transport level.
        api_base_url: "http://127.0.0.1:1".to_string(),
        user_id: "demo-user-1".to_string(),
        roles: vec!["Backend Developer".to_string()],
        ..Config::default()
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

async fn settle(runner: &mut AppRunner<'_>, what: &str, pred: impl Fn(&AppState) -> bool) {
    for _ in 0..2000 {
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
async fn test_failed_start_stays_on_role_selection() {
    let backend = Arc::new(HttpBackend::new(test_config().api_base_url.clone()));
    let mut runner = AppRunner::new_headless(test_config(), backend, EventSource::test([]));

    runner.set_event_source_for_tests(EventSource::test([key(KeyCode::Enter)]));
    settle(&mut runner, "failure notification", |s| {
        s.system
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Error starting interview:"))
    })
    .await;

    // No partial session was committed and the view did not change.
    assert_eq!(runner.state().session, SessionPhase::Idle);
    assert!(!runner.state().system.request_in_flight);
}

#[tokio::test]
async fn test_start_can_be_retried_after_a_failure() {
    let backend = Arc::new(HttpBackend::new(test_config().api_base_url.clone()));
    let mut runner = AppRunner::new_headless(test_config(), backend, EventSource::test([]));

    runner.set_event_source_for_tests(EventSource::test([key(KeyCode::Enter)]));
    settle(&mut runner, "first failure", |s| {
        s.system
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Error starting interview:"))
    })
    .await;
    assert!(!runner.state().system.request_in_flight);

    // The same action can be retried: the in-flight gate was cleared, so a
    // second Enter issues a second request.
    runner.set_event_source_for_tests(EventSource::test([key(KeyCode::Enter)]));
    settle(&mut runner, "retry in flight", |s| {
        s.system.request_in_flight
    })
    .await;
    settle(&mut runner, "second failure resolved", |s| {
        !s.system.request_in_flight
    })
    .await;

    assert_eq!(runner.state().session, SessionPhase::Idle);
}

#[tokio::test]
async fn test_ctrl_c_quits_the_runner() {
    let backend = Arc::new(HttpBackend::new(test_config().api_base_url.clone()));
    let mut runner = AppRunner::new_headless(
        test_config(),
        backend,
        EventSource::test([Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ))]),
    );

    // run() must terminate on its own once the quit flag is set.
    runner.run().await.expect("run should exit cleanly");
    assert!(runner.state().system.should_quit);
}
