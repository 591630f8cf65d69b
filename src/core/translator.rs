use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{
    msg::{Msg, SessionMsg, SystemMsg, UiMsg},
    raw_msg::RawMsg,
    state::{AppState, SessionPhase},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // User input - translate based on the current phase
        RawMsg::Key(key) => translate_key_event(key, state),

        // Handled by the runtime host, no domain meaning
        RawMsg::Tick | RawMsg::Render | RawMsg::Resize(_, _) => vec![],
    }
}

/// Translates keyboard input to domain messages based on the current phase
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // All interview controls are inert while a request is outstanding.
    if state.system.request_in_flight {
        return vec![];
    }

    match &state.session {
        SessionPhase::Idle => translate_role_selection_keys(key, state),
        SessionPhase::Active { .. } => translate_interview_keys(key, state),
        SessionPhase::Reported { .. } => translate_results_keys(key),
    }
}

/// Key bindings on the role selection screen
fn translate_role_selection_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => vec![Msg::Ui(UiMsg::PrevRole)],
        KeyCode::Down | KeyCode::Char('j') => vec![Msg::Ui(UiMsg::NextRole)],
        KeyCode::Enter => match state.selected_role() {
            Some(role) => vec![Msg::Session(SessionMsg::Start { role: role.into() })],
            None => vec![Msg::System(SystemMsg::ShowError(
                "No roles configured.".to_string(),
            ))],
        },
        KeyCode::Char('q') => vec![Msg::System(SystemMsg::Quit)],
        _ => vec![],
    }
}

/// Key bindings during the interview; everything not bound goes to the editor
fn translate_interview_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            if state.ui.editor.has_answer() {
                vec![Msg::Session(SessionMsg::Submit {
                    answer: state.ui.editor.content.clone(),
                })]
            } else {
                vec![Msg::System(SystemMsg::ShowError(
                    "Please type an answer.".to_string(),
                ))]
            }
        }

        KeyEvent {
            code: KeyCode::Char('e'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::Session(SessionMsg::End)],

        _ => vec![Msg::Ui(UiMsg::EditorKey(key))],
    }
}

/// Key bindings on the results screen
fn translate_results_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('n') => vec![Msg::Session(SessionMsg::NewInterview)],
        KeyCode::Char('q') => vec![Msg::System(SystemMsg::Quit)],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        api::types::FinalReport,
        core::state::{Session, SessionPhase},
        infrastructure::config::Config,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn idle_state() -> AppState {
        let config = Config {
            roles: vec![
                "Machine Learning Engineer".to_string(),
                "Data Analyst".to_string(),
            ],
            ..Config::default()
        };
        AppState::new_with_config(config)
    }

    fn interview_state() -> AppState {
        let mut state = idle_state();
        state.session = SessionPhase::Active {
            session: Session {
                role: "Data Analyst".to_string(),
                session_id: "s-1".to_string(),
                current_question: "Question 1".to_string(),
                question_count: 1,
            },
            last_scores: None,
        };
        state
    }

    fn results_state() -> AppState {
        let mut state = idle_state();
        state.session = SessionPhase::Reported {
            role: "Data Analyst".to_string(),
            report: FinalReport::default(),
        };
        state
    }

    #[rstest]
    #[case(idle_state())]
    #[case(interview_state())]
    #[case(results_state())]
    fn test_ctrl_c_quits_in_every_phase(#[case] state: AppState) {
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(ctrl('c')), &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[test]
    fn test_role_selection_navigation() {
        let state = idle_state();

        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Down)), &state),
            vec![Msg::Ui(UiMsg::NextRole)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('k'))), &state),
            vec![Msg::Ui(UiMsg::PrevRole)]
        );
    }

    #[test]
    fn test_enter_starts_the_selected_role() {
        let mut state = idle_state();
        state.ui.role_index = 1;

        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Enter)), &state),
            vec![Msg::Session(SessionMsg::Start {
                role: "Data Analyst".to_string(),
            })]
        );
    }

    #[test]
    fn test_enter_without_roles_reports_an_error() {
        let state = AppState::default();

        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Enter)), &state),
            vec![Msg::System(SystemMsg::ShowError(
                "No roles configured.".to_string(),
            ))]
        );
    }

    #[test]
    fn test_submit_requires_a_non_empty_answer() {
        let mut state = interview_state();

        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(ctrl('s')), &state),
            vec![Msg::System(SystemMsg::ShowError(
                "Please type an answer.".to_string(),
            ))]
        );

        state.ui.editor.content = "Normalization reduces redundancy.".to_string();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(ctrl('s')), &state),
            vec![Msg::Session(SessionMsg::Submit {
                answer: "Normalization reduces redundancy.".to_string(),
            })]
        );
    }

    #[test]
    fn test_ctrl_e_ends_the_interview() {
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(ctrl('e')), &interview_state()),
            vec![Msg::Session(SessionMsg::End)]
        );
    }

    #[test]
    fn test_plain_keys_go_to_the_editor_during_the_interview() {
        let state = interview_state();

        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('q'))), &state),
            vec![Msg::Ui(UiMsg::EditorKey(key(KeyCode::Char('q'))))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key(KeyCode::Enter)), &state),
            vec![Msg::Ui(UiMsg::EditorKey(key(KeyCode::Enter)))]
        );
    }

    #[rstest]
    #[case(key(KeyCode::Enter))]
    #[case(key(KeyCode::Char('n')))]
    fn test_results_keys_start_a_new_interview(#[case] pressed: KeyEvent) {
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(pressed), &results_state()),
            vec![Msg::Session(SessionMsg::NewInterview)]
        );
    }

    #[rstest]
    #[case(idle_state(), key(KeyCode::Enter))]
    #[case(interview_state(), ctrl('s'))]
    #[case(interview_state(), ctrl('e'))]
    #[case(results_state(), key(KeyCode::Enter))]
    fn test_keys_are_inert_while_a_request_is_in_flight(
        #[case] mut state: AppState,
        #[case] pressed: KeyEvent,
    ) {
        state.system.request_in_flight = true;
        assert_eq!(translate_raw_to_domain(RawMsg::Key(pressed), &state), vec![]);
    }

    #[test]
    fn test_tick_and_render_have_no_domain_meaning() {
        let state = idle_state();
        assert_eq!(translate_raw_to_domain(RawMsg::Tick, &state), vec![]);
        assert_eq!(translate_raw_to_domain(RawMsg::Render, &state), vec![]);
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(80, 24), &state),
            vec![]
        );
    }
}
