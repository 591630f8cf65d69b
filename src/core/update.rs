use crate::core::{
    cmd::Cmd,
    msg::{Msg, SessionMsg, SystemMsg, UiMsg},
    state::{AppState, Session, SessionPhase},
};
use crate::presentation::components::interview::InterviewView;

/// Elm-like update function
/// Returns new state and list of commands from current state and message.
/// This is the interview session controller: every session mutation in the
/// application happens here and nowhere else.
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::Session(session_msg) => update_session(session_msg, state),
        Msg::Ui(ui_msg) => update_ui(ui_msg, state),
        Msg::System(system_msg) => update_system(system_msg, state),
    }
}

fn update_session(msg: SessionMsg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        SessionMsg::Start { role } => {
            // One outstanding request at a time; a second start intent while
            // the first is in flight is dropped, not queued.
            if state.system.request_in_flight {
                return (state, vec![]);
            }
            if !matches!(state.session, SessionPhase::Idle) {
                return (state, vec![]);
            }

            let user_id = state.config.config.user_id.clone();
            state.system.request_in_flight = true;
            state.system.status_message = Some(format!("Starting {role} interview..."));
            (state, vec![Cmd::StartInterview { role, user_id }])
        }

        SessionMsg::Started {
            role,
            session_id,
            question,
        } => {
            // Atomic create: nothing was committed before this message, so a
            // fresh Active phase replaces whatever was there.
            state.system.request_in_flight = false;
            state.system.status_message = None;
            state.ui.editor.clear();
            state.session = SessionPhase::Active {
                session: Session {
                    role,
                    session_id,
                    current_question: question,
                    question_count: 1,
                },
                last_scores: None,
            };
            (state, vec![])
        }

        SessionMsg::Submit { answer } => {
            if state.system.request_in_flight {
                return (state, vec![]);
            }

            let cmd = match &state.session {
                SessionPhase::Active { session, .. } => Some(Cmd::SubmitAnswer {
                    session_id: session.session_id.clone(),
                    role: session.role.clone(),
                    question: session.current_question.clone(),
                    answer,
                }),
                _ => None,
            };

            match cmd {
                Some(cmd) => {
                    state.system.request_in_flight = true;
                    state.system.status_message = Some("Submitting answer...".to_string());
                    (state, vec![cmd])
                }
                None => {
                    state.system.status_message =
                        Some("No active interview session.".to_string());
                    (state, vec![])
                }
            }
        }

        SessionMsg::Scored {
            scores,
            next_question,
        } => {
            state.system.request_in_flight = false;
            state.ui.editor.clear();

            let mut cmds = Vec::new();
            match &mut state.session {
                SessionPhase::Active {
                    session,
                    last_scores,
                } => {
                    *last_scores = Some(scores);
                    if session.is_final_round() {
                        // The just-answered question was the last allowed:
                        // fetch the report instead of adopting a question the
                        // user will never see. The count stays at the max.
                        state.system.request_in_flight = true;
                        state.system.status_message =
                            Some("Generating final report...".to_string());
                        cmds.push(Cmd::FetchFinalReport {
                            session_id: session.session_id.clone(),
                            role: session.role.clone(),
                        });
                    } else {
                        session.current_question = next_question;
                        session.question_count += 1;
                        state.system.status_message = None;
                    }
                }
                // A score landing after the session was reset is stale.
                _ => {}
            }
            (state, cmds)
        }

        SessionMsg::End => {
            if state.system.request_in_flight {
                return (state, vec![]);
            }

            let cmd = match &state.session {
                SessionPhase::Active { session, .. } => Some(Cmd::FetchFinalReport {
                    session_id: session.session_id.clone(),
                    role: session.role.clone(),
                }),
                _ => None,
            };

            match cmd {
                Some(cmd) => {
                    state.system.request_in_flight = true;
                    state.system.status_message =
                        Some("Generating final report...".to_string());
                    (state, vec![cmd])
                }
                None => {
                    state.system.status_message =
                        Some("No active interview session.".to_string());
                    (state, vec![])
                }
            }
        }

        SessionMsg::Reported(report) => {
            state.system.request_in_flight = false;
            state.system.status_message = None;

            let role = match &state.session {
                SessionPhase::Active { session, .. } => Some(session.role.clone()),
                _ => None,
            };
            if let Some(role) = role {
                state.ui.editor.clear();
                state.session = SessionPhase::Reported { role, report };
            }
            (state, vec![])
        }

        SessionMsg::Failed(message) => {
            // Uniform failure handling: clear the in-flight gate, surface the
            // message, leave the session exactly where it was.
            state.system.request_in_flight = false;
            state.system.status_message = Some(message);
            (state, vec![])
        }

        SessionMsg::NewInterview => {
            if state.system.request_in_flight {
                return (state, vec![]);
            }
            state.session = SessionPhase::Idle;
            state.ui.editor.clear();
            state.system.status_message = None;
            (state, vec![])
        }
    }
}

fn update_ui(msg: UiMsg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let roles = state.config.config.roles.len();
    match msg {
        UiMsg::NextRole => {
            if roles > 0 && matches!(state.session, SessionPhase::Idle) {
                state.ui.role_index = (state.ui.role_index + 1) % roles;
            }
        }
        UiMsg::PrevRole => {
            if roles > 0 && matches!(state.session, SessionPhase::Idle) {
                state.ui.role_index = (state.ui.role_index + roles - 1) % roles;
            }
        }
        UiMsg::EditorKey(key) => {
            if matches!(state.session, SessionPhase::Active { .. })
                && !state.system.request_in_flight
            {
                state.ui.editor = InterviewView::apply_editor_keys(&state.ui.editor, [key]);
            }
        }
    }
    (state, vec![])
}

fn update_system(msg: SystemMsg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        SystemMsg::Quit => state.system.should_quit = true,
        SystemMsg::Suspend => state.system.should_suspend = true,
        SystemMsg::Resume => state.system.should_suspend = false,
        SystemMsg::ShowError(message) => state.system.status_message = Some(message),
        SystemMsg::UpdateStatusMessage(message) => {
            state.system.status_message = Some(message);
        }
        SystemMsg::ClearStatusMessage => state.system.status_message = None,
    }
    (state, vec![])
}
