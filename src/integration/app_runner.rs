use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::{
    api::InterviewBackend,
    core::{
        cmd::Cmd,
        msg::{Msg, SystemMsg},
        raw_msg::RawMsg,
        state::{AppState, SessionPhase},
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::{
        api_service::ApiService,
        config::Config,
        tui::{self, event_source::EventSource, TuiLike},
    },
    presentation::components::{
        interview::InterviewView, results::ResultsView, role_select::RoleSelect,
        status_bar::StatusBar,
    },
};

/// Drives the application: pulls terminal events, translates them, runs the
/// update cycle, dispatches commands to the API service and renders.
pub struct AppRunner<'a> {
    state: AppState,
    events: EventSource,
    // Absent in headless runs (tests, non-interactive environments).
    tui: Option<Arc<Mutex<dyn TuiLike + Send>>>,
    // Presentation components (stateless/pure rendering)
    role_select: RoleSelect,
    interview: InterviewView<'a>,
    results: ResultsView,
    status_bar: StatusBar,
    // Channels to and from the API service
    cmd_tx: mpsc::UnboundedSender<Cmd>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    api_cancel: CancellationToken,
}

impl AppRunner<'_> {
    /// Create a runner rendering to the given terminal.
    /// Must be called from within a tokio runtime: the API service task is
    /// spawned here.
    pub fn new_with_real(
        config: Config,
        backend: Arc<dyn InterviewBackend>,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
    ) -> Self {
        Self::new(config, backend, Some(Arc::clone(&tui)), EventSource::real(tui))
    }

    /// Create a headless runner fed from a scripted event source
    pub fn new_headless(
        config: Config,
        backend: Arc<dyn InterviewBackend>,
        events: EventSource,
    ) -> Self {
        Self::new(config, backend, None, events)
    }

    fn new(
        config: Config,
        backend: Arc<dyn InterviewBackend>,
        tui: Option<Arc<Mutex<dyn TuiLike + Send>>>,
        events: EventSource,
    ) -> Self {
        let state = AppState::new_with_config(config);
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (cmd_tx, api_cancel, service) = ApiService::new(backend, msg_tx);
        service.run();

        Self {
            state,
            events,
            tui,
            role_select: RoleSelect::new(),
            interview: InterviewView::new(),
            results: ResultsView::new(),
            status_bar: StatusBar::new(),
            cmd_tx,
            msg_rx,
            api_cancel,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Replace the event source; used by tests to inject scripted events.
    pub fn set_event_source_for_tests(&mut self, events: EventSource) {
        self.events = events;
    }

    /// Run a single loop iteration; used by tests to step deterministically.
    pub async fn run_one_cycle_for_tests(&mut self) -> Result<()> {
        self.run_cycle().await
    }

    /// Run the main loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        if let Some(tui) = &self.tui {
            tui.lock().await.enter()?;
        }

        loop {
            self.run_cycle().await?;
            if self.state.system.should_quit {
                break;
            }
        }

        // Shut down the API service and restore the terminal
        self.api_cancel.cancel();
        if let Some(tui) = &self.tui {
            tui.lock().await.exit()?;
        }
        Ok(())
    }

    async fn run_cycle(&mut self) -> Result<()> {
        // Backend outcomes first, so a response is visible before new input
        // is interpreted against stale state.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.apply_msg(msg);
        }

        let event = self.events.next().await;
        match event {
            Some(event) => match event {
                tui::Event::Quit => self.apply_raw(RawMsg::Quit),
                tui::Event::Tick => self.apply_raw(RawMsg::Tick),
                tui::Event::Key(key) => self.apply_raw(RawMsg::Key(key)),
                tui::Event::Resize(w, h) => {
                    if let Some(tui) = &self.tui {
                        tui.lock().await.resize(Rect::new(0, 0, w, h))?;
                    }
                    self.apply_raw(RawMsg::Resize(w, h));
                }
                tui::Event::Render
                | tui::Event::Init
                | tui::Event::Error
                | tui::Event::Closed
                | tui::Event::FocusGained
                | tui::Event::FocusLost
                | tui::Event::Paste(_)
                | tui::Event::Mouse(_) => {}
            },
            None => {
                if self.tui.is_none() {
                    // Scripted queue is empty; yield briefly so stepped test
                    // loops can interleave with the API service task.
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }
            }
        }

        if self.state.system.should_suspend {
            if let Some(tui) = &self.tui {
                tui.lock().await.suspend()?;
            }
            self.apply_msg(Msg::System(SystemMsg::Resume));
        }

        // Render at least once per loop (on high FPS this is cheap)
        self.render().await?;

        Ok(())
    }

    fn apply_raw(&mut self, raw: RawMsg) {
        for msg in translate_raw_to_domain(raw, &self.state) {
            self.apply_msg(msg);
        }
    }

    fn apply_msg(&mut self, msg: Msg) {
        if !msg.is_frequent() {
            tracing::debug!("{msg:?}");
        }
        let state = std::mem::take(&mut self.state);
        let (state, cmds) = update(msg, state);
        self.state = state;

        for cmd in cmds {
            if self.cmd_tx.send(cmd).is_err() {
                tracing::error!("API service is gone; dropping command");
                self.state.system.status_message =
                    Some("Backend service is not running.".to_string());
            }
        }
    }

    async fn render(&mut self) -> Result<()> {
        let Some(tui) = self.tui.clone() else {
            return Ok(());
        };

        let state = self.state.clone();
        let role_select = &mut self.role_select;
        let interview = &mut self.interview;
        let results = &self.results;
        let status_bar = &self.status_bar;

        let mut guard = tui.lock().await;
        guard.draw(&mut |f| {
            let area = f.area();
            match &state.session {
                SessionPhase::Idle => role_select.draw(&state, f, area),
                SessionPhase::Active { .. } => interview.draw(&state, f, area),
                SessionPhase::Reported { .. } => results.draw(&state, f, area),
            }
            // Status bar overlays the bottom lines of every view
            status_bar.view(&state, f, area);
        })?;
        Ok(())
    }
}
