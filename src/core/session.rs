//! Tears session - lifecycle facade over the tracker, presenter and overlay
//!
//! TearsSession is what the host drives: one call per lifecycle callback,
//! one call per game tick and one call per render frame. It is
//! platform-independent and can be tested with mocks.

use std::time::Instant;

use tracing::{debug, info};

use crate::config::InterfaceSettings;
use crate::core::overlay::DeltaOverlayRenderer;
use crate::core::presenter::InterfaceTextPresenter;
use crate::core::snapshot::TickSnapshot;
use crate::core::tracker::{SessionEvent, SessionPhase, SessionStateTracker};
use crate::core::traits::{InterfaceWidgets, OverlayCanvas, SignalReader, WorldReader};
use crate::core::types::GameState;

/// Lifecycle facade
///
/// Ticks take `&mut self`, rendering takes `&self`: the overlay only ever
/// reads what the last tick wrote.
pub struct TearsSession {
    settings: InterfaceSettings,
    tracker: SessionStateTracker,
    presenter: InterfaceTextPresenter,
    renderer: DeltaOverlayRenderer,
}

impl TearsSession {
    pub fn new(settings: InterfaceSettings) -> Self {
        Self {
            presenter: InterfaceTextPresenter::new(settings.flashing_text),
            renderer: DeltaOverlayRenderer::new(settings.show_plus_minus_on_collect),
            tracker: SessionStateTracker::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &InterfaceSettings {
        &self.settings
    }

    /// Apply new settings. Takes effect on the next tick/frame.
    pub fn set_settings(&mut self, settings: InterfaceSettings) {
        debug!(
            flashing_text = settings.flashing_text,
            show_plus_minus_on_collect = settings.show_plus_minus_on_collect,
            "[TEARS] Settings changed"
        );
        self.presenter.set_flashing_text(settings.flashing_text);
        self.renderer
            .set_enabled(settings.show_plus_minus_on_collect);
        self.settings = settings;
    }

    pub fn tracker(&self) -> &SessionStateTracker {
        &self.tracker
    }

    pub fn phase(&self) -> SessionPhase {
        self.tracker.phase()
    }

    /// Component enabled: start clean, and ignore a minigame that is already
    /// running around the player.
    pub fn on_attach<S: SignalReader, W: WorldReader>(&mut self, signals: &S, world: &W) {
        let snapshot = TickSnapshot::capture(signals, world);
        if self.tracker.attach(&snapshot) {
            info!(
                ticks_left = snapshot.ticks_left,
                "[TEARS] Minigame already running, waiting for the player to leave"
            );
        } else {
            info!("[TEARS] Attached");
        }
    }

    /// Component disabled: give the interface back and drop all state.
    pub fn on_detach<I: InterfaceWidgets>(&mut self, widgets: &mut I) {
        if self.tracker.is_in_session() {
            let restored = self.presenter.restore_defaults(widgets);
            debug!(restored, "[TEARS] Restored interface defaults");
        }
        self.tracker.reset();
        info!("[TEARS] Detached");
    }

    pub fn on_game_state_changed(&mut self, state: GameState) {
        if state == GameState::LoginScreen {
            if self.tracker.is_in_session() || self.tracker.is_rejoin_in_progress() {
                debug!("[TEARS] Back at login screen, resetting");
            }
            self.tracker.reset();
        }
    }

    /// Process one game tick and update the interface.
    ///
    /// Returns the transitions that happened this tick.
    pub fn on_tick<S: SignalReader, W: WorldReader, I: InterfaceWidgets>(
        &mut self,
        signals: &S,
        world: &W,
        widgets: &mut I,
    ) -> Vec<SessionEvent> {
        self.tick_at(signals, world, widgets, Instant::now())
    }

    /// `on_tick` with an explicit timestamp for the overlay animation.
    pub fn tick_at<S: SignalReader, W: WorldReader, I: InterfaceWidgets>(
        &mut self,
        signals: &S,
        world: &W,
        widgets: &mut I,
        now: Instant,
    ) -> Vec<SessionEvent> {
        let snapshot = TickSnapshot::capture(signals, world);
        let report = self.tracker.update(&snapshot, world, now);

        if let Some(view) = report.view {
            self.presenter
                .present(&view, snapshot.is_flash_tick(), widgets);
        }

        for event in &report.events {
            log_event(event);
        }
        report.events
    }

    /// Draw the +/- overlay for this frame. Returns how many indicators
    /// were drawn.
    pub fn render<I: InterfaceWidgets, C: OverlayCanvas>(
        &self,
        widgets: &I,
        canvas: &mut C,
        now: Instant,
    ) -> usize {
        self.renderer
            .render(self.tracker.deltas(), widgets, canvas, now)
    }
}

impl Default for TearsSession {
    fn default() -> Self {
        Self::new(InterfaceSettings::default())
    }
}

fn log_event(event: &SessionEvent) {
    match event {
        SessionEvent::Started { max_ticks } => {
            info!(max_ticks, "[TEARS] Minigame started")
        }
        SessionEvent::CountdownFinished => debug!("[TEARS] Countdown finished"),
        SessionEvent::TimeUp => info!("[TEARS] Time up"),
        SessionEvent::Reset => debug!("[TEARS] Player left the cave, session reset"),
        SessionEvent::RejoinCleared => {
            debug!("[TEARS] Player left the running minigame, tracking resumed")
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
