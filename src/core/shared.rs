//! Thread-safe handle for hosts that tick and render on different threads

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use crate::config::InterfaceSettings;
use crate::core::session::TearsSession;
use crate::core::tracker::{SessionEvent, SessionPhase};
use crate::core::traits::{InterfaceWidgets, OverlayCanvas, SignalReader, WorldReader};
use crate::core::types::GameState;

/// Cloneable handle to one `TearsSession`
///
/// Every call takes the lock for its whole duration, so a render frame never
/// sees a half-applied tick.
#[derive(Clone)]
pub struct SharedTearsSession {
    inner: Arc<Mutex<TearsSession>>,
}

impl SharedTearsSession {
    pub fn new(settings: InterfaceSettings) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TearsSession::new(settings))),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.inner.lock().phase()
    }

    pub fn set_settings(&self, settings: InterfaceSettings) {
        self.inner.lock().set_settings(settings);
    }

    pub fn on_attach<S: SignalReader, W: WorldReader>(&self, signals: &S, world: &W) {
        self.inner.lock().on_attach(signals, world);
    }

    pub fn on_detach<I: InterfaceWidgets>(&self, widgets: &mut I) {
        self.inner.lock().on_detach(widgets);
    }

    pub fn on_game_state_changed(&self, state: GameState) {
        self.inner.lock().on_game_state_changed(state);
    }

    pub fn on_tick<S: SignalReader, W: WorldReader, I: InterfaceWidgets>(
        &self,
        signals: &S,
        world: &W,
        widgets: &mut I,
    ) -> Vec<SessionEvent> {
        self.inner.lock().on_tick(signals, world, widgets)
    }

    pub fn render<I: InterfaceWidgets, C: OverlayCanvas>(
        &self,
        widgets: &I,
        canvas: &mut C,
        now: Instant,
    ) -> usize {
        self.inner.lock().render(widgets, canvas, now)
    }

    /// Run a closure with the session locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut TearsSession) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl Default for SharedTearsSession {
    fn default() -> Self {
        Self::new(InterfaceSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::TEARS_PLANE;
    use crate::core::traits::mocks::{MockCanvas, MockClient, MockWidgets};
    use crate::core::types::WorldPoint;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedTearsSession::default();
        let other = shared.clone();

        let client = MockClient::new();
        client.set_location(Some(WorldPoint::new(TEARS_PLANE, 3255, 9517)));
        client.set_ticks_left(100);
        let mut widgets = MockWidgets::new();

        let events = shared.on_tick(&client, &client, &mut widgets);
        assert_eq!(events, vec![SessionEvent::Started { max_ticks: 100 }]);
        assert_eq!(other.phase(), SessionPhase::Starting { countdown: 9 });

        other.on_game_state_changed(GameState::LoginScreen);
        assert_eq!(shared.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_render_from_another_thread() {
        let shared = SharedTearsSession::default();
        let render_handle = shared.clone();

        let drawn = thread::spawn(move || {
            let widgets = MockWidgets::new();
            let mut canvas = MockCanvas::default();
            render_handle.render(&widgets, &mut canvas, Instant::now())
        })
        .join()
        .unwrap();
        assert_eq!(drawn, 0);
        assert!(shared.with(|session| session.tracker().deltas().is_empty()));
    }
}
