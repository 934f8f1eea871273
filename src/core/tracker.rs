//! Session state machine
//!
//! Reconstructs the Tears of Guthix session from a handful of varbits and the
//! player's position. It is platform-independent and can be tested without a
//! game client.
//!
//! # Phases
//!
//! ```text
//! Idle --signal > 0 in cave--> Starting(9) --9 interior ticks--> Active
//!   ^                                                              |
//!   |                                  signal drops to 0 or player leaves
//!   |                                                              v
//!   +------------------------- player leaves cave ------------- Ending
//! ```
//!
//! # Tick smoothing
//!
//! The ticks-left varbit only updates every few game ticks. While it holds the
//! same value as last tick, the displayed countdown is decremented locally; as
//! soon as the varbit changes, the displayed value snaps back to it.

use std::time::Instant;

use tracing::debug;

use super::constants::TICKS_FROM_JUNAS_TAIL;
use super::delta_buffer::{DeltaEvent, DeltaEventBuffer};
use super::geofence::{GeofenceRegion, Membership, TEARS_REGION};
use super::resource_scanner::{collecting_state, CollectingState};
use super::snapshot::TickSnapshot;
use super::traits::WorldReader;

// =============================================================================
// SESSION PHASE
// =============================================================================

/// Where the minigame is at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No minigame
    #[default]
    Idle,
    /// Minigame signal seen, waiting for the player to walk in
    Starting { countdown: u32 },
    Active,
    /// Time ran out; held until the player leaves the cave
    Ending,
}

// =============================================================================
// SESSION EVENTS
// =============================================================================

/// Transitions that happened during a tick, for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new minigame was detected
    Started { max_ticks: u32 },
    /// Starting countdown reached 0
    CountdownFinished,
    /// Ticks-left signal dropped to 0 or the player left the cave
    TimeUp,
    /// Session fully reset after the player left
    Reset,
    /// The player left a minigame that was already running when we attached
    RejoinCleared,
}

// =============================================================================
// SESSION
// =============================================================================

/// State of one minigame, created when the minigame signal first appears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub phase: SessionPhase,
    /// Ticks-left signal when the minigame was first seen
    pub max_ticks: u32,
    /// Ticks-left signal on the previous tick
    pub ticks_left: u32,
    /// Locally smoothed countdown shown to the player
    pub displayed_ticks_left: u32,
    /// Tears count on the previous tick
    pub tears_collected: i32,
    pub collecting_state: CollectingState,
}

impl Session {
    /// `previous_tears` is the count stored by the session being replaced,
    /// 0 when starting from Idle.
    fn start(ticks_left: u32, previous_tears: i32) -> Self {
        Self {
            phase: SessionPhase::Starting {
                countdown: TICKS_FROM_JUNAS_TAIL,
            },
            max_ticks: ticks_left,
            ticks_left,
            displayed_ticks_left: ticks_left,
            tears_collected: previous_tears,
            collecting_state: CollectingState::NotCollecting,
        }
    }

    /// Advance a running session with this tick's ticks-left signal.
    fn advance(&mut self, signal: u32, interior: bool, events: &mut Vec<SessionEvent>) {
        match self.phase {
            SessionPhase::Starting { countdown } if countdown > 0 => {
                // The countdown only runs once the player is past the entrance
                if interior {
                    let countdown = countdown - 1;
                    if countdown == 0 {
                        self.phase = SessionPhase::Active;
                        events.push(SessionEvent::CountdownFinished);
                    } else {
                        self.phase = SessionPhase::Starting { countdown };
                    }
                }
            }
            _ if signal == self.ticks_left => {
                self.displayed_ticks_left = self.displayed_ticks_left.saturating_sub(1);
            }
            _ => {
                self.displayed_ticks_left = signal.min(self.max_ticks);
            }
        }
    }

    fn end(&mut self) {
        self.phase = SessionPhase::Ending;
        self.ticks_left = 0;
        self.displayed_ticks_left = 0;
    }

    fn view(&self, tick_delta: i32) -> SessionView {
        SessionView {
            phase: self.phase,
            max_ticks: self.max_ticks,
            displayed_ticks_left: self.displayed_ticks_left,
            collecting_state: self.collecting_state,
            tick_delta,
        }
    }
}

/// What the interface should show after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView {
    pub phase: SessionPhase,
    pub max_ticks: u32,
    pub displayed_ticks_left: u32,
    pub collecting_state: CollectingState,
    /// Change in the tears count since the previous tick
    pub tick_delta: i32,
}

/// Result of one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Display state for this tick, None when there is nothing to show
    ///
    /// Captured before any same-tick reset, so the final "Time Up!" still
    /// reaches the interface.
    pub view: Option<SessionView>,
    pub events: Vec<SessionEvent>,
}

// =============================================================================
// SESSION STATE TRACKER
// =============================================================================

/// Core session state machine.
///
/// Call `update` once per game tick. See module documentation for the phases.
pub struct SessionStateTracker {
    region: GeofenceRegion,
    session: Option<Session>,
    /// Attached while a minigame was already running; ignore it until the
    /// player leaves the cave
    rejoin_in_progress: bool,
    deltas: DeltaEventBuffer,
}

impl SessionStateTracker {
    /// Create a tracker for the Tears of Guthix cave.
    pub fn new() -> Self {
        Self {
            region: TEARS_REGION,
            session: None,
            rejoin_in_progress: false,
            deltas: DeltaEventBuffer::new(),
        }
    }

    /// Current phase (Idle when there is no session)
    pub fn phase(&self) -> SessionPhase {
        self.session.map(|s| s.phase).unwrap_or_default()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether we have written to the interface for a session that is still live
    pub fn is_in_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_rejoin_in_progress(&self) -> bool {
        self.rejoin_in_progress
    }

    /// Recent tears-count changes, oldest first
    pub fn deltas(&self) -> &DeltaEventBuffer {
        &self.deltas
    }

    /// Drop all session state.
    pub fn reset(&mut self) {
        self.session = None;
        self.rejoin_in_progress = false;
        self.deltas.clear();
    }

    /// Reset and check whether a minigame is already running around us.
    ///
    /// Returns true if the running minigame will be ignored until the player
    /// leaves the cave.
    pub fn attach(&mut self, snapshot: &TickSnapshot) -> bool {
        self.reset();
        let membership = Membership::of(&self.region, snapshot.location);
        if membership.exterior && snapshot.ticks_left > 0 {
            debug!(
                ticks_left = snapshot.ticks_left,
                "[TRACKER] Attached during a running minigame, ignoring it"
            );
            self.rejoin_in_progress = true;
        }
        self.rejoin_in_progress
    }

    /// Process one game tick.
    ///
    /// `now` stamps this tick's delta event for the overlay animation.
    pub fn update<W: WorldReader>(
        &mut self,
        snapshot: &TickSnapshot,
        world: &W,
        now: Instant,
    ) -> TickReport {
        let mut events = Vec::new();

        if !snapshot.is_logged_in() {
            return TickReport::default();
        }

        let membership = Membership::of(&self.region, snapshot.location);

        // 1. Stale minigame from before we attached
        if self.rejoin_in_progress {
            if membership.exterior {
                return TickReport::default();
            }
            self.reset();
            events.push(SessionEvent::RejoinCleared);
        }

        // 2./3. Phase transitions from the ticks-left signal
        let signal = snapshot.ticks_left;
        if signal > 0 && membership.exterior {
            match &mut self.session {
                Some(session) if session.ticks_left > 0 => {
                    session.advance(signal, membership.interior, &mut events);
                }
                // No session, or the previous one already ended
                slot => {
                    let previous_tears = slot.as_ref().map_or(0, |s| s.tears_collected);
                    *slot = Some(Session::start(signal, previous_tears));
                    events.push(SessionEvent::Started { max_ticks: signal });
                }
            }
        } else if let Some(session) = self.session.as_mut() {
            if session.ticks_left > 0 {
                session.end();
                events.push(SessionEvent::TimeUp);
            }
        }

        let Some(session) = self.session.as_mut() else {
            return TickReport { view: None, events };
        };

        // 4. What is being collected
        session.collecting_state = if session.phase == SessionPhase::Active {
            collecting_state(world, snapshot.collecting, snapshot.location)
        } else {
            CollectingState::NotCollecting
        };

        // 5. Count delta for the overlay
        let delta = snapshot
            .tears_collected
            .saturating_sub(session.tears_collected);
        self.deltas.push(DeltaEvent::new(delta, now));
        let view = session.view(delta);

        // 6. Session over once the player has left the cave
        if session.phase == SessionPhase::Ending && !membership.exterior {
            self.reset();
            events.push(SessionEvent::Reset);
        } else {
            session.ticks_left = signal;
            session.tears_collected = snapshot.tears_collected;
        }

        TickReport {
            view: Some(view),
            events,
        }
    }
}

impl Default for SessionStateTracker {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
