//! Tick snapshot - captures all raw signals at the start of each tick
//!
//! The tracker works from one consistent reading per tick instead of
//! querying the client repeatedly while it decides what to do.

use super::constants::{VARBIT_COLLECTING, VARBIT_TEARS_COLLECTED, VARBIT_TICKS_LEFT};
use super::traits::{SignalReader, WorldReader};
use super::types::{GameState, WorldPoint};

/// A snapshot of the raw signals captured at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSnapshot {
    pub game_state: GameState,
    /// Client tick counter (flash parity)
    pub tick_count: u32,
    /// Minigame ticks remaining, 0 when no minigame is running
    pub ticks_left: u32,
    pub tears_collected: i32,
    /// Collecting varbit is non-zero
    pub collecting: bool,
    /// Local player tile (None if unavailable)
    pub location: Option<WorldPoint>,
}

impl TickSnapshot {
    /// Capture a snapshot of the current client state.
    pub fn capture<S: SignalReader, W: WorldReader>(signals: &S, world: &W) -> Self {
        Self {
            game_state: signals.game_state(),
            tick_count: signals.tick_count(),
            // Negative never happens in practice; treat it as "no session"
            ticks_left: signals.varbit_value(VARBIT_TICKS_LEFT).max(0) as u32,
            tears_collected: signals.varbit_value(VARBIT_TEARS_COLLECTED),
            collecting: signals.varbit_value(VARBIT_COLLECTING) != 0,
            location: world.local_player_location(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.game_state == GameState::LoggedIn
    }

    /// Odd ticks show the alternate color when flashing is enabled
    pub fn is_flash_tick(&self) -> bool {
        self.tick_count % 2 != 0
    }
}
