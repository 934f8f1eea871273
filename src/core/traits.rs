//! Core traits - abstractions over the host client
//!
//! These traits define everything we read from and write to the game client.
//! The host integration implements them; for testing, mock implementations
//! are provided.

use super::color::Color;
use super::overlay::FloatingText;
use super::types::{Bounds, GameState, InterfaceSlot, WorldPoint};

// =============================================================================
// SIGNAL READER
// =============================================================================

/// Read the raw per-tick signals exposed by the client
pub trait SignalReader {
    /// Current login state
    fn game_state(&self) -> GameState;

    /// Monotonic tick counter, used for flash parity
    fn tick_count(&self) -> u32;

    /// Read a varbit value (0 if unset)
    fn varbit_value(&self, varbit: u32) -> i32;
}

// =============================================================================
// WORLD READER
// =============================================================================

/// Query the local player's surroundings
pub trait WorldReader {
    /// Local player tile
    ///
    /// Returns None if there is no local player or it has no world position
    fn local_player_location(&self) -> Option<WorldPoint>;

    /// Id of the decorative object on a tile
    ///
    /// Returns None if the tile is outside the loaded scene or holds nothing
    fn decorative_object_at(&self, point: WorldPoint) -> Option<u32>;
}

// =============================================================================
// INTERFACE WIDGETS
// =============================================================================

/// Write access to the minigame interface widgets
///
/// Every method reports whether the slot exists; absent slots are not an error.
pub trait InterfaceWidgets {
    /// Set a slot's text. Returns false if the slot is not loaded
    fn set_text(&mut self, slot: InterfaceSlot, text: &str) -> bool;

    /// Set a slot's text color. Returns false if the slot is not loaded
    fn set_text_color(&mut self, slot: InterfaceSlot, color: Color) -> bool;

    /// Current screen bounds of a slot
    fn bounds(&self, slot: InterfaceSlot) -> Option<Bounds>;
}

// =============================================================================
// OVERLAY CANVAS
// =============================================================================

/// Draw surface for the +/- overlay, valid for one render pass
pub trait OverlayCanvas {
    fn draw_text(&mut self, text: &FloatingText);
}

// =============================================================================
// TEST MOCKS
// =============================================================================

#[cfg(test)]
pub mod mocks {
    use super::*;
    use crate::core::constants::{VARBIT_COLLECTING, VARBIT_TEARS_COLLECTED, VARBIT_TICKS_LEFT};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// Mock client implementing both SignalReader and WorldReader
    pub struct MockClient {
        pub game_state: Cell<GameState>,
        pub tick_count: Cell<u32>,
        pub varbits: RefCell<HashMap<u32, i32>>,
        pub location: Cell<Option<WorldPoint>>,
        pub objects: RefCell<HashMap<WorldPoint, u32>>,
        /// Every tile passed to decorative_object_at, in call order
        pub object_queries: RefCell<Vec<WorldPoint>>,
    }

    impl MockClient {
        /// Logged in, tick 0, nowhere
        pub fn new() -> Self {
            Self {
                game_state: Cell::new(GameState::LoggedIn),
                tick_count: Cell::new(0),
                varbits: RefCell::new(HashMap::new()),
                location: Cell::new(None),
                objects: RefCell::new(HashMap::new()),
                object_queries: RefCell::new(Vec::new()),
            }
        }

        pub fn set_signals(&self, ticks_left: i32, tears_collected: i32, collecting: bool) {
            let mut varbits = self.varbits.borrow_mut();
            varbits.insert(VARBIT_TICKS_LEFT, ticks_left);
            varbits.insert(VARBIT_TEARS_COLLECTED, tears_collected);
            varbits.insert(VARBIT_COLLECTING, collecting as i32);
        }

        pub fn set_ticks_left(&self, ticks_left: i32) {
            self.varbits
                .borrow_mut()
                .insert(VARBIT_TICKS_LEFT, ticks_left);
        }

        pub fn set_tears_collected(&self, tears: i32) {
            self.varbits
                .borrow_mut()
                .insert(VARBIT_TEARS_COLLECTED, tears);
        }

        pub fn set_collecting(&self, collecting: bool) {
            self.varbits
                .borrow_mut()
                .insert(VARBIT_COLLECTING, collecting as i32);
        }

        pub fn set_location(&self, location: Option<WorldPoint>) {
            self.location.set(location);
        }

        pub fn place_object(&self, point: WorldPoint, id: u32) {
            self.objects.borrow_mut().insert(point, id);
        }

        pub fn advance_tick(&self) {
            self.tick_count.set(self.tick_count.get() + 1);
        }
    }

    impl Default for MockClient {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SignalReader for MockClient {
        fn game_state(&self) -> GameState {
            self.game_state.get()
        }

        fn tick_count(&self) -> u32 {
            self.tick_count.get()
        }

        fn varbit_value(&self, varbit: u32) -> i32 {
            self.varbits.borrow().get(&varbit).copied().unwrap_or(0)
        }
    }

    impl WorldReader for MockClient {
        fn local_player_location(&self) -> Option<WorldPoint> {
            self.location.get()
        }

        fn decorative_object_at(&self, point: WorldPoint) -> Option<u32> {
            self.object_queries.borrow_mut().push(point);
            self.objects.borrow().get(&point).copied()
        }
    }

    /// State of one mock widget
    #[derive(Debug, Clone, PartialEq)]
    pub struct MockWidget {
        pub text: String,
        pub color: Color,
        pub bounds: Bounds,
    }

    /// Mock interface recording every write
    pub struct MockWidgets {
        pub slots: HashMap<InterfaceSlot, MockWidget>,
        pub writes: usize,
    }

    impl MockWidgets {
        /// All three slots loaded with the client's default texts
        pub fn new() -> Self {
            let mut slots = HashMap::new();
            for slot in InterfaceSlot::ALL {
                let (_, child) = slot.widget_id();
                let text = match slot {
                    InterfaceSlot::TimeText => "Time Left",
                    InterfaceSlot::StatusText => "Water Collected",
                    InterfaceSlot::CountText => "0",
                };
                slots.insert(
                    slot,
                    MockWidget {
                        text: text.to_string(),
                        color: Color::YELLOW,
                        bounds: Bounds::new(20, child as i32 * 10, 40, 12),
                    },
                );
            }
            Self { slots, writes: 0 }
        }

        /// No interface loaded at all
        pub fn empty() -> Self {
            Self {
                slots: HashMap::new(),
                writes: 0,
            }
        }

        pub fn without(mut self, slot: InterfaceSlot) -> Self {
            self.slots.remove(&slot);
            self
        }

        pub fn text(&self, slot: InterfaceSlot) -> Option<&str> {
            self.slots.get(&slot).map(|w| w.text.as_str())
        }

        pub fn color(&self, slot: InterfaceSlot) -> Option<Color> {
            self.slots.get(&slot).map(|w| w.color)
        }

        pub fn set_bounds(&mut self, slot: InterfaceSlot, bounds: Bounds) {
            if let Some(widget) = self.slots.get_mut(&slot) {
                widget.bounds = bounds;
            }
        }
    }

    impl Default for MockWidgets {
        fn default() -> Self {
            Self::new()
        }
    }

    impl InterfaceWidgets for MockWidgets {
        fn set_text(&mut self, slot: InterfaceSlot, text: &str) -> bool {
            match self.slots.get_mut(&slot) {
                Some(widget) => {
                    widget.text = text.to_string();
                    self.writes += 1;
                    true
                }
                None => false,
            }
        }

        fn set_text_color(&mut self, slot: InterfaceSlot, color: Color) -> bool {
            match self.slots.get_mut(&slot) {
                Some(widget) => {
                    widget.color = color;
                    self.writes += 1;
                    true
                }
                None => false,
            }
        }

        fn bounds(&self, slot: InterfaceSlot) -> Option<Bounds> {
            self.slots.get(&slot).map(|w| w.bounds)
        }
    }

    /// Mock canvas collecting everything drawn
    #[derive(Default)]
    pub struct MockCanvas {
        pub drawn: Vec<FloatingText>,
    }

    impl OverlayCanvas for MockCanvas {
        fn draw_text(&mut self, text: &FloatingText) {
            self.drawn.push(text.clone());
        }
    }
}
