//! Core types - platform-independent data structures
//!
//! These types describe what the host client exposes to us and are used
//! throughout the tracker.

use super::constants::{
    TEARS_WIDGET_CHILD_COUNT_TEXT, TEARS_WIDGET_CHILD_TIME_TEXT, TEARS_WIDGET_CHILD_WATER_TEXT,
    TEARS_WIDGET_GROUP_ID,
};

// =============================================================================
// WORLD POINT
// =============================================================================

/// Tile position in world coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorldPoint {
    pub plane: i32,
    pub x: i32,
    pub y: i32,
}

impl WorldPoint {
    pub fn new(plane: i32, x: i32, y: i32) -> Self {
        Self { plane, x, y }
    }

    /// Same plane, shifted by (dx, dy) tiles
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            plane: self.plane,
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

// =============================================================================
// SCREEN BOUNDS
// =============================================================================

/// Screen-space rectangle of a widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Client login state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Starting,
    LoginScreen,
    LoggingIn,
    Loading,
    LoggedIn,
    ConnectionLost,
    Hopping,
}

// =============================================================================
// INTERFACE SLOTS
// =============================================================================

/// The three Tears of Guthix interface widgets we write to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InterfaceSlot {
    /// "Time Left" label, replaced with the tick timer
    TimeText,
    /// "Water Collected" label, replaced with the collecting status
    StatusText,
    /// Tears counter, recolored by the last delta
    CountText,
}

impl InterfaceSlot {
    pub const ALL: [InterfaceSlot; 3] = [
        InterfaceSlot::TimeText,
        InterfaceSlot::StatusText,
        InterfaceSlot::CountText,
    ];

    /// (group, child) widget id in the client
    pub fn widget_id(self) -> (u32, u32) {
        let child = match self {
            InterfaceSlot::TimeText => TEARS_WIDGET_CHILD_TIME_TEXT,
            InterfaceSlot::StatusText => TEARS_WIDGET_CHILD_WATER_TEXT,
            InterfaceSlot::CountText => TEARS_WIDGET_CHILD_COUNT_TEXT,
        };
        (TEARS_WIDGET_GROUP_ID, child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_point_offset() {
        let wp = WorldPoint::new(2, 3255, 9517);
        assert_eq!(wp.offset(1, 0), WorldPoint::new(2, 3256, 9517));
        assert_eq!(wp.offset(0, -1), WorldPoint::new(2, 3255, 9516));
        assert_eq!(wp.offset(0, 0), wp);
    }

    #[test]
    fn test_slot_widget_ids() {
        assert_eq!(InterfaceSlot::TimeText.widget_id(), (276, 17));
        assert_eq!(InterfaceSlot::StatusText.widget_id(), (276, 16));
        assert_eq!(InterfaceSlot::CountText.widget_id(), (276, 19));
    }
}
