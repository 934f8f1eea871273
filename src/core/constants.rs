//! Game constants - varbits, geofence bounds, widget ids, object ids, timings
//!
//! All magic numbers from the client that we need for the Tears of Guthix
//! interface. Colors live in the `color` module.

use num_enum::TryFromPrimitive;
use std::time::Duration;

// =============================================================================
// VARBITS
// =============================================================================

/// Ticks remaining in the current minigame (0 = no minigame)
pub const VARBIT_TICKS_LEFT: u32 = 5099;

/// Tears collected so far in the current minigame
pub const VARBIT_TEARS_COLLECTED: u32 = 455;

/// Non-zero while the player is collecting from a weeping wall
pub const VARBIT_COLLECTING: u32 = 453;

// =============================================================================
// SESSION TIMINGS
// =============================================================================

/// Ticks between the minigame signal appearing and collection actually starting
/// (Juna's tail animation plus the walk into the cave)
pub const TICKS_FROM_JUNAS_TAIL: u32 = 9;

/// Below this many starting ticks, show "Starting in: N" instead of "Get Ready!"
pub const TICKS_FOR_START_TIMER: u32 = 6;

// =============================================================================
// GEOFENCE
// =============================================================================

/// Plane of the weeping wall cave
pub const TEARS_PLANE: i32 = 2;

pub const TEARS_MIN_X: i32 = 3251;
pub const TEARS_MAX_X: i32 = 3260;
pub const TEARS_MIN_Y: i32 = 9515;
pub const TEARS_MAX_Y: i32 = 9519;

/// Tile offsets checked for a weeping wall object, in scan order.
///
/// There are no walls on the western side of the cave, so dx = -1 is skipped.
pub const ADJACENT_OFFSETS: [(i32, i32); 3] = [(1, 0), (0, 1), (0, -1)];

// =============================================================================
// INTERFACE
// =============================================================================

/// Widget group of the Tears of Guthix interface
pub const TEARS_WIDGET_GROUP_ID: u32 = 276;

pub const TEARS_WIDGET_CHILD_WATER_TEXT: u32 = 16;
pub const TEARS_WIDGET_CHILD_TIME_TEXT: u32 = 17;
pub const TEARS_WIDGET_CHILD_COUNT_TEXT: u32 = 19;

/// Default text of the time slot, restored on shutdown
pub const DEFAULT_TIME_TEXT: &str = "Time Left";

/// Default text of the status slot, restored on shutdown
pub const DEFAULT_WATER_TEXT: &str = "Water Collected";

// =============================================================================
// DELTA OVERLAY
// =============================================================================

/// Number of recent count changes kept for the +/- overlay
pub const DELTA_BUFFER_CAPACITY: usize = 10;

/// How long a +/- indicator stays on screen
pub const DELTA_ANIMATION_WINDOW: Duration = Duration::from_millis(2000);

/// How many counter heights an indicator rises over its lifetime
pub const DELTA_RISE_HEIGHTS: f64 = 4.0;

/// Horizontal gap between the counter's right edge and the indicator
pub const DELTA_START_OFFSET_X: i32 = 10;

/// Vertical offset from the counter's bottom edge
pub const DELTA_START_OFFSET_Y: i32 = 0;

// =============================================================================
// WEEPING WALL OBJECTS
// =============================================================================

/// Kind of tears a weeping wall object is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TearsKind {
    /// Wall segment with no tears
    Absence,
    Blue,
    Green,
}

/// Decorative object ids of weeping wall segments
///
/// Each kind exists twice (the cave has two wall models).
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum TearsObject {
    BlueTears = 6661,
    GreenTears = 6662,
    AbsenceOfTears = 6663,
    BlueTears6665 = 6665,
    GreenTears6666 = 6666,
    AbsenceOfTears6667 = 6667,
}

impl TearsObject {
    /// Try to match a raw decorative object id
    pub fn from_object_id(id: u32) -> Option<Self> {
        Self::try_from(id).ok()
    }

    /// Which set of tears this object belongs to
    pub fn kind(self) -> TearsKind {
        match self {
            TearsObject::AbsenceOfTears | TearsObject::AbsenceOfTears6667 => TearsKind::Absence,
            TearsObject::BlueTears | TearsObject::BlueTears6665 => TearsKind::Blue,
            TearsObject::GreenTears | TearsObject::GreenTears6666 => TearsKind::Green,
        }
    }

    /// Get the raw object id
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}
