//! Adjacent weeping wall scanner
//!
//! Looks at the tiles next to the player and classifies the wall segment
//! being collected from.

use super::constants::{TearsKind, TearsObject, ADJACENT_OFFSETS};
use super::traits::WorldReader;
use super::types::WorldPoint;

/// What the player is currently collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectingState {
    #[default]
    NotCollecting,
    CollectingBlue,
    CollectingGreen,
    EmptyVein,
}

impl From<TearsKind> for CollectingState {
    fn from(kind: TearsKind) -> Self {
        match kind {
            TearsKind::Absence => CollectingState::EmptyVein,
            TearsKind::Blue => CollectingState::CollectingBlue,
            TearsKind::Green => CollectingState::CollectingGreen,
        }
    }
}

/// Classify the wall segment next to `location`.
///
/// Only one wall segment is ever adjacent to the player, so the first match
/// in `ADJACENT_OFFSETS` order wins. Nothing recognizable counts as an empty
/// vein: the player is collecting, so they must be facing a wall.
pub fn scan_adjacent<W: WorldReader>(world: &W, location: WorldPoint) -> CollectingState {
    ADJACENT_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| world.decorative_object_at(location.offset(dx, dy)))
        .find_map(TearsObject::from_object_id)
        .map(|obj| CollectingState::from(obj.kind()))
        .unwrap_or(CollectingState::EmptyVein)
}

/// Collecting state for one tick.
///
/// `NotCollecting` unless the collecting flag is set; a missing location with
/// the flag set is an empty vein.
pub fn collecting_state<W: WorldReader>(
    world: &W,
    collecting: bool,
    location: Option<WorldPoint>,
) -> CollectingState {
    if !collecting {
        return CollectingState::NotCollecting;
    }
    match location {
        Some(location) => scan_adjacent(world, location),
        None => CollectingState::EmptyVein,
    }
}
