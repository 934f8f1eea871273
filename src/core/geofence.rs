//! Geofence detection
//!
//! Decides whether the local player is inside the weeping wall cave. The
//! interior excludes the western entry column, where the player stands while
//! Juna's tail animation plays and before the minigame really begins.

use super::constants::{TEARS_MAX_X, TEARS_MAX_Y, TEARS_MIN_X, TEARS_MIN_Y, TEARS_PLANE};
use super::types::WorldPoint;

/// Static rectangular world region (bounds inclusive)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeofenceRegion {
    pub plane: i32,
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

/// The Tears of Guthix cave
pub const TEARS_REGION: GeofenceRegion = GeofenceRegion {
    plane: TEARS_PLANE,
    min_x: TEARS_MIN_X,
    max_x: TEARS_MAX_X,
    min_y: TEARS_MIN_Y,
    max_y: TEARS_MAX_Y,
};

impl GeofenceRegion {
    /// Inclusive bounds test, entry column included
    pub fn contains(&self, point: WorldPoint) -> bool {
        self.test(point, 0)
    }

    /// Strict test excluding the entry column (min_x)
    pub fn contains_interior(&self, point: WorldPoint) -> bool {
        self.test(point, 1)
    }

    fn test(&self, point: WorldPoint, min_x_inset: i32) -> bool {
        point.plane == self.plane
            && point.x >= self.min_x + min_x_inset
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

/// Geofence membership of the local player for one tick
///
/// A missing location is simply "outside".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Membership {
    /// Inside the region, entry column included
    pub exterior: bool,
    /// Inside the region past the entry column
    pub interior: bool,
}

impl Membership {
    pub fn of(region: &GeofenceRegion, location: Option<WorldPoint>) -> Self {
        match location {
            Some(point) => Self {
                exterior: region.contains(point),
                interior: region.contains_interior(point),
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wp(x: i32, y: i32) -> WorldPoint {
        WorldPoint::new(TEARS_PLANE, x, y)
    }

    #[test]
    fn test_contains_corners() {
        assert!(TEARS_REGION.contains(wp(3251, 9515)));
        assert!(TEARS_REGION.contains(wp(3260, 9519)));
        assert!(TEARS_REGION.contains(wp(3251, 9519)));
        assert!(TEARS_REGION.contains(wp(3260, 9515)));
    }

    #[test]
    fn test_contains_just_outside() {
        assert!(!TEARS_REGION.contains(wp(3250, 9517)));
        assert!(!TEARS_REGION.contains(wp(3261, 9517)));
        assert!(!TEARS_REGION.contains(wp(3255, 9514)));
        assert!(!TEARS_REGION.contains(wp(3255, 9520)));
    }

    #[test]
    fn test_wrong_plane() {
        assert!(!TEARS_REGION.contains(WorldPoint::new(0, 3255, 9517)));
        assert!(!TEARS_REGION.contains_interior(WorldPoint::new(1, 3255, 9517)));
    }

    #[test]
    fn test_interior_excludes_entry_column() {
        // Entry column: in the region, not in the interior
        assert!(TEARS_REGION.contains(wp(3251, 9517)));
        assert!(!TEARS_REGION.contains_interior(wp(3251, 9517)));

        // One step in
        assert!(TEARS_REGION.contains_interior(wp(3252, 9517)));

        // Other edges are unchanged
        assert!(TEARS_REGION.contains_interior(wp(3260, 9515)));
        assert!(TEARS_REGION.contains_interior(wp(3260, 9519)));
    }

    #[test]
    fn test_membership_missing_location() {
        let m = Membership::of(&TEARS_REGION, None);
        assert!(!m.exterior);
        assert!(!m.interior);
    }

    #[test]
    fn test_membership_entry_column() {
        let m = Membership::of(&TEARS_REGION, Some(wp(3251, 9516)));
        assert!(m.exterior);
        assert!(!m.interior);
    }
}
