//! Collision group bitmask for filtering collision detection
//!
//! Groups are eight user-defined bits. Each entity carries an *active* set
//! (groups it tests against others) and a *passive* set (groups others test
//! against it). A pair matches on `a.active & b.passive`; the engine's
//! `solids` mask decides which matched bits produce physical separation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags::bitflags! {
    /// Eight collision group flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CollisionGroups: u8 {
        /// Group bit 0
        const GROUP_0 = 1 << 0;
        /// Group bit 1
        const GROUP_1 = 1 << 1;
        /// Group bit 2
        const GROUP_2 = 1 << 2;
        /// Group bit 3
        const GROUP_3 = 1 << 3;
        /// Group bit 4
        const GROUP_4 = 1 << 4;
        /// Group bit 5
        const GROUP_5 = 1 << 5;
        /// Group bit 6
        const GROUP_6 = 1 << 6;
        /// Group bit 7
        const GROUP_7 = 1 << 7;
    }
}

impl CollisionGroups {
    /// Groups matched when `active` tests against `passive`
    ///
    /// # Example
    /// ```
    /// use collide2d::physics::CollisionGroups;
    ///
    /// let player_active = CollisionGroups::GROUP_0 | CollisionGroups::GROUP_2;
    /// let wall_passive = CollisionGroups::GROUP_0;
    ///
    /// let matched = CollisionGroups::matched(player_active, wall_passive);
    /// assert_eq!(matched, CollisionGroups::GROUP_0);
    /// ```
    pub fn matched(active: Self, passive: Self) -> Self {
        active & passive
    }

    /// Helper to create a mask from multiple groups
    pub fn mask(groups: &[Self]) -> Self {
        groups.iter().fold(Self::empty(), |acc, &group| acc | group)
    }
}

// Groups serialize as their raw bits so config files stay compact.
impl Serialize for CollisionGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for CollisionGroups {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u8::deserialize(deserializer).map(Self::from_bits_retain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matched_is_one_way() {
        let active = CollisionGroups::GROUP_0;
        let passive = CollisionGroups::GROUP_1;

        assert!(CollisionGroups::matched(active, passive).is_empty());
        assert_eq!(
            CollisionGroups::matched(active | passive, passive),
            CollisionGroups::GROUP_1
        );
    }

    #[test]
    fn test_mask_creation() {
        let mask = CollisionGroups::mask(&[
            CollisionGroups::GROUP_0,
            CollisionGroups::GROUP_3,
            CollisionGroups::GROUP_7,
        ]);

        assert_eq!(mask.bits(), 0b1000_1001);
        assert_eq!(CollisionGroups::all().bits(), 0xFF);
    }

    #[test]
    fn test_groups_round_trip_as_bits() {
        let groups = CollisionGroups::GROUP_1 | CollisionGroups::GROUP_4;
        let text = ron::to_string(&groups).unwrap();
        assert_eq!(text, "18");

        let parsed: CollisionGroups = ron::from_str(&text).unwrap();
        assert_eq!(parsed, groups);
    }
}
