//! Layout masks
//!
//! Layouts describe which scene categories a node belongs to and which ones a
//! component is willing to work with. A component is compatible with a node
//! when their masks intersect.

use bitflags::bitflags;

bitflags! {
    /// Bitmask of scene layout groups
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Layouts: u32 {
        /// No layout group
        const NOTHING = 0;
        /// Default group every new node starts in
        const DEFAULT = 1 << 0;
        /// Debug-only helpers (gizmos, bounding boxes)
        const DEBUG = 1 << 1;
        /// Nodes rendered into the picking pass
        const PICKING = 1 << 2;
        /// Nodes taking part in frustum culling
        const CULLING = 1 << 3;

        // User-defined groups (bits 8-23)
        /// User group 0
        const USER_0 = 1 << 8;
        /// User group 1
        const USER_1 = 1 << 9;
        /// User group 2
        const USER_2 = 1 << 10;
        /// User group 3
        const USER_3 = 1 << 11;
        /// User group 4
        const USER_4 = 1 << 12;
        /// User group 5
        const USER_5 = 1 << 13;
        /// User group 6
        const USER_6 = 1 << 14;
        /// User group 7
        const USER_7 = 1 << 15;
        /// User group 8
        const USER_8 = 1 << 16;
        /// User group 9
        const USER_9 = 1 << 17;
        /// User group 10
        const USER_10 = 1 << 18;
        /// User group 11
        const USER_11 = 1 << 19;
        /// User group 12
        const USER_12 = 1 << 20;
        /// User group 13
        const USER_13 = 1 << 21;
        /// User group 14
        const USER_14 = 1 << 22;
        /// User group 15
        const USER_15 = 1 << 23;

        /// Excluded from ray casting
        const IGNORE_RAYCASTING = 1 << 29;
        /// Never culled
        const IGNORE_CULLING = 1 << 30;
        /// Excluded from picking
        const IGNORE_PICKING = 1 << 31;

        /// Every bit set
        const EVERYTHING = u32::MAX;
    }
}

impl Layouts {
    /// Build a mask from raw bits, keeping bits without a named group
    pub const fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Whether the two masks share at least one group
    pub const fn overlaps(self, other: Self) -> bool {
        self.intersects(other)
    }
}

impl Default for Layouts {
    fn default() -> Self {
        Self::EVERYTHING
    }
}
