//! Specialized collection types
//!
//! Scene nodes and signal subscribers live in slot maps so that handles stay
//! valid while other entries come and go.

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a node in a [`crate::scene::Scene`]
    pub struct NodeId;

    /// Stable handle to a subscriber registered on a [`crate::signal::Signal`]
    pub struct SlotKey;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<K, T> = SlotMap<K, T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_handles_are_not_reused() {
        let mut map: HandleMap<NodeId, &str> = HandleMap::with_key();
        let first = map.insert("first");
        map.remove(first);
        let second = map.insert("second");

        assert_ne!(first, second);
        assert!(map.get(first).is_none());
        assert_eq!(map.get(second), Some(&"second"));
    }
}
