//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to an oriented rectangle stored in the world arena
    pub struct RectKey;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<K, T> = SlotMap<K, T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_key_does_not_resolve() {
        let mut map: HandleMap<RectKey, u32> = HandleMap::with_key();
        let first = map.insert(1);
        map.remove(first);
        let second = map.insert(2);

        assert!(map.get(first).is_none());
        assert_eq!(map.get(second), Some(&2));
    }
}
