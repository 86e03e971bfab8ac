use std::collections::HashMap;

use parking_lot::RwLock;

use crate::entities::CoordinateKey;

/// Resolved addresses by the exact coordinates they were resolved for.
///
/// Entries are never evicted. Only successful lookups are stored.
#[derive(Debug, Default)]
pub struct AddressCache {
    entries: RwLock<HashMap<CoordinateKey, String>>,
}

impl AddressCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CoordinateKey) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    pub fn put(&self, key: CoordinateKey, address: String) {
        self.entries.write().insert(key, address);
    }

    pub fn contains(&self, key: &CoordinateKey) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
