use dashmap::DashMap;

use crate::ring::id::RingId;

/// Concurrent key-value store keyed by ring id. DashMap shards its locks,
/// so reads and writes on distinct keys do not serialize; concurrent
/// writes to the same key resolve to whichever completes last.
#[derive(Debug, Default)]
pub struct KvStore {
    entries: DashMap<RingId, Vec<u8>>,
}

impl KvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns true when a previous value was
    /// destroyed by this write.
    pub fn insert(&self, key_id: RingId, value: Vec<u8>) -> bool {
        self.entries.insert(key_id, value).is_some()
    }

    pub fn get(&self, key_id: RingId) -> Option<Vec<u8>> {
        self.entries.get(&key_id).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, key_id: RingId) -> bool {
        self.entries.contains_key(&key_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
