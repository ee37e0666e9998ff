use crate::ring::id::RING_BITS;
use crate::ring::view::{NodeDescriptor, RingView};

/// Routing table with one entry per identifier bit: entry `i` is the node
/// responsible for `local + 2^i (mod 2^m)`. On small rings many intervals
/// share an owner, so consecutive duplicate entries are normal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerTable {
    entries: Vec<NodeDescriptor>,
}

impl FingerTable {
    /// Resolve every finger start against the given view. Entry 0 always
    /// equals the view's successor, since the interval starting at
    /// `local + 1` belongs to the immediate successor by definition.
    pub fn build(view: &RingView) -> Self {
        let entries = (0..RING_BITS)
            .map(|i| view.successor_of(view.local.id.finger_start(i)).clone())
            .collect();
        Self { entries }
    }

    pub fn entry(&self, i: usize) -> &NodeDescriptor {
        &self.entries[i]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from the most distant finger down to the closest, the scan
    /// order used by closest-preceding-node selection.
    pub fn iter_descending(&self) -> impl Iterator<Item = &NodeDescriptor> {
        self.entries.iter().rev()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeDescriptor> {
        self.entries.iter()
    }
}
