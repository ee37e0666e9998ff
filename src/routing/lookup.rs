use super::table::FingerTable;
use crate::ring::id::RingId;
use crate::ring::view::{NodeDescriptor, RingView};

/// The ring view and the finger table derived from it, frozen together.
///
/// Membership updates build a fresh `RoutingState` off to the side and
/// publish it with one pointer swap, so a lookup in flight observes either
/// the entirely-old or the entirely-new pair, never a mix.
#[derive(Debug, Clone)]
pub struct RoutingState {
    pub ring: RingView,
    pub fingers: FingerTable,
}

impl RoutingState {
    pub fn new(ring: RingView) -> Self {
        let fingers = FingerTable::build(&ring);
        Self { ring, fingers }
    }

    /// Ownership test: this node owns `key_id` iff it lies in the
    /// wrap-aware half-open interval `(predecessor, local]`. A singleton
    /// ring (predecessor == local) owns the whole identifier space.
    pub fn owns(&self, key_id: RingId) -> bool {
        if self.ring.predecessor.id == self.ring.local.id {
            return true;
        }
        key_id.in_open_closed(self.ring.predecessor.id, self.ring.local.id)
    }

    /// One-hop successor resolution: the local node when it owns the key,
    /// otherwise the next hop toward the owner.
    pub fn find_successor(&self, key_id: RingId) -> &NodeDescriptor {
        if self.owns(key_id) {
            &self.ring.local
        } else {
            self.closest_preceding_node(key_id)
        }
    }

    /// Closest-preceding-finger scan: walk the table from the most distant
    /// entry down and take the first peer strictly between the local id
    /// and the key. Falling back to the successor keeps the lookup moving
    /// clockwise even when no finger qualifies. This scan is what makes a
    /// full recursive resolution take O(log N) hops.
    pub fn closest_preceding_node(&self, key_id: RingId) -> &NodeDescriptor {
        for finger in self.fingers.iter_descending() {
            if finger.id.in_open_open(self.ring.local.id, key_id) {
                return finger;
            }
        }
        &self.ring.successor
    }
}
