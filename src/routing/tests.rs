//! Finger Table & Lookup Tests
//!
//! Validates finger construction against brute-force resolution and the
//! ownership / next-hop decisions, with hand-placed ids for the
//! wrap-around cases hashing cannot reliably produce.

#[cfg(test)]
mod tests {
    use crate::ring::id::{RingId, RING_BITS};
    use crate::ring::view::{NodeDescriptor, RingView};
    use crate::routing::lookup::RoutingState;
    use crate::routing::table::FingerTable;

    fn desc(id: u64) -> NodeDescriptor {
        NodeDescriptor {
            id: RingId(id),
            addr: format!("node-{:x}", id),
        }
    }

    /// Ring view with exact ids, as the node at `local` would compute it.
    fn view_of(ids: &[u64], local: u64) -> RingView {
        let mut members: Vec<NodeDescriptor> = ids.iter().map(|&id| desc(id)).collect();
        members.sort_by_key(|node| node.id);
        let position = members.iter().position(|node| node.id.0 == local).unwrap();
        let len = members.len();
        RingView {
            local: members[position].clone(),
            successor: members[(position + 1) % len].clone(),
            predecessor: members[(position + len - 1) % len].clone(),
            members,
        }
    }

    /// Reference resolution: smallest member id at or clockwise-after
    /// `id`, wrapping to the smallest member overall.
    fn brute_force_successor(members: &[NodeDescriptor], id: RingId) -> NodeDescriptor {
        members
            .iter()
            .filter(|node| node.id >= id)
            .min_by_key(|node| node.id)
            .or_else(|| members.iter().min_by_key(|node| node.id))
            .unwrap()
            .clone()
    }

    // ============================================================
    // FINGER TABLE TESTS
    // ============================================================

    #[test]
    fn test_first_finger_is_the_successor() {
        for n in [2, 3, 5, 9] {
            let addrs: Vec<String> = (0..n).map(|i| format!("10.0.0.{}:4000", i)).collect();
            for addr in &addrs {
                let view = RingView::from_members(addr, addrs.clone()).unwrap();
                let fingers = FingerTable::build(&view);
                assert_eq!(
                    fingers.entry(0),
                    &view.successor,
                    "finger[0] must be the successor at {}",
                    addr
                );
            }
        }
    }

    #[test]
    fn test_fingers_match_brute_force_resolution() {
        let ids = [10u64, 1 << 20, 1 << 40, u64::MAX - 100];
        let view = view_of(&ids, 10);
        let fingers = FingerTable::build(&view);

        assert_eq!(fingers.len(), RING_BITS);
        for i in 0..RING_BITS {
            let start = view.local.id.finger_start(i);
            assert_eq!(
                fingers.entry(i),
                &brute_force_successor(&view.members, start),
                "finger {} (start {}) resolved wrong",
                i,
                start
            );
        }
    }

    #[test]
    fn test_small_ring_collapses_to_duplicate_entries() {
        let view = view_of(&[10, 20], 10);
        let fingers = FingerTable::build(&view);

        // Only two distinct targets can ever appear.
        assert!(fingers
            .iter()
            .all(|node| node.id.0 == 10 || node.id.0 == 20));
        // The near fingers all land on the immediate successor.
        assert_eq!(fingers.entry(0).id.0, 20);
        assert_eq!(fingers.entry(1).id.0, 20);
        assert_eq!(fingers.entry(2).id.0, 20);
    }

    #[test]
    fn test_singleton_fingers_all_point_home() {
        let view = RingView::bootstrap("127.0.0.1:3000");
        let fingers = FingerTable::build(&view);
        assert!(fingers.iter().all(|node| node == &view.local));
    }

    // ============================================================
    // OWNERSHIP TESTS
    // ============================================================

    #[test]
    fn test_owns_half_open_interval() {
        let state = RoutingState::new(view_of(&[100, 200, 300], 200));
        assert!(state.owns(RingId(101)));
        assert!(state.owns(RingId(200)), "own id is included");
        assert!(!state.owns(RingId(100)), "predecessor id is excluded");
        assert!(!state.owns(RingId(201)));
        assert!(!state.owns(RingId(300)));
    }

    #[test]
    fn test_owns_across_the_wrap_point() {
        // Lowest node of the ring owns everything past the highest node,
        // through zero, up to itself.
        let state = RoutingState::new(view_of(&[50, 1 << 30, u64::MAX - 50], 50));
        assert!(state.owns(RingId(u64::MAX - 49)));
        assert!(state.owns(RingId(u64::MAX)));
        assert!(state.owns(RingId(0)));
        assert!(state.owns(RingId(50)));
        assert!(!state.owns(RingId(51)));
        assert!(!state.owns(RingId(u64::MAX - 50)));
    }

    #[test]
    fn test_singleton_owns_everything() {
        let state = RoutingState::new(RingView::bootstrap("127.0.0.1:3000"));
        for id in [0, 1, u64::MAX / 2, u64::MAX] {
            assert!(state.owns(RingId(id)));
        }
    }

    // ============================================================
    // LOOKUP TESTS
    // ============================================================

    #[test]
    fn test_find_successor_returns_self_when_owner() {
        let state = RoutingState::new(view_of(&[100, 200, 300], 200));
        assert_eq!(state.find_successor(RingId(150)), &state.ring.local);
        assert_eq!(state.find_successor(RingId(200)), &state.ring.local);
    }

    #[test]
    fn test_next_hop_is_closest_preceding_finger() {
        // From node 100, the best hop toward 2^39 is node 1000: the
        // furthest known peer still strictly before the key.
        let state = RoutingState::new(view_of(&[100, 1000, 1 << 40], 100));
        let key = RingId(1 << 39);
        assert!(!state.owns(key));
        assert_eq!(state.closest_preceding_node(key).id.0, 1000);
        assert_eq!(state.find_successor(key).id.0, 1000);
    }

    #[test]
    fn test_next_hop_falls_back_to_successor() {
        // No member lies strictly between 100 and 150, so the scan finds
        // no qualifying finger and the successor carries the lookup.
        let state = RoutingState::new(view_of(&[100, 1 << 32, 1 << 63], 100));
        let key = RingId(150);
        assert!(!state.owns(key));
        assert_eq!(state.closest_preceding_node(key), &state.ring.successor);
    }

    #[test]
    fn test_singleton_next_hop_is_self() {
        let state = RoutingState::new(RingView::bootstrap("127.0.0.1:3000"));
        let key = RingId::of("anything");
        assert_eq!(state.closest_preceding_node(key), &state.ring.local);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let ids = [7u64, 1 << 16, 1 << 48];
        let first = FingerTable::build(&view_of(&ids, 7));
        let second = FingerTable::build(&view_of(&ids, 7));
        assert_eq!(first, second);
    }
}
