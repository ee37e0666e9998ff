//! Identifier Space & Ring View
//!
//! Places node addresses and data keys on the same logical ring via
//! consistent hashing, and maintains this node's view of the ring:
//! its own position, its successor and predecessor, and the sorted
//! membership snapshot they were derived from.
//!
//! ## Core Concepts
//! - **RingId**: a fixed-width coordinate on the modulo-2^m identifier
//!   circle, produced by hashing a string. Keys and node addresses hash
//!   with the same function, which is what makes routing and storage agree.
//! - **RingView**: successor/predecessor bookkeeping, recomputed in full
//!   whenever the external control plane pushes a new member list. There
//!   is no gossip and no background stabilization in this design.

pub mod id;
pub mod view;
