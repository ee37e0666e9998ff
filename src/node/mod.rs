//! DHT Node Engine & HTTP Surface
//!
//! Composes the ring view, finger table, local store, and peer client into
//! one node instance serving the put/get/membership protocol.
//!
//! ## Core Mechanisms
//! - **Ownership-first routing**: every request starts with the cheap
//!   `(predecessor, self]` interval test; only non-owned keys touch the
//!   finger table.
//! - **Single-hop forwarding**: a non-owner relays a request to exactly one
//!   peer and returns that peer's answer. End-to-end resolution emerges
//!   from each hop repeating the same step, not from one node walking the
//!   whole path.
//! - **Explicit membership**: the ring changes only when a controller
//!   pushes a full address list; there is no join/leave gossip.

pub mod engine;
pub mod handlers;
pub mod protocol;
