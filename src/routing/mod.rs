//! Finger Table & Lookup Engine
//!
//! Derives an O(log N)-sized routing table from the ring view and answers
//! the two questions every request needs: "do I own this key?" and
//! "which peer is the next hop toward its owner?".
//!
//! ## Core Concepts
//! - **FingerTable**: one entry per identifier bit, entry `i` holding the
//!   node responsible for `self + 2^i`. Rebuilt whole on every membership
//!   change, never patched in place.
//! - **RoutingState**: an immutable (view, fingers) pair published as a
//!   single unit, so no lookup ever sees a new view with stale fingers.

pub mod lookup;
pub mod table;

#[cfg(test)]
mod tests;
