//! Chord-style DHT Node Library
//!
//! This library crate defines the core modules of a peer-to-peer key-value
//! node. Keys and node addresses share one consistent-hash identifier
//! space; each node serves the keys in its ring interval and relays
//! everything else one hop toward the owner.
//!
//! ## Architecture Modules
//! The system is composed of five loosely coupled subsystems:
//!
//! - **`ring`**: the identifier space (SHA-1 derived ring coordinates with
//!   wrap-aware interval tests) and the node's membership view: successor,
//!   predecessor, and the sorted member snapshot they came from.
//! - **`routing`**: the finger table derived from the ring view and the
//!   lookup engine answering ownership and next-hop questions in
//!   O(log N) hops across a full resolution.
//! - **`storage`**: the concurrent in-memory key-value store holding this
//!   node's slice of the data.
//! - **`node`**: the engine tying the pieces together, plus the HTTP
//!   handlers and wire protocol shared by clients and peers.
//! - **`rpc`**: the outbound peer client used for single-hop forwarding,
//!   behind a trait so rings can be simulated in tests.

pub mod error;
pub mod node;
pub mod ring;
pub mod routing;
pub mod rpc;
pub mod storage;
