//! Peer RPC Client
//!
//! Outbound half of the node protocol: the single-hop put/get calls used
//! when this node is not the owner of a key. Modeled as a trait so the
//! forwarding engine can be exercised against fake peers in tests, and so
//! the one-hop contract is enforced at the seam rather than by call depth.

pub mod client;

pub use client::{HttpPeerClient, PeerClient, PeerPutReply};
