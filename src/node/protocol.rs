//! Node Wire Protocol
//!
//! Endpoint paths and DTOs for the HTTP surface. The same put/get contract
//! serves external clients and peer nodes: forwarding a request one hop
//! means calling the next node's public endpoint, so every node is both
//! server and client of this protocol.

use serde::{Deserialize, Serialize};

use crate::ring::id::RingId;
use crate::ring::view::NodeDescriptor;

// --- API Endpoints ---

/// Key-value access; `PUT /storage/:key` with a raw byte body, and
/// `GET /storage/:key` returning raw bytes.
pub const ENDPOINT_STORAGE: &str = "/storage";
/// Membership push (POST) and member listing (GET).
pub const ENDPOINT_NETWORK: &str = "/network";
/// Read-only ring introspection for debugging and tests.
pub const ENDPOINT_RING: &str = "/ring";

// --- Data Transfer Objects ---

/// Membership update pushed by the external control plane whenever the
/// cluster's address list changes.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateMembershipRequest {
    pub nodes: Vec<String>,
}

/// Acknowledgment for a successful put, carrying the storing node's
/// human-readable receipt. A forwarding node relays the peer's message
/// verbatim.
#[derive(Debug, Serialize, Deserialize)]
pub struct PutResponse {
    pub message: String,
}

/// Error payload for 4xx/5xx responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Member address listing (`GET /network`).
#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkResponse {
    pub nodes: Vec<String>,
}

/// One finger table row: the interval start and the peer resolved for it.
#[derive(Debug, Serialize, Deserialize)]
pub struct FingerEntry {
    pub start: RingId,
    pub node: NodeDescriptor,
}

/// Ring introspection (`GET /ring`): this node's descriptor, its
/// neighbors, and the full finger table.
#[derive(Debug, Serialize, Deserialize)]
pub struct RingStateResponse {
    pub node: NodeDescriptor,
    pub successor: NodeDescriptor,
    pub predecessor: NodeDescriptor,
    pub fingers: Vec<FingerEntry>,
}
