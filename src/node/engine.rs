use std::sync::Arc;

use tokio::sync::RwLock;

use super::protocol::{FingerEntry, RingStateResponse};
use crate::error::NodeError;
use crate::ring::id::RingId;
use crate::ring::view::{NodeDescriptor, RingView};
use crate::routing::lookup::RoutingState;
use crate::rpc::PeerClient;
use crate::storage::store::KvStore;

/// Outcome of a successful put as seen by the contacted node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutReceipt {
    /// This node owns the key and stored the value itself.
    Stored { message: String },
    /// The value was handed one hop toward the owner; `message` is the
    /// storing peer's receipt, relayed verbatim.
    Forwarded { via: String, message: String },
}

impl PutReceipt {
    pub fn message(&self) -> &str {
        match self {
            PutReceipt::Stored { message } => message,
            PutReceipt::Forwarded { message, .. } => message,
        }
    }
}

/// One DHT node: ring position, routing state, local storage, and the
/// client used to reach peers. All state lives inside the instance, so
/// tests can run a whole ring of nodes in a single process.
pub struct DhtNode {
    local: NodeDescriptor,
    routing: RwLock<Arc<RoutingState>>,
    store: KvStore,
    peers: Arc<dyn PeerClient>,
}

impl DhtNode {
    /// A new node starts as a ring of one: successor and predecessor both
    /// itself, owning the entire identifier space.
    pub fn new(local_addr: &str, peers: Arc<dyn PeerClient>) -> Self {
        let view = RingView::bootstrap(local_addr);
        Self {
            local: view.local.clone(),
            routing: RwLock::new(Arc::new(RoutingState::new(view))),
            store: KvStore::new(),
            peers,
        }
    }

    pub fn local(&self) -> &NodeDescriptor {
        &self.local
    }

    /// Snapshot of the current (view, fingers) pair. Holding the returned
    /// Arc keeps one consistent generation for the whole request even if a
    /// membership update lands mid-flight.
    pub async fn routing(&self) -> Arc<RoutingState> {
        self.routing.read().await.clone()
    }

    /// Replace the ring view from a pushed address list and rebuild the
    /// finger table, publishing both as a single swap. Idempotent: the
    /// same address set always produces the same routing state.
    pub async fn update_membership<S: AsRef<str>>(&self, addresses: &[S]) -> Result<(), NodeError> {
        let view = RingView::from_members(&self.local.addr, addresses)?;
        let next = Arc::new(RoutingState::new(view));

        tracing::info!(
            "Membership updated: {} member(s), successor={}, predecessor={}",
            next.ring.members.len(),
            next.ring.successor.addr,
            next.ring.predecessor.addr,
        );

        *self.routing.write().await = next;
        Ok(())
    }

    /// Store `value` under `key`, locally when this node owns the key's
    /// id, otherwise forwarded one hop toward the owner.
    pub async fn put(&self, key: &str, value: Vec<u8>) -> Result<PutReceipt, NodeError> {
        let key_id = RingId::of(key);
        let routing = self.routing().await;

        if routing.owns(key_id) {
            return Ok(self.store_owned(key, key_id, value));
        }

        let target = routing.closest_preceding_node(key_id).clone();
        if target.id == self.local.id {
            // Degenerate ring: no forward target other than ourselves.
            // Keep the write instead of bouncing it back and forth.
            return Ok(self.store_owned(key, key_id, value));
        }
        drop(routing);

        tracing::debug!("PUT {} (id={}) forwarded to {}", key, key_id, target.addr);
        let reply = self.peers.put(&target, key, &value).await.map_err(|e| {
            tracing::warn!("PUT {} forward to {} failed: {}", key, target.addr, e);
            e
        })?;

        Ok(PutReceipt::Forwarded {
            via: target.addr,
            message: reply.message,
        })
    }

    /// Resolve `key` to its value: local store first, then one forwarded
    /// hop. A miss at the owning node is `NotFound`; a peer that cannot be
    /// reached is `ForwardingFailed`, never conflated with `NotFound`.
    pub async fn get(&self, key: &str) -> Result<Vec<u8>, NodeError> {
        let key_id = RingId::of(key);

        if let Some(value) = self.store.get(key_id) {
            tracing::debug!("GET {} (id={}) served locally", key, key_id);
            return Ok(value);
        }

        let routing = self.routing().await;
        if routing.ring.is_singleton() || routing.owns(key_id) {
            // The key's owner is this node and it has no value for it;
            // forwarding could only loop the request back here.
            return Err(NodeError::NotFound);
        }

        let target = routing.closest_preceding_node(key_id).clone();
        if target.id == self.local.id {
            return Err(NodeError::NotFound);
        }
        drop(routing);

        tracing::debug!("GET {} (id={}) forwarded to {}", key, key_id, target.addr);
        match self.peers.get(&target, key).await {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(NodeError::NotFound),
            Err(e) => {
                tracing::warn!("GET {} forward to {} failed: {}", key, target.addr, e);
                Err(e)
            }
        }
    }

    fn store_owned(&self, key: &str, key_id: RingId, value: Vec<u8>) -> PutReceipt {
        let overwrote = self.store.insert(key_id, value);
        tracing::debug!(
            "PUT {} (id={}) stored locally (overwrote={})",
            key,
            key_id,
            overwrote
        );
        PutReceipt::Stored {
            message: format!("stored key {} at node {}", key, self.local.id),
        }
    }

    /// Current member address list, for the `/network` listing.
    pub async fn member_addresses(&self) -> Vec<String> {
        self.routing()
            .await
            .ring
            .members
            .iter()
            .map(|node| node.addr.clone())
            .collect()
    }

    /// Read-only ring introspection for debugging and tests.
    pub async fn ring_state(&self) -> RingStateResponse {
        let routing = self.routing().await;
        let fingers = (0..routing.fingers.len())
            .map(|i| FingerEntry {
                start: self.local.id.finger_start(i),
                node: routing.fingers.entry(i).clone(),
            })
            .collect();

        RingStateResponse {
            node: self.local.clone(),
            successor: routing.ring.successor.clone(),
            predecessor: routing.ring.predecessor.clone(),
            fingers,
        }
    }

    /// Number of entries held locally (test/debug only).
    pub fn local_entry_count(&self) -> usize {
        self.store.len()
    }
}
