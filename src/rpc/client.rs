use std::time::Duration;

use async_trait::async_trait;

use crate::error::NodeError;
use crate::node::protocol::{PutResponse, ENDPOINT_STORAGE};
use crate::ring::view::NodeDescriptor;

/// Upper bound on a single forwarded call. Exceeding it surfaces as
/// `ForwardingFailed`; there is no retry and no re-routing around the
/// unreachable peer.
pub const FORWARD_TIMEOUT: Duration = Duration::from_secs(5);

/// The peer's acknowledgment of a forwarded put, relayed verbatim to the
/// original caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerPutReply {
    pub message: String,
}

/// Outbound put/get against one peer. Implementations perform exactly one
/// hop; any continuation of the lookup happens at the receiving node.
#[async_trait]
pub trait PeerClient: Send + Sync {
    async fn put(
        &self,
        peer: &NodeDescriptor,
        key: &str,
        value: &[u8],
    ) -> Result<PeerPutReply, NodeError>;

    /// `Ok(None)` is the peer answering "not found", which is distinct
    /// from a transport failure.
    async fn get(&self, peer: &NodeDescriptor, key: &str) -> Result<Option<Vec<u8>>, NodeError>;
}

/// Production client: the node protocol's storage endpoints over HTTP,
/// with the bounded timeout applied per request.
pub struct HttpPeerClient {
    http_client: reqwest::Client,
}

impl HttpPeerClient {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }

    fn storage_url(peer: &NodeDescriptor, key: &str) -> String {
        format!("http://{}{}/{}", peer.addr, ENDPOINT_STORAGE, key)
    }
}

impl Default for HttpPeerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PeerClient for HttpPeerClient {
    async fn put(
        &self,
        peer: &NodeDescriptor,
        key: &str,
        value: &[u8],
    ) -> Result<PeerPutReply, NodeError> {
        let response = self
            .http_client
            .put(Self::storage_url(peer, key))
            .body(value.to_vec())
            .timeout(FORWARD_TIMEOUT)
            .send()
            .await
            .map_err(|e| NodeError::forwarding(&peer.addr, e))?;

        if !response.status().is_success() {
            return Err(NodeError::forwarding(
                &peer.addr,
                format!("peer answered {}", response.status()),
            ));
        }

        let ack: PutResponse = response
            .json()
            .await
            .map_err(|e| NodeError::forwarding(&peer.addr, e))?;

        Ok(PeerPutReply {
            message: ack.message,
        })
    }

    async fn get(&self, peer: &NodeDescriptor, key: &str) -> Result<Option<Vec<u8>>, NodeError> {
        let response = self
            .http_client
            .get(Self::storage_url(peer, key))
            .timeout(FORWARD_TIMEOUT)
            .send()
            .await
            .map_err(|e| NodeError::forwarding(&peer.addr, e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(NodeError::forwarding(
                &peer.addr,
                format!("peer answered {}", response.status()),
            ));
        }

        let value = response
            .bytes()
            .await
            .map_err(|e| NodeError::forwarding(&peer.addr, e))?;

        Ok(Some(value.to_vec()))
    }
}
