//! Node Error Types
//!
//! Every public operation returns one of these tagged kinds instead of
//! letting transport or lookup failures escape as panics. A node that
//! cannot reach a peer keeps serving everything it can answer itself.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    /// The key is absent at the node that owns or holds it.
    #[error("key not found")]
    NotFound,

    /// Transport-level failure (timeout, refused connection, malformed
    /// peer response) while relaying a request one hop.
    #[error("forwarding to {peer} failed: {reason}")]
    ForwardingFailed { peer: String, reason: String },

    /// Membership update received an empty or unusable address set.
    #[error("invalid membership update: {0}")]
    MembershipInvalid(String),
}

impl NodeError {
    pub fn forwarding(peer: impl Into<String>, reason: impl ToString) -> Self {
        Self::ForwardingFailed {
            peer: peer.into(),
            reason: reason.to_string(),
        }
    }
}
