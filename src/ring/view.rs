use serde::{Deserialize, Serialize};

use super::id::RingId;
use crate::error::NodeError;

/// A peer as this node knows it: ring position plus the address used to
/// reach it. The address is the only externally meaningful handle; the id
/// is always re-derivable by hashing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub id: RingId,
    pub addr: String,
}

impl NodeDescriptor {
    pub fn from_addr(addr: impl Into<String>) -> Self {
        let addr = addr.into();
        Self {
            id: RingId::of(&addr),
            addr,
        }
    }
}

/// Descriptor equality is by ring id, never by address string, so that
/// hostname formatting differences cannot split one peer into two.
impl PartialEq for NodeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NodeDescriptor {}

/// This node's view of the ring, recomputed in full on every membership
/// push. `members` is sorted by id and always contains `local`;
/// `successor` and `predecessor` are the neighbors of `local` within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingView {
    pub local: NodeDescriptor,
    pub successor: NodeDescriptor,
    pub predecessor: NodeDescriptor,
    pub members: Vec<NodeDescriptor>,
}

impl RingView {
    /// A freshly started node knows only itself: successor and
    /// predecessor both point back at `local`.
    pub fn bootstrap(local_addr: &str) -> Self {
        let local = NodeDescriptor::from_addr(local_addr);
        Self {
            successor: local.clone(),
            predecessor: local.clone(),
            members: vec![local.clone()],
            local,
        }
    }

    /// Recompute the view from a pushed address list. The local address is
    /// added if the controller omitted it; duplicate ids collapse to one
    /// member. Deterministic in the input set, so repeated pushes of the
    /// same list leave the view unchanged.
    pub fn from_members<I, S>(local_addr: &str, addresses: I) -> Result<Self, NodeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let local = NodeDescriptor::from_addr(local_addr);

        let mut members: Vec<NodeDescriptor> = addresses
            .into_iter()
            .map(|addr| NodeDescriptor::from_addr(addr.as_ref()))
            .collect();
        if members.is_empty() {
            return Err(NodeError::MembershipInvalid(
                "address list is empty".to_string(),
            ));
        }
        if !members.contains(&local) {
            members.push(local.clone());
        }

        members.sort_by_key(|node| node.id);
        members.dedup_by_key(|node| node.id);

        let position = members
            .iter()
            .position(|node| node.id == local.id)
            .expect("local node is always a member");

        let successor = members[(position + 1) % members.len()].clone();
        let predecessor = members[(position + members.len() - 1) % members.len()].clone();

        Ok(Self {
            local,
            successor,
            predecessor,
            members,
        })
    }

    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }

    /// The member owning `id` under the `(predecessor, member]` rule:
    /// the first member at or clockwise-after `id`, wrapping to the
    /// lowest member past the top of the ring.
    pub fn successor_of(&self, id: RingId) -> &NodeDescriptor {
        match self.members.binary_search_by_key(&id, |node| node.id) {
            Ok(exact) => &self.members[exact],
            Err(insertion) if insertion == self.members.len() => &self.members[0],
            Err(insertion) => &self.members[insertion],
        }
    }
}
