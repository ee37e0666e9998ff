//! Local Key-Value Storage
//!
//! The in-memory slice of the DHT this node is responsible for. Keys are
//! stored under their ring id, values as opaque bytes. Last write wins,
//! entries live for the process lifetime, and nothing migrates on
//! membership changes (rebalancing is an explicit non-goal).

pub mod store;
