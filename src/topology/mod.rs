//! Network topology module.
//!
//! This module contains the static topology data model: switches, hosts and
//! the undirected links between them, the builder that assembles them, and
//! the invariant checks run before a topology is handed to a driver.

pub mod builder;
pub mod graph;
pub mod types;
pub mod validation;

// Re-export key types for easier access
pub use builder::TopologyBuilder;
pub use graph::Topology;
pub use types::{switch_index, DatapathId, Endpoint, Host, Link, Node, NodeId, NodeKind, Switch};
pub use validation::validate_topology;
