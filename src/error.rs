//! Error types for topology construction and driver configuration.

use std::net::Ipv4Addr;

use crate::topology::DatapathId;

/// Errors raised while building or validating a topology
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("Datapath id {dpid} of switch {name} is already used by switch {existing}")]
    DuplicateDatapathId {
        dpid: DatapathId,
        name: String,
        existing: String,
    },

    #[error("Node name {name} is already registered")]
    DuplicateNode { name: String },

    #[error("Invalid datapath id '{value}': expected 1 to 16 hex digits")]
    InvalidDatapathId { value: String },

    #[error("Switch name '{name}' carries no numeric index")]
    MissingSwitchIndex { name: String },

    #[error("Link endpoint {index} is not a node of this topology")]
    UnknownNode { index: usize },

    #[error("Host {name} has no link")]
    HostNotAttached { name: String },

    #[error("Host {name} has {links} links, expected exactly one")]
    HostMultiplyAttached { name: String, links: usize },

    #[error("Link between hosts {a} and {b}: hosts may only attach to switches")]
    HostToHostLink { a: String, b: String },

    #[error("Address {ip} of host {name} is already assigned to host {existing}")]
    DuplicateAddress {
        ip: Ipv4Addr,
        name: String,
        existing: String,
    },

    #[error("Address component {field}={value} outside 1..=15")]
    AddressOutOfRange { field: &'static str, value: u32 },

    #[error("Node {name} is not a switch")]
    NotASwitch { name: String },
}

/// Errors raised while validating a driver configuration file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Controller name cannot be empty")]
    EmptyControllerName,

    #[error("Controller {name} has port 0")]
    ZeroControllerPort { name: String },
}
