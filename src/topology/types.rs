//! Topology data model.
//!
//! Nodes are stored once in the topology and referenced everywhere else by
//! [`NodeId`] handles. Links are undirected; parallel links between the same
//! pair of switches are distinct entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::TopologyError;

/// Datapath identifier announced by a switch to its controller.
///
/// Rendered as exactly 16 lowercase hex digits, zero padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DatapathId(u64);

impl DatapathId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Derive a datapath id from the first decimal number in a switch name,
    /// so `s12` becomes `000000000000000c`.
    pub fn from_switch_name(name: &str) -> Result<Self, TopologyError> {
        switch_index(name).map(|index| Self(index as u64))
    }
}

impl fmt::Display for DatapathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for DatapathId {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TopologyError::InvalidDatapathId { value: s.to_string() };
        if s.is_empty() || s.len() > 16 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        u64::from_str_radix(s, 16).map(Self).map_err(|_| invalid())
    }
}

impl From<DatapathId> for String {
    fn from(dpid: DatapathId) -> Self {
        dpid.to_string()
    }
}

impl TryFrom<String> for DatapathId {
    type Error = TopologyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// First run of decimal digits in a node name
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("Invalid digits regex"));

/// Extract the numeric index of a switch from its name (`s4` -> 4).
pub fn switch_index(name: &str) -> Result<u32, TopologyError> {
    let missing = || TopologyError::MissingSwitchIndex { name: name.to_string() };
    let found = DIGITS.find(name).ok_or_else(missing)?;
    found.as_str().parse().map_err(|_| missing())
}

/// Handle of a node registered in a topology.
///
/// Handles carry the token of the builder that issued them and are only
/// accepted by that builder and the topology it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) owner: u32,
    pub(crate) index: usize,
}

impl NodeId {
    pub(crate) fn new(owner: u32, index: usize) -> Self {
        Self { owner, index }
    }

    /// Position of the node in registration order
    pub fn index(self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Switch,
    Host,
}

/// An emulated forwarding node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    pub name: String,
    pub dpid: DatapathId,
}

/// An emulated end system with a single attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub name: String,
    pub ip: Ipv4Addr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Switch(Switch),
    Host(Host),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Switch(s) => &s.name,
            Node::Host(h) => &h.name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Switch(_) => NodeKind::Switch,
            Node::Host(_) => NodeKind::Host,
        }
    }

    pub fn as_switch(&self) -> Option<&Switch> {
        match self {
            Node::Switch(s) => Some(s),
            Node::Host(_) => None,
        }
    }

    pub fn as_host(&self) -> Option<&Host> {
        match self {
            Node::Host(h) => Some(h),
            Node::Switch(_) => None,
        }
    }

    /// First port number handed out on this kind of node
    pub(crate) fn first_port(&self) -> u16 {
        match self {
            Node::Switch(_) => 1,
            Node::Host(_) => 0,
        }
    }
}

/// One side of a link: a node and the port it uses for this link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub node: NodeId,
    pub port: u16,
}

/// Undirected link between two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    pub a: Endpoint,
    pub b: Endpoint,
}

impl Link {
    /// True if this link joins `x` and `y`, in either order
    pub fn connects(&self, x: NodeId, y: NodeId) -> bool {
        (self.a.node == x && self.b.node == y) || (self.a.node == y && self.b.node == x)
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.a.node == node || self.b.node == node
    }

    /// The node on the other side of `node`, if `node` is an endpoint
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.a.node == node {
            Some(self.b.node)
        } else if self.b.node == node {
            Some(self.a.node)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.a.node == self.b.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpid_display_is_zero_padded() {
        assert_eq!(DatapathId::new(1).to_string(), "0000000000000001");
        assert_eq!(DatapathId::new(0xab).to_string(), "00000000000000ab");
    }

    #[test]
    fn test_dpid_parse() {
        assert_eq!("0000000000000008".parse::<DatapathId>(), Ok(DatapathId::new(8)));
        assert_eq!("1F".parse::<DatapathId>(), Ok(DatapathId::new(0x1f)));
        assert!("".parse::<DatapathId>().is_err());
        assert!("00000000000000001".parse::<DatapathId>().is_err());
        assert!("+1".parse::<DatapathId>().is_err());
        assert!("xyz".parse::<DatapathId>().is_err());
    }

    #[test]
    fn test_dpid_serde_as_string() {
        let json = serde_json::to_string(&DatapathId::new(7)).unwrap();
        assert_eq!(json, "\"0000000000000007\"");
        let back: DatapathId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DatapathId::new(7));
        assert!(serde_json::from_str::<DatapathId>("\"zz\"").is_err());
    }

    #[test]
    fn test_switch_index_from_name() {
        assert_eq!(switch_index("s1"), Ok(1));
        assert_eq!(switch_index("s12"), Ok(12));
        assert_eq!(switch_index("edge3a"), Ok(3));
        assert_eq!(
            switch_index("core"),
            Err(TopologyError::MissingSwitchIndex { name: "core".to_string() })
        );
        assert_eq!(DatapathId::from_switch_name("s12").unwrap().to_string(), "000000000000000c");
    }

    #[test]
    fn test_link_helpers() {
        let id = |index| NodeId::new(1, index);
        let a = Endpoint { node: id(0), port: 1 };
        let b = Endpoint { node: id(1), port: 0 };
        let link = Link { a, b };
        assert!(link.connects(id(1), id(0)));
        assert!(!link.connects(id(1), id(2)));
        assert_eq!(link.other(id(0)), Some(id(1)));
        assert_eq!(link.other(id(5)), None);
        // Same index, different owner
        assert_eq!(link.other(NodeId::new(2, 0)), None);
        assert!(!link.is_self_loop());
    }
}
