//! Topology construction.
//!
//! A [`TopologyBuilder`] collects switches, hosts and links in declaration
//! order and is consumed by [`TopologyBuilder::build`], which checks the
//! topology invariants and returns an immutable [`Topology`].

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU32, Ordering};

use log::{debug, warn};

use crate::error::TopologyError;
use crate::ip::HostOrdinals;
use crate::topology::graph::Topology;
use crate::topology::types::{switch_index, DatapathId, Endpoint, Host, Link, Node, NodeId, Switch};
use crate::topology::validation::validate_topology;

/// Source of builder tokens stamped into every issued [`NodeId`]
static NEXT_OWNER: AtomicU32 = AtomicU32::new(1);

#[derive(Debug)]
pub struct TopologyBuilder {
    name: String,
    owner: u32,
    nodes: Vec<Node>,
    links: Vec<Link>,
    by_name: HashMap<String, NodeId>,
    /// dpid -> owning switch name
    dpids: HashMap<DatapathId, String>,
    /// Next free port per node, indexed like `nodes`
    next_port: Vec<u16>,
    ordinals: HostOrdinals,
}

impl TopologyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
            links: Vec::new(),
            by_name: HashMap::new(),
            dpids: HashMap::new(),
            next_port: Vec::new(),
            ordinals: HostOrdinals::new(),
        }
    }

    /// Register a switch with an explicit datapath id.
    pub fn add_switch(&mut self, name: &str, dpid: DatapathId) -> Result<NodeId, TopologyError> {
        if let Some(existing) = self.dpids.get(&dpid) {
            return Err(TopologyError::DuplicateDatapathId {
                dpid,
                name: name.to_string(),
                existing: existing.clone(),
            });
        }
        let id = self.insert(Node::Switch(Switch {
            name: name.to_string(),
            dpid,
        }))?;
        self.dpids.insert(dpid, name.to_string());
        debug!("Added switch {} (dpid {})", name, dpid);
        Ok(id)
    }

    /// Register a switch whose datapath id is derived from its name.
    pub fn add_switch_auto(&mut self, name: &str) -> Result<NodeId, TopologyError> {
        let dpid = DatapathId::from_switch_name(name)?;
        self.add_switch(name, dpid)
    }

    /// Register a host with a caller supplied address.
    pub fn add_host(&mut self, name: &str, ip: Ipv4Addr) -> Result<NodeId, TopologyError> {
        let id = self.insert(Node::Host(Host {
            name: name.to_string(),
            ip,
        }))?;
        debug!("Added host {} ({})", name, ip);
        Ok(id)
    }

    /// Register a host on `switch`, deriving its address from the switch
    /// index and the number of hosts attached this way so far, then link it.
    pub fn attach_host(&mut self, name: &str, switch: NodeId) -> Result<NodeId, TopologyError> {
        let switch_name = match self.lookup(switch)? {
            Node::Switch(s) => s.name.clone(),
            other => {
                return Err(TopologyError::NotASwitch {
                    name: other.name().to_string(),
                })
            }
        };
        let index = switch_index(&switch_name)?;
        let index = u8::try_from(index).map_err(|_| TopologyError::AddressOutOfRange {
            field: "switch_index",
            value: index,
        })?;

        // Reserve the ordinal only once the name is known to be free
        if self.by_name.contains_key(name) {
            return Err(TopologyError::DuplicateNode { name: name.to_string() });
        }
        let ip = self.ordinals.next_address(index);
        let host = self.add_host(name, ip)?;
        self.add_link(host, switch)?;
        Ok(host)
    }

    /// Register an undirected link and return its index.
    ///
    /// Links are additive: linking the same pair twice yields two links, each
    /// with its own ports.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) -> Result<usize, TopologyError> {
        let a_name = self.lookup(a)?.name().to_string();
        let b_name = self.lookup(b)?.name().to_string();
        if a == b {
            warn!("Self-loop on {}", a_name);
        } else if self.links.iter().any(|l| l.connects(a, b)) {
            warn!("Parallel link between {} and {}", a_name, b_name);
        }

        let a = Endpoint { node: a, port: self.take_port(a) };
        let b = Endpoint { node: b, port: self.take_port(b) };
        self.links.push(Link { a, b });
        debug!("Added link {}-eth{} <-> {}-eth{}", a_name, a.port, b_name, b.port);
        Ok(self.links.len() - 1)
    }

    /// Look up a node registered earlier by name
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Validate and freeze the topology.
    pub fn build(self) -> Result<Topology, TopologyError> {
        let topology = Topology::from_parts(self.name, self.owner, self.nodes, self.links, self.by_name);
        validate_topology(&topology)?;
        Ok(topology)
    }

    fn insert(&mut self, node: Node) -> Result<NodeId, TopologyError> {
        if self.by_name.contains_key(node.name()) {
            return Err(TopologyError::DuplicateNode {
                name: node.name().to_string(),
            });
        }
        let id = NodeId::new(self.owner, self.nodes.len());
        self.by_name.insert(node.name().to_string(), id);
        self.next_port.push(node.first_port());
        self.nodes.push(node);
        Ok(id)
    }

    /// Resolve a handle issued by this builder
    fn lookup(&self, id: NodeId) -> Result<&Node, TopologyError> {
        if id.owner != self.owner {
            return Err(TopologyError::UnknownNode { index: id.index });
        }
        self.nodes
            .get(id.index)
            .ok_or(TopologyError::UnknownNode { index: id.index })
    }

    fn take_port(&mut self, node: NodeId) -> u16 {
        let port = self.next_port[node.index];
        self.next_port[node.index] += 1;
        port
    }
}
