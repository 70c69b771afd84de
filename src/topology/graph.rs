//! Read-only topology and its queries.

use std::collections::HashMap;

use crate::topology::types::{Host, Link, Node, NodeId, NodeKind, Switch};

/// A complete, immutable network graph.
///
/// Only [`TopologyBuilder::build`](crate::topology::TopologyBuilder::build)
/// produces values of this type, so every `Topology` has passed validation.
/// Handles issued by a different builder are never resolved.
#[derive(Debug, Clone)]
pub struct Topology {
    name: String,
    owner: u32,
    nodes: Vec<Node>,
    links: Vec<Link>,
    by_name: HashMap<String, NodeId>,
}

impl Topology {
    pub(crate) fn from_parts(
        name: String,
        owner: u32,
        nodes: Vec<Node>,
        links: Vec<Link>,
        by_name: HashMap<String, NodeId>,
    ) -> Self {
        Self {
            name,
            owner,
            nodes,
            links,
            by_name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All nodes in registration order, with their handles
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(self.owner, i), n))
    }

    /// The node behind `id`, or `None` if the handle belongs elsewhere
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        if id.owner != self.owner {
            return None;
        }
        self.nodes.get(id.index)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.node_id(name).map(|id| self.node_at(id))
    }

    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(Node::name)
    }

    /// Node lookup for handles read back from this topology's own links
    pub(crate) fn node_at(&self, id: NodeId) -> &Node {
        &self.nodes[id.index]
    }

    pub(crate) fn name_at(&self, id: NodeId) -> &str {
        self.node_at(id).name()
    }

    pub fn switches(&self) -> impl Iterator<Item = (NodeId, &Switch)> {
        self.nodes().filter_map(|(id, n)| n.as_switch().map(|s| (id, s)))
    }

    pub fn hosts(&self) -> impl Iterator<Item = (NodeId, &Host)> {
        self.nodes().filter_map(|(id, n)| n.as_host().map(|h| (id, h)))
    }

    /// All links in declaration order
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Links whose endpoints are both switches
    pub fn switch_links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| {
            self.kind(l.a.node) == NodeKind::Switch && self.kind(l.b.node) == NodeKind::Switch
        })
    }

    /// Links with at least one host endpoint
    pub fn host_links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| {
            self.kind(l.a.node) == NodeKind::Host || self.kind(l.b.node) == NodeKind::Host
        })
    }

    /// Number of link ends at `node`; a self-loop counts twice
    pub fn degree(&self, node: NodeId) -> usize {
        self.links
            .iter()
            .map(|l| (l.a.node == node) as usize + (l.b.node == node) as usize)
            .sum()
    }

    /// Nodes adjacent to `node`, once per link
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.links.iter().filter_map(move |l| l.other(node))
    }

    /// Switches a host is linked to
    pub fn attached_switches(&self, host: NodeId) -> Vec<NodeId> {
        self.neighbors(host)
            .filter(|n| self.kind(*n) == NodeKind::Switch)
            .collect()
    }

    /// The single switch a host attaches to
    pub fn attached_switch(&self, host: NodeId) -> Option<NodeId> {
        match self.attached_switches(host).as_slice() {
            [switch] => Some(*switch),
            _ => None,
        }
    }

    /// Hosts linked to `switch`, in link declaration order
    pub fn hosts_on(&self, switch: NodeId) -> Vec<(NodeId, &Host)> {
        self.neighbors(switch)
            .filter_map(|n| self.node_at(n).as_host().map(|h| (n, h)))
            .collect()
    }

    fn kind(&self, id: NodeId) -> NodeKind {
        self.node_at(id).kind()
    }
}

/// Structural equality; the builder token is not part of a topology's shape.
impl PartialEq for Topology {
    fn eq(&self, other: &Self) -> bool {
        let endpoints = |l: &Link| (l.a.node.index, l.a.port, l.b.node.index, l.b.port);
        self.name == other.name
            && self.nodes == other.nodes
            && self.links.iter().map(endpoints).eq(other.links.iter().map(endpoints))
    }
}

impl Eq for Topology {}
