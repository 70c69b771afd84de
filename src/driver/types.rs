//! Driver-facing type definitions.
//!
//! This module contains the options handed to a network driver together with
//! a topology, and the serializable [`NetworkDescription`] that an external
//! emulator consumes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::net::{IpAddr, Ipv4Addr};

use crate::ip::{mac_for_index, with_prefix};
use crate::topology::{DatapathId, Endpoint, Topology};

// ============================================================================
// Driver Options
// ============================================================================

/// Default remote controller address
pub const DEFAULT_CONTROLLER_IP: Ipv4Addr = Ipv4Addr::new(192, 168, 57, 1);
/// Standard OpenFlow controller port
pub const DEFAULT_CONTROLLER_PORT: u16 = 6653;
pub const DEFAULT_CONTROLLER_NAME: &str = "c0";

/// Link implementation the driver should instantiate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Plain virtual ethernet pairs
    Plain,
    /// Links that support rate, delay and loss shaping
    #[default]
    Shaped,
}

/// A remote SDN controller the switches connect to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerConfig {
    #[serde(default = "default_controller_name")]
    pub name: String,
    #[serde(default = "default_controller_ip")]
    pub ip: IpAddr,
    #[serde(default = "default_controller_port")]
    pub port: u16,
    #[serde(default = "default_controller_protocol")]
    pub protocol: String,
}

fn default_controller_name() -> String {
    DEFAULT_CONTROLLER_NAME.to_string()
}

fn default_controller_ip() -> IpAddr {
    IpAddr::V4(DEFAULT_CONTROLLER_IP)
}

fn default_controller_port() -> u16 {
    DEFAULT_CONTROLLER_PORT
}

fn default_controller_protocol() -> String {
    "tcp".to_string()
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            name: default_controller_name(),
            ip: default_controller_ip(),
            port: default_controller_port(),
            protocol: default_controller_protocol(),
        }
    }
}

impl ControllerConfig {
    /// Controller target in `tcp:IP:PORT` form
    pub fn target(&self) -> String {
        format!("{}:{}:{}", self.protocol, self.ip, self.port)
    }
}

/// Everything a driver needs besides the topology itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverOptions {
    pub link: LinkKind,
    /// Build the network as soon as the driver is constructed. When false,
    /// the build waits until controllers are attached.
    pub build: bool,
    /// Give every host a MAC derived from its creation index
    pub auto_set_macs: bool,
    pub controllers: Vec<ControllerConfig>,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            link: LinkKind::Shaped,
            build: false,
            auto_set_macs: true,
            controllers: vec![ControllerConfig::default()],
        }
    }
}

// ============================================================================
// Network Description
// ============================================================================

/// Complete description of one network, ready for an external emulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescription {
    pub topology: String,
    pub link: LinkKind,
    pub build: bool,
    pub auto_set_macs: bool,
    pub controllers: Vec<ControllerConfig>,
    pub switches: Vec<SwitchEntry>,
    pub hosts: Vec<HostEntry>,
    pub links: Vec<LinkEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchEntry {
    pub name: String,
    pub dpid: DatapathId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEntry {
    pub name: String,
    /// Address with prefix length (`10.0.17.1/8`)
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mac: Option<String>,
    /// Name of the switch the host attaches to
    pub switch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub node1: String,
    pub port1: u16,
    pub intf1: String,
    pub node2: String,
    pub port2: u16,
    pub intf2: String,
}

impl NetworkDescription {
    pub fn from_topology(topology: &Topology, options: &DriverOptions) -> Self {
        let mut switches: Vec<SwitchEntry> = topology
            .switches()
            .map(|(_, s)| SwitchEntry {
                name: s.name.clone(),
                dpid: s.dpid,
            })
            .collect();
        switches.sort_by(|a, b| natural_cmp(&a.name, &b.name));

        let mut hosts: Vec<HostEntry> = topology
            .hosts()
            .map(|(id, h)| HostEntry {
                name: h.name.clone(),
                ip: with_prefix(h.ip),
                mac: None,
                switch: topology
                    .attached_switch(id)
                    .map(|s| topology.name_at(s).to_string())
                    .unwrap_or_default(),
            })
            .collect();
        // Hosts are created in natural name order, which fixes their MACs
        hosts.sort_by(|a, b| natural_cmp(&a.name, &b.name));
        if options.auto_set_macs {
            for (i, host) in hosts.iter_mut().enumerate() {
                host.mac = Some(mac_for_index(i as u64 + 1));
            }
        }

        let endpoint = |e: &Endpoint| {
            let name = topology.name_at(e.node).to_string();
            let intf = interface_name(&name, e.port);
            (name, e.port, intf)
        };
        let links = topology
            .links()
            .iter()
            .map(|l| {
                let (node1, port1, intf1) = endpoint(&l.a);
                let (node2, port2, intf2) = endpoint(&l.b);
                LinkEntry {
                    node1,
                    port1,
                    intf1,
                    node2,
                    port2,
                    intf2,
                }
            })
            .collect();

        Self {
            topology: topology.name().to_string(),
            link: options.link,
            build: options.build,
            auto_set_macs: options.auto_set_macs,
            controllers: options.controllers.clone(),
            switches,
            hosts,
            links,
        }
    }
}

/// Interface name of `node`'s port (`s1-eth2`)
pub fn interface_name(node: &str, port: u16) -> String {
    format!("{}-eth{}", node, port)
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Chunk<'a> {
    Text(&'a str),
    Number(u64),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let bytes = s.as_bytes();
    while start < bytes.len() {
        let digit = bytes[start].is_ascii_digit();
        let end = bytes[start..]
            .iter()
            .position(|b| b.is_ascii_digit() != digit)
            .map_or(bytes.len(), |n| start + n);
        let part = &s[start..end];
        out.push(match part.parse() {
            Ok(n) if digit => Chunk::Number(n),
            _ => Chunk::Text(part),
        });
        start = end;
    }
    out
}

/// Order names so that embedded numbers compare by value (`h2` < `h10`)
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    chunks(a).cmp(&chunks(b))
}
