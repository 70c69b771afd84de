//! Topology invariant checks.
//!
//! Run once by the builder before a topology is frozen:
//! - datapath ids are pairwise distinct
//! - every host has exactly one link, and that link goes to a switch
//! - host addresses are pairwise distinct

use std::collections::HashMap;

use crate::error::TopologyError;
use crate::ip::AddressRegistry;
use crate::topology::graph::Topology;
use crate::topology::types::NodeKind;

pub fn validate_topology(topology: &Topology) -> Result<(), TopologyError> {
    validate_datapath_ids(topology)?;
    validate_host_attachment(topology)?;
    validate_host_addresses(topology)?;

    log::info!(
        "Topology {}: {} switches, {} hosts, {} links",
        topology.name(),
        topology.switches().count(),
        topology.hosts().count(),
        topology.links().len()
    );
    Ok(())
}

fn validate_datapath_ids(topology: &Topology) -> Result<(), TopologyError> {
    let mut seen = HashMap::new();
    for (_, switch) in topology.switches() {
        if let Some(existing) = seen.insert(switch.dpid, switch.name.as_str()) {
            return Err(TopologyError::DuplicateDatapathId {
                dpid: switch.dpid,
                name: switch.name.clone(),
                existing: existing.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_host_attachment(topology: &Topology) -> Result<(), TopologyError> {
    for link in topology.links() {
        let (a, b) = (topology.node_at(link.a.node), topology.node_at(link.b.node));
        if a.kind() == NodeKind::Host && b.kind() == NodeKind::Host {
            return Err(TopologyError::HostToHostLink {
                a: a.name().to_string(),
                b: b.name().to_string(),
            });
        }
    }

    for (id, host) in topology.hosts() {
        match topology.degree(id) {
            0 => {
                return Err(TopologyError::HostNotAttached {
                    name: host.name.clone(),
                })
            }
            1 => {}
            links => {
                return Err(TopologyError::HostMultiplyAttached {
                    name: host.name.clone(),
                    links,
                })
            }
        }
    }
    Ok(())
}

fn validate_host_addresses(topology: &Topology) -> Result<(), TopologyError> {
    let mut registry = AddressRegistry::new();
    for (_, host) in topology.hosts() {
        registry.register(host.ip, &host.name)?;
    }
    Ok(())
}
