//! Fixed topologies.
//!
//! Each variant is a hand-drawn network built by a declarative sequence of
//! builder calls; there is no input.

pub mod sequential;
pub mod simple;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TopologyError;
use crate::topology::Topology;

pub use sequential::sequential_topology;
pub use simple::simple_topology;

/// Selector for one of the built-in topologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TopologyKind {
    /// Chain of 8 switches with two hosts at each end
    Sequential,
    /// 7-switch mesh with 4 hosts
    Simple,
}

impl TopologyKind {
    pub const ALL: [TopologyKind; 2] = [TopologyKind::Sequential, TopologyKind::Simple];

    pub fn build(self) -> Result<Topology, TopologyError> {
        match self {
            Self::Sequential => sequential_topology(),
            Self::Simple => simple_topology(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sequential => sequential::NAME,
            Self::Simple => simple::NAME,
        }
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_builds() {
        for kind in TopologyKind::ALL {
            let topo = kind.build().unwrap();
            assert_eq!(topo.name(), kind.name());
        }
    }

    #[test]
    fn test_kind_from_cli_value() {
        assert_eq!(TopologyKind::from_str("simple", true), Ok(TopologyKind::Simple));
        assert!(TopologyKind::from_str("ring", true).is_err());
        assert_eq!(TopologyKind::Sequential.to_string(), "sequential");
    }
}
