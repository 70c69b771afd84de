//! Seven-switch mesh with three edge switches.
//!
//! ```text
//!      h2        h3
//!        \       |
//!         s2 -- s4 -- h4
//!        /      /  \
//! h1 -- s1 -- s3    s5
//!         \  /  \  /
//!          s7    s6
//! ```
//!
//! The links are kept exactly as listed, including the redundant paths
//! around s3 and s4.

use crate::error::TopologyError;
use crate::ip::host_address;
use crate::topology::{DatapathId, Topology, TopologyBuilder};

pub const NAME: &str = "simple";

pub fn simple_topology() -> Result<Topology, TopologyError> {
    let mut topo = TopologyBuilder::new(NAME);

    // Edge switches
    let s1 = topo.add_switch("s1", DatapathId::new(1))?;
    let s2 = topo.add_switch("s2", DatapathId::new(2))?;
    let s4 = topo.add_switch("s4", DatapathId::new(4))?;

    let s3 = topo.add_switch("s3", DatapathId::new(3))?;
    let s5 = topo.add_switch("s5", DatapathId::new(5))?;
    let s6 = topo.add_switch("s6", DatapathId::new(6))?;
    let s7 = topo.add_switch("s7", DatapathId::new(7))?;

    let h1 = topo.add_host("h1", host_address(1, 1))?;
    let h2 = topo.add_host("h2", host_address(2, 1))?;
    let h3 = topo.add_host("h3", host_address(4, 1))?;
    let h4 = topo.add_host("h4", host_address(4, 2))?;

    topo.add_link(h1, s1)?;
    topo.add_link(h2, s2)?;
    topo.add_link(h3, s4)?;
    topo.add_link(h4, s4)?;

    for (a, b) in [
        (s1, s7),
        (s1, s2),
        (s1, s3),
        (s2, s4),
        (s7, s3),
        (s3, s6),
        (s6, s5),
        (s4, s5),
        (s3, s4),
    ] {
        topo.add_link(a, b)?;
    }

    topo.build()
}
