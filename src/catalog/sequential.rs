//! Two edge switches joined by a chain of forwarding switches.
//!
//! ```text
//!  h1                                              h3
//!    \                                            /
//!     s1 -- s2 -- s3 -- s4 -- s5 -- s6 -- s7 -- s8
//!    /                                            \
//!  h2                                              h4
//! ```

use crate::error::TopologyError;
use crate::topology::{DatapathId, Topology, TopologyBuilder};

pub const NAME: &str = "sequential";

pub fn sequential_topology() -> Result<Topology, TopologyError> {
    let mut topo = TopologyBuilder::new(NAME);

    // Edge switches
    let s1 = topo.add_switch("s1", DatapathId::new(1))?;
    let s8 = topo.add_switch("s8", DatapathId::new(8))?;

    // Forwarding chain
    let s2 = topo.add_switch("s2", DatapathId::new(2))?;
    let s3 = topo.add_switch("s3", DatapathId::new(3))?;
    let s4 = topo.add_switch("s4", DatapathId::new(4))?;
    let s5 = topo.add_switch("s5", DatapathId::new(5))?;
    let s6 = topo.add_switch("s6", DatapathId::new(6))?;
    let s7 = topo.add_switch("s7", DatapathId::new(7))?;

    // Hosts get 10.0.17.1, 10.0.18.1 on s1 and 10.0.129.1, 10.0.130.1 on s8
    topo.attach_host("h1", s1)?;
    topo.attach_host("h2", s1)?;
    topo.attach_host("h3", s8)?;
    topo.attach_host("h4", s8)?;

    for (a, b) in [(s1, s2), (s2, s3), (s3, s4), (s4, s5), (s5, s6), (s6, s7), (s7, s8)] {
        topo.add_link(a, b)?;
    }

    topo.build()
}
