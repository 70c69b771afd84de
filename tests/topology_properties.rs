#[cfg(test)]
mod topology_properties {
    use std::collections::HashSet;
    use std::net::Ipv4Addr;

    use sdntopo::catalog::{sequential_topology, simple_topology, TopologyKind};
    use sdntopo::ip::host_address;
    use sdntopo::topology::{NodeKind, Topology};

    fn host_ip(topo: &Topology, name: &str) -> Ipv4Addr {
        topo.node_by_name(name)
            .and_then(|n| n.as_host())
            .map(|h| h.ip)
            .unwrap_or_else(|| panic!("no host {}", name))
    }

    /// Unordered switch pairs, one entry per link
    fn switch_pairs(topo: &Topology) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = topo
            .switch_links()
            .map(|l| {
                let a = topo.name_of(l.a.node).unwrap().to_string();
                let b = topo.name_of(l.b.node).unwrap().to_string();
                if a <= b { (a, b) } else { (b, a) }
            })
            .collect();
        pairs.sort();
        pairs
    }

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_datapath_ids_are_distinct() {
        for kind in TopologyKind::ALL {
            let topo = kind.build().unwrap();
            let dpids: HashSet<_> = topo.switches().map(|(_, s)| s.dpid).collect();
            assert_eq!(dpids.len(), topo.switches().count(), "{}", kind);
        }
    }

    #[test]
    fn test_every_host_attaches_to_one_switch() {
        for kind in TopologyKind::ALL {
            let topo = kind.build().unwrap();
            for (id, host) in topo.hosts() {
                assert_eq!(topo.attached_switches(id).len(), 1, "{} in {}", host.name, kind);
                assert_eq!(topo.degree(id), 1, "{} in {}", host.name, kind);
                let neighbor = topo.neighbors(id).next().unwrap();
                assert_eq!(topo.node(neighbor).unwrap().kind(), NodeKind::Switch);
            }
        }
    }

    #[test]
    fn test_host_addresses_are_distinct() {
        for kind in TopologyKind::ALL {
            let topo = kind.build().unwrap();
            let ips: HashSet<_> = topo.hosts().map(|(_, h)| h.ip).collect();
            assert_eq!(ips.len(), topo.hosts().count(), "{}", kind);
        }
    }

    #[test]
    fn test_address_assignment_is_deterministic() {
        assert_eq!(host_address(3, 2), host_address(3, 2));
        assert_eq!(host_address(3, 2), Ipv4Addr::new(10, 0, 50, 1));
    }

    #[test]
    fn test_sequential_host_addresses() {
        let topo = sequential_topology().unwrap();
        assert_eq!(host_ip(&topo, "h1"), Ipv4Addr::new(10, 0, 17, 1));
        assert_eq!(host_ip(&topo, "h2"), Ipv4Addr::new(10, 0, 18, 1));
        assert_eq!(host_ip(&topo, "h3"), Ipv4Addr::new(10, 0, 129, 1));
        assert_eq!(host_ip(&topo, "h4"), Ipv4Addr::new(10, 0, 130, 1));

        let s1 = topo.node_id("s1").unwrap();
        let s8 = topo.node_id("s8").unwrap();
        assert_eq!(topo.attached_switch(topo.node_id("h2").unwrap()), Some(s1));
        assert_eq!(topo.attached_switch(topo.node_id("h4").unwrap()), Some(s8));
    }

    #[test]
    fn test_sequential_is_a_simple_path() {
        let topo = sequential_topology().unwrap();
        let expected: Vec<_> = (1..8).map(|i| pair(&format!("s{}", i), &format!("s{}", i + 1))).collect();
        assert_eq!(switch_pairs(&topo), expected);
        assert_eq!(topo.links().len(), 11);
        assert_eq!(topo.nodes().count(), 12);
    }

    #[test]
    fn test_simple_s4_carries_two_hosts() {
        let topo = simple_topology().unwrap();
        let s4 = topo.node_id("s4").unwrap();
        let mut ips: Vec<Ipv4Addr> = topo.hosts_on(s4).into_iter().map(|(_, h)| h.ip).collect();
        ips.sort();
        assert_eq!(ips, vec![Ipv4Addr::new(10, 0, 65, 1), Ipv4Addr::new(10, 0, 66, 1)]);
        assert_eq!(host_ip(&topo, "h1"), Ipv4Addr::new(10, 0, 17, 1));
        assert_eq!(host_ip(&topo, "h2"), Ipv4Addr::new(10, 0, 33, 1));
    }

    #[test]
    fn test_simple_mesh_links() {
        let topo = simple_topology().unwrap();
        assert_eq!(topo.switch_links().count(), 9);
        assert!(topo.links().iter().all(|l| !l.is_self_loop()));

        let mut expected = vec![
            pair("s1", "s7"),
            pair("s1", "s2"),
            pair("s1", "s3"),
            pair("s2", "s4"),
            pair("s3", "s7"),
            pair("s3", "s6"),
            pair("s5", "s6"),
            pair("s4", "s5"),
            pair("s3", "s4"),
        ];
        expected.sort();
        assert_eq!(switch_pairs(&topo), expected);
    }

    #[test]
    fn test_rebuild_is_identical() {
        for kind in TopologyKind::ALL {
            assert_eq!(kind.build().unwrap(), kind.build().unwrap(), "{}", kind);
        }
    }
}
