//! Host address registry.
//!
//! Tracks which host owns which address so that collisions, including the
//! ones produced by nibble overflow, are caught before a topology is handed
//! to the driver.

use std::collections::HashMap;
use std::net::Ipv4Addr;

use crate::error::TopologyError;

#[derive(Debug, Default)]
pub struct AddressRegistry {
    /// IP -> host name
    assigned: HashMap<Ipv4Addr, String>,
}

impl AddressRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `ip` as owned by `host`.
    ///
    /// Registering the same pair twice is accepted; a second owner is not.
    pub fn register(&mut self, ip: Ipv4Addr, host: &str) -> Result<(), TopologyError> {
        match self.assigned.get(&ip) {
            Some(existing) if existing != host => Err(TopologyError::DuplicateAddress {
                ip,
                name: host.to_string(),
                existing: existing.clone(),
            }),
            Some(_) => Ok(()),
            None => {
                self.assigned.insert(ip, host.to_string());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_addresses_register() {
        let mut registry = AddressRegistry::new();
        registry.register(Ipv4Addr::new(10, 0, 17, 1), "h1").unwrap();
        registry.register(Ipv4Addr::new(10, 0, 18, 1), "h2").unwrap();
        // The first registration still names its owner
        assert!(matches!(
            registry.register(Ipv4Addr::new(10, 0, 17, 1), "h3"),
            Err(TopologyError::DuplicateAddress { existing, .. }) if existing == "h1"
        ));
    }

    #[test]
    fn test_same_owner_is_idempotent() {
        let mut registry = AddressRegistry::new();
        let ip = Ipv4Addr::new(10, 0, 17, 1);
        registry.register(ip, "h1").unwrap();
        assert!(registry.register(ip, "h1").is_ok());
        assert!(registry.register(ip, "h2").is_err());
    }

    #[test]
    fn test_conflict_is_reported() {
        let mut registry = AddressRegistry::new();
        let ip = Ipv4Addr::new(10, 0, 17, 1);
        registry.register(ip, "h1").unwrap();
        assert_eq!(
            registry.register(ip, "h2"),
            Err(TopologyError::DuplicateAddress {
                ip,
                name: "h2".to_string(),
                existing: "h1".to_string(),
            })
        );
    }
}
