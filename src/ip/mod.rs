//! IP address assignment module.
//!
//! This module derives host addresses from switch identity, keeps track of
//! which host owns which address, and computes the MAC addresses the driver
//! assigns when asked to.

pub mod allocator;
pub mod mac;
pub mod registry;

// Re-export commonly used types
pub use allocator::{checked_host_address, host_address, with_prefix, HostOrdinals, HOST_PREFIX_LEN, NIBBLE_MAX};
pub use mac::mac_for_index;
pub use registry::AddressRegistry;
