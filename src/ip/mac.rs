//! Automatic MAC assignment.
//!
//! When the driver is asked for automatic MACs, hosts are numbered from 1
//! in creation order and that number is written into the low bytes of a
//! locally scoped MAC address.

/// Format `index` as a colon separated 48-bit MAC (`1` -> `00:00:00:00:00:01`)
pub fn mac_for_index(index: u64) -> String {
    let bytes = (index & 0xffff_ffff_ffff).to_be_bytes();
    bytes[2..]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}
