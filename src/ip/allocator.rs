//! Host address derivation.
//!
//! A host's address is `10.0.<B>.1`, where `B` packs the index of the
//! attaching switch into the high nibble and the per-switch host ordinal
//! into the low nibble. Addresses are unique as long as both stay within
//! `1..=15`.

use std::collections::HashMap;
use std::net::Ipv4Addr;

use crate::error::TopologyError;

/// Largest switch index or host ordinal that fits in a nibble
pub const NIBBLE_MAX: u8 = 0x0f;

/// Prefix length the emulator applies to every host address (`10.0.0.0/8`)
pub const HOST_PREFIX_LEN: u8 = 8;

/// Compute the address of the `host_ordinal`-th host on switch `switch_index`.
///
/// Values above 15 are not rejected: bits shifted out of the byte are
/// dropped and the result may collide with another host's address. Use
/// [`checked_host_address`] to refuse such input.
pub fn host_address(switch_index: u8, host_ordinal: u8) -> Ipv4Addr {
    Ipv4Addr::new(10, 0, (switch_index << 4) | host_ordinal, 1)
}

/// Like [`host_address`], but rejects components outside `1..=15`.
pub fn checked_host_address(switch_index: u8, host_ordinal: u8) -> Result<Ipv4Addr, TopologyError> {
    if !(1..=NIBBLE_MAX).contains(&switch_index) {
        return Err(TopologyError::AddressOutOfRange {
            field: "switch_index",
            value: switch_index.into(),
        });
    }
    if !(1..=NIBBLE_MAX).contains(&host_ordinal) {
        return Err(TopologyError::AddressOutOfRange {
            field: "host_ordinal",
            value: host_ordinal.into(),
        });
    }
    Ok(host_address(switch_index, host_ordinal))
}

/// Render an address the way it is handed to the emulator (`10.0.17.1/8`)
pub fn with_prefix(ip: Ipv4Addr) -> String {
    format!("{}/{}", ip, HOST_PREFIX_LEN)
}

/// Hands out per-switch host ordinals, starting at 1 on every switch.
#[derive(Debug, Default)]
pub struct HostOrdinals {
    next: HashMap<u8, u8>,
}

impl HostOrdinals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next ordinal on `switch_index` and return its address.
    pub fn next_address(&mut self, switch_index: u8) -> Ipv4Addr {
        let ordinal = self.next.entry(switch_index).or_insert(0);
        *ordinal = ordinal.wrapping_add(1);
        log::debug!("Reserved host ordinal {} on switch {}", ordinal, switch_index);
        host_address(switch_index, *ordinal)
    }
}
