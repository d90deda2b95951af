//! Conversions between `Ipv6Address` and 16-byte arrays.

use crate::address::Ipv6Address;
use crate::codec::groups;

/// Interprets sixteen bytes in network order.
impl From<[u8; 16]> for Ipv6Address {
    fn from(value: [u8; 16]) -> Self {
        Ipv6Address(groups::segments_from_bytes(&value))
    }
}

/// Returns the sixteen bytes in network order.
impl From<Ipv6Address> for [u8; 16] {
    fn from(value: Ipv6Address) -> Self {
        value.octets()
    }
}
