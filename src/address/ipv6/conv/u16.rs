//! Conversions between `Ipv6Address` and arrays of 16-bit segments.

use crate::address::Ipv6Address;

impl From<[u16; 8]> for Ipv6Address {
    fn from(value: [u16; 8]) -> Self {
        Ipv6Address(value)
    }
}

impl From<Ipv6Address> for [u16; 8] {
    fn from(value: Ipv6Address) -> Self {
        value.0
    }
}
