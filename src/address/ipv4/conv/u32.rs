//! Conversions between `Ipv4Address` and `u32`.
//!
//! The integer is the big-endian reading of the four octets, so
//! `127.0.0.1` maps to `0x7f000001`.

use crate::address::Ipv4Address;

impl From<u32> for Ipv4Address {
    fn from(value: u32) -> Self {
        Ipv4Address(value.to_be_bytes())
    }
}

impl From<Ipv4Address> for u32 {
    fn from(value: Ipv4Address) -> Self {
        value.to_u32()
    }
}
