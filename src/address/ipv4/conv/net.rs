//! Interop with `std::net::Ipv4Addr`.

use std::net::Ipv4Addr;

use crate::address::Ipv4Address;

impl From<Ipv4Addr> for Ipv4Address {
    fn from(value: Ipv4Addr) -> Self {
        Ipv4Address(value.octets())
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(value: Ipv4Address) -> Self {
        Ipv4Addr::from(value.0)
    }
}
