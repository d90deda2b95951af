//! Interop with `std::net::Ipv6Addr`.

use std::net::Ipv6Addr;

use crate::address::Ipv6Address;

impl From<Ipv6Addr> for Ipv6Address {
    fn from(value: Ipv6Addr) -> Self {
        Ipv6Address(value.segments())
    }
}

impl From<Ipv6Address> for Ipv6Addr {
    fn from(value: Ipv6Address) -> Self {
        Ipv6Addr::from(value.0)
    }
}
