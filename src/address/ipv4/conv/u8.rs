//! Conversions between `Ipv4Address` and 4-byte arrays.

use crate::address::Ipv4Address;

/// Interprets four bytes in network order.
impl From<[u8; 4]> for Ipv4Address {
    fn from(value: [u8; 4]) -> Self {
        Ipv4Address(value)
    }
}

/// Returns the four octets in network order.
impl From<Ipv4Address> for [u8; 4] {
    fn from(value: Ipv4Address) -> Self {
        value.0
    }
}

/// Borrows the octets for hashing or serialization into fixed-width storage.
impl AsRef<[u8]> for Ipv4Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
