//! Conversions between `Ipv6Address` and `u128`.
//!
//! The integer is the big-endian reading of the sixteen bytes. The
//! conversion is exact in both directions; there is no sentinel value.

use crate::address::Ipv6Address;
use crate::codec;

impl From<u128> for Ipv6Address {
    fn from(value: u128) -> Self {
        Ipv6Address::from(codec::integer_to_full_be_bytes(value))
    }
}

impl From<Ipv6Address> for u128 {
    fn from(value: Ipv6Address) -> Self {
        value.to_u128()
    }
}
