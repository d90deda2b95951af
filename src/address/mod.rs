//! Address value types
//!
//! This module defines the two concrete address variants and the facade
//! that dispatches between them:
//!
//! - [`Ipv4Address`]: four octets.
//! - [`Ipv6Address`]: eight 16-bit segments.
//! - [`IpAddress`]: a closed sum over the two variants, constructed by
//!   inspecting the shape of the input.
//!
//! All three implement the [`Address`] capability trait. The trait is
//! sealed; the set of variants is fixed.

mod ip;
mod ipv4;
mod ipv6;
mod serialize;

use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::InvalidAddress;

pub use ip::IpAddress;
pub use ipv4::Ipv4Address;
pub use ipv6::Ipv6Address;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Ipv4Address {}
    impl Sealed for super::Ipv6Address {}
    impl Sealed for super::IpAddress {}
}

/// Internet Protocol version.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    /// The version number as it appears in packet headers (4 or 6).
    pub const fn number(self) -> u8 {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }

    /// Size of an address of this version in bytes.
    pub const fn byte_len(self) -> usize {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 16,
        }
    }
}

/// Capabilities shared by every address type.
///
/// Equality, ordering and textual rendering come from the standard traits
/// in the bounds; the methods below cover the binary, integer and JSON
/// forms and the classifications that both registries define.
pub trait Address:
    sealed::Sealed + Copy + Eq + Ord + Hash + Display + FromStr<Err = InvalidAddress>
{
    /// Protocol version of this address.
    fn version(&self) -> IpVersion;

    /// Big-endian bytes, 4 or 16 of them.
    fn to_binary(&self) -> Vec<u8>;

    /// The address as an unsigned big-endian integer.
    fn to_integer(&self) -> u128;

    /// `true` if the address is in none of the special-purpose ranges.
    fn is_global(&self) -> bool;

    /// `true` for the all-zero address.
    fn is_unspecified(&self) -> bool;

    /// `true` for loopback addresses.
    fn is_loopback(&self) -> bool;

    /// `true` for addresses reserved for documentation.
    fn is_documentation(&self) -> bool;

    /// Decimal text of [`Address::to_integer`].
    fn to_decimal(&self) -> String {
        self.to_integer().to_string()
    }

    /// Bytes in network order. Each call starts a fresh traversal.
    fn bytes(&self) -> std::vec::IntoIter<u8> {
        self.to_binary().into_iter()
    }

    /// The textual form as a JSON string literal.
    fn to_json(&self) -> String {
        serde_json::Value::String(self.to_string()).to_string()
    }
}
