//! 32-bit IPv4 address value type.
//!
//! An [`Ipv4Address`] is four octets stored in network order. Every
//! constructor validates its input completely, so any live instance is a
//! legal address.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde_json::Value;

use crate::address::{Address, IpVersion, Ipv6Address};
use crate::codec::component::{self, Component};
use crate::codec::{self, text};
use crate::error::{InvalidAddress, Result};

/// IPv4 address.
///
/// Ordering follows the numeric value of the address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Address(pub(crate) [u8; 4]);

impl Ipv4Address {
    /// `0.0.0.0`
    pub const UNSPECIFIED: Self = Self([0, 0, 0, 0]);

    /// `127.0.0.1`
    pub const LOCALHOST: Self = Self([127, 0, 0, 1]);

    /// `255.255.255.255`
    pub const BROADCAST: Self = Self([255, 255, 255, 255]);

    /// Builds an address from four octets.
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    /// The four octets in network order.
    pub const fn octets(&self) -> [u8; 4] {
        self.0
    }

    /// Builds an address from exactly four integers in `0..=255`.
    ///
    /// # Errors
    /// Fails if the element count is not 4 or a value is out of range.
    pub fn from_array<T: Component>(values: &[T]) -> Result<Self> {
        if values.len() != 4 {
            return Err(InvalidAddress::ElementCount {
                expected: "4",
                actual: values.len(),
            });
        }

        let mut out = [0u8; 4];
        for (slot, &value) in out.iter_mut().zip(values) {
            *slot = component::octet(value)?;
        }

        Ok(Self(out))
    }

    /// Builds an address from dynamically typed values, e.g. a decoded
    /// JSON array.
    ///
    /// # Errors
    /// Fails like [`Ipv4Address::from_array`], and additionally when an
    /// element is not an integer.
    pub fn from_values(values: &[Value]) -> Result<Self> {
        Self::from_array(&component::integers(values)?)
    }

    /// Builds an address from its 4-byte big-endian form.
    ///
    /// # Errors
    /// Fails if `bytes` is not exactly 4 bytes long.
    pub fn from_binary(bytes: &[u8]) -> Result<Self> {
        let octets: [u8; 4] = codec::groups_from_flat_bytes::<u8>(bytes)
            .and_then(|o| o.try_into().ok())
            .ok_or(InvalidAddress::ByteCount {
                actual: bytes.len(),
            })?;

        Ok(Self(octets))
    }

    /// Builds an address from its integer value.
    ///
    /// # Errors
    /// Fails if `value` does not fit into 32 bits.
    pub fn from_integer(value: u128) -> Result<Self> {
        codec::integer_to_be_bytes::<4>(value)
            .map(Self)
            .ok_or_else(|| InvalidAddress::unrecognized(value.to_string()))
    }

    /// Builds an address from the decimal text of its integer value.
    ///
    /// # Errors
    /// Fails on anything but plain digits, or on values above `u32::MAX`.
    pub fn from_decimal(text: &str) -> Result<Self> {
        codec::parse_decimal(text)
            .and_then(codec::integer_to_be_bytes::<4>)
            .map(Self)
            .ok_or_else(|| InvalidAddress::unrecognized(text))
    }

    /// Parses strict dotted-decimal notation.
    ///
    /// # Errors
    /// Fails on any text that is not exactly four decimal octets.
    pub fn from_string(text: &str) -> Result<Self> {
        text::parse_dotted(text)
            .map(Self)
            .ok_or_else(|| InvalidAddress::unrecognized(text))
    }

    /// The address as a 32-bit big-endian integer.
    pub fn to_u32(&self) -> u32 {
        codec::be_bytes_to_integer(&self.0) as u32
    }

    /// `255.255.255.255`
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// `192.0.2.0/24`, `198.51.100.0/24` and `203.0.113.0/24` (RFC 5737).
    pub fn is_documentation(&self) -> bool {
        matches!(
            self.0,
            [192, 0, 2, _] | [198, 51, 100, _] | [203, 0, 113, _]
        )
    }

    /// `192.254.0.0/16`
    pub fn is_link_local(&self) -> bool {
        matches!(self.0, [192, 254, _, _])
    }

    /// `127.0.0.0/8`
    pub fn is_loopback(&self) -> bool {
        self.0[0] == 127
    }

    /// `10.0.0.0/8`, `172.16.0.0/12` and `192.168.0.0/16` (RFC 1918).
    pub fn is_private(&self) -> bool {
        matches!(self.0, [10, ..] | [172, 16..=31, ..] | [192, 168, ..])
    }

    /// `0.0.0.0`
    pub fn is_unspecified(&self) -> bool {
        *self == Self::UNSPECIFIED
    }

    /// `true` when none of the other predicates hold.
    pub fn is_global(&self) -> bool {
        !(self.is_broadcast()
            || self.is_documentation()
            || self.is_link_local()
            || self.is_loopback()
            || self.is_private()
            || self.is_unspecified())
    }

    /// Embeds the address in `::a.b.c.d` (IPv4-compatible).
    pub fn to_ipv6_compatible(&self) -> Ipv6Address {
        self.embed(0)
    }

    /// Embeds the address in `::ffff:a.b.c.d` (IPv4-mapped).
    pub fn to_ipv6_mapped(&self) -> Ipv6Address {
        self.embed(0xffff)
    }

    fn embed(&self, marker: u16) -> Ipv6Address {
        let [a, b, c, d] = self.0;

        Ipv6Address::new(
            0,
            0,
            0,
            0,
            0,
            marker,
            u16::from_be_bytes([a, b]),
            u16::from_be_bytes([c, d]),
        )
    }
}

impl Address for Ipv4Address {
    fn version(&self) -> IpVersion {
        IpVersion::V4
    }

    fn to_binary(&self) -> Vec<u8> {
        codec::flat_bytes_from_groups(&self.0)
    }

    fn to_integer(&self) -> u128 {
        codec::be_bytes_to_integer(&self.0)
    }

    fn is_global(&self) -> bool {
        Ipv4Address::is_global(self)
    }

    fn is_unspecified(&self) -> bool {
        Ipv4Address::is_unspecified(self)
    }

    fn is_loopback(&self) -> bool {
        Ipv4Address::is_loopback(self)
    }

    fn is_documentation(&self) -> bool {
        Ipv4Address::is_documentation(self)
    }
}

impl Display for Ipv4Address {
    /// Dotted-decimal, e.g. `192.0.2.1`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        text::format_dotted(&self.0, f)
    }
}

impl FromStr for Ipv4Address {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl<'a> IntoIterator for &'a Ipv4Address {
    type Item = u8;
    type IntoIter = std::array::IntoIter<u8, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
