//! 128-bit IPv6 address value type.
//!
//! An [`Ipv6Address`] is eight 16-bit segments. The big-endian byte view
//! (16 bytes, high byte of each segment first) is derived on demand.
//!
//! The classification predicates follow the IANA IPv6 special-purpose
//! registry for the ranges listed on each method. [`Ipv6Address::is_global`]
//! is the complement of all of them.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde_json::Value;

use crate::address::{Address, IpVersion, Ipv4Address};
use crate::codec::component::{self, Component};
use crate::codec::{self, groups, text};
use crate::error::{InvalidAddress, Result};

/// IPv6 address.
///
/// Ordering follows the numeric value of the address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv6Address(pub(crate) [u16; 8]);

impl Ipv6Address {
    /// `::`
    pub const UNSPECIFIED: Self = Self([0; 8]);

    /// `::1`
    pub const LOCALHOST: Self = Self([0, 0, 0, 0, 0, 0, 0, 1]);

    /// Builds an address from eight segments.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        s0: u16,
        s1: u16,
        s2: u16,
        s3: u16,
        s4: u16,
        s5: u16,
        s6: u16,
        s7: u16,
    ) -> Self {
        Self([s0, s1, s2, s3, s4, s5, s6, s7])
    }

    /// The eight segments.
    pub const fn segments(&self) -> [u16; 8] {
        self.0
    }

    /// The sixteen bytes in network order.
    pub fn octets(&self) -> [u8; 16] {
        groups::bytes_from_segments(&self.0)
    }

    /// Builds an address from 8 segments or 16 bytes.
    ///
    /// With 16 elements each pair is merged big-endian into one segment.
    ///
    /// # Errors
    /// Fails on any other element count, or when a segment (8 elements)
    /// or byte (16 elements) is out of range.
    pub fn from_array<T: Component>(values: &[T]) -> Result<Self> {
        match values.len() {
            8 => {
                let mut out = [0u16; 8];
                for (slot, &value) in out.iter_mut().zip(values) {
                    *slot = component::segment(value)?;
                }

                Ok(Self(out))
            }
            16 => {
                let mut bytes = [0u8; 16];
                for (slot, &value) in bytes.iter_mut().zip(values) {
                    *slot = component::octet(value)?;
                }

                Ok(Self(groups::segments_from_bytes(&bytes)))
            }
            actual => Err(InvalidAddress::ElementCount {
                expected: "8 or 16",
                actual,
            }),
        }
    }

    /// Builds an address from dynamically typed values, e.g. a decoded
    /// JSON array.
    ///
    /// # Errors
    /// Fails like [`Ipv6Address::from_array`], and additionally when an
    /// element is not an integer.
    pub fn from_values(values: &[Value]) -> Result<Self> {
        Self::from_array(&component::integers(values)?)
    }

    /// Builds an address from its 16-byte big-endian form.
    ///
    /// # Errors
    /// Fails if `bytes` is not exactly 16 bytes long.
    pub fn from_binary(bytes: &[u8]) -> Result<Self> {
        let segments: [u16; 8] = codec::groups_from_flat_bytes::<u16>(bytes)
            .and_then(|s| s.try_into().ok())
            .ok_or(InvalidAddress::ByteCount {
                actual: bytes.len(),
            })?;

        Ok(Self(segments))
    }

    /// Builds an address from its integer value.
    ///
    /// Every `u128` is a valid IPv6 address.
    pub fn from_integer(value: u128) -> Self {
        Self::from(value)
    }

    /// Builds an address from the decimal text of its integer value.
    ///
    /// # Errors
    /// Fails on anything but plain digits, or on values above `2^128 - 1`.
    pub fn from_decimal(text: &str) -> Result<Self> {
        codec::parse_decimal(text)
            .map(Self::from)
            .ok_or_else(|| InvalidAddress::unrecognized(text))
    }

    /// Parses compressed or expanded colon-hex notation, optionally with a
    /// dotted IPv4 tail.
    ///
    /// # Errors
    /// Fails on any text that is not a complete IPv6 address.
    pub fn from_string(text: &str) -> Result<Self> {
        text::parse_colon_hex(text)
            .map(Self)
            .ok_or_else(|| InvalidAddress::unrecognized(text))
    }

    /// The address as a 128-bit big-endian integer.
    pub fn to_u128(&self) -> u128 {
        codec::be_bytes_to_integer(&self.octets())
    }

    /// Eight zero-padded groups without `::` compression.
    pub fn to_expanded_string(&self) -> String {
        text::Expanded(&self.0).to_string()
    }

    /// `::`
    pub fn is_unspecified(&self) -> bool {
        *self == Self::UNSPECIFIED
    }

    /// `::1`
    pub fn is_loopback(&self) -> bool {
        *self == Self::LOCALHOST
    }

    /// `2001:db8::/32` (RFC 3849).
    pub fn is_documentation(&self) -> bool {
        self.0[0] == 0x2001 && self.0[1] == 0x0db8
    }

    /// `ff00::/8`
    pub fn is_multicast(&self) -> bool {
        (self.0[0] & 0xff00) == 0xff00
    }

    /// `fe80::/10`
    pub fn is_unicast_link_local(&self) -> bool {
        (self.0[0] & 0xffc0) == 0xfe80
    }

    /// `fec0::/10`, deprecated by RFC 3879.
    pub fn is_unicast_site_local(&self) -> bool {
        (self.0[0] & 0xffc0) == 0xfec0
    }

    /// `fc00::/7` (RFC 4193).
    pub fn is_unique_local(&self) -> bool {
        (self.0[0] & 0xfe00) == 0xfc00
    }

    /// `true` when the address is in none of the special ranges above.
    pub fn is_global(&self) -> bool {
        !(self.is_unspecified()
            || self.is_loopback()
            || self.is_documentation()
            || self.is_multicast()
            || self.is_unicast_link_local()
            || self.is_unicast_site_local()
            || self.is_unique_local())
    }

    /// Globally routable unicast. Multicast is already excluded from
    /// [`Ipv6Address::is_global`], so the two coincide.
    pub fn is_unicast_global(&self) -> bool {
        self.is_global()
    }

    /// `::ffff:0:0/96`
    pub fn is_ipv4_mapped(&self) -> bool {
        matches!(self.0, [0, 0, 0, 0, 0, 0xffff, _, _])
    }

    /// `::0:0/96`
    pub fn is_ipv4_compatible(&self) -> bool {
        matches!(self.0, [0, 0, 0, 0, 0, 0, _, _])
    }

    /// Extracts the IPv4 address embedded in the low 32 bits of an
    /// IPv4-mapped or IPv4-compatible address.
    ///
    /// Segments 0 through 4 must all be zero and segment 5 must be `0` or
    /// `0xffff`. A non-zero prefix disqualifies the address even when the
    /// low 48 bits look mapped: `2001:db8::ffff:c000:201` yields `None`,
    /// as does every other address outside `::ffff:0:0/96` and `::0:0/96`.
    pub fn to_ipv4_address(&self) -> Option<Ipv4Address> {
        if !(self.is_ipv4_mapped() || self.is_ipv4_compatible()) {
            return None;
        }

        let [a, b] = self.0[6].to_be_bytes();
        let [c, d] = self.0[7].to_be_bytes();

        Some(Ipv4Address::new(a, b, c, d))
    }
}

impl Address for Ipv6Address {
    fn version(&self) -> IpVersion {
        IpVersion::V6
    }

    fn to_binary(&self) -> Vec<u8> {
        codec::flat_bytes_from_groups(&self.0)
    }

    fn to_integer(&self) -> u128 {
        self.to_u128()
    }

    fn is_global(&self) -> bool {
        Ipv6Address::is_global(self)
    }

    fn is_unspecified(&self) -> bool {
        Ipv6Address::is_unspecified(self)
    }

    fn is_loopback(&self) -> bool {
        Ipv6Address::is_loopback(self)
    }

    fn is_documentation(&self) -> bool {
        Ipv6Address::is_documentation(self)
    }
}

impl Display for Ipv6Address {
    /// Compressed colon-hex, e.g. `2001:db8::1`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        text::format_colon_hex(&self.0, f)
    }
}

impl FromStr for Ipv6Address {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl IntoIterator for &Ipv6Address {
    type Item = u8;
    type IntoIter = std::array::IntoIter<u8, 16>;

    fn into_iter(self) -> Self::IntoIter {
        self.octets().into_iter()
    }
}
