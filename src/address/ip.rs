//! Version-agnostic address facade.
//!
//! [`IpAddress`] routes construction to [`Ipv4Address`] or [`Ipv6Address`]
//! based on the shape of the input:
//!
//! | input  | IPv4              | IPv6             |
//! |--------|-------------------|------------------|
//! | array  | 4 elements        | 8 or 16 elements |
//! | binary | 4 bytes           | 16 bytes         |
//! | text   | contains `.` only | contains `:`     |
//!
//! The facade never builds an address itself; it only picks the variant
//! constructor.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::net::IpAddr;
use std::str::FromStr;

use serde_json::Value;
use tracing::{debug, trace};

use crate::address::{Address, IpVersion, Ipv4Address, Ipv6Address};
use crate::codec::component::{self, Component};
use crate::error::{InvalidAddress, Result};

/// Either an IPv4 or an IPv6 address.
///
/// Every IPv4 address orders before every IPv6 address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IpAddress {
    V4(Ipv4Address),
    V6(Ipv6Address),
}

impl IpAddress {
    /// Builds an address from 4 (IPv4), 8 or 16 (IPv6) integers.
    ///
    /// # Errors
    /// Fails on any other element count or when a component is out of
    /// range for the selected variant.
    pub fn from_array<T: Component>(values: &[T]) -> Result<Self> {
        match values.len() {
            4 => {
                trace!(len = 4, "routing array to ipv4");
                Ipv4Address::from_array(values).map(IpAddress::V4)
            }
            8 | 16 => {
                trace!(len = values.len(), "routing array to ipv6");
                Ipv6Address::from_array(values).map(IpAddress::V6)
            }
            actual => {
                debug!(len = actual, "rejected address array");
                Err(InvalidAddress::ElementCount {
                    expected: "4, 8 or 16",
                    actual,
                })
            }
        }
    }

    /// Dynamically typed form of [`IpAddress::from_array`].
    ///
    /// # Errors
    /// Fails like [`IpAddress::from_array`], and additionally when an
    /// element is not an integer.
    pub fn from_values(values: &[Value]) -> Result<Self> {
        Self::from_array(&component::integers(values)?)
    }

    /// Builds an address from its 4- or 16-byte big-endian form.
    ///
    /// # Errors
    /// Fails on any other length.
    pub fn from_binary(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            4 => {
                trace!(len = 4, "routing bytes to ipv4");
                Ipv4Address::from_binary(bytes).map(IpAddress::V4)
            }
            16 => {
                trace!(len = 16, "routing bytes to ipv6");
                Ipv6Address::from_binary(bytes).map(IpAddress::V6)
            }
            actual => {
                debug!(len = actual, "rejected address bytes");
                Err(InvalidAddress::ByteCount { actual })
            }
        }
    }

    /// Parses either presentation form.
    ///
    /// Text containing `:` is parsed as IPv6, otherwise text containing
    /// `.` as IPv4.
    ///
    /// # Errors
    /// Fails when the text matches neither form. The empty string is
    /// rejected as unrecognized.
    pub fn from_string(text: &str) -> Result<Self> {
        if text.contains(':') {
            trace!(input = text, "routing text to ipv6");
            return Ipv6Address::from_string(text).map(IpAddress::V6);
        }

        if text.contains('.') {
            trace!(input = text, "routing text to ipv4");
            return Ipv4Address::from_string(text).map(IpAddress::V4);
        }

        debug!(input = text, "rejected address text");
        Err(InvalidAddress::unrecognized(text))
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self, IpAddress::V4(_))
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self, IpAddress::V6(_))
    }

    pub fn as_ipv4(&self) -> Option<&Ipv4Address> {
        match self {
            IpAddress::V4(v4) => Some(v4),
            IpAddress::V6(_) => None,
        }
    }

    pub fn as_ipv6(&self) -> Option<&Ipv6Address> {
        match self {
            IpAddress::V4(_) => None,
            IpAddress::V6(v6) => Some(v6),
        }
    }

    /// `ff00::/8`. No IPv4 range is classified as multicast.
    pub fn is_multicast(&self) -> bool {
        match self {
            IpAddress::V4(_) => false,
            IpAddress::V6(v6) => v6.is_multicast(),
        }
    }
}

impl Address for IpAddress {
    fn version(&self) -> IpVersion {
        match self {
            IpAddress::V4(_) => IpVersion::V4,
            IpAddress::V6(_) => IpVersion::V6,
        }
    }

    fn to_binary(&self) -> Vec<u8> {
        match self {
            IpAddress::V4(v4) => v4.to_binary(),
            IpAddress::V6(v6) => v6.to_binary(),
        }
    }

    fn to_integer(&self) -> u128 {
        match self {
            IpAddress::V4(v4) => Address::to_integer(v4),
            IpAddress::V6(v6) => Address::to_integer(v6),
        }
    }

    fn is_global(&self) -> bool {
        match self {
            IpAddress::V4(v4) => v4.is_global(),
            IpAddress::V6(v6) => v6.is_global(),
        }
    }

    fn is_unspecified(&self) -> bool {
        match self {
            IpAddress::V4(v4) => v4.is_unspecified(),
            IpAddress::V6(v6) => v6.is_unspecified(),
        }
    }

    fn is_loopback(&self) -> bool {
        match self {
            IpAddress::V4(v4) => v4.is_loopback(),
            IpAddress::V6(v6) => v6.is_loopback(),
        }
    }

    fn is_documentation(&self) -> bool {
        match self {
            IpAddress::V4(v4) => v4.is_documentation(),
            IpAddress::V6(v6) => v6.is_documentation(),
        }
    }
}

impl Display for IpAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            IpAddress::V4(v4) => v4.fmt(f),
            IpAddress::V6(v6) => v6.fmt(f),
        }
    }
}

impl FromStr for IpAddress {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

/// Iterates the 4 or 16 bytes of [`Address::to_binary`] in network order.
impl IntoIterator for &IpAddress {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_binary().into_iter()
    }
}

impl From<Ipv4Address> for IpAddress {
    fn from(value: Ipv4Address) -> Self {
        IpAddress::V4(value)
    }
}

impl From<Ipv6Address> for IpAddress {
    fn from(value: Ipv6Address) -> Self {
        IpAddress::V6(value)
    }
}

impl From<IpAddr> for IpAddress {
    fn from(value: IpAddr) -> Self {
        match value {
            IpAddr::V4(v4) => IpAddress::V4(v4.into()),
            IpAddr::V6(v6) => IpAddress::V6(v6.into()),
        }
    }
}

impl From<IpAddress> for IpAddr {
    fn from(value: IpAddress) -> Self {
        match value {
            IpAddress::V4(v4) => IpAddr::V4(v4.into()),
            IpAddress::V6(v6) => IpAddr::V6(v6.into()),
        }
    }
}
