//! Validated IP address value types
//!
//! This crate provides immutable value types for single IPv4 and IPv6
//! addresses, conversions between their textual, binary, integer and array
//! representations, and classification predicates taken from the IANA
//! special-purpose address registries.
//!
//! The focus is on **parse, don't validate**: every constructor checks its
//! input completely, so an address that exists is always legal. There is
//! no way to build a partially valid value and no way to mutate one.
//!
//! # Module overview
//!
//! - `codec`
//!   Pure conversions between flat bytes, 8/16-bit groups, big-endian
//!   integers, decimal text and the presentation forms. Knows nothing
//!   about address semantics.
//!
//! - `address`
//!   The [`Ipv4Address`] and [`Ipv6Address`] variants, the [`IpAddress`]
//!   facade that dispatches on input shape, and the [`Address`]
//!   capability trait they share.
//!
//! - `error`
//!   The single [`InvalidAddress`] error type. Its messages are stable.
//!
//! # Example
//!
//! ```
//! use ipvalue::{Address, IpAddress, Ipv4Address};
//!
//! let addr: IpAddress = "127.0.0.1".parse().unwrap();
//! assert_eq!(addr, IpAddress::V4(Ipv4Address::new(127, 0, 0, 1)));
//! assert!(addr.is_loopback());
//! assert_eq!(addr.to_integer(), 2130706433);
//! ```
//!
//! # Non-goals
//!
//! No socket I/O, no name resolution and no subnet arithmetic beyond the
//! fixed registry ranges.

pub mod address;
pub mod codec;
pub mod error;

pub use address::{Address, IpAddress, IpVersion, Ipv4Address, Ipv6Address};
pub use error::{InvalidAddress, Result};
