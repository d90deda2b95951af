//! Conversions between `Ipv6Address` and other representations.
//!
//! Every 16-byte array, every set of eight segments and every `u128` is a
//! legal IPv6 address, so all conversions here are infallible.

mod net;
mod u128;
mod u16;
mod u8;
