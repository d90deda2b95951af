//! Conversions between `Ipv4Address` and other representations.
//!
//! All conversions here are infallible: every 4-byte array, every `u32`
//! and every `std::net::Ipv4Addr` is a legal IPv4 address. Fallible forms
//! (slices, wide integers, text) live on `Ipv4Address` itself.

mod net;
mod u32;
mod u8;
