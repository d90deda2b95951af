//! IPv4 addresses
//!
//! - `core`: the value type, its constructors and the registry predicates.
//! - `conv`: conversions to and from arrays, integers and `std::net`.

mod conv;
mod core;

pub use self::core::Ipv4Address;
