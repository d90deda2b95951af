//! Raw address encodings
//!
//! This module groups the pure conversion routines shared by both address
//! variants. Nothing here knows about address semantics; the routines only
//! move values between representations of a fixed byte width (4 or 16):
//!
//! - [`groups`]
//!   Packing flat 8-bit sequences into 8-bit or 16-bit groups and back.
//!
//! - [`integer`]
//!   Big-endian byte arrays to and from unsigned integers, plus strict
//!   decimal parsing.
//!
//! - [`component`]
//!   Range checks that turn loosely typed integers into octets and
//!   segments.
//!
//! - [`text`]
//!   Dotted-decimal and colon-hex presentation forms.
//!
//! Validation in this module never goes beyond length, range and syntax.

pub mod component;
pub mod groups;
pub mod integer;
pub mod text;

pub use groups::{Group, flat_bytes_from_groups, groups_from_flat_bytes};
pub use integer::{
    be_bytes_to_integer, integer_to_be_bytes, integer_to_full_be_bytes, parse_decimal,
};
