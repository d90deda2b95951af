//! Range checks for address components.
//!
//! Array constructors accept any primitive integer type so that callers
//! holding `i64`, `usize`, `u128` or plain literals can build addresses
//! without casting. These helpers narrow such values to octets and
//! segments, failing with the out-of-range error of the matching
//! component kind.

use std::fmt::Display;

use serde_json::Value;

use crate::error::{InvalidAddress, Result};

/// An integer element accepted by the array constructors.
///
/// Implemented for every type that converts fallibly into `i128`, which
/// covers all primitive integers including `u128` and `usize`. Values
/// beyond `i128` are reported as out of range like any other.
pub trait Component: Copy + TryInto<i128> + Display {}

impl<T: Copy + TryInto<i128> + Display> Component for T {}

/// Narrows an integer to an 8-bit octet.
pub fn octet<T: Component>(value: T) -> Result<u8> {
    value
        .try_into()
        .ok()
        .and_then(|v: i128| u8::try_from(v).ok())
        .ok_or_else(|| InvalidAddress::ByteOutOfRange {
            value: value.to_string(),
        })
}

/// Narrows an integer to a 16-bit segment.
pub fn segment<T: Component>(value: T) -> Result<u16> {
    value
        .try_into()
        .ok()
        .and_then(|v: i128| u16::try_from(v).ok())
        .ok_or_else(|| InvalidAddress::SegmentOutOfRange {
            value: value.to_string(),
        })
}

/// Extracts integers from dynamically typed values.
///
/// Fails on the first element that is not an integral JSON number.
pub fn integers(values: &[Value]) -> Result<Vec<i128>> {
    values.iter().map(integer).collect()
}

fn integer(value: &Value) -> Result<i128> {
    if let Value::Number(n) = value {
        if let Some(v) = n.as_i64() {
            return Ok(v as i128);
        }

        if let Some(v) = n.as_u64() {
            return Ok(v as i128);
        }
    }

    Err(InvalidAddress::NotAnInteger {
        kind: kind_name(value),
    })
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn octet_bounds() {
        assert_eq!(octet(0), Ok(0));
        assert_eq!(octet(255), Ok(255));
        assert_eq!(
            octet(256).unwrap_err().to_string(),
            "Byte must be between 0 and 255, got 256."
        );
        assert_eq!(
            octet(-1).unwrap_err().to_string(),
            "Byte must be between 0 and 255, got -1."
        );
    }

    #[test]
    fn segment_bounds() {
        assert_eq!(segment(65535u32), Ok(0xffff));
        assert_eq!(
            segment(65536u32).unwrap_err().to_string(),
            "Segment must be between 0 and 65535, got 65536."
        );
    }

    #[test]
    fn wide_unsigned_inputs() {
        assert_eq!(octet(200usize), Ok(200));
        assert_eq!(segment(0xfe80u128), Ok(0xfe80));
        assert_eq!(
            octet(u128::MAX).unwrap_err().to_string(),
            "Byte must be between 0 and 255, got 340282366920938463463374607431768211455."
        );
        assert_eq!(
            segment(i128::MAX as u128 + 1).unwrap_err().to_string(),
            "Segment must be between 0 and 65535, got 170141183460469231731687303715884105728."
        );
    }

    #[test]
    fn dynamic_values() {
        assert_eq!(integers(&[json!(1), json!(u64::MAX)]), Ok(vec![1, u64::MAX as i128]));
        assert_eq!(
            integers(&[json!(1), json!("2")]).unwrap_err().to_string(),
            "Byte must be a valid integer, got string."
        );
        assert_eq!(
            integers(&[json!(1.5)]).unwrap_err().to_string(),
            "Byte must be a valid integer, got float."
        );
        assert_eq!(
            integers(&[Value::Null]).unwrap_err().to_string(),
            "Byte must be a valid integer, got null."
        );
    }
}
