//! Field-packing rules shared by the command encoders and the decoders.

use aptwire_frame::pack;
use bytes::{BufMut, Bytes, BytesMut};

use crate::error::EncodeError;

/// Wire value for `true` in boolean-as-enum fields.
pub const ENUM_TRUE: u8 = 0x01;

/// Wire value for `false` in boolean-as-enum fields. Never zero.
pub const ENUM_FALSE: u8 = 0x02;

/// Encode a boolean as the protocol's 1/2 enumeration.
pub fn bool_to_enum(value: bool) -> u8 {
    if value {
        ENUM_TRUE
    } else {
        ENUM_FALSE
    }
}

/// Decode a 1/2 enumeration; only `1` reads as `true`.
pub fn enum_to_bool(value: u8) -> bool {
    value == ENUM_TRUE
}

/// Pack flags into a bitmask, flag `i` setting bit `1 << i`.
pub fn pack_flags(field: &'static str, flags: &[bool], width: usize) -> Result<u32, EncodeError> {
    if flags.len() > width {
        return Err(EncodeError::TooManyFlags {
            field,
            count: flags.len(),
            max: width,
        });
    }
    Ok(flags
        .iter()
        .enumerate()
        .filter(|(_, set)| **set)
        .fold(0u32, |mask, (i, _)| mask | (1 << i)))
}

/// Unpack the low `N` bits of a mask, bit 0 first.
pub fn unpack_flags<const N: usize>(mask: u32) -> [bool; N] {
    std::array::from_fn(|i| mask & (1 << i) != 0)
}

/// Encode optional fields as values plus a presence mask.
///
/// Absent fields are written as zero; bit `i` of the mask is set when field
/// `i` was supplied.
pub fn filter_mask<const N: usize>(fields: [Option<u32>; N]) -> ([u32; N], u16) {
    let mut mask = 0u16;
    let values = std::array::from_fn(|i| match fields[i] {
        Some(value) => {
            mask |= 1 << i;
            value
        }
        None => 0,
    });
    (values, mask)
}

/// Reverse of [`filter_mask`].
pub fn apply_filter_mask<const N: usize>(values: [u32; N], mask: u16) -> [Option<u32>; N] {
    std::array::from_fn(|i| (mask & (1 << i) != 0).then_some(values[i]))
}

/// Narrow a value into a 1-byte short-form parameter.
pub fn byte_param(field: &'static str, value: u16) -> Result<u8, EncodeError> {
    u8::try_from(value).map_err(|_| EncodeError::OutOfRange {
        field,
        value: i64::from(value),
        min: 0,
        max: i64::from(u8::MAX),
    })
}

/// Narrow a bitmask into a 1-byte short-form parameter.
pub(crate) fn mask_param(field: &'static str, mask: u32) -> Result<u8, EncodeError> {
    u8::try_from(mask).map_err(|_| EncodeError::OutOfRange {
        field,
        value: i64::from(mask),
        min: 0,
        max: i64::from(u8::MAX),
    })
}

/// Build a short-form frame.
pub(crate) fn short(
    msgid: u16,
    dest: u8,
    source: u8,
    param1: u8,
    param2: u8,
) -> Result<Bytes, EncodeError> {
    Ok(pack(msgid, dest, source, param1, param2, None)?)
}

/// Build a long-form frame around an assembled payload.
pub(crate) fn long(msgid: u16, dest: u8, source: u8, payload: &[u8]) -> Result<Bytes, EncodeError> {
    Ok(pack(msgid, dest, source, 0, 0, Some(payload))?)
}

/// Payload assembly buffer.
pub(crate) struct Payload {
    buf: BytesMut,
}

impl Payload {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    pub(crate) fn u16(mut self, value: u16) -> Self {
        self.buf.put_u16_le(value);
        self
    }

    pub(crate) fn i16(mut self, value: i16) -> Self {
        self.buf.put_i16_le(value);
        self
    }

    pub(crate) fn u32(mut self, value: u32) -> Self {
        self.buf.put_u32_le(value);
        self
    }

    pub(crate) fn i32(mut self, value: i32) -> Self {
        self.buf.put_i32_le(value);
        self
    }

    pub(crate) fn finish(self, msgid: u16, dest: u8, source: u8) -> Result<Bytes, EncodeError> {
        long(msgid, dest, source, &self.buf)
    }
}
