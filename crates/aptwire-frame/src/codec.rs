use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// Frame header: msgid (2) + params or length (2) + dest (1) + source (1) = 6 bytes.
pub const HEADER_SIZE: usize = 6;

/// Bit set in the `dest` byte when a payload follows the header.
pub const LONG_FORM_FLAG: u8 = 0x80;

/// Largest payload the 16-bit length field can describe.
pub const MAX_PAYLOAD: usize = u16::MAX as usize;

/// The variable half of a header: two parameters or a payload length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderForm {
    /// No payload; the two bytes after the msgid are parameters.
    Short { param1: u8, param2: u8 },
    /// A payload of `length` bytes follows the header.
    Long { length: u16 },
}

/// A decoded frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Message kind.
    pub msgid: u16,
    /// Destination address with the long-form flag removed.
    pub dest: u8,
    /// Source address.
    pub source: u8,
    /// Short or long form.
    pub form: HeaderForm,
}

impl Header {
    /// Whether a payload follows this header.
    pub fn is_long_form(&self) -> bool {
        matches!(self.form, HeaderForm::Long { .. })
    }

    /// Declared payload length, or zero for short-form headers.
    pub fn length(&self) -> u16 {
        match self.form {
            HeaderForm::Long { length } => length,
            HeaderForm::Short { .. } => 0,
        }
    }

    /// The two parameter bytes. For long-form headers these alias the
    /// length field, low byte first.
    pub fn params(&self) -> (u8, u8) {
        match self.form {
            HeaderForm::Short { param1, param2 } => (param1, param2),
            HeaderForm::Long { length } => {
                let [lo, hi] = length.to_le_bytes();
                (lo, hi)
            }
        }
    }

    /// The total wire size of the frame this header announces.
    pub fn frame_len(&self) -> usize {
        HEADER_SIZE + self.length() as usize
    }
}

/// A complete, undecoded frame split off a byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    /// The parsed header.
    pub header: Header,
    /// Every byte of the frame, header included.
    pub bytes: Bytes,
}

impl RawFrame {
    /// Payload bytes after the header (empty for short form).
    pub fn payload(&self) -> &[u8] {
        &self.bytes[HEADER_SIZE..]
    }

    /// The total wire size of this frame.
    pub fn wire_size(&self) -> usize {
        self.bytes.len()
    }
}

fn check_dest(dest: u8) -> Result<()> {
    if dest & LONG_FORM_FLAG != 0 {
        return Err(FrameError::AddressOutOfRange(dest));
    }
    Ok(())
}

/// Encode a short-form header.
///
/// Wire format:
/// ```text
/// ┌──────────────┬─────────┬─────────┬────────┬──────────┐
/// │ msgid (2B LE)│ param1  │ param2  │ dest   │ source   │
/// └──────────────┴─────────┴─────────┴────────┴──────────┘
/// ```
pub fn encode_header(
    msgid: u16,
    dest: u8,
    source: u8,
    param1: u8,
    param2: u8,
    dst: &mut BytesMut,
) -> Result<()> {
    check_dest(dest)?;
    dst.reserve(HEADER_SIZE);
    dst.put_u16_le(msgid);
    dst.put_u8(param1);
    dst.put_u8(param2);
    dst.put_u8(dest);
    dst.put_u8(source);
    Ok(())
}

/// Encode a long-form header announcing `payload_len` bytes.
///
/// Wire format:
/// ```text
/// ┌──────────────┬───────────────┬─────────────┬──────────┐
/// │ msgid (2B LE)│ length (2B LE)│ dest | 0x80 │ source   │
/// └──────────────┴───────────────┴─────────────┴──────────┘
/// ```
pub fn encode_long_header(
    msgid: u16,
    dest: u8,
    source: u8,
    payload_len: usize,
    dst: &mut BytesMut,
) -> Result<()> {
    check_dest(dest)?;
    let length = u16::try_from(payload_len).map_err(|_| FrameError::PayloadTooLarge {
        size: payload_len,
        max: MAX_PAYLOAD,
    })?;
    dst.reserve(HEADER_SIZE + payload_len);
    dst.put_u16_le(msgid);
    dst.put_u16_le(length);
    dst.put_u8(dest | LONG_FORM_FLAG);
    dst.put_u8(source);
    Ok(())
}

/// Decode the first six bytes of `src` as a header.
///
/// Any six bytes form a valid header; the only failure is a short slice.
pub fn decode_header(src: &[u8]) -> Result<Header> {
    if src.len() < HEADER_SIZE {
        return Err(FrameError::HeaderTooShort { actual: src.len() });
    }

    let msgid = u16::from_le_bytes([src[0], src[1]]);
    let dest_byte = src[4];
    let form = if dest_byte & LONG_FORM_FLAG != 0 {
        HeaderForm::Long {
            length: u16::from_le_bytes([src[2], src[3]]),
        }
    } else {
        HeaderForm::Short {
            param1: src[2],
            param2: src[3],
        }
    };

    Ok(Header {
        msgid,
        dest: dest_byte & !LONG_FORM_FLAG,
        source: src[5],
        form,
    })
}

/// Build a complete frame.
///
/// With `payload` set the frame is long form and both parameters must be
/// zero; otherwise it is short form carrying `param1`/`param2`.
pub fn pack(
    msgid: u16,
    dest: u8,
    source: u8,
    param1: u8,
    param2: u8,
    payload: Option<&[u8]>,
) -> Result<Bytes> {
    let mut buf = BytesMut::new();
    match payload {
        Some(data) => {
            if param1 != 0 || param2 != 0 {
                return Err(FrameError::ParamsWithPayload);
            }
            encode_long_header(msgid, dest, source, data.len(), &mut buf)?;
            buf.put_slice(data);
        }
        None => encode_header(msgid, dest, source, param1, param2, &mut buf)?,
    }
    Ok(buf.freeze())
}

/// Split one frame off the front of `src`.
///
/// Returns `None` if the buffer doesn't contain a complete frame yet.
/// On success, consumes exactly `6` (short form) or `6 + length` (long form)
/// bytes from the buffer.
pub fn decode_frame(src: &mut BytesMut) -> Option<RawFrame> {
    let header = decode_header(src).ok()?;
    let total = header.frame_len();
    if src.len() < total {
        return None; // Need more data
    }

    let bytes = src.split_to(total).freeze();
    tracing::trace!(msgid = header.msgid, len = total, "split frame");
    Some(RawFrame { header, bytes })
}
