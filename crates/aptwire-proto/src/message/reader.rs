use aptwire_frame::HEADER_SIZE;
use bytes::Buf;

use crate::error::FormatError;

pub(crate) type Result<T> = std::result::Result<T, FormatError>;

/// The two short-form parameter bytes of a frame.
pub(crate) fn params(frame: &[u8]) -> Result<(u8, u8)> {
    if frame.len() < HEADER_SIZE {
        return Err(FormatError::Truncated {
            expected: HEADER_SIZE,
            actual: frame.len(),
        });
    }
    Ok((frame[2], frame[3]))
}

/// Sequential little-endian reader over a fixed-layout payload.
///
/// The length is checked once in [`Fields::new`]; reads past the declared
/// layout length are a decoder bug.
pub(crate) struct Fields<'a> {
    buf: &'a [u8],
}

impl<'a> Fields<'a> {
    /// View the `len` payload bytes following the header.
    pub(crate) fn new(frame: &'a [u8], len: usize) -> Result<Self> {
        let expected = HEADER_SIZE + len;
        if frame.len() < expected {
            return Err(FormatError::Truncated {
                expected,
                actual: frame.len(),
            });
        }
        Ok(Self {
            buf: &frame[HEADER_SIZE..expected],
        })
    }

    pub(crate) fn u8(&mut self) -> u8 {
        self.buf.get_u8()
    }

    pub(crate) fn u16(&mut self) -> u16 {
        self.buf.get_u16_le()
    }

    pub(crate) fn i16(&mut self) -> i16 {
        self.buf.get_i16_le()
    }

    pub(crate) fn u32(&mut self) -> u32 {
        self.buf.get_u32_le()
    }

    pub(crate) fn i32(&mut self) -> i32 {
        self.buf.get_i32_le()
    }

    /// Fixed-width string field: bytes up to the first NUL, lossy UTF-8.
    pub(crate) fn string(&mut self, width: usize) -> String {
        let raw = &self.buf[..width];
        let end = raw.iter().position(|&b| b == 0).unwrap_or(width);
        let text = String::from_utf8_lossy(&raw[..end]).into_owned();
        self.buf.advance(width);
        text
    }

    pub(crate) fn skip(&mut self, n: usize) {
        self.buf.advance(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_reports_expected_and_actual() {
        let frame = [0x15, 0x04, 0x0E, 0x00, 0x81, 0x50, 0x01, 0x00];
        assert_eq!(
            Fields::new(&frame, 14).err(),
            Some(FormatError::Truncated {
                expected: 20,
                actual: 8
            })
        );
    }

    #[test]
    fn string_stops_at_nul() {
        let mut frame = vec![0; HEADER_SIZE];
        frame.extend_from_slice(b"TDC001\0\0tail");
        let mut fields = Fields::new(&frame, 12).unwrap();
        assert_eq!(fields.string(8), "TDC001");
        assert_eq!(fields.string(4), "tail");
    }

    #[test]
    fn string_without_nul_uses_full_width() {
        let mut frame = vec![0; HEADER_SIZE];
        frame.extend_from_slice(b"ABCDEFGH");
        let mut fields = Fields::new(&frame, 8).unwrap();
        assert_eq!(fields.string(8), "ABCDEFGH");
    }

    #[test]
    fn params_from_bytes_two_and_three() {
        assert_eq!(params(&[0x44, 0x04, 0x03, 0x07, 0x01, 0x50]), Ok((3, 7)));
        assert!(params(&[0x44, 0x04]).is_err());
    }
}
