use aptwire_frame::{decode_frame, decode_header, msgid, RawFrame};
use aptwire_proto::{Catalog, CatalogError, Message};
use bytes::BytesMut;

/// Where the unpacker is within the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnpackState {
    /// Fewer than six bytes are buffered.
    AwaitingHeader,
    /// A long-form header is buffered; `remaining` payload bytes are missing.
    AwaitingPayload { msgid: u16, remaining: usize },
    /// At least one complete frame is buffered.
    FrameReady,
}

/// Byte buffer that splits complete frames off its front.
#[derive(Debug)]
pub(crate) struct FrameAssembler {
    buf: BytesMut,
}

impl FrameAssembler {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    pub(crate) fn extend(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    #[cfg(feature = "async")]
    pub(crate) fn buffer_mut(&mut self) -> &mut BytesMut {
        &mut self.buf
    }

    pub(crate) fn buffered(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn state(&self) -> UnpackState {
        match decode_header(&self.buf) {
            Err(_) => UnpackState::AwaitingHeader,
            Ok(header) if self.buf.len() < header.frame_len() => UnpackState::AwaitingPayload {
                msgid: header.msgid,
                remaining: header.frame_len() - self.buf.len(),
            },
            Ok(_) => UnpackState::FrameReady,
        }
    }

    /// Split off the next complete frame, consuming exactly its wire size.
    pub(crate) fn next_frame(&mut self) -> Option<RawFrame> {
        let frame = decode_frame(&mut self.buf)?;
        tracing::debug!(
            msgid = frame.header.msgid,
            len = frame.wire_size(),
            long_form = frame.header.is_long_form(),
            "assembled frame"
        );
        Some(frame)
    }
}

/// Decode an assembled frame.
///
/// Unknown message ids are not an error here: the frame boundary is known,
/// so a placeholder is returned and the stream stays in sync.
pub(crate) fn decode_message(catalog: &Catalog, frame: &RawFrame) -> Result<Message, CatalogError> {
    match catalog.dispatch_frame(frame) {
        Ok(message) => Ok(message),
        Err(CatalogError::UnknownMessage {
            msgid,
            dest,
            source_addr,
        }) => {
            tracing::warn!(
                msgid,
                family = msgid::family(msgid),
                dest,
                source = source_addr,
                len = frame.wire_size(),
                "unknown message id"
            );
            Ok(Message::unknown(msgid, dest, source_addr))
        }
        Err(err) => {
            tracing::warn!(
                msgid = frame.header.msgid,
                len = frame.wire_size(),
                error = %err,
                "dropping malformed frame"
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use aptwire_frame::HEADER_SIZE;

    use super::*;

    #[test]
    fn state_follows_buffer() {
        let mut asm = FrameAssembler::with_capacity(64);
        assert_eq!(asm.state(), UnpackState::AwaitingHeader);

        asm.extend(&[0x12, 0x04, 0x06, 0x00]);
        assert_eq!(asm.state(), UnpackState::AwaitingHeader);

        asm.extend(&[0x81, 0x50, 0x01, 0x00]);
        assert_eq!(
            asm.state(),
            UnpackState::AwaitingPayload {
                msgid: 0x0412,
                remaining: 4
            }
        );

        asm.extend(&[0x10, 0x27, 0x00, 0x00]);
        assert_eq!(asm.state(), UnpackState::FrameReady);

        let frame = asm.next_frame().unwrap();
        assert_eq!(frame.wire_size(), 12);
        assert_eq!(asm.buffered(), 0);
        assert_eq!(asm.state(), UnpackState::AwaitingHeader);
    }

    #[test]
    fn short_frame_never_awaits_payload() {
        let mut asm = FrameAssembler::with_capacity(8);
        asm.extend(&[0x44, 0x04, 0xFF, 0xFF, 0x01, 0x50]);
        assert_eq!(asm.state(), UnpackState::FrameReady);
        assert_eq!(asm.next_frame().unwrap().wire_size(), HEADER_SIZE);
    }

    #[test]
    fn unknown_id_becomes_placeholder() {
        let catalog = Catalog::standard().unwrap();
        let mut asm = FrameAssembler::with_capacity(8);
        asm.extend(&[0xEF, 0xBE, 0x00, 0x00, 0x01, 0x50]);
        let frame = asm.next_frame().unwrap();
        let msg = decode_message(&catalog, &frame).unwrap();
        assert!(msg.is_unknown());
        assert_eq!((msg.msgid, msg.dest, msg.source), (0xBEEF, 0x01, 0x50));
    }
}
