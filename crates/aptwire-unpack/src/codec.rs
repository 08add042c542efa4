use std::io;
use std::sync::Arc;

use aptwire_frame::decode_frame;
use aptwire_proto::{Catalog, CatalogError, Message};
use bytes::{Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::assembler::decode_message;

/// `tokio_util` codec for APT frames.
///
/// Decoding yields one item per frame. A malformed frame becomes an `Err`
/// item rather than a stream error, so one bad frame never ends a
/// `FramedRead`. Encoding passes already-built command frames through.
#[derive(Debug, Clone)]
pub struct AptCodec {
    catalog: Arc<Catalog>,
}

impl AptCodec {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}

impl Decoder for AptCodec {
    type Item = Result<Message, CatalogError>;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> io::Result<Option<Self::Item>> {
        Ok(decode_frame(src).map(|frame| decode_message(&self.catalog, &frame)))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> io::Result<Option<Self::Item>> {
        if let Some(item) = self.decode(src)? {
            return Ok(Some(item));
        }
        if !src.is_empty() {
            tracing::warn!(remaining = src.len(), "stream ended inside a frame");
            src.clear();
        }
        Ok(None)
    }
}

impl Encoder<Bytes> for AptCodec {
    type Error = io::Error;

    fn encode(&mut self, frame: Bytes, dst: &mut BytesMut) -> io::Result<()> {
        dst.extend_from_slice(&frame);
        Ok(())
    }
}
