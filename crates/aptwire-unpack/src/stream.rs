use std::io::ErrorKind;
use std::sync::Arc;

use aptwire_proto::{Catalog, Message};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::assembler::{decode_message, FrameAssembler, UnpackState};
use crate::config::UnpackerConfig;
use crate::error::{Result, UnpackError};

/// Reads decoded messages from an async byte source.
pub struct AsyncUnpacker<R> {
    source: R,
    assembler: FrameAssembler,
    catalog: Arc<Catalog>,
    config: UnpackerConfig,
}

impl<R: AsyncRead + Unpin> AsyncUnpacker<R> {
    pub fn new(source: R, catalog: Arc<Catalog>) -> Self {
        Self::with_config(source, catalog, UnpackerConfig::default())
    }

    pub fn with_config(source: R, catalog: Arc<Catalog>, config: UnpackerConfig) -> Self {
        Self {
            source,
            assembler: FrameAssembler::with_capacity(config.initial_capacity),
            catalog,
            config,
        }
    }

    /// Await the next message. `Ok(None)` once the source reaches EOF and no
    /// complete frame remains; a trailing partial frame is left buffered.
    pub async fn next_message(&mut self) -> Result<Option<Message>> {
        loop {
            if let Some(frame) = self.assembler.next_frame() {
                return decode_message(&self.catalog, &frame)
                    .map(Some)
                    .map_err(UnpackError::Decode);
            }

            let buf = self.assembler.buffer_mut();
            buf.reserve(self.config.chunk_size());
            let read = match self.source.read_buf(buf).await {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(UnpackError::Io(err)),
            };

            if read == 0 {
                tracing::trace!(buffered = self.assembler.buffered(), "source at EOF");
                return Ok(None);
            }
            tracing::trace!(read, "read from source");
        }
    }

    pub fn state(&self) -> UnpackState {
        self.assembler.state()
    }

    pub fn buffered(&self) -> usize {
        self.assembler.buffered()
    }

    pub fn get_ref(&self) -> &R {
        &self.source
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.source
    }

    pub fn into_inner(self) -> R {
        self.source
    }
}
