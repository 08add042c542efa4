use std::io::{self, ErrorKind, Read};
use std::sync::Arc;

use aptwire_proto::{Catalog, Message};

use crate::assembler::{decode_message, FrameAssembler, UnpackState};
use crate::config::UnpackerConfig;
use crate::error::{Result, UnpackError};

/// Turns a byte stream into decoded messages.
///
/// Bytes arrive through [`Unpacker::feed`], from an attached [`Read`]
/// source, or both. Partial frames stay buffered until the rest arrives.
/// Every emitted item consumes exactly one frame's bytes, whether or not
/// the frame decoded.
pub struct Unpacker<R = io::Empty> {
    source: Option<R>,
    assembler: FrameAssembler,
    catalog: Arc<Catalog>,
    config: UnpackerConfig,
    chunk: Vec<u8>,
}

impl Unpacker<io::Empty> {
    /// Create a feed-only unpacker with default configuration.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, UnpackerConfig::default())
    }

    /// Create a feed-only unpacker with explicit configuration.
    pub fn with_config(catalog: Arc<Catalog>, config: UnpackerConfig) -> Self {
        Self::build(None, catalog, config)
    }
}

impl<R: Read> Unpacker<R> {
    /// Create an unpacker that pulls from `source` when its buffer runs dry.
    pub fn from_reader(source: R, catalog: Arc<Catalog>) -> Self {
        Self::from_reader_with_config(source, catalog, UnpackerConfig::default())
    }

    pub fn from_reader_with_config(source: R, catalog: Arc<Catalog>, config: UnpackerConfig) -> Self {
        Self::build(Some(source), catalog, config)
    }

    fn build(source: Option<R>, catalog: Arc<Catalog>, config: UnpackerConfig) -> Self {
        Self {
            source,
            assembler: FrameAssembler::with_capacity(config.initial_capacity),
            catalog,
            chunk: vec![0; config.chunk_size()],
            config,
        }
    }

    /// Append bytes to the buffer. Never blocks.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.assembler.extend(bytes);
    }

    /// Decode the next buffered frame, reading from the source as needed.
    ///
    /// Returns `Ok(None)` when no complete frame is available: nothing is
    /// buffered, the source hit EOF, or the source would block. A later
    /// call after more bytes arrive picks up where this one stopped.
    ///
    /// A frame that fails to decode is returned as `Err` for that frame
    /// only; the following call continues with the next frame.
    pub fn next_message(&mut self) -> Result<Option<Message>> {
        loop {
            if let Some(frame) = self.assembler.next_frame() {
                return decode_message(&self.catalog, &frame)
                    .map(Some)
                    .map_err(UnpackError::Decode);
            }

            let Some(source) = self.source.as_mut() else {
                return Ok(None);
            };

            let read = match source.read(&mut self.chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => return Ok(None),
                Err(err) => return Err(UnpackError::Io(err)),
            };

            if read == 0 {
                tracing::trace!(buffered = self.assembler.buffered(), "source at EOF");
                return Ok(None);
            }

            tracing::trace!(read, "read from source");
            self.assembler.extend(&self.chunk[..read]);
        }
    }

    /// Current position within the frame being assembled.
    pub fn state(&self) -> UnpackState {
        self.assembler.state()
    }

    /// Number of bytes buffered and not yet emitted.
    pub fn buffered(&self) -> usize {
        self.assembler.buffered()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &UnpackerConfig {
        &self.config
    }

    /// Borrow the attached source, if any.
    pub fn get_ref(&self) -> Option<&R> {
        self.source.as_ref()
    }

    /// Mutably borrow the attached source, if any.
    pub fn get_mut(&mut self) -> Option<&mut R> {
        self.source.as_mut()
    }

    /// Consume the unpacker and return the source. Buffered bytes are lost.
    pub fn into_inner(self) -> Option<R> {
        self.source
    }
}

/// Yields messages until no complete frame is available. Iteration can be
/// resumed after more bytes are fed.
impl<R: Read> Iterator for Unpacker<R> {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_message().transpose()
    }
}
