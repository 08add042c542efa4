/// Default initial buffer capacity.
pub const DEFAULT_INITIAL_CAPACITY: usize = 4 * 1024;

/// Default number of bytes requested from a source per read. Controllers
/// sit behind USB serial bridges, so reads are small.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 512;

/// Buffer sizing for the unpackers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpackerConfig {
    /// Bytes reserved up front for the frame buffer.
    pub initial_capacity: usize,
    /// Bytes requested per read from an attached source. Zero is treated as one.
    pub read_chunk_size: usize,
}

impl Default for UnpackerConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

impl UnpackerConfig {
    pub(crate) fn chunk_size(&self) -> usize {
        self.read_chunk_size.max(1)
    }
}
