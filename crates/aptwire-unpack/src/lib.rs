//! Streaming unpacker for the APT controller protocol.
//!
//! Bytes may arrive in any fragmentation. The unpacker buffers them, splits
//! complete frames using the header alone, and decodes each frame through a
//! shared [`Catalog`](aptwire_proto::Catalog):
//!
//! - [`Unpacker`]: synchronous, fed by hand or pulling from a `Read` source.
//! - [`SharedUnpacker`]: a producer task feeds, a consumer task awaits
//!   messages (`async` feature).
//! - [`AsyncUnpacker`]: pulls from a tokio `AsyncRead` (`async` feature).
//! - [`AptCodec`]: `tokio_util` codec for `Framed*` use (`async` feature).
//!
//! Frames with an unknown message id are emitted as placeholders named
//! `"unknown"`; frames that fail to decode yield an error for that frame
//! alone.

mod assembler;
pub mod config;
pub mod error;
pub mod unpacker;

#[cfg(feature = "async")]
pub mod codec;
#[cfg(feature = "async")]
pub mod shared;
#[cfg(feature = "async")]
pub mod stream;

pub use assembler::UnpackState;
pub use config::{UnpackerConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_READ_CHUNK_SIZE};
pub use error::{Result, UnpackError};
pub use unpacker::Unpacker;

#[cfg(feature = "async")]
pub use codec::AptCodec;
#[cfg(feature = "async")]
pub use shared::SharedUnpacker;
#[cfg(feature = "async")]
pub use stream::AsyncUnpacker;
