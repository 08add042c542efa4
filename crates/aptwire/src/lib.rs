//! Thorlabs APT motion controller protocol.
//!
//! aptwire builds command frames, decodes controller messages, and unpacks
//! fragmented byte streams from USB serial bridges into typed messages.
//!
//! # Crate Structure
//!
//! - [`frame`]: six-byte header codec, bus addresses, message ids
//! - [`proto`]: command encoders, decoder catalog, message records
//! - [`unpack`]: streaming unpackers (sync, and async behind `async`)
//!
//! ```
//! use std::sync::Arc;
//!
//! use aptwire::proto::command::mot_move_home;
//! use aptwire::{Catalog, Unpacker, GENERIC_USB, HOST};
//!
//! let frame = mot_move_home(GENERIC_USB, HOST, 1).unwrap();
//!
//! let mut unpacker = Unpacker::new(Arc::new(Catalog::standard().unwrap()));
//! unpacker.feed(&frame);
//! let msg = unpacker.next_message().unwrap().unwrap();
//! assert_eq!(msg.name, "mot_move_home");
//! ```

/// Re-export frame types.
pub mod frame {
    pub use aptwire_frame::*;
}

/// Re-export catalog, encoders and message types.
pub mod proto {
    pub use aptwire_proto::*;
}

/// Re-export unpacker types.
pub mod unpack {
    pub use aptwire_unpack::*;
}

pub use aptwire_frame::{Header, RawFrame, GENERIC_USB, HOST, RACK_CONTROLLER};
pub use aptwire_proto::{Catalog, CatalogError, EncodeError, Message, Payload};
pub use aptwire_unpack::{UnpackError, UnpackState, Unpacker, UnpackerConfig};

#[cfg(feature = "async")]
pub use aptwire_unpack::{AptCodec, AsyncUnpacker, SharedUnpacker};
