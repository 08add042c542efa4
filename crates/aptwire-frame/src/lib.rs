//! Six-byte header codec and frame splitting for the APT controller protocol.
//!
//! Every frame starts with a fixed header:
//! - A 2-byte little-endian message id
//! - Either two 1-byte parameters (short form) or a 2-byte little-endian
//!   payload length (long form)
//! - A destination byte whose top bit flags the long form
//! - A source byte
//!
//! Long-form frames carry `length` payload bytes after the header. The
//! header alone always determines where a frame ends.

pub mod address;
pub mod codec;
pub mod error;
pub mod msgid;

pub use address::{address_name, bay, BAY_0, BAY_9, GENERIC_USB, HOST, MAX_ADDRESS, RACK_CONTROLLER};
pub use codec::{
    decode_frame, decode_header, encode_header, encode_long_header, pack, Header, HeaderForm,
    RawFrame, HEADER_SIZE, LONG_FORM_FLAG, MAX_PAYLOAD,
};
pub use error::{FrameError, Result};
