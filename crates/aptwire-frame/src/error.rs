/// Errors that can occur during header encoding/decoding.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Fewer than six bytes were available for a header.
    #[error("header too short ({actual} bytes, need 6)")]
    HeaderTooShort { actual: usize },

    /// Short-form parameters were supplied together with a payload.
    #[error("param1/param2 must be zero when a payload is supplied")]
    ParamsWithPayload,

    /// The destination address collides with the long-form flag bit.
    #[error("destination address {0:#04x} out of range (max 0x7f)")]
    AddressOutOfRange(u8),

    /// The payload does not fit the 16-bit length field.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
