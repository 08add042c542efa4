use aptwire_frame::FrameError;

/// Errors that can occur while building a command frame.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Header-level failure (reserved address bit, params with payload).
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// A value does not fit the width of its wire field.
    #[error("{field} = {value} out of range ({min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// More flags were supplied than the bitmask field holds.
    #[error("{field}: {count} flags supplied, field holds {max}")]
    TooManyFlags {
        field: &'static str,
        count: usize,
        max: usize,
    },
}

/// Why a single frame could not be decoded.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The frame is shorter than the decoder's fixed layout.
    #[error("frame too short ({actual} bytes, need {expected})")]
    Truncated { expected: usize, actual: usize },

    /// An enumerated field holds a value outside its defined set.
    #[error("invalid {field} value {value}")]
    InvalidValue { field: &'static str, value: u32 },
}

/// Errors raised by the decoder catalog.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A message id was registered twice. Fatal at startup.
    #[error("msgid {msgid:#06x} already registered as {existing}, refusing {name}")]
    DuplicateMsgId {
        msgid: u16,
        existing: &'static str,
        name: &'static str,
    },

    /// The frame boundary is known but the message id is not.
    #[error("unknown message {msgid:#06x} (dest {dest:#04x}, source {source_addr:#04x})")]
    UnknownMessage {
        msgid: u16,
        dest: u8,
        source_addr: u8,
    },

    /// A registered decoder rejected the frame contents.
    #[error("malformed {name} ({msgid:#06x}): {source}")]
    Format {
        msgid: u16,
        name: &'static str,
        #[source]
        source: FormatError,
    },

    /// The looked-up entry disagrees with the header's message id.
    #[error("catalog entry {expected:#06x} dispatched for header msgid {actual:#06x}")]
    MsgIdMismatch { expected: u16, actual: u16 },

    /// The frame header itself could not be read.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
