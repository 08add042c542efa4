//! Message catalog for the APT controller protocol.
//!
//! Two halves:
//! - [`command`]: one encoder per outbound command, returning a complete
//!   frame ready to write.
//! - [`Catalog`]: message id keyed decoders turning a complete frame into a
//!   [`Message`].
//!
//! Every command kind is registered in [`Catalog::standard`] as well, so a
//! frame built by an encoder decodes back through the catalog.

pub mod catalog;
pub mod command;
pub mod error;
pub mod message;
pub mod pack;
pub mod params;
pub mod status;

pub use catalog::{Catalog, DecodeFn, Entry};
pub use error::{CatalogError, EncodeError, FormatError, Result};
pub use message::{Message, Payload, UNKNOWN};
pub use params::{
    AvModes, ButtonParams, DcPidParams, Direction, FirmwareVersion, HomeParams, HwInfo, JogMode,
    JogParams, LimSwitchParams, PosControlMode, PowerParams, StageAxisParams, StopMode,
    VelParams,
};
pub use status::{adc_volts, PiezoStatusBits, StatusBits};
