//! Decoded messages.
//!
//! A [`Message`] carries the fields every frame has (`name`, `msgid`,
//! `dest`, `source`) and a [`Payload`] holding the kind-specific fields.
//! Serialized, the payload is flattened next to the common fields so each
//! message reads as one flat record.

pub mod generic;
pub mod motor;
pub mod piezo;
mod reader;

use serde::Serialize;

use crate::params::{
    AvModes, ButtonParams, DcPidParams, Direction, HomeParams, HwInfo, JogParams,
    LimSwitchParams, PosControlMode, PowerParams, StageAxisParams, StopMode, VelParams,
};
use crate::status::{PiezoStatusBits, StatusBits};

/// Name given to frames whose message id is not in the catalog.
pub const UNKNOWN: &str = "unknown";

/// A decoded frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// Catalog name of the message kind.
    pub name: &'static str,
    pub msgid: u16,
    /// Destination address, long-form flag removed.
    pub dest: u8,
    pub source: u8,
    #[serde(flatten)]
    pub payload: Payload,
}

impl Message {
    /// Placeholder for a correctly framed message of unknown kind.
    pub fn unknown(msgid: u16, dest: u8, source: u8) -> Self {
        Self {
            name: UNKNOWN,
            msgid,
            dest,
            source,
            payload: Payload::Unknown(NoFields {}),
        }
    }

    /// Whether this is an unknown-kind placeholder.
    pub fn is_unknown(&self) -> bool {
        matches!(self.payload, Payload::Unknown(_))
    }
}

/// Kind-specific message fields, one variant per payload shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Messages without fields of their own.
    Empty(NoFields),
    Unknown(NoFields),
    Channel(Channel),
    ChanEnableState(ChanEnableState),
    DigitalOutputs(DigitalOutputs),
    Bay(Bay),
    BayUsed(BayUsed),
    HubBayUsed(HubBayUsed),
    RackStatusBits(RackStatusBits),
    MmiLock(MmiLock),
    HwInfo(HwInfo),
    RichResponse(RichResponse),
    EncCounter(EncCounter),
    PosCounter(PosCounter),
    VelParams(VelParams),
    JogParams(JogParams),
    LimSwitchParams(LimSwitchParams),
    PowerParams(PowerParams),
    ChannelStatus(ChannelStatus),
    AdcInputs(AdcInputs),
    Backlash(Backlash),
    HomeParams(HomeParams),
    RelativeMove(RelativeMove),
    AbsoluteMove(AbsoluteMove),
    MoveDirection(MoveDirection),
    MoveStop(MoveStop),
    DcStatus(DcStatus),
    StatusUpdate(StatusUpdate),
    DcPidParams(DcPidParams),
    AvModes(AvModes),
    ButtonParams(ButtonParams),
    EepromParams(EepromParams),
    SolenoidState(SolenoidState),
    StageAxisParams(StageAxisParams),
    Trigger(Trigger),
    PosControlMode(PosControl),
    OutputVolts(OutputVolts),
    OutputPos(OutputPos),
    PzStatusUpdate(PzStatusUpdate),
}

/// Serializes as an empty record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoFields {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Channel {
    pub chan_ident: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChanEnableState {
    pub chan_ident: u16,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DigitalOutputs {
    pub digital_outputs: [bool; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bay {
    pub bay_ident: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BayUsed {
    pub bay_ident: u8,
    pub bay_occupied: bool,
}

/// Hub bay of the responding controller; `-1` when not hub-mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HubBayUsed {
    pub bay_ident: i8,
}

/// Rack status word. Bit meanings are model-specific and kept raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RackStatusBits {
    pub status_bits: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MmiLock {
    pub locked: bool,
}

/// Controller-initiated error report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichResponse {
    pub msg_ident: u16,
    pub code: u16,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncCounter {
    pub chan_ident: u16,
    pub encoder_count: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PosCounter {
    pub chan_ident: u16,
    pub position: i32,
}

/// `mot_get_statusbits`: channel plus decoded status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChannelStatus {
    pub chan_ident: u16,
    #[serde(flatten)]
    pub status: StatusBits,
}

/// Analog inputs in volts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdcInputs {
    pub adc_input1: f64,
    pub adc_input2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Backlash {
    pub chan_ident: u16,
    pub backlash_distance: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelativeMove {
    pub chan_ident: u16,
    pub relative_distance: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AbsoluteMove {
    pub chan_ident: u16,
    pub absolute_position: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveDirection {
    pub chan_ident: u16,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveStop {
    pub chan_ident: u16,
    pub stop_mode: StopMode,
}

/// DC servo status: position, velocity and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DcStatus {
    pub chan_ident: u16,
    pub position: i32,
    pub velocity: u16,
    #[serde(flatten)]
    pub status: StatusBits,
}

/// Stepper status: position, encoder count and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub chan_ident: u16,
    pub position: i32,
    pub enc_count: i32,
    #[serde(flatten)]
    pub status: StatusBits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EepromParams {
    pub chan_ident: u16,
    pub msg_id: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolenoidState {
    pub chan_ident: u16,
    pub on: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trigger {
    pub chan_ident: u16,
    pub mode: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PosControl {
    pub chan_ident: u16,
    pub mode: PosControlMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputVolts {
    pub chan_ident: u16,
    pub voltage: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputPos {
    pub chan_ident: u16,
    pub position: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PzStatusUpdate {
    pub chan_ident: u16,
    pub output_voltage: i16,
    pub position: u16,
    #[serde(flatten)]
    pub status: PiezoStatusBits,
}
