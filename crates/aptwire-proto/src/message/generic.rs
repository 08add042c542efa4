//! Decoders for hardware, module, rack and hub messages.
//!
//! Each decoder takes the whole frame, header included.

use super::reader::{params, Fields, Result};
use super::{
    Bay, BayUsed, ChanEnableState, Channel, DigitalOutputs, HubBayUsed, MmiLock, NoFields,
    Payload, RackStatusBits, RichResponse,
};
use crate::command::DIGITAL_OUTPUTS;
use crate::pack::{enum_to_bool, unpack_flags};
use crate::params::{FirmwareVersion, HwInfo};

/// Payload length of `hw_get_info`.
pub const HW_INFO_LEN: usize = 84;

/// Payload length of `hw_rich_response`.
pub const RICH_RESPONSE_LEN: usize = 68;

/// Messages that carry nothing beyond the header.
pub fn empty(_frame: &[u8]) -> Result<Payload> {
    Ok(Payload::Empty(NoFields {}))
}

/// Short form, channel in `param1`.
pub fn channel(frame: &[u8]) -> Result<Payload> {
    let (chan, _) = params(frame)?;
    Ok(Payload::Channel(Channel {
        chan_ident: u16::from(chan),
    }))
}

pub fn hw_info(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, HW_INFO_LEN)?;
    let serial_number = f.u32();
    let model_number = f.string(8);
    let hw_type = f.u16();
    let minor = f.u8();
    let interim = f.u8();
    let major = f.u8();
    f.skip(1);
    let notes = f.string(48);
    f.skip(12);
    Ok(Payload::HwInfo(HwInfo {
        serial_number,
        model_number,
        hw_type,
        firmware_version: FirmwareVersion {
            major,
            interim,
            minor,
        },
        notes,
        hw_version: f.u16(),
        mod_state: f.u16(),
        nchs: f.u16(),
    }))
}

pub fn rich_response(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, RICH_RESPONSE_LEN)?;
    Ok(Payload::RichResponse(RichResponse {
        msg_ident: f.u16(),
        code: f.u16(),
        notes: f.string(64),
    }))
}

pub fn bay(frame: &[u8]) -> Result<Payload> {
    let (bay_ident, _) = params(frame)?;
    Ok(Payload::Bay(Bay { bay_ident }))
}

pub fn bay_used(frame: &[u8]) -> Result<Payload> {
    let (bay_ident, occupied) = params(frame)?;
    Ok(Payload::BayUsed(BayUsed {
        bay_ident,
        bay_occupied: enum_to_bool(occupied),
    }))
}

/// Bay index as a signed byte; `-1` (0xFF) means the unit is not on a hub.
pub fn hub_bay_used(frame: &[u8]) -> Result<Payload> {
    let (bay, _) = params(frame)?;
    Ok(Payload::HubBayUsed(HubBayUsed {
        bay_ident: i8::from_le_bytes([bay]),
    }))
}

pub fn chan_enable_state(frame: &[u8]) -> Result<Payload> {
    let (chan, state) = params(frame)?;
    Ok(Payload::ChanEnableState(ChanEnableState {
        chan_ident: u16::from(chan),
        enabled: enum_to_bool(state),
    }))
}

pub fn digital_outputs(frame: &[u8]) -> Result<Payload> {
    let (mask, _) = params(frame)?;
    Ok(Payload::DigitalOutputs(DigitalOutputs {
        digital_outputs: unpack_flags::<DIGITAL_OUTPUTS>(u32::from(mask)),
    }))
}

pub fn rack_status_bits(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 4)?;
    Ok(Payload::RackStatusBits(RackStatusBits {
        status_bits: f.u32(),
    }))
}

pub fn mmi_lock(frame: &[u8]) -> Result<Payload> {
    let (lock, _) = params(frame)?;
    Ok(Payload::MmiLock(MmiLock {
        locked: enum_to_bool(lock),
    }))
}
