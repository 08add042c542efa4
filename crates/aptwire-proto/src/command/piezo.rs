//! Piezo control commands.

use aptwire_frame::msgid;
use bytes::Bytes;

use crate::error::EncodeError;
use crate::pack::{byte_param, short, Payload};
use crate::params::PosControlMode;

type Result<T> = std::result::Result<T, EncodeError>;

/// Select open- or closed-loop position control.
pub fn pz_set_poscontrolmode(
    dest: u8,
    source: u8,
    chan_ident: u16,
    mode: PosControlMode,
) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(msgid::PZ_SET_POSCONTROLMODE, dest, source, chan, mode.to_wire())
}

pub fn pz_req_poscontrolmode(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(msgid::PZ_REQ_POSCONTROLMODE, dest, source, chan, 0)
}

/// Set the open-loop output voltage as a signed fraction of full scale
/// (`-32767..=32767`).
pub fn pz_set_outputvolts(dest: u8, source: u8, chan_ident: u16, voltage: i16) -> Result<Bytes> {
    if voltage == i16::MIN {
        return Err(EncodeError::OutOfRange {
            field: "voltage",
            value: i64::from(voltage),
            min: -i64::from(i16::MAX),
            max: i64::from(i16::MAX),
        });
    }
    Payload::with_capacity(4)
        .u16(chan_ident)
        .i16(voltage)
        .finish(msgid::PZ_SET_OUTPUTVOLTS, dest, source)
}

pub fn pz_req_outputvolts(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(msgid::PZ_REQ_OUTPUTVOLTS, dest, source, chan, 0)
}

/// Set the closed-loop position as a fraction of travel (`0..=65535`).
pub fn pz_set_outputpos(dest: u8, source: u8, chan_ident: u16, position: u16) -> Result<Bytes> {
    Payload::with_capacity(4)
        .u16(chan_ident)
        .u16(position)
        .finish(msgid::PZ_SET_OUTPUTPOS, dest, source)
}

pub fn pz_req_outputpos(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(msgid::PZ_REQ_OUTPUTPOS, dest, source, chan, 0)
}

pub fn pz_req_pzstatusupdate(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(msgid::PZ_REQ_PZSTATUSUPDATE, dest, source, chan, 0)
}

pub fn pz_ack_pzstatusupdate(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::PZ_ACK_PZSTATUSUPDATE, dest, source, 0, 0)
}
