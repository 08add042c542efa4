//! Hardware, module, rack and hub commands.

use aptwire_frame::msgid;
use bytes::Bytes;

use crate::error::EncodeError;
use crate::pack::{bool_to_enum, byte_param, mask_param, pack_flags, short};

/// Number of digital outputs addressed by the `*_digoutputs` commands.
pub const DIGITAL_OUTPUTS: usize = 4;

type Result<T> = std::result::Result<T, EncodeError>;

/// Tell the controller the host is about to disconnect.
pub fn hw_disconnect(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::HW_DISCONNECT, dest, source, 0, 0)
}

/// Request controller identification (`hw_get_info`).
pub fn hw_req_info(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::HW_REQ_INFO, dest, source, 0, 0)
}

/// Start unsolicited status update messages.
pub fn hw_start_updatemsgs(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::HW_START_UPDATEMSGS, dest, source, 0, 0)
}

/// Stop unsolicited status update messages.
pub fn hw_stop_updatemsgs(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::HW_STOP_UPDATEMSGS, dest, source, 0, 0)
}

pub fn hw_yes_flash_programming(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::HW_YES_FLASH_PROGRAMMING, dest, source, 0, 0)
}

pub fn hw_no_flash_programming(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::HW_NO_FLASH_PROGRAMMING, dest, source, 0, 0)
}

/// Ask a rack whether bay `bay_ident` holds a module.
pub fn rack_req_bayused(dest: u8, source: u8, bay_ident: u8) -> Result<Bytes> {
    short(msgid::RACK_REQ_BAYUSED, dest, source, bay_ident, 0)
}

/// Ask a hub-mounted controller which bay it sits in.
pub fn hub_req_bayused(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::HUB_REQ_BAYUSED, dest, source, 0, 0)
}

/// Enable or disable a channel. Encoded as 1 (enable) / 2 (disable).
pub fn mod_set_chanenablestate(
    dest: u8,
    source: u8,
    chan_ident: u16,
    enabled: bool,
) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(
        msgid::MOD_SET_CHANENABLESTATE,
        dest,
        source,
        chan,
        bool_to_enum(enabled),
    )
}

pub fn mod_req_chanenablestate(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(msgid::MOD_REQ_CHANENABLESTATE, dest, source, chan, 0)
}

/// Set the module's digital outputs, output 0 in the least-significant bit.
pub fn mod_set_digoutputs(dest: u8, source: u8, outputs: &[bool]) -> Result<Bytes> {
    let mask = pack_flags("digital_outputs", outputs, DIGITAL_OUTPUTS)?;
    let mask = mask_param("digital_outputs", mask)?;
    short(msgid::MOD_SET_DIGOUTPUTS, dest, source, mask, 0)
}

/// Request the module's digital outputs.
///
/// Vendor documentation lists a channel parameter here; it is likely a
/// documentation error and none is sent.
pub fn mod_req_digoutputs(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::MOD_REQ_DIGOUTPUTS, dest, source, 0, 0)
}

/// Flash the front-panel LED of a channel.
pub fn mod_identify(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(msgid::MOD_IDENTIFY, dest, source, chan, 0)
}

/// Request the rack status word.
///
/// Vendor documentation lists a bay parameter here; it is likely a
/// documentation error and none is sent.
pub fn rack_req_statusbits(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::RACK_REQ_STATUSBITS, dest, source, 0, 0)
}

/// Set the rack's digital outputs, output 0 in the least-significant bit.
pub fn rack_set_digoutputs(dest: u8, source: u8, outputs: &[bool]) -> Result<Bytes> {
    let mask = pack_flags("digital_outputs", outputs, DIGITAL_OUTPUTS)?;
    let mask = mask_param("digital_outputs", mask)?;
    short(msgid::RACK_SET_DIGOUTPUTS, dest, source, mask, 0)
}

pub fn rack_req_digoutputs(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::RACK_REQ_DIGOUTPUTS, dest, source, 0, 0)
}

/// Lock or unlock the K-Cube front-panel controls. Encoded as 1 / 2.
pub fn hw_set_kcubemmilock(dest: u8, source: u8, locked: bool) -> Result<Bytes> {
    short(
        msgid::HW_SET_KCUBEMMILOCK,
        dest,
        source,
        bool_to_enum(locked),
        0,
    )
}

/// Request the K-Cube front-panel lock state.
///
/// Vendor documentation lists a channel parameter here; it is likely a
/// documentation error and none is sent.
pub fn hw_req_kcubemmilock(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::HW_REQ_KCUBEMMILOCK, dest, source, 0, 0)
}
