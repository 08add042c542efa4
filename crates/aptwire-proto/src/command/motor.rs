//! Motor control commands.
//!
//! Requests take a channel identifier and use the short form. Parameter
//! sets always use the long form, even when the payload is a single
//! channel plus one field.

use aptwire_frame::msgid;
use bytes::Bytes;

use crate::error::EncodeError;
use crate::pack::{bool_to_enum, byte_param, filter_mask, short, Payload};
use crate::params::{
    AvModes, ButtonParams, DcPidParams, Direction, HomeParams, JogParams, LimSwitchParams,
    PowerParams, StopMode, VelParams,
};

type Result<T> = std::result::Result<T, EncodeError>;

fn chan_request(id: u16, dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(id, dest, source, chan, 0)
}

fn chan_i32(id: u16, dest: u8, source: u8, chan_ident: u16, value: i32) -> Result<Bytes> {
    Payload::with_capacity(6)
        .u16(chan_ident)
        .i32(value)
        .finish(id, dest, source)
}

pub fn mot_set_enccounter(dest: u8, source: u8, chan_ident: u16, encoder_count: i32) -> Result<Bytes> {
    chan_i32(msgid::MOT_SET_ENCCOUNTER, dest, source, chan_ident, encoder_count)
}

pub fn mot_req_enccounter(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_ENCCOUNTER, dest, source, chan_ident)
}

/// Overwrite the live position counter.
pub fn mot_set_poscounter(dest: u8, source: u8, chan_ident: u16, position: i32) -> Result<Bytes> {
    chan_i32(msgid::MOT_SET_POSCOUNTER, dest, source, chan_ident, position)
}

pub fn mot_req_poscounter(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_POSCOUNTER, dest, source, chan_ident)
}

pub fn mot_set_velparams(dest: u8, source: u8, params: &VelParams) -> Result<Bytes> {
    Payload::with_capacity(14)
        .u16(params.chan_ident)
        .i32(params.min_velocity)
        .i32(params.acceleration)
        .i32(params.max_velocity)
        .finish(msgid::MOT_SET_VELPARAMS, dest, source)
}

pub fn mot_req_velparams(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_VELPARAMS, dest, source, chan_ident)
}

pub fn mot_set_jogparams(dest: u8, source: u8, params: &JogParams) -> Result<Bytes> {
    Payload::with_capacity(22)
        .u16(params.chan_ident)
        .u16(u16::from(params.jog_mode.to_wire()))
        .i32(params.step_size)
        .i32(params.min_velocity)
        .i32(params.acceleration)
        .i32(params.max_velocity)
        .u16(u16::from(params.stop_mode.to_wire()))
        .finish(msgid::MOT_SET_JOGPARAMS, dest, source)
}

pub fn mot_req_jogparams(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_JOGPARAMS, dest, source, chan_ident)
}

pub fn mot_set_limswitchparams(dest: u8, source: u8, params: &LimSwitchParams) -> Result<Bytes> {
    Payload::with_capacity(16)
        .u16(params.chan_ident)
        .u16(params.cw_hardlimit)
        .u16(params.ccw_hardlimit)
        .i32(params.cw_softlimit)
        .i32(params.ccw_softlimit)
        .u16(params.soft_limit_mode)
        .finish(msgid::MOT_SET_LIMSWITCHPARAMS, dest, source)
}

pub fn mot_req_limswitchparams(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_LIMSWITCHPARAMS, dest, source, chan_ident)
}

/// Set resting and moving phase power. Factors are percentages (0-100).
pub fn mot_set_powerparams(dest: u8, source: u8, params: &PowerParams) -> Result<Bytes> {
    for (field, value) in [
        ("rest_factor", params.rest_factor),
        ("move_factor", params.move_factor),
    ] {
        if value > 100 {
            return Err(EncodeError::OutOfRange {
                field,
                value: i64::from(value),
                min: 0,
                max: 100,
            });
        }
    }
    Payload::with_capacity(6)
        .u16(params.chan_ident)
        .u16(params.rest_factor)
        .u16(params.move_factor)
        .finish(msgid::MOT_SET_POWERPARAMS, dest, source)
}

pub fn mot_req_powerparams(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_POWERPARAMS, dest, source, chan_ident)
}

pub fn mot_req_statusbits(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_STATUSBITS, dest, source, chan_ident)
}

pub fn mot_req_adcinputs(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::MOT_REQ_ADCINPUTS, dest, source, 0, 0)
}

/// Set the backlash correction distance.
pub fn mot_set_genmoveparams(
    dest: u8,
    source: u8,
    chan_ident: u16,
    backlash_distance: i32,
) -> Result<Bytes> {
    chan_i32(msgid::MOT_SET_GENMOVEPARAMS, dest, source, chan_ident, backlash_distance)
}

pub fn mot_req_genmoveparams(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_GENMOVEPARAMS, dest, source, chan_ident)
}

pub fn mot_set_homeparams(dest: u8, source: u8, params: &HomeParams) -> Result<Bytes> {
    Payload::with_capacity(14)
        .u16(params.chan_ident)
        .u16(params.home_dir)
        .u16(params.limit_switch)
        .i32(params.home_velocity)
        .i32(params.offset_distance)
        .finish(msgid::MOT_SET_HOMEPARAMS, dest, source)
}

pub fn mot_req_homeparams(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_HOMEPARAMS, dest, source, chan_ident)
}

/// Start the homing sequence; completion arrives as `mot_move_homed`.
pub fn mot_move_home(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_MOVE_HOME, dest, source, chan_ident)
}

pub fn mot_set_moverelparams(
    dest: u8,
    source: u8,
    chan_ident: u16,
    relative_distance: i32,
) -> Result<Bytes> {
    chan_i32(msgid::MOT_SET_MOVERELPARAMS, dest, source, chan_ident, relative_distance)
}

pub fn mot_req_moverelparams(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_MOVERELPARAMS, dest, source, chan_ident)
}

/// Move by `relative_distance` encoder counts.
pub fn mot_move_relative(
    dest: u8,
    source: u8,
    chan_ident: u16,
    relative_distance: i32,
) -> Result<Bytes> {
    chan_i32(msgid::MOT_MOVE_RELATIVE, dest, source, chan_ident, relative_distance)
}

pub fn mot_set_moveabsparams(
    dest: u8,
    source: u8,
    chan_ident: u16,
    absolute_position: i32,
) -> Result<Bytes> {
    chan_i32(msgid::MOT_SET_MOVEABSPARAMS, dest, source, chan_ident, absolute_position)
}

pub fn mot_req_moveabsparams(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_MOVEABSPARAMS, dest, source, chan_ident)
}

/// Move to `absolute_position` encoder counts.
pub fn mot_move_absolute(
    dest: u8,
    source: u8,
    chan_ident: u16,
    absolute_position: i32,
) -> Result<Bytes> {
    chan_i32(msgid::MOT_MOVE_ABSOLUTE, dest, source, chan_ident, absolute_position)
}

/// Move at constant velocity until stopped.
pub fn mot_move_velocity(
    dest: u8,
    source: u8,
    chan_ident: u16,
    direction: Direction,
) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(msgid::MOT_MOVE_VELOCITY, dest, source, chan, direction.to_wire())
}

pub fn mot_move_stop(dest: u8, source: u8, chan_ident: u16, stop_mode: StopMode) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(msgid::MOT_MOVE_STOP, dest, source, chan, stop_mode.to_wire())
}

pub fn mot_move_jog(dest: u8, source: u8, chan_ident: u16, direction: Direction) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(msgid::MOT_MOVE_JOG, dest, source, chan, direction.to_wire())
}

pub fn mot_req_statusupdate(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_STATUSUPDATE, dest, source, chan_ident)
}

pub fn mot_req_dcstatusupdate(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_DCSTATUSUPDATE, dest, source, chan_ident)
}

/// Keep-alive for status updates; send at least once a second.
pub fn mot_ack_dcstatusupdate(dest: u8, source: u8) -> Result<Bytes> {
    short(msgid::MOT_ACK_DCSTATUSUPDATE, dest, source, 0, 0)
}

/// Set DC servo PID gains.
///
/// Omitted gains are sent as zero and left out of the filter mask, so the
/// controller keeps its current value for them.
pub fn mot_set_dcpidparams(dest: u8, source: u8, params: &DcPidParams) -> Result<Bytes> {
    let ([p, i, d, il], filter_control) = filter_mask([
        params.proportional,
        params.integral,
        params.differential,
        params.integral_limit,
    ]);
    Payload::with_capacity(20)
        .u16(params.chan_ident)
        .u32(p)
        .u32(i)
        .u32(d)
        .u32(il)
        .u16(filter_control)
        .finish(msgid::MOT_SET_DCPIDPARAMS, dest, source)
}

pub fn mot_req_dcpidparams(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_DCPIDPARAMS, dest, source, chan_ident)
}

pub fn mot_set_avmodes(dest: u8, source: u8, modes: &AvModes) -> Result<Bytes> {
    Payload::with_capacity(4)
        .u16(modes.chan_ident)
        .u16(modes.mode_bits())
        .finish(msgid::MOT_SET_AVMODES, dest, source)
}

pub fn mot_req_avmodes(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_AVMODES, dest, source, chan_ident)
}

pub fn mot_set_buttonparams(dest: u8, source: u8, params: &ButtonParams) -> Result<Bytes> {
    Payload::with_capacity(16)
        .u16(params.chan_ident)
        .u16(params.mode)
        .i32(params.position1)
        .i32(params.position2)
        .u16(params.timeout1)
        .u16(params.timeout2)
        .finish(msgid::MOT_SET_BUTTONPARAMS, dest, source)
}

pub fn mot_req_buttonparams(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_BUTTONPARAMS, dest, source, chan_ident)
}

/// Persist the parameters last set by message `msg_id` to EEPROM.
pub fn mot_set_eepromparams(dest: u8, source: u8, chan_ident: u16, msg_id: u16) -> Result<Bytes> {
    Payload::with_capacity(4)
        .u16(chan_ident)
        .u16(msg_id)
        .finish(msgid::MOT_SET_EEPROMPARAMS, dest, source)
}

/// Energize or release a solenoid. Encoded as 1 (on) / 2 (off).
pub fn mot_set_solenoidstate(dest: u8, source: u8, chan_ident: u16, on: bool) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(msgid::MOT_SET_SOLENOIDSTATE, dest, source, chan, bool_to_enum(on))
}

pub fn mot_req_solenoidstate(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_SOLENOIDSTATE, dest, source, chan_ident)
}

pub fn mot_req_stageaxisparams(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_STAGEAXISPARAMS, dest, source, chan_ident)
}

/// Configure the trigger input/output mode byte.
pub fn mot_set_trigger(dest: u8, source: u8, chan_ident: u16, mode: u8) -> Result<Bytes> {
    let chan = byte_param("chan_ident", chan_ident)?;
    short(msgid::MOT_SET_TRIGGER, dest, source, chan, mode)
}

pub fn mot_req_trigger(dest: u8, source: u8, chan_ident: u16) -> Result<Bytes> {
    chan_request(msgid::MOT_REQ_TRIGGER, dest, source, chan_ident)
}
