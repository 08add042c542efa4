//! Decoders for motor control messages.

use super::reader::{params, Fields, Result};
use super::{
    AbsoluteMove, AdcInputs, Backlash, ChannelStatus, DcStatus, EepromParams, EncCounter,
    MoveDirection, MoveStop, Payload, PosCounter, RelativeMove, SolenoidState, StatusUpdate,
    Trigger,
};
use crate::pack::{apply_filter_mask, enum_to_bool};
use crate::params::{
    AvModes, ButtonParams, DcPidParams, Direction, HomeParams, JogMode, JogParams,
    LimSwitchParams, PowerParams, StageAxisParams, StopMode, VelParams,
};
use crate::status::{adc_volts, StatusBits};

/// Payload length of the DC status and status update layouts.
pub const STATUS_LEN: usize = 14;

/// Payload length of `mot_get_stageaxisparams`.
pub const STAGE_AXIS_LEN: usize = 74;

fn chan_i32(frame: &[u8]) -> Result<(u16, i32)> {
    let mut f = Fields::new(frame, 6)?;
    Ok((f.u16(), f.i32()))
}

pub fn enc_counter(frame: &[u8]) -> Result<Payload> {
    let (chan_ident, encoder_count) = chan_i32(frame)?;
    Ok(Payload::EncCounter(EncCounter {
        chan_ident,
        encoder_count,
    }))
}

pub fn pos_counter(frame: &[u8]) -> Result<Payload> {
    let (chan_ident, position) = chan_i32(frame)?;
    Ok(Payload::PosCounter(PosCounter {
        chan_ident,
        position,
    }))
}

pub fn vel_params(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 14)?;
    Ok(Payload::VelParams(VelParams {
        chan_ident: f.u16(),
        min_velocity: f.i32(),
        acceleration: f.i32(),
        max_velocity: f.i32(),
    }))
}

pub fn jog_params(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 22)?;
    Ok(Payload::JogParams(JogParams {
        chan_ident: f.u16(),
        jog_mode: JogMode::from_wire(f.u16())?,
        step_size: f.i32(),
        min_velocity: f.i32(),
        acceleration: f.i32(),
        max_velocity: f.i32(),
        stop_mode: StopMode::from_wire(f.u16())?,
    }))
}

pub fn lim_switch_params(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 16)?;
    Ok(Payload::LimSwitchParams(LimSwitchParams {
        chan_ident: f.u16(),
        cw_hardlimit: f.u16(),
        ccw_hardlimit: f.u16(),
        cw_softlimit: f.i32(),
        ccw_softlimit: f.i32(),
        soft_limit_mode: f.u16(),
    }))
}

pub fn power_params(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 6)?;
    Ok(Payload::PowerParams(PowerParams {
        chan_ident: f.u16(),
        rest_factor: f.u16(),
        move_factor: f.u16(),
    }))
}

pub fn status_bits(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 6)?;
    Ok(Payload::ChannelStatus(ChannelStatus {
        chan_ident: f.u16(),
        status: StatusBits::from_bits(f.u32()),
    }))
}

pub fn adc_inputs(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 4)?;
    Ok(Payload::AdcInputs(AdcInputs {
        adc_input1: adc_volts(f.u16()),
        adc_input2: adc_volts(f.u16()),
    }))
}

pub fn backlash(frame: &[u8]) -> Result<Payload> {
    let (chan_ident, backlash_distance) = chan_i32(frame)?;
    Ok(Payload::Backlash(Backlash {
        chan_ident,
        backlash_distance,
    }))
}

pub fn home_params(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 14)?;
    Ok(Payload::HomeParams(HomeParams {
        chan_ident: f.u16(),
        home_dir: f.u16(),
        limit_switch: f.u16(),
        home_velocity: f.i32(),
        offset_distance: f.i32(),
    }))
}

pub fn relative_move(frame: &[u8]) -> Result<Payload> {
    let (chan_ident, relative_distance) = chan_i32(frame)?;
    Ok(Payload::RelativeMove(RelativeMove {
        chan_ident,
        relative_distance,
    }))
}

pub fn absolute_move(frame: &[u8]) -> Result<Payload> {
    let (chan_ident, absolute_position) = chan_i32(frame)?;
    Ok(Payload::AbsoluteMove(AbsoluteMove {
        chan_ident,
        absolute_position,
    }))
}

/// `mot_move_velocity` and `mot_move_jog`: direction in `param2`.
pub fn move_direction(frame: &[u8]) -> Result<Payload> {
    let (chan, direction) = params(frame)?;
    Ok(Payload::MoveDirection(MoveDirection {
        chan_ident: u16::from(chan),
        direction: Direction::from_wire(u16::from(direction))?,
    }))
}

pub fn move_stop(frame: &[u8]) -> Result<Payload> {
    let (chan, mode) = params(frame)?;
    Ok(Payload::MoveStop(MoveStop {
        chan_ident: u16::from(chan),
        stop_mode: StopMode::from_wire(u16::from(mode))?,
    }))
}

/// DC status layout, shared by move completion and status updates.
pub fn dc_status(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, STATUS_LEN)?;
    let chan_ident = f.u16();
    let position = f.i32();
    let velocity = f.u16();
    f.skip(2);
    Ok(Payload::DcStatus(DcStatus {
        chan_ident,
        position,
        velocity,
        status: StatusBits::from_bits(f.u32()),
    }))
}

pub fn status_update(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, STATUS_LEN)?;
    Ok(Payload::StatusUpdate(StatusUpdate {
        chan_ident: f.u16(),
        position: f.i32(),
        enc_count: f.i32(),
        status: StatusBits::from_bits(f.u32()),
    }))
}

/// Gains whose filter bit is clear decode as `None`.
pub fn dc_pid_params(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 20)?;
    let chan_ident = f.u16();
    let values = [f.u32(), f.u32(), f.u32(), f.u32()];
    let [proportional, integral, differential, integral_limit] =
        apply_filter_mask(values, f.u16());
    Ok(Payload::DcPidParams(DcPidParams {
        chan_ident,
        proportional,
        integral,
        differential,
        integral_limit,
    }))
}

pub fn av_modes(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 4)?;
    let chan_ident = f.u16();
    Ok(Payload::AvModes(AvModes::from_mode_bits(chan_ident, f.u16())))
}

pub fn button_params(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 16)?;
    Ok(Payload::ButtonParams(ButtonParams {
        chan_ident: f.u16(),
        mode: f.u16(),
        position1: f.i32(),
        position2: f.i32(),
        timeout1: f.u16(),
        timeout2: f.u16(),
    }))
}

pub fn eeprom_params(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 4)?;
    Ok(Payload::EepromParams(EepromParams {
        chan_ident: f.u16(),
        msg_id: f.u16(),
    }))
}

pub fn solenoid_state(frame: &[u8]) -> Result<Payload> {
    let (chan, state) = params(frame)?;
    Ok(Payload::SolenoidState(SolenoidState {
        chan_ident: u16::from(chan),
        on: enum_to_bool(state),
    }))
}

pub fn stage_axis_params(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, STAGE_AXIS_LEN)?;
    Ok(Payload::StageAxisParams(StageAxisParams {
        chan_ident: f.u16(),
        stage_id: f.u16(),
        axis_id: f.u16(),
        part_no_axis: f.string(16),
        serial_number: f.u32(),
        counts_per_unit: f.u32(),
        min_position: f.i32(),
        max_position: f.i32(),
        max_acceleration: f.i32(),
        max_deceleration: f.i32(),
        max_velocity: f.i32(),
    }))
}

pub fn trigger(frame: &[u8]) -> Result<Payload> {
    let (chan, mode) = params(frame)?;
    Ok(Payload::Trigger(Trigger {
        chan_ident: u16::from(chan),
        mode,
    }))
}
