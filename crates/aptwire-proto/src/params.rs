//! Typed parameter records shared by encoders and decoders.
//!
//! A record's field order matches its payload layout on the wire.

use serde::Serialize;

use crate::error::FormatError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident : $field:literal {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            /// Value written on the wire.
            pub fn to_wire(self) -> u8 {
                self as u8
            }

            /// Parse a wire value.
            pub fn from_wire(value: u16) -> Result<Self, FormatError> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    other => Err(FormatError::InvalidValue {
                        field: $field,
                        value: u32::from(other),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Direction of a continuous or jog move.
    Direction: "direction" {
        Forward = 1,
        Reverse = 2,
    }
}

wire_enum! {
    /// How a move is brought to rest.
    StopMode: "stop_mode" {
        /// Abrupt stop.
        Immediate = 1,
        /// Decelerate along the velocity profile.
        Profiled = 2,
    }
}

wire_enum! {
    /// Jog behavior when the jog button is held.
    JogMode: "jog_mode" {
        Continuous = 1,
        SingleStep = 2,
    }
}

wire_enum! {
    /// Piezo position control loop.
    PosControlMode: "mode" {
        OpenLoop = 1,
        ClosedLoop = 2,
        OpenLoopSmooth = 3,
        ClosedLoopSmooth = 4,
    }
}

/// Velocity profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VelParams {
    pub chan_ident: u16,
    pub min_velocity: i32,
    pub acceleration: i32,
    pub max_velocity: i32,
}

/// Jog step and velocity profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JogParams {
    pub chan_ident: u16,
    pub jog_mode: JogMode,
    pub step_size: i32,
    pub min_velocity: i32,
    pub acceleration: i32,
    pub max_velocity: i32,
    pub stop_mode: StopMode,
}

/// Hardware and software limit switch configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimSwitchParams {
    pub chan_ident: u16,
    pub cw_hardlimit: u16,
    pub ccw_hardlimit: u16,
    pub cw_softlimit: i32,
    pub ccw_softlimit: i32,
    pub soft_limit_mode: u16,
}

/// Phase power while resting and moving, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerParams {
    pub chan_ident: u16,
    pub rest_factor: u16,
    pub move_factor: u16,
}

/// Homing sequence configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HomeParams {
    pub chan_ident: u16,
    pub home_dir: u16,
    pub limit_switch: u16,
    pub home_velocity: i32,
    pub offset_distance: i32,
}

/// DC servo PID gains. `None` leaves the controller's value untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DcPidParams {
    pub chan_ident: u16,
    pub proportional: Option<u32>,
    pub integral: Option<u32>,
    pub differential: Option<u32>,
    pub integral_limit: Option<u32>,
}

/// Front-panel LED behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvModes {
    pub chan_ident: u16,
    /// Flash when the identify command is received.
    pub ident: bool,
    /// Flash while a limit switch is active.
    pub limit_switch: bool,
    /// Light while moving.
    pub moving: bool,
}

impl AvModes {
    pub(crate) const IDENT: u16 = 0x01;
    pub(crate) const LIMIT_SWITCH: u16 = 0x02;
    pub(crate) const MOVING: u16 = 0x08;

    pub(crate) fn mode_bits(&self) -> u16 {
        let mut bits = 0;
        if self.ident {
            bits |= Self::IDENT;
        }
        if self.limit_switch {
            bits |= Self::LIMIT_SWITCH;
        }
        if self.moving {
            bits |= Self::MOVING;
        }
        bits
    }

    pub(crate) fn from_mode_bits(chan_ident: u16, bits: u16) -> Self {
        Self {
            chan_ident,
            ident: bits & Self::IDENT != 0,
            limit_switch: bits & Self::LIMIT_SWITCH != 0,
            moving: bits & Self::MOVING != 0,
        }
    }
}

/// Front-panel button configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonParams {
    pub chan_ident: u16,
    pub mode: u16,
    pub position1: i32,
    pub position2: i32,
    pub timeout1: u16,
    pub timeout2: u16,
}

/// Stage description stored in the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageAxisParams {
    pub chan_ident: u16,
    pub stage_id: u16,
    pub axis_id: u16,
    pub part_no_axis: String,
    pub serial_number: u32,
    pub counts_per_unit: u32,
    pub min_position: i32,
    pub max_position: i32,
    pub max_acceleration: i32,
    pub max_deceleration: i32,
    pub max_velocity: i32,
}

/// Firmware version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FirmwareVersion {
    pub major: u8,
    pub interim: u8,
    pub minor: u8,
}

/// Controller identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HwInfo {
    pub serial_number: u32,
    pub model_number: String,
    #[serde(rename = "type")]
    pub hw_type: u16,
    pub firmware_version: FirmwareVersion,
    pub notes: String,
    pub hw_version: u16,
    pub mod_state: u16,
    pub nchs: u16,
}
