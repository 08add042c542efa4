//! Status words and analog inputs.

use serde::Serialize;

/// Full-scale ADC voltage.
pub const ADC_FULL_SCALE_VOLTS: f64 = 5.0;

/// Raw ADC count corresponding to full scale.
pub const ADC_FULL_SCALE_COUNTS: f64 = 32768.0;

/// Scale a raw 16-bit ADC sample to volts (`raw * 5 / 32768`).
pub fn adc_volts(raw: u16) -> f64 {
    f64::from(raw) * ADC_FULL_SCALE_VOLTS / ADC_FULL_SCALE_COUNTS
}

/// Motor controller status word, one flag per documented bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusBits {
    pub forward_limit_switch: bool,
    pub reverse_limit_switch: bool,
    pub moving_forward: bool,
    pub moving_reverse: bool,
    pub jogging_forward: bool,
    pub jogging_reverse: bool,
    pub homing: bool,
    pub homed: bool,
    pub tracking: bool,
    pub settled: bool,
    pub motion_error: bool,
    pub motor_current_limit_reached: bool,
    pub channel_enabled: bool,
}

impl StatusBits {
    pub const FORWARD_LIMIT_SWITCH: u32 = 0x0000_0001;
    pub const REVERSE_LIMIT_SWITCH: u32 = 0x0000_0002;
    pub const MOVING_FORWARD: u32 = 0x0000_0010;
    pub const MOVING_REVERSE: u32 = 0x0000_0020;
    pub const JOGGING_FORWARD: u32 = 0x0000_0040;
    pub const JOGGING_REVERSE: u32 = 0x0000_0080;
    pub const HOMING: u32 = 0x0000_0200;
    pub const HOMED: u32 = 0x0000_0400;
    pub const TRACKING: u32 = 0x0000_1000;
    pub const SETTLED: u32 = 0x0000_2000;
    pub const MOTION_ERROR: u32 = 0x0000_4000;
    pub const MOTOR_CURRENT_LIMIT_REACHED: u32 = 0x0100_0000;
    pub const CHANNEL_ENABLED: u32 = 0x8000_0000;

    /// Decode a raw status word. Undocumented bits are ignored.
    pub fn from_bits(bits: u32) -> Self {
        Self {
            forward_limit_switch: bits & Self::FORWARD_LIMIT_SWITCH != 0,
            reverse_limit_switch: bits & Self::REVERSE_LIMIT_SWITCH != 0,
            moving_forward: bits & Self::MOVING_FORWARD != 0,
            moving_reverse: bits & Self::MOVING_REVERSE != 0,
            jogging_forward: bits & Self::JOGGING_FORWARD != 0,
            jogging_reverse: bits & Self::JOGGING_REVERSE != 0,
            homing: bits & Self::HOMING != 0,
            homed: bits & Self::HOMED != 0,
            tracking: bits & Self::TRACKING != 0,
            settled: bits & Self::SETTLED != 0,
            motion_error: bits & Self::MOTION_ERROR != 0,
            motor_current_limit_reached: bits & Self::MOTOR_CURRENT_LIMIT_REACHED != 0,
            channel_enabled: bits & Self::CHANNEL_ENABLED != 0,
        }
    }

    /// Re-encode the documented flags.
    pub fn to_bits(&self) -> u32 {
        [
            (self.forward_limit_switch, Self::FORWARD_LIMIT_SWITCH),
            (self.reverse_limit_switch, Self::REVERSE_LIMIT_SWITCH),
            (self.moving_forward, Self::MOVING_FORWARD),
            (self.moving_reverse, Self::MOVING_REVERSE),
            (self.jogging_forward, Self::JOGGING_FORWARD),
            (self.jogging_reverse, Self::JOGGING_REVERSE),
            (self.homing, Self::HOMING),
            (self.homed, Self::HOMED),
            (self.tracking, Self::TRACKING),
            (self.settled, Self::SETTLED),
            (self.motion_error, Self::MOTION_ERROR),
            (
                self.motor_current_limit_reached,
                Self::MOTOR_CURRENT_LIMIT_REACHED,
            ),
            (self.channel_enabled, Self::CHANNEL_ENABLED),
        ]
        .into_iter()
        .filter(|(set, _)| *set)
        .fold(0, |acc, (_, bit)| acc | bit)
    }

    /// True while any motion flag is raised.
    pub fn is_moving(&self) -> bool {
        self.moving_forward || self.moving_reverse || self.jogging_forward || self.jogging_reverse
    }
}

/// Piezo controller status word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PiezoStatusBits {
    pub hv_connected: bool,
    pub zeroed: bool,
    pub zeroing: bool,
    pub strain_gauge_connected: bool,
    pub closed_loop: bool,
}

impl PiezoStatusBits {
    pub const HV_CONNECTED: u32 = 0x0000_0001;
    pub const ZEROED: u32 = 0x0000_0002;
    pub const ZEROING: u32 = 0x0000_0004;
    pub const STRAIN_GAUGE_CONNECTED: u32 = 0x0000_0010;
    pub const CLOSED_LOOP: u32 = 0x0000_0400;

    pub fn from_bits(bits: u32) -> Self {
        Self {
            hv_connected: bits & Self::HV_CONNECTED != 0,
            zeroed: bits & Self::ZEROED != 0,
            zeroing: bits & Self::ZEROING != 0,
            strain_gauge_connected: bits & Self::STRAIN_GAUGE_CONNECTED != 0,
            closed_loop: bits & Self::CLOSED_LOOP != 0,
        }
    }
}
