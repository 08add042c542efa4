//! Decoders for piezo control messages.

use super::reader::{params, Fields, Result};
use super::{OutputPos, OutputVolts, Payload, PosControl, PzStatusUpdate};
use crate::params::PosControlMode;
use crate::status::PiezoStatusBits;

pub fn pos_control_mode(frame: &[u8]) -> Result<Payload> {
    let (chan, mode) = params(frame)?;
    Ok(Payload::PosControlMode(PosControl {
        chan_ident: u16::from(chan),
        mode: PosControlMode::from_wire(u16::from(mode))?,
    }))
}

pub fn output_volts(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 4)?;
    Ok(Payload::OutputVolts(OutputVolts {
        chan_ident: f.u16(),
        voltage: f.i16(),
    }))
}

pub fn output_pos(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 4)?;
    Ok(Payload::OutputPos(OutputPos {
        chan_ident: f.u16(),
        position: f.u16(),
    }))
}

pub fn pz_status_update(frame: &[u8]) -> Result<Payload> {
    let mut f = Fields::new(frame, 10)?;
    Ok(Payload::PzStatusUpdate(PzStatusUpdate {
        chan_ident: f.u16(),
        output_voltage: f.i16(),
        position: f.u16(),
        status: PiezoStatusBits::from_bits(f.u32()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    #[test]
    fn pz_status_update_flags() {
        let frame = [
            0x61, 0x06, 0x0A, 0x00, 0x81, 0x50, 0x01, 0x00, 0x00, 0x80, 0xFF, 0x7F, 0x11, 0x04,
            0x00, 0x00,
        ];
        let Payload::PzStatusUpdate(update) = pz_status_update(&frame).unwrap() else {
            panic!("expected PzStatusUpdate");
        };
        assert_eq!(update.output_voltage, i16::MIN);
        assert_eq!(update.position, 0x7FFF);
        assert!(update.status.hv_connected);
        assert!(update.status.strain_gauge_connected);
        assert!(update.status.closed_loop);
        assert!(!update.status.zeroed);
    }

    #[test]
    fn pos_control_mode_out_of_set() {
        let frame = [0x42, 0x06, 0x01, 0x05, 0x01, 0x50];
        assert_eq!(
            pos_control_mode(&frame),
            Err(FormatError::InvalidValue {
                field: "mode",
                value: 5
            })
        );
    }
}
