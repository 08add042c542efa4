use std::collections::hash_map::Entry as Slot;
use std::collections::HashMap;
use std::fmt;

use aptwire_frame::{decode_header, msgid, RawFrame};

use crate::error::{CatalogError, FormatError, Result};
use crate::message::{generic, motor, piezo, Message, Payload};

/// Decoder signature: the whole frame in, kind-specific fields out.
pub type DecodeFn = fn(&[u8]) -> std::result::Result<Payload, FormatError>;

/// One registered message kind.
#[derive(Clone, Copy)]
pub struct Entry {
    pub msgid: u16,
    pub name: &'static str,
    pub decode: DecodeFn,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("msgid", &format_args!("{:#06x}", self.msgid))
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Message-id keyed registry of decoders.
///
/// Built once and then only read; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<u16, Entry>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding every command and response kind this crate knows.
    pub fn standard() -> Result<Self> {
        let mut catalog = Self::new();
        for &(id, name, decode) in STANDARD {
            catalog.register(id, name, decode)?;
        }
        tracing::debug!(kinds = catalog.len(), "standard catalog built");
        Ok(catalog)
    }

    /// Register a decoder. A second registration for the same id fails and
    /// leaves the first in place.
    pub fn register(&mut self, msgid: u16, name: &'static str, decode: DecodeFn) -> Result<()> {
        match self.entries.entry(msgid) {
            Slot::Occupied(slot) => Err(CatalogError::DuplicateMsgId {
                msgid,
                existing: slot.get().name,
                name,
            }),
            Slot::Vacant(slot) => {
                slot.insert(Entry {
                    msgid,
                    name,
                    decode,
                });
                Ok(())
            }
        }
    }

    pub fn get(&self, msgid: u16) -> Option<&Entry> {
        self.entries.get(&msgid)
    }

    pub fn name_of(&self, msgid: u16) -> Option<&'static str> {
        self.entries.get(&msgid).map(|entry| entry.name)
    }

    pub fn contains(&self, msgid: u16) -> bool {
        self.entries.contains_key(&msgid)
    }

    /// Registered message ids, ascending.
    pub fn msgids(&self) -> Vec<u16> {
        let mut ids: Vec<u16> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode one frame.
    ///
    /// The decoder sees the frame clamped to the length its header declares;
    /// trailing bytes belong to whatever comes next.
    pub fn dispatch(&self, frame: &[u8]) -> Result<Message> {
        let header = decode_header(frame)?;
        let entry = self
            .entries
            .get(&header.msgid)
            .ok_or(CatalogError::UnknownMessage {
                msgid: header.msgid,
                dest: header.dest,
                source_addr: header.source,
            })?;
        // Holds as long as entries only enter through `register`.
        if entry.msgid != header.msgid {
            return Err(CatalogError::MsgIdMismatch {
                expected: entry.msgid,
                actual: header.msgid,
            });
        }

        let view = &frame[..frame.len().min(header.frame_len())];
        let payload = (entry.decode)(view).map_err(|source| CatalogError::Format {
            msgid: header.msgid,
            name: entry.name,
            source,
        })?;

        Ok(Message {
            name: entry.name,
            msgid: header.msgid,
            dest: header.dest,
            source: header.source,
            payload,
        })
    }

    /// Decode a frame already split off a stream.
    pub fn dispatch_frame(&self, frame: &RawFrame) -> Result<Message> {
        self.dispatch(&frame.bytes)
    }
}

const STANDARD: &[(u16, &str, DecodeFn)] = &[
    // Hardware
    (msgid::HW_DISCONNECT, "hw_disconnect", generic::empty),
    (msgid::HW_REQ_INFO, "hw_req_info", generic::empty),
    (msgid::HW_GET_INFO, "hw_get_info", generic::hw_info),
    (msgid::HW_START_UPDATEMSGS, "hw_start_updatemsgs", generic::empty),
    (msgid::HW_STOP_UPDATEMSGS, "hw_stop_updatemsgs", generic::empty),
    (msgid::HW_YES_FLASH_PROGRAMMING, "hw_yes_flash_programming", generic::empty),
    (msgid::HW_NO_FLASH_PROGRAMMING, "hw_no_flash_programming", generic::empty),
    (msgid::HW_RESPONSE, "hw_response", generic::empty),
    (msgid::HW_RICH_RESPONSE, "hw_rich_response", generic::rich_response),
    (msgid::HW_SET_KCUBEMMILOCK, "hw_set_kcubemmilock", generic::mmi_lock),
    (msgid::HW_REQ_KCUBEMMILOCK, "hw_req_kcubemmilock", generic::empty),
    (msgid::HW_GET_KCUBEMMILOCK, "hw_get_kcubemmilock", generic::mmi_lock),
    // Rack and hub
    (msgid::RACK_REQ_BAYUSED, "rack_req_bayused", generic::bay),
    (msgid::RACK_GET_BAYUSED, "rack_get_bayused", generic::bay_used),
    (msgid::HUB_REQ_BAYUSED, "hub_req_bayused", generic::empty),
    (msgid::HUB_GET_BAYUSED, "hub_get_bayused", generic::hub_bay_used),
    (msgid::RACK_REQ_STATUSBITS, "rack_req_statusbits", generic::empty),
    (msgid::RACK_GET_STATUSBITS, "rack_get_statusbits", generic::rack_status_bits),
    (msgid::RACK_SET_DIGOUTPUTS, "rack_set_digoutputs", generic::digital_outputs),
    (msgid::RACK_REQ_DIGOUTPUTS, "rack_req_digoutputs", generic::empty),
    (msgid::RACK_GET_DIGOUTPUTS, "rack_get_digoutputs", generic::digital_outputs),
    // Module
    (msgid::MOD_SET_CHANENABLESTATE, "mod_set_chanenablestate", generic::chan_enable_state),
    (msgid::MOD_REQ_CHANENABLESTATE, "mod_req_chanenablestate", generic::channel),
    (msgid::MOD_GET_CHANENABLESTATE, "mod_get_chanenablestate", generic::chan_enable_state),
    (msgid::MOD_SET_DIGOUTPUTS, "mod_set_digoutputs", generic::digital_outputs),
    (msgid::MOD_REQ_DIGOUTPUTS, "mod_req_digoutputs", generic::empty),
    (msgid::MOD_GET_DIGOUTPUTS, "mod_get_digoutputs", generic::digital_outputs),
    (msgid::MOD_IDENTIFY, "mod_identify", generic::channel),
    // Motor
    (msgid::MOT_SET_ENCCOUNTER, "mot_set_enccounter", motor::enc_counter),
    (msgid::MOT_REQ_ENCCOUNTER, "mot_req_enccounter", generic::channel),
    (msgid::MOT_GET_ENCCOUNTER, "mot_get_enccounter", motor::enc_counter),
    (msgid::MOT_SET_POSCOUNTER, "mot_set_poscounter", motor::pos_counter),
    (msgid::MOT_REQ_POSCOUNTER, "mot_req_poscounter", generic::channel),
    (msgid::MOT_GET_POSCOUNTER, "mot_get_poscounter", motor::pos_counter),
    (msgid::MOT_SET_VELPARAMS, "mot_set_velparams", motor::vel_params),
    (msgid::MOT_REQ_VELPARAMS, "mot_req_velparams", generic::channel),
    (msgid::MOT_GET_VELPARAMS, "mot_get_velparams", motor::vel_params),
    (msgid::MOT_SET_JOGPARAMS, "mot_set_jogparams", motor::jog_params),
    (msgid::MOT_REQ_JOGPARAMS, "mot_req_jogparams", generic::channel),
    (msgid::MOT_GET_JOGPARAMS, "mot_get_jogparams", motor::jog_params),
    (msgid::MOT_SET_LIMSWITCHPARAMS, "mot_set_limswitchparams", motor::lim_switch_params),
    (msgid::MOT_REQ_LIMSWITCHPARAMS, "mot_req_limswitchparams", generic::channel),
    (msgid::MOT_GET_LIMSWITCHPARAMS, "mot_get_limswitchparams", motor::lim_switch_params),
    (msgid::MOT_SET_POWERPARAMS, "mot_set_powerparams", motor::power_params),
    (msgid::MOT_REQ_POWERPARAMS, "mot_req_powerparams", generic::channel),
    (msgid::MOT_GET_POWERPARAMS, "mot_get_powerparams", motor::power_params),
    (msgid::MOT_REQ_STATUSBITS, "mot_req_statusbits", generic::channel),
    (msgid::MOT_GET_STATUSBITS, "mot_get_statusbits", motor::status_bits),
    (msgid::MOT_REQ_ADCINPUTS, "mot_req_adcinputs", generic::empty),
    (msgid::MOT_GET_ADCINPUTS, "mot_get_adcinputs", motor::adc_inputs),
    (msgid::MOT_SET_GENMOVEPARAMS, "mot_set_genmoveparams", motor::backlash),
    (msgid::MOT_REQ_GENMOVEPARAMS, "mot_req_genmoveparams", generic::channel),
    (msgid::MOT_GET_GENMOVEPARAMS, "mot_get_genmoveparams", motor::backlash),
    (msgid::MOT_SET_HOMEPARAMS, "mot_set_homeparams", motor::home_params),
    (msgid::MOT_REQ_HOMEPARAMS, "mot_req_homeparams", generic::channel),
    (msgid::MOT_GET_HOMEPARAMS, "mot_get_homeparams", motor::home_params),
    (msgid::MOT_MOVE_HOME, "mot_move_home", generic::channel),
    (msgid::MOT_MOVE_HOMED, "mot_move_homed", generic::channel),
    (msgid::MOT_SET_MOVERELPARAMS, "mot_set_moverelparams", motor::relative_move),
    (msgid::MOT_REQ_MOVERELPARAMS, "mot_req_moverelparams", generic::channel),
    (msgid::MOT_GET_MOVERELPARAMS, "mot_get_moverelparams", motor::relative_move),
    (msgid::MOT_MOVE_RELATIVE, "mot_move_relative", motor::relative_move),
    (msgid::MOT_SET_MOVEABSPARAMS, "mot_set_moveabsparams", motor::absolute_move),
    (msgid::MOT_REQ_MOVEABSPARAMS, "mot_req_moveabsparams", generic::channel),
    (msgid::MOT_GET_MOVEABSPARAMS, "mot_get_moveabsparams", motor::absolute_move),
    (msgid::MOT_MOVE_ABSOLUTE, "mot_move_absolute", motor::absolute_move),
    (msgid::MOT_MOVE_VELOCITY, "mot_move_velocity", motor::move_direction),
    (msgid::MOT_MOVE_COMPLETED, "mot_move_completed", motor::dc_status),
    (msgid::MOT_MOVE_STOP, "mot_move_stop", motor::move_stop),
    (msgid::MOT_MOVE_STOPPED, "mot_move_stopped", motor::dc_status),
    (msgid::MOT_MOVE_JOG, "mot_move_jog", motor::move_direction),
    (msgid::MOT_REQ_STATUSUPDATE, "mot_req_statusupdate", generic::channel),
    (msgid::MOT_GET_STATUSUPDATE, "mot_get_statusupdate", motor::status_update),
    (msgid::MOT_REQ_DCSTATUSUPDATE, "mot_req_dcstatusupdate", generic::channel),
    (msgid::MOT_GET_DCSTATUSUPDATE, "mot_get_dcstatusupdate", motor::dc_status),
    (msgid::MOT_ACK_DCSTATUSUPDATE, "mot_ack_dcstatusupdate", generic::empty),
    (msgid::MOT_SET_DCPIDPARAMS, "mot_set_dcpidparams", motor::dc_pid_params),
    (msgid::MOT_REQ_DCPIDPARAMS, "mot_req_dcpidparams", generic::channel),
    (msgid::MOT_GET_DCPIDPARAMS, "mot_get_dcpidparams", motor::dc_pid_params),
    (msgid::MOT_SET_AVMODES, "mot_set_avmodes", motor::av_modes),
    (msgid::MOT_REQ_AVMODES, "mot_req_avmodes", generic::channel),
    (msgid::MOT_GET_AVMODES, "mot_get_avmodes", motor::av_modes),
    (msgid::MOT_SET_BUTTONPARAMS, "mot_set_buttonparams", motor::button_params),
    (msgid::MOT_REQ_BUTTONPARAMS, "mot_req_buttonparams", generic::channel),
    (msgid::MOT_GET_BUTTONPARAMS, "mot_get_buttonparams", motor::button_params),
    (msgid::MOT_SET_EEPROMPARAMS, "mot_set_eepromparams", motor::eeprom_params),
    (msgid::MOT_SET_SOLENOIDSTATE, "mot_set_solenoidstate", motor::solenoid_state),
    (msgid::MOT_REQ_SOLENOIDSTATE, "mot_req_solenoidstate", generic::channel),
    (msgid::MOT_GET_SOLENOIDSTATE, "mot_get_solenoidstate", motor::solenoid_state),
    (msgid::MOT_REQ_STAGEAXISPARAMS, "mot_req_stageaxisparams", generic::channel),
    (msgid::MOT_GET_STAGEAXISPARAMS, "mot_get_stageaxisparams", motor::stage_axis_params),
    (msgid::MOT_SET_TRIGGER, "mot_set_trigger", motor::trigger),
    (msgid::MOT_REQ_TRIGGER, "mot_req_trigger", generic::channel),
    (msgid::MOT_GET_TRIGGER, "mot_get_trigger", motor::trigger),
    // Piezo
    (msgid::PZ_SET_POSCONTROLMODE, "pz_set_poscontrolmode", piezo::pos_control_mode),
    (msgid::PZ_REQ_POSCONTROLMODE, "pz_req_poscontrolmode", generic::channel),
    (msgid::PZ_GET_POSCONTROLMODE, "pz_get_poscontrolmode", piezo::pos_control_mode),
    (msgid::PZ_SET_OUTPUTVOLTS, "pz_set_outputvolts", piezo::output_volts),
    (msgid::PZ_REQ_OUTPUTVOLTS, "pz_req_outputvolts", generic::channel),
    (msgid::PZ_GET_OUTPUTVOLTS, "pz_get_outputvolts", piezo::output_volts),
    (msgid::PZ_SET_OUTPUTPOS, "pz_set_outputpos", piezo::output_pos),
    (msgid::PZ_REQ_OUTPUTPOS, "pz_req_outputpos", generic::channel),
    (msgid::PZ_GET_OUTPUTPOS, "pz_get_outputpos", piezo::output_pos),
    (msgid::PZ_REQ_PZSTATUSUPDATE, "pz_req_pzstatusupdate", generic::channel),
    (msgid::PZ_GET_PZSTATUSUPDATE, "pz_get_pzstatusupdate", piezo::pz_status_update),
    (msgid::PZ_ACK_PZSTATUSUPDATE, "pz_ack_pzstatusupdate", generic::empty),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{BayUsed, Channel, ChannelStatus, DcStatus, NoFields, RackStatusBits};
    use crate::status::StatusBits;

    #[test]
    fn standard_has_no_duplicates() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(catalog.len(), STANDARD.len());
        assert_eq!(catalog.name_of(0x0444), Some("mot_move_homed"));
        assert_eq!(catalog.name_of(0x0006), Some("hw_get_info"));
    }

    #[test]
    fn duplicate_registration_keeps_first() {
        let mut catalog = Catalog::new();
        catalog.register(0x0444, "mot_move_homed", generic::channel).unwrap();
        let err = catalog
            .register(0x0444, "something_else", generic::empty)
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateMsgId {
                msgid: 0x0444,
                existing: "mot_move_homed",
                name: "something_else"
            }
        );
        assert_eq!(catalog.name_of(0x0444), Some("mot_move_homed"));

        let msg = catalog
            .dispatch(&[0x44, 0x04, 0x01, 0x00, 0x01, 0x50])
            .unwrap();
        assert_eq!(msg.payload, Payload::Channel(Channel { chan_ident: 1 }));
    }

    #[test]
    fn unknown_message_carries_addresses() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(
            catalog.dispatch(&[0x34, 0x12, 0x00, 0x00, 0x01, 0x50]),
            Err(CatalogError::UnknownMessage {
                msgid: 0x1234,
                dest: 0x01,
                source_addr: 0x50
            })
        );
    }

    #[test]
    fn long_form_flag_stripped_from_dest() {
        let catalog = Catalog::standard().unwrap();
        let frame = [
            0x12, 0x04, 0x06, 0x00, 0x81, 0x50, 0x01, 0x00, 0x10, 0x27, 0x00, 0x00,
        ];
        let msg = catalog.dispatch(&frame).unwrap();
        assert_eq!(msg.name, "mot_get_poscounter");
        assert_eq!(msg.dest, 0x01);
        assert_eq!(msg.source, 0x50);
    }

    #[test]
    fn truncated_long_frame_is_format_error() {
        let catalog = Catalog::standard().unwrap();
        // Header announces 14 bytes but only 4 follow.
        let frame = [0x15, 0x04, 0x0E, 0x00, 0x81, 0x50, 0x01, 0x00, 0x00, 0x00];
        assert_eq!(
            catalog.dispatch(&frame),
            Err(CatalogError::Format {
                msgid: 0x0415,
                name: "mot_get_velparams",
                source: FormatError::Truncated {
                    expected: 20,
                    actual: 10
                }
            })
        );
    }

    #[test]
    fn declared_length_shorter_than_layout() {
        let catalog = Catalog::standard().unwrap();
        // Header claims 2 payload bytes; the trailing bytes are not this frame's.
        let frame = [
            0x12, 0x04, 0x02, 0x00, 0x81, 0x50, 0x01, 0x00, 0x10, 0x27, 0x00, 0x00,
        ];
        assert!(matches!(
            catalog.dispatch(&frame),
            Err(CatalogError::Format {
                source: FormatError::Truncated {
                    expected: 12,
                    actual: 8
                },
                ..
            })
        ));
    }

    #[test]
    fn header_too_short() {
        let catalog = Catalog::standard().unwrap();
        assert!(matches!(
            catalog.dispatch(&[0x44, 0x04]),
            Err(CatalogError::Frame(_))
        ));
    }

    #[test]
    fn empty_payload_messages() {
        let catalog = Catalog::standard().unwrap();
        let msg = catalog
            .dispatch(&[0x80, 0x00, 0x00, 0x00, 0x01, 0x50])
            .unwrap();
        assert_eq!(msg.name, "hw_response");
        assert_eq!(msg.payload, Payload::Empty(NoFields {}));
        assert!(!msg.is_unknown());
    }

    #[test]
    fn msgids_sorted() {
        let catalog = Catalog::standard().unwrap();
        let ids = catalog.msgids();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids.first(), Some(&msgid::HW_DISCONNECT));
        assert_eq!(ids.last(), Some(&msgid::PZ_ACK_PZSTATUSUPDATE));
    }

    #[test]
    fn entry_keyed_under_wrong_id_is_rejected() {
        let mut catalog = Catalog::new();
        catalog.entries.insert(
            0x0444,
            Entry {
                msgid: 0x0443,
                name: "mot_move_home",
                decode: generic::channel,
            },
        );
        assert_eq!(
            catalog.dispatch(&[0x44, 0x04, 0x01, 0x00, 0x01, 0x50]),
            Err(CatalogError::MsgIdMismatch {
                expected: 0x0443,
                actual: 0x0444
            })
        );
    }

    #[test]
    fn mot_get_statusbits_flags() {
        let catalog = Catalog::standard().unwrap();
        let mut frame = vec![0x2A, 0x04, 0x06, 0x00, 0x81, 0x50, 0x01, 0x00];
        frame.extend_from_slice(&0x8000_0401u32.to_le_bytes());
        let msg = catalog.dispatch(&frame).unwrap();
        assert_eq!(msg.name, "mot_get_statusbits");
        assert_eq!(
            msg.payload,
            Payload::ChannelStatus(ChannelStatus {
                chan_ident: 1,
                status: StatusBits {
                    forward_limit_switch: true,
                    homed: true,
                    channel_enabled: true,
                    ..StatusBits::default()
                },
            })
        );
    }

    #[test]
    fn mot_move_stopped_is_dc_status() {
        let catalog = Catalog::standard().unwrap();
        let mut frame = vec![0x66, 0x04, 0x0E, 0x00, 0x81, 0x50, 0x02, 0x00];
        frame.extend_from_slice(&(-2500i32).to_le_bytes());
        frame.extend_from_slice(&7u16.to_le_bytes());
        frame.extend_from_slice(&0u16.to_le_bytes());
        frame.extend_from_slice(&0x0000_0022u32.to_le_bytes());
        let msg = catalog.dispatch(&frame).unwrap();
        assert_eq!(msg.name, "mot_move_stopped");
        assert_eq!(
            msg.payload,
            Payload::DcStatus(DcStatus {
                chan_ident: 2,
                position: -2500,
                velocity: 7,
                status: StatusBits {
                    reverse_limit_switch: true,
                    moving_reverse: true,
                    ..StatusBits::default()
                },
            })
        );
    }

    #[test]
    fn rack_get_bayused_occupancy() {
        let catalog = Catalog::standard().unwrap();
        let occupied = catalog
            .dispatch(&[0x61, 0x00, 0x03, 0x01, 0x11, 0x01])
            .unwrap();
        assert_eq!(occupied.name, "rack_get_bayused");
        assert_eq!(
            occupied.payload,
            Payload::BayUsed(BayUsed {
                bay_ident: 3,
                bay_occupied: true
            })
        );

        let empty = catalog
            .dispatch(&[0x61, 0x00, 0x04, 0x02, 0x11, 0x01])
            .unwrap();
        assert_eq!(
            empty.payload,
            Payload::BayUsed(BayUsed {
                bay_ident: 4,
                bay_occupied: false
            })
        );
    }

    #[test]
    fn rack_get_statusbits_kept_raw() {
        let catalog = Catalog::standard().unwrap();
        let frame = [0x27, 0x02, 0x04, 0x00, 0x81, 0x11, 0x0F, 0x00, 0x00, 0x80];
        let msg = catalog.dispatch(&frame).unwrap();
        assert_eq!(msg.name, "rack_get_statusbits");
        assert_eq!(
            msg.payload,
            Payload::RackStatusBits(RackStatusBits {
                status_bits: 0x8000_000F
            })
        );
    }
}
