//! Every command frame decodes back to the fields it was built from.

use std::sync::OnceLock;

use aptwire::frame::msgid;
use aptwire::proto::command::*;
use aptwire::proto::message::*;
use aptwire::proto::{
    AvModes, ButtonParams, DcPidParams, Direction, HomeParams, JogMode, JogParams,
    LimSwitchParams, PosControlMode, PowerParams, StopMode, VelParams,
};
use aptwire::{Catalog, Message, Payload, GENERIC_USB, HOST, RACK_CONTROLLER};
use bytes::Bytes;

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| Catalog::standard().unwrap())
}

fn decode(frame: &[u8]) -> Message {
    catalog().dispatch(frame).unwrap()
}

/// Rewrite the message id of an encoded frame.
fn with_msgid(frame: &Bytes, id: u16) -> Vec<u8> {
    let mut patched = frame.to_vec();
    patched[..2].copy_from_slice(&id.to_le_bytes());
    patched
}

#[test]
fn no_field_commands() {
    let frames = [
        (hw_disconnect(GENERIC_USB, HOST), "hw_disconnect"),
        (hw_req_info(GENERIC_USB, HOST), "hw_req_info"),
        (hw_start_updatemsgs(GENERIC_USB, HOST), "hw_start_updatemsgs"),
        (hw_stop_updatemsgs(GENERIC_USB, HOST), "hw_stop_updatemsgs"),
        (hw_yes_flash_programming(GENERIC_USB, HOST), "hw_yes_flash_programming"),
        (hw_no_flash_programming(GENERIC_USB, HOST), "hw_no_flash_programming"),
        (hub_req_bayused(GENERIC_USB, HOST), "hub_req_bayused"),
        (mod_req_digoutputs(GENERIC_USB, HOST), "mod_req_digoutputs"),
        (rack_req_statusbits(RACK_CONTROLLER, HOST), "rack_req_statusbits"),
        (rack_req_digoutputs(RACK_CONTROLLER, HOST), "rack_req_digoutputs"),
        (hw_req_kcubemmilock(GENERIC_USB, HOST), "hw_req_kcubemmilock"),
        (mot_req_adcinputs(GENERIC_USB, HOST), "mot_req_adcinputs"),
        (mot_ack_dcstatusupdate(GENERIC_USB, HOST), "mot_ack_dcstatusupdate"),
        (pz_ack_pzstatusupdate(GENERIC_USB, HOST), "pz_ack_pzstatusupdate"),
    ];
    for (frame, name) in frames {
        let frame = frame.unwrap();
        assert_eq!(frame.len(), 6, "{name}");
        let msg = decode(&frame);
        assert_eq!(msg.name, name);
        assert_eq!(msg.source, HOST);
        assert_eq!(msg.payload, Payload::Empty(NoFields {}), "{name}");
    }
}

#[test]
fn channel_requests() {
    type ChanRequest = fn(u8, u8, u16) -> Result<Bytes, aptwire::EncodeError>;
    let requests: &[(ChanRequest, &str)] = &[
        (mod_req_chanenablestate, "mod_req_chanenablestate"),
        (mod_identify, "mod_identify"),
        (mot_req_enccounter, "mot_req_enccounter"),
        (mot_req_poscounter, "mot_req_poscounter"),
        (mot_req_velparams, "mot_req_velparams"),
        (mot_req_jogparams, "mot_req_jogparams"),
        (mot_req_limswitchparams, "mot_req_limswitchparams"),
        (mot_req_powerparams, "mot_req_powerparams"),
        (mot_req_statusbits, "mot_req_statusbits"),
        (mot_req_genmoveparams, "mot_req_genmoveparams"),
        (mot_req_homeparams, "mot_req_homeparams"),
        (mot_move_home, "mot_move_home"),
        (mot_req_moverelparams, "mot_req_moverelparams"),
        (mot_req_moveabsparams, "mot_req_moveabsparams"),
        (mot_req_statusupdate, "mot_req_statusupdate"),
        (mot_req_dcstatusupdate, "mot_req_dcstatusupdate"),
        (mot_req_dcpidparams, "mot_req_dcpidparams"),
        (mot_req_avmodes, "mot_req_avmodes"),
        (mot_req_buttonparams, "mot_req_buttonparams"),
        (mot_req_solenoidstate, "mot_req_solenoidstate"),
        (mot_req_stageaxisparams, "mot_req_stageaxisparams"),
        (mot_req_trigger, "mot_req_trigger"),
        (pz_req_poscontrolmode, "pz_req_poscontrolmode"),
        (pz_req_outputvolts, "pz_req_outputvolts"),
        (pz_req_outputpos, "pz_req_outputpos"),
        (pz_req_pzstatusupdate, "pz_req_pzstatusupdate"),
    ];
    for &(encode, name) in requests {
        for chan in [0u16, 1, 2, 255] {
            let msg = decode(&encode(GENERIC_USB, HOST, chan).unwrap());
            assert_eq!(msg.name, name);
            assert_eq!(msg.dest, GENERIC_USB);
            assert_eq!(msg.payload, Payload::Channel(Channel { chan_ident: chan }));
        }
    }
}

#[test]
fn rack_bay_request() {
    let msg = decode(&rack_req_bayused(RACK_CONTROLLER, HOST, 3).unwrap());
    assert_eq!(msg.payload, Payload::Bay(Bay { bay_ident: 3 }));
}

#[test]
fn enable_state_and_outputs() {
    for enabled in [true, false] {
        let frame = mod_set_chanenablestate(GENERIC_USB, HOST, 1, enabled).unwrap();
        let expected = Payload::ChanEnableState(ChanEnableState {
            chan_ident: 1,
            enabled,
        });
        assert_eq!(decode(&frame).payload, expected);
        let reply = with_msgid(&frame, msgid::MOD_GET_CHANENABLESTATE);
        assert_eq!(decode(&reply).payload, expected);
    }

    let outputs = [true, false, true, true];
    let expected = Payload::DigitalOutputs(DigitalOutputs {
        digital_outputs: outputs,
    });
    let frame = mod_set_digoutputs(GENERIC_USB, HOST, &outputs).unwrap();
    assert_eq!(decode(&frame).payload, expected);
    assert_eq!(
        decode(&with_msgid(&frame, msgid::MOD_GET_DIGOUTPUTS)).payload,
        expected
    );
    let frame = rack_set_digoutputs(RACK_CONTROLLER, HOST, &outputs).unwrap();
    assert_eq!(decode(&frame).payload, expected);
    assert_eq!(
        decode(&with_msgid(&frame, msgid::RACK_GET_DIGOUTPUTS)).payload,
        expected
    );

    // Fewer flags than outputs: the rest read back as false.
    let frame = mod_set_digoutputs(GENERIC_USB, HOST, &[false, true]).unwrap();
    assert_eq!(
        decode(&frame).payload,
        Payload::DigitalOutputs(DigitalOutputs {
            digital_outputs: [false, true, false, false]
        })
    );
}

#[test]
fn kcube_lock() {
    for locked in [true, false] {
        let frame = hw_set_kcubemmilock(GENERIC_USB, HOST, locked).unwrap();
        assert_eq!(decode(&frame).payload, Payload::MmiLock(MmiLock { locked }));
        assert_eq!(
            decode(&with_msgid(&frame, msgid::HW_GET_KCUBEMMILOCK)).name,
            "hw_get_kcubemmilock"
        );
    }
}

#[test]
fn counters_and_distances() {
    for value in [0, 1, -1, i32::MAX, i32::MIN, 20_000] {
        let cases = [
            (
                mot_set_enccounter(GENERIC_USB, HOST, 1, value).unwrap(),
                msgid::MOT_GET_ENCCOUNTER,
                Payload::EncCounter(EncCounter {
                    chan_ident: 1,
                    encoder_count: value,
                }),
            ),
            (
                mot_set_poscounter(GENERIC_USB, HOST, 1, value).unwrap(),
                msgid::MOT_GET_POSCOUNTER,
                Payload::PosCounter(PosCounter {
                    chan_ident: 1,
                    position: value,
                }),
            ),
            (
                mot_set_genmoveparams(GENERIC_USB, HOST, 1, value).unwrap(),
                msgid::MOT_GET_GENMOVEPARAMS,
                Payload::Backlash(Backlash {
                    chan_ident: 1,
                    backlash_distance: value,
                }),
            ),
            (
                mot_set_moverelparams(GENERIC_USB, HOST, 1, value).unwrap(),
                msgid::MOT_GET_MOVERELPARAMS,
                Payload::RelativeMove(RelativeMove {
                    chan_ident: 1,
                    relative_distance: value,
                }),
            ),
            (
                mot_set_moveabsparams(GENERIC_USB, HOST, 1, value).unwrap(),
                msgid::MOT_GET_MOVEABSPARAMS,
                Payload::AbsoluteMove(AbsoluteMove {
                    chan_ident: 1,
                    absolute_position: value,
                }),
            ),
        ];
        for (frame, reply_id, expected) in cases {
            assert_eq!(decode(&frame).payload, expected);
            assert_eq!(decode(&with_msgid(&frame, reply_id)).payload, expected);
        }

        let moved = decode(&mot_move_relative(GENERIC_USB, HOST, 2, value).unwrap());
        assert_eq!(
            moved.payload,
            Payload::RelativeMove(RelativeMove {
                chan_ident: 2,
                relative_distance: value
            })
        );
        let moved = decode(&mot_move_absolute(GENERIC_USB, HOST, 2, value).unwrap());
        assert_eq!(
            moved.payload,
            Payload::AbsoluteMove(AbsoluteMove {
                chan_ident: 2,
                absolute_position: value
            })
        );
    }
}

#[test]
fn motion_parameter_sets() {
    let vel = VelParams {
        chan_ident: 1,
        min_velocity: 0,
        acceleration: 4506,
        max_velocity: 21_987_328,
    };
    let frame = mot_set_velparams(GENERIC_USB, HOST, &vel).unwrap();
    assert_eq!(decode(&frame).payload, Payload::VelParams(vel));
    assert_eq!(
        decode(&with_msgid(&frame, msgid::MOT_GET_VELPARAMS)).payload,
        Payload::VelParams(vel)
    );

    let jog = JogParams {
        chan_ident: 1,
        jog_mode: JogMode::SingleStep,
        step_size: 34_304,
        min_velocity: 0,
        acceleration: 4506,
        max_velocity: 21_987_328,
        stop_mode: StopMode::Profiled,
    };
    let frame = mot_set_jogparams(GENERIC_USB, HOST, &jog).unwrap();
    assert_eq!(frame.len(), 6 + 22);
    assert_eq!(
        decode(&with_msgid(&frame, msgid::MOT_GET_JOGPARAMS)).payload,
        Payload::JogParams(jog)
    );

    let lim = LimSwitchParams {
        chan_ident: 1,
        cw_hardlimit: 2,
        ccw_hardlimit: 3,
        cw_softlimit: 1_000_000,
        ccw_softlimit: -1_000_000,
        soft_limit_mode: 1,
    };
    let frame = mot_set_limswitchparams(GENERIC_USB, HOST, &lim).unwrap();
    assert_eq!(
        decode(&with_msgid(&frame, msgid::MOT_GET_LIMSWITCHPARAMS)).payload,
        Payload::LimSwitchParams(lim)
    );

    let power = PowerParams {
        chan_ident: 1,
        rest_factor: 10,
        move_factor: 100,
    };
    let frame = mot_set_powerparams(GENERIC_USB, HOST, &power).unwrap();
    assert_eq!(
        decode(&with_msgid(&frame, msgid::MOT_GET_POWERPARAMS)).payload,
        Payload::PowerParams(power)
    );

    let home = HomeParams {
        chan_ident: 1,
        home_dir: 2,
        limit_switch: 1,
        home_velocity: 21_987_328,
        offset_distance: 24_576,
    };
    let frame = mot_set_homeparams(GENERIC_USB, HOST, &home).unwrap();
    assert_eq!(
        decode(&with_msgid(&frame, msgid::MOT_GET_HOMEPARAMS)).payload,
        Payload::HomeParams(home)
    );
}

#[test]
fn dc_pid_optional_gains() {
    let pid = DcPidParams {
        chan_ident: 1,
        proportional: Some(435),
        integral: None,
        differential: Some(0),
        integral_limit: Some(u32::MAX),
    };
    let frame = mot_set_dcpidparams(GENERIC_USB, HOST, &pid).unwrap();
    assert_eq!(decode(&frame).payload, Payload::DcPidParams(pid));
    assert_eq!(
        decode(&with_msgid(&frame, msgid::MOT_GET_DCPIDPARAMS)).payload,
        Payload::DcPidParams(pid)
    );
}

#[test]
fn front_panel_settings() {
    let modes = AvModes {
        chan_ident: 1,
        ident: true,
        limit_switch: true,
        moving: false,
    };
    let frame = mot_set_avmodes(GENERIC_USB, HOST, &modes).unwrap();
    assert_eq!(
        decode(&with_msgid(&frame, msgid::MOT_GET_AVMODES)).payload,
        Payload::AvModes(modes)
    );

    let buttons = ButtonParams {
        chan_ident: 1,
        mode: 2,
        position1: 1000,
        position2: -1000,
        timeout1: 2000,
        timeout2: 0,
    };
    let frame = mot_set_buttonparams(GENERIC_USB, HOST, &buttons).unwrap();
    assert_eq!(
        decode(&with_msgid(&frame, msgid::MOT_GET_BUTTONPARAMS)).payload,
        Payload::ButtonParams(buttons)
    );
}

#[test]
fn moves_and_stops() {
    for direction in [Direction::Forward, Direction::Reverse] {
        let expected = Payload::MoveDirection(MoveDirection {
            chan_ident: 1,
            direction,
        });
        assert_eq!(
            decode(&mot_move_velocity(GENERIC_USB, HOST, 1, direction).unwrap()).payload,
            expected
        );
        let msg = decode(&mot_move_jog(GENERIC_USB, HOST, 1, direction).unwrap());
        assert_eq!(msg.name, "mot_move_jog");
        assert_eq!(msg.payload, expected);
    }
    for stop_mode in [StopMode::Immediate, StopMode::Profiled] {
        assert_eq!(
            decode(&mot_move_stop(GENERIC_USB, HOST, 1, stop_mode).unwrap()).payload,
            Payload::MoveStop(MoveStop {
                chan_ident: 1,
                stop_mode
            })
        );
    }
}

#[test]
fn misc_motor_commands() {
    let msg = decode(&mot_set_eepromparams(GENERIC_USB, HOST, 1, msgid::MOT_SET_VELPARAMS).unwrap());
    assert_eq!(
        msg.payload,
        Payload::EepromParams(EepromParams {
            chan_ident: 1,
            msg_id: msgid::MOT_SET_VELPARAMS
        })
    );

    for on in [true, false] {
        let frame = mot_set_solenoidstate(GENERIC_USB, HOST, 1, on).unwrap();
        let expected = Payload::SolenoidState(SolenoidState { chan_ident: 1, on });
        assert_eq!(decode(&frame).payload, expected);
        assert_eq!(
            decode(&with_msgid(&frame, msgid::MOT_GET_SOLENOIDSTATE)).payload,
            expected
        );
    }

    let frame = mot_set_trigger(GENERIC_USB, HOST, 1, 0x21).unwrap();
    let expected = Payload::Trigger(Trigger {
        chan_ident: 1,
        mode: 0x21,
    });
    assert_eq!(decode(&frame).payload, expected);
    assert_eq!(
        decode(&with_msgid(&frame, msgid::MOT_GET_TRIGGER)).payload,
        expected
    );
}

#[test]
fn piezo_commands() {
    for mode in [
        PosControlMode::OpenLoop,
        PosControlMode::ClosedLoop,
        PosControlMode::OpenLoopSmooth,
        PosControlMode::ClosedLoopSmooth,
    ] {
        let frame = pz_set_poscontrolmode(GENERIC_USB, HOST, 1, mode).unwrap();
        let expected = Payload::PosControlMode(PosControl {
            chan_ident: 1,
            mode,
        });
        assert_eq!(decode(&frame).payload, expected);
        assert_eq!(
            decode(&with_msgid(&frame, msgid::PZ_GET_POSCONTROLMODE)).payload,
            expected
        );
    }

    for voltage in [-32767, -1, 0, 1, 32767] {
        let frame = pz_set_outputvolts(GENERIC_USB, HOST, 1, voltage).unwrap();
        let expected = Payload::OutputVolts(OutputVolts {
            chan_ident: 1,
            voltage,
        });
        assert_eq!(decode(&frame).payload, expected);
        assert_eq!(
            decode(&with_msgid(&frame, msgid::PZ_GET_OUTPUTVOLTS)).payload,
            expected
        );
    }

    for position in [0, 32768, u16::MAX] {
        let frame = pz_set_outputpos(GENERIC_USB, HOST, 1, position).unwrap();
        let expected = Payload::OutputPos(OutputPos {
            chan_ident: 1,
            position,
        });
        assert_eq!(decode(&frame).payload, expected);
        assert_eq!(
            decode(&with_msgid(&frame, msgid::PZ_GET_OUTPUTPOS)).payload,
            expected
        );
    }
}

#[test]
fn dest_survives_for_every_address() {
    for dest in 0..=0x7Fu8 {
        let short = decode(&mot_move_home(dest, HOST, 1).unwrap());
        assert_eq!(short.dest, dest);
        let long = decode(&mot_move_absolute(dest, HOST, 1, 9).unwrap());
        assert_eq!(long.dest, dest);
        assert_eq!(long.source, HOST);
    }
}
