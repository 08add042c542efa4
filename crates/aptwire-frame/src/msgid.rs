//! Message identifiers.
//!
//! The id space is grouped by subsystem: `0x00xx` hardware/system,
//! `0x02xx` modules and racks, `0x04xx`-`0x05xx` motor control,
//! `0x06xx` piezo control. `SET`/`REQ`/`GET` triples are usually
//! consecutive.

// Hardware / system
pub const HW_DISCONNECT: u16 = 0x0002;
pub const HW_REQ_INFO: u16 = 0x0005;
pub const HW_GET_INFO: u16 = 0x0006;
pub const HW_START_UPDATEMSGS: u16 = 0x0011;
pub const HW_STOP_UPDATEMSGS: u16 = 0x0012;
pub const HW_YES_FLASH_PROGRAMMING: u16 = 0x0017;
pub const HW_NO_FLASH_PROGRAMMING: u16 = 0x0018;
pub const HW_RESPONSE: u16 = 0x0080;
pub const HW_RICH_RESPONSE: u16 = 0x0081;

// Racks and hubs
pub const RACK_REQ_BAYUSED: u16 = 0x0060;
pub const RACK_GET_BAYUSED: u16 = 0x0061;
pub const HUB_REQ_BAYUSED: u16 = 0x0065;
pub const HUB_GET_BAYUSED: u16 = 0x0066;
pub const RACK_REQ_STATUSBITS: u16 = 0x0226;
pub const RACK_GET_STATUSBITS: u16 = 0x0227;
pub const RACK_SET_DIGOUTPUTS: u16 = 0x0228;
pub const RACK_REQ_DIGOUTPUTS: u16 = 0x0229;
pub const RACK_GET_DIGOUTPUTS: u16 = 0x0230;

// Modules
pub const MOD_SET_CHANENABLESTATE: u16 = 0x0210;
pub const MOD_REQ_CHANENABLESTATE: u16 = 0x0211;
pub const MOD_GET_CHANENABLESTATE: u16 = 0x0212;
pub const MOD_SET_DIGOUTPUTS: u16 = 0x0213;
pub const MOD_REQ_DIGOUTPUTS: u16 = 0x0214;
pub const MOD_GET_DIGOUTPUTS: u16 = 0x0215;
pub const MOD_IDENTIFY: u16 = 0x0223;
pub const HW_SET_KCUBEMMILOCK: u16 = 0x0250;
pub const HW_REQ_KCUBEMMILOCK: u16 = 0x0251;
pub const HW_GET_KCUBEMMILOCK: u16 = 0x0252;

// Motor control
pub const MOT_SET_ENCCOUNTER: u16 = 0x0409;
pub const MOT_REQ_ENCCOUNTER: u16 = 0x040A;
pub const MOT_GET_ENCCOUNTER: u16 = 0x040B;
pub const MOT_SET_POSCOUNTER: u16 = 0x0410;
pub const MOT_REQ_POSCOUNTER: u16 = 0x0411;
pub const MOT_GET_POSCOUNTER: u16 = 0x0412;
pub const MOT_SET_VELPARAMS: u16 = 0x0413;
pub const MOT_REQ_VELPARAMS: u16 = 0x0414;
pub const MOT_GET_VELPARAMS: u16 = 0x0415;
pub const MOT_SET_JOGPARAMS: u16 = 0x0416;
pub const MOT_REQ_JOGPARAMS: u16 = 0x0417;
pub const MOT_GET_JOGPARAMS: u16 = 0x0418;
pub const MOT_SET_LIMSWITCHPARAMS: u16 = 0x0423;
pub const MOT_REQ_LIMSWITCHPARAMS: u16 = 0x0424;
pub const MOT_GET_LIMSWITCHPARAMS: u16 = 0x0425;
pub const MOT_SET_POWERPARAMS: u16 = 0x0426;
pub const MOT_REQ_POWERPARAMS: u16 = 0x0427;
pub const MOT_GET_POWERPARAMS: u16 = 0x0428;
pub const MOT_REQ_STATUSBITS: u16 = 0x0429;
pub const MOT_GET_STATUSBITS: u16 = 0x042A;
pub const MOT_REQ_ADCINPUTS: u16 = 0x042B;
pub const MOT_GET_ADCINPUTS: u16 = 0x042C;
pub const MOT_SET_GENMOVEPARAMS: u16 = 0x043A;
pub const MOT_REQ_GENMOVEPARAMS: u16 = 0x043B;
pub const MOT_GET_GENMOVEPARAMS: u16 = 0x043C;
pub const MOT_SET_HOMEPARAMS: u16 = 0x0440;
pub const MOT_REQ_HOMEPARAMS: u16 = 0x0441;
pub const MOT_GET_HOMEPARAMS: u16 = 0x0442;
pub const MOT_MOVE_HOME: u16 = 0x0443;
pub const MOT_MOVE_HOMED: u16 = 0x0444;
pub const MOT_SET_MOVERELPARAMS: u16 = 0x0445;
pub const MOT_REQ_MOVERELPARAMS: u16 = 0x0446;
pub const MOT_GET_MOVERELPARAMS: u16 = 0x0447;
pub const MOT_MOVE_RELATIVE: u16 = 0x0448;
pub const MOT_SET_MOVEABSPARAMS: u16 = 0x0450;
pub const MOT_REQ_MOVEABSPARAMS: u16 = 0x0451;
pub const MOT_GET_MOVEABSPARAMS: u16 = 0x0452;
pub const MOT_MOVE_ABSOLUTE: u16 = 0x0453;
pub const MOT_MOVE_VELOCITY: u16 = 0x0457;
pub const MOT_MOVE_COMPLETED: u16 = 0x0464;
pub const MOT_MOVE_STOP: u16 = 0x0465;
pub const MOT_MOVE_STOPPED: u16 = 0x0466;
pub const MOT_MOVE_JOG: u16 = 0x046A;
pub const MOT_REQ_STATUSUPDATE: u16 = 0x0480;
pub const MOT_GET_STATUSUPDATE: u16 = 0x0481;
pub const MOT_REQ_DCSTATUSUPDATE: u16 = 0x0490;
pub const MOT_GET_DCSTATUSUPDATE: u16 = 0x0491;
pub const MOT_ACK_DCSTATUSUPDATE: u16 = 0x0492;
pub const MOT_SET_DCPIDPARAMS: u16 = 0x04A0;
pub const MOT_REQ_DCPIDPARAMS: u16 = 0x04A1;
pub const MOT_GET_DCPIDPARAMS: u16 = 0x04A2;
pub const MOT_SET_AVMODES: u16 = 0x04B0;
pub const MOT_REQ_AVMODES: u16 = 0x04B1;
pub const MOT_GET_AVMODES: u16 = 0x04B2;
pub const MOT_SET_BUTTONPARAMS: u16 = 0x04B6;
pub const MOT_REQ_BUTTONPARAMS: u16 = 0x04B7;
pub const MOT_GET_BUTTONPARAMS: u16 = 0x04B8;
pub const MOT_SET_EEPROMPARAMS: u16 = 0x04B9;
pub const MOT_SET_SOLENOIDSTATE: u16 = 0x04CB;
pub const MOT_REQ_SOLENOIDSTATE: u16 = 0x04CC;
pub const MOT_GET_SOLENOIDSTATE: u16 = 0x04CD;
pub const MOT_REQ_STAGEAXISPARAMS: u16 = 0x04F1;
pub const MOT_GET_STAGEAXISPARAMS: u16 = 0x04F2;
pub const MOT_SET_TRIGGER: u16 = 0x0500;
pub const MOT_REQ_TRIGGER: u16 = 0x0501;
pub const MOT_GET_TRIGGER: u16 = 0x0502;

// Piezo control
pub const PZ_SET_POSCONTROLMODE: u16 = 0x0640;
pub const PZ_REQ_POSCONTROLMODE: u16 = 0x0641;
pub const PZ_GET_POSCONTROLMODE: u16 = 0x0642;
pub const PZ_SET_OUTPUTVOLTS: u16 = 0x0643;
pub const PZ_REQ_OUTPUTVOLTS: u16 = 0x0644;
pub const PZ_GET_OUTPUTVOLTS: u16 = 0x0645;
pub const PZ_SET_OUTPUTPOS: u16 = 0x0646;
pub const PZ_REQ_OUTPUTPOS: u16 = 0x0647;
pub const PZ_GET_OUTPUTPOS: u16 = 0x0648;
pub const PZ_REQ_PZSTATUSUPDATE: u16 = 0x0660;
pub const PZ_GET_PZSTATUSUPDATE: u16 = 0x0661;
pub const PZ_ACK_PZSTATUSUPDATE: u16 = 0x0662;

/// Returns true if the id falls in the motor-control range.
pub fn is_motor(msgid: u16) -> bool {
    (0x0400..0x0600).contains(&msgid)
}

/// Returns true if the id falls in the piezo-control range.
pub fn is_piezo(msgid: u16) -> bool {
    (0x0600..0x0700).contains(&msgid)
}

/// Short family name of an id, used in diagnostics.
pub fn family(msgid: u16) -> &'static str {
    if is_motor(msgid) {
        "motor"
    } else if is_piezo(msgid) {
        "piezo"
    } else {
        "generic"
    }
}
