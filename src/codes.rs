//! Protocol code tables for the SmarAct ASCII interface.
//!
//! Two process-wide immutable mappings: device error codes to their
//! canonical descriptions, and sensor type codes to the sensor-model
//! mnemonics used in configuration replies. Both are decoding aids only;
//! nothing in this layer enforces them against the hardware.

use std::fmt;

/// Documented SmarAct controller error codes.
///
/// Code 0 means "no error" and is handled by the dispatcher before any
/// table lookup; it is kept here so the table matches the interface
/// documentation exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    NoError = 0,
    Syntax = 1,
    InvalidCommand = 2,
    Overflow = 3,
    Parse = 4,
    TooFewParameters = 5,
    TooManyParameters = 6,
    InvalidParameter = 7,
    WrongMode = 8,
    NoSensorPresent = 129,
    SensorDisabled = 140,
    CommandOverridden = 141,
    EndStopReached = 142,
    WrongSensorType = 143,
    CouldNotFindReferenceMark = 144,
    WrongEndEffectorType = 145,
    MovementLocked = 146,
    RangeLimitReached = 147,
    PhysicalPositionUnknown = 148,
    CommandNotProcessable = 150,
    WaitingForTrigger = 151,
    CommandNotTriggerable = 152,
    CommandQueueFull = 153,
    InvalidComponent = 154,
    InvalidSubComponent = 155,
    InvalidProperty = 156,
    PermissionDenied = 157,
    PowerAmplifierDisabled = 159,
}

impl ErrorCode {
    /// Look up a numeric error code. Returns `None` for codes absent
    /// from the documented table; callers must not silently default.
    pub fn from_code(code: u16) -> Option<Self> {
        use ErrorCode::*;
        Some(match code {
            0 => NoError,
            1 => Syntax,
            2 => InvalidCommand,
            3 => Overflow,
            4 => Parse,
            5 => TooFewParameters,
            6 => TooManyParameters,
            7 => InvalidParameter,
            8 => WrongMode,
            129 => NoSensorPresent,
            140 => SensorDisabled,
            141 => CommandOverridden,
            142 => EndStopReached,
            143 => WrongSensorType,
            144 => CouldNotFindReferenceMark,
            145 => WrongEndEffectorType,
            146 => MovementLocked,
            147 => RangeLimitReached,
            148 => PhysicalPositionUnknown,
            150 => CommandNotProcessable,
            151 => WaitingForTrigger,
            152 => CommandNotTriggerable,
            153 => CommandQueueFull,
            154 => InvalidComponent,
            155 => InvalidSubComponent,
            156 => InvalidProperty,
            157 => PermissionDenied,
            159 => PowerAmplifierDisabled,
            _ => return None,
        })
    }

    /// Canonical description string from the interface documentation.
    pub fn description(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            NoError => "No Error",
            Syntax => "Syntax Error",
            InvalidCommand => "Invalid Command Error",
            Overflow => "Overflow Error",
            Parse => "Parse Error",
            TooFewParameters => "Too Few Parameters Error",
            TooManyParameters => "Too Many Parameters Error",
            InvalidParameter => "Invalid Parameter Error",
            WrongMode => "Wrong Mode Error",
            NoSensorPresent => "No Sensor Present Error",
            SensorDisabled => "Sensor Disabled Error",
            CommandOverridden => "Command Overridden Error",
            EndStopReached => "End Stop Reached Error",
            WrongSensorType => "Wrong Sensor Type Error",
            CouldNotFindReferenceMark => "Could Not Find Reference Mark Error",
            WrongEndEffectorType => "Wrong End Effector Type Error",
            MovementLocked => "Movement Locked Error",
            RangeLimitReached => "Range Limit Reached Error",
            PhysicalPositionUnknown => "Physical Position Unknown Error",
            CommandNotProcessable => "Command Not Processable Error",
            WaitingForTrigger => "Waiting For Trigger Error",
            CommandNotTriggerable => "Command Not Triggerable Error",
            CommandQueueFull => "Command Queue Full Error",
            InvalidComponent => "Invalid Component Error",
            InvalidSubComponent => "Invalid Sub Component Error",
            InvalidProperty => "Invalid Property Error",
            PermissionDenied => "Permission Denied Error",
            PowerAmplifierDisabled => "Power Amplifier Disabled Error",
        }
    }

    /// Numeric code as transmitted on the wire.
    pub fn code(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Sensor/encoder models reported by the controller, by configuration
/// code. Variant names follow the SmarAct model mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum SensorType {
    S = 1,
    SR = 2,
    ML = 3,
    MR = 4,
    SP = 5,
    SC = 6,
    M25 = 7,
    SR20 = 8,
    M = 9,
    GC = 10,
    GD = 11,
    GE = 12,
    RA = 13,
    GF = 14,
    RB = 15,
    G605S = 16,
    G775S = 17,
    SC500 = 18,
    G955S = 19,
    SR77 = 20,
    SD = 21,
    R20ME = 22,
    SR2 = 23,
    SCD = 24,
    SRC = 25,
    SR36M = 26,
    SR36ME = 27,
    SR50M = 28,
    SR50ME = 29,
    G1045S = 30,
    G1395S = 31,
    MD = 32,
    G935M = 33,
    SHL20 = 34,
    SCT = 35,
}

impl SensorType {
    /// Look up a sensor configuration code. Returns `None` for codes
    /// outside the documented 1..=35 range.
    pub fn from_code(code: u16) -> Option<Self> {
        use SensorType::*;
        Some(match code {
            1 => S,
            2 => SR,
            3 => ML,
            4 => MR,
            5 => SP,
            6 => SC,
            7 => M25,
            8 => SR20,
            9 => M,
            10 => GC,
            11 => GD,
            12 => GE,
            13 => RA,
            14 => GF,
            15 => RB,
            16 => G605S,
            17 => G775S,
            18 => SC500,
            19 => G955S,
            20 => SR77,
            21 => SD,
            22 => R20ME,
            23 => SR2,
            24 => SCD,
            25 => SRC,
            26 => SR36M,
            27 => SR36ME,
            28 => SR50M,
            29 => SR50ME,
            30 => G1045S,
            31 => G1395S,
            32 => MD,
            33 => G935M,
            34 => SHL20,
            35 => SCT,
            _ => return None,
        })
    }

    /// Short model mnemonic as printed in SmarAct documentation.
    pub fn mnemonic(&self) -> &'static str {
        use SensorType::*;
        match self {
            S => "S",
            SR => "SR",
            ML => "ML",
            MR => "MR",
            SP => "SP",
            SC => "SC",
            M25 => "M25",
            SR20 => "SR20",
            M => "M",
            GC => "GC",
            GD => "GD",
            GE => "GE",
            RA => "RA",
            GF => "GF",
            RB => "RB",
            G605S => "G605S",
            G775S => "G775S",
            SC500 => "SC500",
            G955S => "G955S",
            SR77 => "SR77",
            SD => "SD",
            R20ME => "R20ME",
            SR2 => "SR2",
            SCD => "SCD",
            SRC => "SRC",
            SR36M => "SR36M",
            SR36ME => "SR36ME",
            SR50M => "SR50M",
            SR50ME => "SR50ME",
            G1045S => "G1045S",
            G1395S => "G1395S",
            MD => "MD",
            G935M => "G935M",
            SHL20 => "SHL20",
            SCT => "SCT",
        }
    }

    /// Numeric configuration code.
    pub fn code(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
