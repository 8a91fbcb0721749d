use crate::constants::{FAMILY_MAGIC, FRAME_SIZE, HDR1_MAGIC, HDR2_MAGIC};
use crate::error::ClockError;
use bytes::Bytes;
use chrono::Timelike;
use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Serialize;
use strum_macros::Display;

// Fixed byte offsets of the 48-byte frame, big-endian throughout.
const OFF_HDR1: usize = 0;
const OFF_HDR2: usize = 4;
const OFF_RSRV1: usize = 8;
const OFF_DEVICE: usize = 10;
const OFF_FAMILY: usize = 12;
const OFF_ZEROS: usize = 19;
const OFF_CTRLCODE: usize = 44;
const OFF_HOUR: usize = 45;
const OFF_MINUTE: usize = 46;
const OFF_SECOND: usize = 47;

/// Control codes carried in the CTRLCODE byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoPrimitive, FromPrimitive)]
#[repr(u8)]
pub enum ControlCode {
    #[strum(to_string = "session end")]
    SessionEnd = 0x00,
    #[strum(to_string = "time broadcast")]
    TimeBroadcast = 0x02,

    #[num_enum(catch_all)]
    #[strum(to_string = "unknown")]
    Unknown(u8),
}

/// Leading-zeros display setting carried in the ZEROS byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoPrimitive, FromPrimitive)]
#[repr(u8)]
pub enum LeadingZeros {
    #[strum(to_string = "shown")]
    Shown = 0x00,
    #[strum(to_string = "suppressed")]
    Suppressed = 0x01,

    #[num_enum(catch_all)]
    #[strum(to_string = "unknown")]
    Unknown(u8),
}

/// A logical time frame, built fresh for every transmission.
///
/// Reserved regions of the wire format are not represented here; `encode`
/// zero-fills them unconditionally so callers cannot smuggle data through
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePacket {
    pub device: u16,
    pub zeros: LeadingZeros,
    pub ctrl: ControlCode,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimePacket {
    /// Live time frame (CTRLCODE=0x02) for the given wall-clock reading.
    pub fn time_broadcast(device: u16, hour: u8, minute: u8, second: u8) -> Self {
        TimePacket {
            device,
            zeros: LeadingZeros::Shown,
            ctrl: ControlCode::TimeBroadcast,
            hour,
            minute,
            second,
        }
    }

    /// Live time frame stamped with the current local time.
    pub fn from_wall_clock(device: u16) -> Self {
        let now = chrono::Local::now();
        Self::time_broadcast(device, now.hour() as u8, now.minute() as u8, now.second() as u8)
    }

    /// Session-end sentinel (CTRLCODE=0x00, H=M=S=0).
    pub fn session_end(device: u16) -> Self {
        TimePacket {
            device,
            zeros: LeadingZeros::Shown,
            ctrl: ControlCode::SessionEnd,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Serialize into the fixed 48-byte wire layout.
    ///
    /// Total for any field assignment: magics and reserved regions are
    /// written from constants, never from caller state.
    pub fn encode(&self) -> [u8; FRAME_SIZE] {
        let mut buf = [0u8; FRAME_SIZE];
        buf[OFF_HDR1..OFF_HDR1 + 4].copy_from_slice(&HDR1_MAGIC.to_be_bytes());
        buf[OFF_HDR2..OFF_HDR2 + 4].copy_from_slice(&HDR2_MAGIC.to_be_bytes());
        // RSRV1 at offset 8 stays zero
        buf[OFF_DEVICE..OFF_DEVICE + 2].copy_from_slice(&self.device.to_be_bytes());
        buf[OFF_FAMILY..OFF_FAMILY + 4].copy_from_slice(&FAMILY_MAGIC.to_be_bytes());
        // RSRV2 (16..19) and RSRV3 (20..44) stay zero
        buf[OFF_ZEROS] = self.zeros.into();
        buf[OFF_CTRLCODE] = self.ctrl.into();
        buf[OFF_HOUR] = self.hour;
        buf[OFF_MINUTE] = self.minute;
        buf[OFF_SECOND] = self.second;
        buf
    }
}

/// Decoded view of a received frame.
///
/// Fields are surfaced raw so a diagnostic tool can show exactly what was
/// on the wire; typed accessors interpret the single-byte codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameView {
    pub hdr1: u32,
    pub hdr2: u32,
    pub rsrv1: u16,
    pub device: u16,
    pub family: u32,
    pub zeros: u8,
    pub ctrlcode: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl FrameView {
    pub fn control_code(&self) -> ControlCode {
        ControlCode::from_primitive(self.ctrlcode)
    }

    pub fn leading_zeros(&self) -> LeadingZeros {
        LeadingZeros::from_primitive(self.zeros)
    }

    /// Compare the magic fields against the expected constants.
    ///
    /// Advisory only; a mismatching frame still decodes fully.
    pub fn validate(&self) -> Validation {
        Validation {
            hdr1_ok: self.hdr1 == HDR1_MAGIC,
            hdr2_ok: self.hdr2 == HDR2_MAGIC,
            family_ok: self.family == FAMILY_MAGIC,
        }
    }
}

impl TryFrom<Bytes> for FrameView {
    type Error = ClockError;

    fn try_from(bytes: Bytes) -> Result<Self, Self::Error> {
        // Length is checked up front; anything past offset 48 is ignored.
        if bytes.len() < FRAME_SIZE {
            return Err(ClockError::FrameTooShort {
                expected: FRAME_SIZE,
                actual: bytes.len(),
            });
        }
        let data = bytes.as_ref();
        Ok(FrameView {
            hdr1: read_u32(data, OFF_HDR1),
            hdr2: read_u32(data, OFF_HDR2),
            rsrv1: read_u16(data, OFF_RSRV1),
            device: read_u16(data, OFF_DEVICE),
            family: read_u32(data, OFF_FAMILY),
            zeros: data[OFF_ZEROS],
            ctrlcode: data[OFF_CTRLCODE],
            hour: data[OFF_HOUR],
            minute: data[OFF_MINUTE],
            second: data[OFF_SECOND],
        })
    }
}

/// Per-field verdict of the magic comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub hdr1_ok: bool,
    pub hdr2_ok: bool,
    pub family_ok: bool,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.hdr1_ok && self.hdr2_ok && self.family_ok
    }
}

fn read_u32(data: &[u8], off: usize) -> u32 {
    u32::from_be_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]])
}

fn read_u16(data: &[u8], off: usize) -> u16 {
    u16::from_be_bytes([data[off], data[off + 1]])
}
