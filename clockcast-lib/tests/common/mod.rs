//! Common test utilities and shared imports

// Allow unused imports and dead code since this is a shared module
// used across multiple test files - not all items are used in every test file
#[allow(unused_imports)]
pub use bytes::Bytes;
#[allow(unused_imports)]
pub use clockcast_lib::cipher::{self, BROADCAST_KEY, KEY_LEN};
#[allow(unused_imports)]
pub use clockcast_lib::constants::*;
#[allow(unused_imports)]
pub use clockcast_lib::error::ClockError;
#[allow(unused_imports)]
pub use clockcast_lib::packet::{ControlCode, FrameView, LeadingZeros, TimePacket, Validation};
#[allow(unused_imports)]
pub use hex;

/// Decode hex string to bytes for testing
#[allow(dead_code)]
pub fn hex_to_bytes(hex_data: &str) -> Bytes {
    Bytes::from(hex::decode(hex_data).expect("Failed to decode hex"))
}

/// Reference frame: a 14:30:00 broadcast from device 0x1234
#[allow(dead_code)]
pub const REFERENCE_FRAME: &str = concat!(
    "2381d765", // HDR1
    "10b32fe1", // HDR2
    "0000",     // RSRV1
    "1234",     // DEVICE
    "00000080", // FAMILY
    "000000",   // RSRV2
    "00",       // ZEROS
    "000000000000000000000000000000000000000000000000", // RSRV3
    "02",       // CTRLCODE
    "0e1e00"    // H, M, S
);

/// Expected keystream mask at position `i` for the given key
#[allow(dead_code)]
pub fn mask_at(i: usize, key: &[u8; KEY_LEN]) -> u8 {
    ((i % 253) as u8 + 1) ^ key[i % KEY_LEN]
}
