//! Tests for field extraction and validation against received frames

mod common;

use common::*;

#[test]
fn test_parse_reference_frame() {
    let view = FrameView::try_from(hex_to_bytes(REFERENCE_FRAME)).expect("Failed to decode frame");

    assert_eq!(view.hdr1, 0x2381_D765);
    assert_eq!(view.hdr2, 0x10B3_2FE1);
    assert_eq!(view.rsrv1, 0);
    assert_eq!(view.device, 0x1234);
    assert_eq!(view.family, 0x0000_0080);
    assert_eq!(view.zeros, 0x00);
    assert_eq!(view.ctrlcode, 0x02);
    assert_eq!(view.hour, 14);
    assert_eq!(view.minute, 30);
    assert_eq!(view.second, 0);

    let validation = view.validate();
    assert!(validation.hdr1_ok);
    assert!(validation.hdr2_ok);
    assert!(validation.family_ok);
    assert!(validation.is_valid());
}

#[test]
fn test_fields_read_from_fixed_offsets() {
    let mut frame = hex::decode(REFERENCE_FRAME).expect("Failed to decode hex");
    frame[10] = 0xAB; // DEVICE high byte
    frame[11] = 0xCD;
    frame[19] = 0x01; // ZEROS
    frame[44] = 0x00; // CTRLCODE
    frame[45] = 7;
    frame[46] = 8;
    frame[47] = 9;

    let view = FrameView::try_from(Bytes::from(frame)).expect("Failed to decode frame");

    assert_eq!(view.device, 0xABCD);
    assert_eq!(view.leading_zeros(), LeadingZeros::Suppressed);
    assert_eq!(view.control_code(), ControlCode::SessionEnd);
    assert_eq!(view.hour, 7);
    assert_eq!(view.minute, 8);
    assert_eq!(view.second, 9);
}

#[test]
fn test_unknown_codes_fall_through() {
    let mut frame = hex::decode(REFERENCE_FRAME).expect("Failed to decode hex");
    frame[19] = 0x7F;
    frame[44] = 0x7F;

    let view = FrameView::try_from(Bytes::from(frame)).expect("Failed to decode frame");

    // Unrecognized code bytes decode to the catch-all, never an error.
    assert_eq!(view.leading_zeros(), LeadingZeros::Unknown(0x7F));
    assert_eq!(view.control_code(), ControlCode::Unknown(0x7F));
}

#[test]
fn test_validation_reports_mismatch_identity() {
    let mut frame = hex::decode(REFERENCE_FRAME).expect("Failed to decode hex");
    // Corrupt HDR2 only.
    frame[4] = 0xDE;
    frame[5] = 0xAD;

    let view = FrameView::try_from(Bytes::from(frame)).expect("Failed to decode frame");
    let validation = view.validate();

    assert!(validation.hdr1_ok);
    assert!(!validation.hdr2_ok);
    assert!(validation.family_ok);
    assert!(!validation.is_valid());
    // The frame is still fully decoded despite the mismatch.
    assert_eq!(view.hour, 14);
}

#[test]
fn test_validation_family_mismatch() {
    let mut frame = hex::decode(REFERENCE_FRAME).expect("Failed to decode hex");
    frame[15] = 0x81;

    let view = FrameView::try_from(Bytes::from(frame)).expect("Failed to decode frame");
    let validation = view.validate();

    assert!(validation.hdr1_ok);
    assert!(validation.hdr2_ok);
    assert!(!validation.family_ok);
    assert!(!validation.is_valid());
}

#[test]
fn test_trailing_bytes_ignored() {
    let mut data = hex::decode(REFERENCE_FRAME).expect("Failed to decode hex");
    data.extend_from_slice(&[0xFF; 12]);

    let view = FrameView::try_from(Bytes::from(data)).expect("Failed to decode oversized frame");

    assert!(view.validate().is_valid());
    assert_eq!(view.second, 0);
}

#[test]
fn test_ciphered_frame_decodes_but_fails_validation() {
    // A frame straight off the wire from the sender is ciphered; decoding
    // it without the inverse transform must still succeed, with every
    // magic flagged as a mismatch.
    let mut frame = hex::decode(REFERENCE_FRAME).expect("Failed to decode hex");
    cipher::transform(&mut frame, &BROADCAST_KEY);

    let view = FrameView::try_from(Bytes::from(frame)).expect("Failed to decode ciphered frame");
    let validation = view.validate();

    assert!(!validation.hdr1_ok);
    assert!(!validation.hdr2_ok);
    assert!(!validation.family_ok);
}
