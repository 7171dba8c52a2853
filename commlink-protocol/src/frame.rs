//! Frame encoding and decoding for the fixed 28-byte telegram.
//!
//! Frame format:
//! - START (1 byte): 0x01 (SOH)
//! - ID (1 byte): caller-assigned protocol id, not validated on receive
//! - LENGTH (1 byte): constant 0x1B format tag
//! - ~LENGTH (1 byte): bitwise complement of LENGTH
//! - DIGITAL (4 bytes): packed pin states, big-endian
//! - ANALOG (8 bytes): four channels, big-endian, channel 3 first
//! - AUX (11 bytes): marker byte plus two 5-byte sidecar arrays
//! - END (1 byte): 0x04 (EOT)

use crate::snapshot::{Snapshot, ANALOG_CHANNELS, AUX_LEN};

/// Frame start marker (ASCII SOH)
pub const FRAME_START: u8 = 0x01;

/// Frame end marker (ASCII EOT)
pub const FRAME_END: u8 = 0x04;

/// Fixed length tag carried in every frame header.
///
/// A format tag rather than a measured size: the layout never varies, so
/// the header always carries this constant and its complement.
pub const LENGTH_TAG: u8 = 0x1B;

/// Total size of one frame on the wire
pub const FRAME_SIZE: usize = 28;

// Payload field offsets
const DIGITAL_OFFSET: usize = 4;
const ANALOG_OFFSET: usize = 8;
const AUX_FLAG_OFFSET: usize = 16;
const AUX_A_OFFSET: usize = 17;
const AUX_B_OFFSET: usize = 22;

/// Serialize a snapshot into one wire frame.
///
/// Encoding is total: every snapshot value produces a frame. Analog
/// channels go out in descending index order, channel 3 first.
pub fn encode(snapshot: &Snapshot, protocol_id: u8) -> [u8; FRAME_SIZE] {
    let mut frame = [0u8; FRAME_SIZE];

    frame[0] = FRAME_START;
    frame[1] = protocol_id;
    frame[2] = LENGTH_TAG;
    frame[3] = !LENGTH_TAG;

    frame[DIGITAL_OFFSET..DIGITAL_OFFSET + 4].copy_from_slice(&snapshot.digital_io.to_be_bytes());

    for (slot, channel) in (0..ANALOG_CHANNELS).rev().enumerate() {
        let at = ANALOG_OFFSET + slot * 2;
        frame[at..at + 2].copy_from_slice(&snapshot.analog_io[channel].to_be_bytes());
    }

    frame[AUX_FLAG_OFFSET] = snapshot.aux_flag;
    frame[AUX_A_OFFSET..AUX_A_OFFSET + AUX_LEN].copy_from_slice(&snapshot.aux_a);
    frame[AUX_B_OFFSET..AUX_B_OFFSET + AUX_LEN].copy_from_slice(&snapshot.aux_b);

    frame[FRAME_SIZE - 1] = FRAME_END;
    frame
}

/// Structural validity test for a candidate window.
///
/// A window is a frame iff the start marker, the length/complement pair,
/// and the end marker all hold at the same alignment. The payload carries
/// no checksum, so bit errors inside it pass undetected.
pub fn is_frame_valid(window: &[u8; FRAME_SIZE]) -> bool {
    window[0] == FRAME_START
        && (window[2] ^ window[3]) == 0xFF
        && window[FRAME_SIZE - 1] == FRAME_END
}

/// Decode a validated frame into a fresh snapshot.
///
/// Expects [`is_frame_valid`] to have passed; the header bytes are not
/// re-checked here. Every field is populated from the wire, so the result
/// never carries stale state.
pub fn decode(window: &[u8; FRAME_SIZE]) -> Snapshot {
    let mut snapshot = Snapshot::new();

    snapshot.digital_io = u32::from_be_bytes([
        window[DIGITAL_OFFSET],
        window[DIGITAL_OFFSET + 1],
        window[DIGITAL_OFFSET + 2],
        window[DIGITAL_OFFSET + 3],
    ]);

    // Same descending convention as encode: offset 8 holds channel 3.
    for (slot, channel) in (0..ANALOG_CHANNELS).rev().enumerate() {
        let at = ANALOG_OFFSET + slot * 2;
        snapshot.analog_io[channel] = u16::from_be_bytes([window[at], window[at + 1]]);
    }

    snapshot.aux_flag = window[AUX_FLAG_OFFSET];
    snapshot.aux_a.copy_from_slice(&window[AUX_A_OFFSET..AUX_A_OFFSET + AUX_LEN]);
    snapshot.aux_b.copy_from_slice(&window[AUX_B_OFFSET..AUX_B_OFFSET + AUX_LEN]);

    snapshot
}
