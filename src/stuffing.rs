//! Byte-stuffing codec for the tracker wire format.
//!
//! The escape byte `0xC4` keeps payload bytes from reading as framing: a
//! doubled escape carries a literal `0xC4`, and a frame marker travels as the
//! escape followed by the marker value plus one, which the receiver
//! decrements back.

use crate::constants::{ESCAPE, FRAME_END, FRAME_START};

/// Reverse the byte-stuffing of a received payload.
///
/// Single left-to-right scan with one byte of lookahead. An escape ahead of a
/// non-escape byte is not emitted; it arms a decrement that is applied when
/// the next byte is read, and the decremented byte is then examined as if it
/// had arrived on the wire (so `c4 c5` collapses into a fresh escape, exactly
/// like the device firmware's in-place rewrite). A lone trailing escape is
/// dropped. Output length never exceeds input length.
pub fn destuff(stuffed: &[u8]) -> Vec<u8> {
    let mut cleaned = Vec::with_capacity(stuffed.len());
    let mut pending_decrement = false;
    let mut i = 0;

    while i < stuffed.len() {
        let mut byte = stuffed[i];
        if pending_decrement {
            byte = byte.wrapping_sub(1);
            pending_decrement = false;
        }
        if byte != ESCAPE {
            cleaned.push(byte);
            i += 1;
            continue;
        }
        match stuffed.get(i + 1) {
            // doubled escape carries a literal escape byte
            Some(&next) if next == ESCAPE => {
                cleaned.push(ESCAPE);
                i += 2;
            }
            // escape ahead of a shifted byte: decrement it on the next pass
            Some(_) => {
                pending_decrement = true;
                i += 1;
            }
            // trailing escape with nothing to apply to
            None => i += 1,
        }
    }
    cleaned
}

/// Apply the device-side stuffing that [`destuff`] reverses.
///
/// A literal escape byte is doubled; a frame marker is carried as the escape
/// followed by the marker value plus one. Everything else passes through.
pub fn stuff(payload: &[u8]) -> Vec<u8> {
    let mut stuffed = Vec::with_capacity(payload.len());
    for &byte in payload {
        match byte {
            ESCAPE => stuffed.extend_from_slice(&[ESCAPE, ESCAPE]),
            FRAME_START | FRAME_END => stuffed.extend_from_slice(&[ESCAPE, byte.wrapping_add(1)]),
            _ => stuffed.push(byte),
        }
    }
    stuffed
}
