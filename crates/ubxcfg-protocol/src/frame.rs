//! Frame assembly.
//!
//! A frame wraps the payload in the fixed UBX envelope:
//!
//! ```text
//! +------+------+-------+--------+--------+--------+--------------+-----+-----+
//! | 0xB5 | 0x62 | class | msg id | len_lo | len_hi | payload      | ckA | ckB |
//! +------+------+-------+--------+--------+--------+--------------+-----+-----+
//! ```
//!
//! The payload length field and the checksum are patched in last, once the
//! full payload has been materialized.

use bytes::BufMut;

use crate::constants::*;
use crate::fields::FieldType;

/// Compute the two running 8-bit checksum accumulators over `data`.
///
/// The sum covers the class byte through the last payload byte; sync bytes
/// and the checksum bytes themselves are excluded by the caller.
pub fn checksum(data: &[u8]) -> (u8, u8) {
    let mut cka: u8 = 0;
    let mut ckb: u8 = 0;
    for &byte in data {
        cka = cka.wrapping_add(byte);
        ckb = ckb.wrapping_add(cka);
    }
    (cka, ckb)
}

/// Verify the checksum of a complete frame.
pub fn verify_checksum(frame: &[u8]) -> bool {
    if frame.len() < FRAME_OVERHEAD {
        return false;
    }
    let (cka, ckb) = checksum(&frame[2..frame.len() - CHECKSUM_SIZE]);
    cka == frame[frame.len() - 2] && ckb == frame[frame.len() - 1]
}

/// Builds one configuration frame.
///
/// The builder writes the header up front with a zero length placeholder,
/// accumulates payload fields, and [`finish`](Self::finish) patches the
/// length and appends the checksum.
#[derive(Debug)]
pub struct FrameBuilder {
    buf: Vec<u8>,
}

impl FrameBuilder {
    /// Start a configuration frame for the given message id.
    pub fn new(message_id: u8) -> Self {
        let mut buf = Vec::with_capacity(MAX_FRAME_SIZE);
        buf.put_u8(SYNC1);
        buf.put_u8(SYNC2);
        buf.put_u8(CLASS_CFG);
        buf.put_u8(message_id);
        buf.put_u16_le(0); // payload length, patched in finish()
        FrameBuilder { buf }
    }

    /// Append one payload field packed from `token`.
    pub fn put_field(&mut self, ty: FieldType, token: Option<&str>) {
        ty.pack(token, &mut self.buf);
    }

    /// Append a raw 32-bit configuration key.
    pub fn put_key(&mut self, key: u32) {
        self.buf.put_u32_le(key);
    }

    /// Payload bytes accumulated so far.
    pub fn payload_len(&self) -> usize {
        self.buf.len() - HEADER_SIZE
    }

    /// Patch the payload length, append the checksum, and return the
    /// completed frame.
    pub fn finish(mut self) -> Vec<u8> {
        let payload_len = (self.buf.len() - HEADER_SIZE) as u16;
        self.buf[4..HEADER_SIZE].copy_from_slice(&payload_len.to_le_bytes());
        let (cka, ckb) = checksum(&self.buf[2..]);
        self.buf.put_u8(cka);
        self.buf.put_u8(ckb);
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_frame() {
        let frame = FrameBuilder::new(0x08).finish();
        assert_eq!(frame.len(), FRAME_OVERHEAD);
        assert_eq!(&frame[..HEADER_SIZE], &[SYNC1, SYNC2, CLASS_CFG, 0x08, 0x00, 0x00]);
        assert!(verify_checksum(&frame));
    }

    #[test]
    fn test_length_field_matches_payload() {
        let mut builder = FrameBuilder::new(0x8A);
        builder.put_field(FieldType::U8, Some("1"));
        builder.put_key(0x2003_0001);
        assert_eq!(builder.payload_len(), 5);

        let frame = builder.finish();
        let len = u16::from_le_bytes([frame[4], frame[5]]) as usize;
        assert_eq!(len, frame.len() - FRAME_OVERHEAD);
    }

    #[test]
    fn test_checksum_excludes_sync_and_checksum_bytes() {
        let mut builder = FrameBuilder::new(0x01);
        builder.put_field(FieldType::U16, Some("0x1234"));
        let frame = builder.finish();

        let (cka, ckb) = checksum(&frame[2..frame.len() - 2]);
        assert_eq!(cka, frame[frame.len() - 2]);
        assert_eq!(ckb, frame[frame.len() - 1]);
        assert!(verify_checksum(&frame));

        // Corrupting any covered byte must break verification.
        let mut bad = frame.clone();
        bad[3] ^= 0x01;
        assert!(!verify_checksum(&bad));
    }

    #[test]
    fn test_verify_rejects_truncated_frames() {
        assert!(!verify_checksum(&[]));
        assert!(!verify_checksum(&[SYNC1, SYNC2, CLASS_CFG]));
    }
}
