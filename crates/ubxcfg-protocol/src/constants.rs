//! Protocol constants
//!
//! These constants define the frame markers, size limits, and other
//! protocol-specific values shared across the crate.

/// First sync byte of every UBX frame.
pub const SYNC1: u8 = 0xB5;
/// Second sync byte of every UBX frame.
pub const SYNC2: u8 = 0x62;
/// Message class for configuration messages. The compiler only produces
/// frames of this class.
pub const CLASS_CFG: u8 = 0x06;

/// Header size: sync (2) + class (1) + message id (1) + payload length (2).
pub const HEADER_SIZE: usize = 6;
/// Trailing checksum size.
pub const CHECKSUM_SIZE: usize = 2;
/// Fixed per-frame overhead around the payload.
pub const FRAME_OVERHEAD: usize = HEADER_SIZE + CHECKSUM_SIZE;

/// Tokenizer capacity. Tokens beyond this are silently dropped.
pub const MAX_TOKENS: usize = 32;
/// Practical worst-case frame size used by collaborating transport code.
pub const MAX_FRAME_SIZE: usize = 128;

/// Token count required by `CFG-VALSET`: command name, the 4 prefix
/// fields, one key, and one value.
pub const VALSET_TOKENS: usize = 7;
