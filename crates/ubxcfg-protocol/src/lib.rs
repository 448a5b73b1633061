//! UBX Configuration Command Compiler
//!
//! This crate turns human-readable textual configuration commands into the
//! binary UBX `CFG` frames understood by u-blox GNSS receivers. A command
//! like `CFG-RATE 100 1 1` or `CFG-VALSET 0 1 0 0 CFG-TMODE-MODE 1` is
//! tokenized, resolved against a command schema table, packed field by
//! field, and framed with sync bytes, a little-endian payload length, and a
//! two-byte running checksum.
//!
//! # Protocol Overview
//!
//! Every frame has the same shape:
//!
//! ```text
//! +------+------+-------+--------+--------+--------+--------------+-----+-----+
//! | 0xB5 | 0x62 | class | msg id | len_lo | len_hi | payload      | ckA | ckB |
//! +------+------+-------+--------+--------+--------+--------------+-----+-----+
//! ```
//!
//! Only the configuration class (`0x06`) is produced. Two schema sources
//! drive the payload layout:
//!
//! - a table of legacy fixed-field commands (`CFG-RATE`, `CFG-PRT`, ...),
//! - a ~600-entry configuration item database used by the `CFG-VALSET`
//!   key/value extension.
//!
//! # Example
//!
//! ```rust
//! use ubxcfg_protocol::compile;
//!
//! let frame = compile("CFG-VALSET 0 1 0 0 CFG-TMODE-MODE 1")?;
//! assert_eq!(&frame[..2], &[0xB5, 0x62]);
//! # Ok::<(), ubxcfg_protocol::CompileError>(())
//! ```
//!
//! Compilation is a pure, stateless transform: the schema and item tables
//! are immutable `'static` data, so any number of threads may compile
//! commands concurrently without synchronization.

mod compiler;
mod constants;
mod error;
mod fields;
mod frame;
pub mod items;
pub mod schema;

pub use compiler::*;
pub use constants::*;
pub use error::*;
pub use fields::*;
pub use frame::*;
pub use items::{ConfigItem, CONFIG_ITEMS};
pub use schema::{CommandSchema, SCHEMAS};
