//! Legacy fixed-field command schemas.
//!
//! Each schema names one `CFG-*` message, its message id within the
//! configuration class, and the ordered field layout of its payload.
//! The table mirrors the receiver protocol specification; `CFG-DOSC` and
//! `CFG-ESRC` are not supported.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::fields::FieldType;

/// Wire-level layout of one configuration command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSchema {
    /// Command name, without the `CFG-` prefix.
    pub name: &'static str,
    /// Message id within the configuration class.
    pub message_id: u8,
    /// Ordered payload field layout.
    pub fields: &'static [FieldType],
}

const fn schema(
    name: &'static str,
    message_id: u8,
    fields: &'static [FieldType],
) -> CommandSchema {
    CommandSchema {
        name,
        message_id,
        fields,
    }
}

/// All supported configuration commands.
pub static SCHEMAS: &[CommandSchema] = &[
    schema("PRT", 0x00, &[FieldType::U8, FieldType::U8, FieldType::U16, FieldType::U32, FieldType::U32, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U16]),
    schema("USB", 0x1B, &[FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::Str32, FieldType::Str32, FieldType::Str32]),
    schema("MSG", 0x01, &[FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8]),
    schema("NMEA", 0x17, &[FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8]),
    schema("RATE", 0x08, &[FieldType::U16, FieldType::U16, FieldType::U16]),
    schema("CFG", 0x09, &[FieldType::U32, FieldType::U32, FieldType::U32, FieldType::U8]),
    schema("TP", 0x07, &[FieldType::U32, FieldType::U32, FieldType::I8, FieldType::U8, FieldType::U16, FieldType::I16, FieldType::I16, FieldType::I32]),
    schema("NAV2", 0x1A, &[FieldType::U8, FieldType::U8, FieldType::U16, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::I32, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U8, FieldType::U8, FieldType::U16, FieldType::U32, FieldType::U32]),
    schema("DAT", 0x06, &[FieldType::F64, FieldType::F64, FieldType::F32, FieldType::F32, FieldType::F32, FieldType::F32, FieldType::F32, FieldType::F32, FieldType::F32]),
    schema("INF", 0x02, &[FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8]),
    schema("RST", 0x04, &[FieldType::U16, FieldType::U8, FieldType::U8]),
    schema("RXM", 0x11, &[FieldType::U8, FieldType::U8]),
    schema("ANT", 0x13, &[FieldType::U16, FieldType::U16]),
    schema("FXN", 0x0E, &[FieldType::U32, FieldType::U32, FieldType::U32, FieldType::U32, FieldType::U32, FieldType::U32, FieldType::U32, FieldType::U32]),
    schema("SBAS", 0x16, &[FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U32]),
    schema("LIC", 0x80, &[FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U16]),
    schema("TM", 0x10, &[FieldType::U32, FieldType::U32, FieldType::U32]),
    schema("TM2", 0x19, &[FieldType::U8, FieldType::U8, FieldType::U16, FieldType::U32, FieldType::U32]),
    schema("TMODE", 0x1D, &[FieldType::U32, FieldType::I32, FieldType::I32, FieldType::I32, FieldType::U32, FieldType::U32, FieldType::U32]),
    schema("EKF", 0x12, &[FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U32, FieldType::U16, FieldType::U16, FieldType::U8, FieldType::U8, FieldType::U16]),
    schema("GNSS", 0x3E, &[FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U32]),
    schema("ITFM", 0x39, &[FieldType::U32, FieldType::U32]),
    schema("LOGFILTER", 0x47, &[FieldType::U8, FieldType::U8, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U32]),
    schema("NAV5", 0x24, &[FieldType::U16, FieldType::U8, FieldType::U8, FieldType::I32, FieldType::U32, FieldType::I8, FieldType::U8, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U16, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8]),
    schema("NAVX5", 0x23, &[FieldType::U16, FieldType::U16, FieldType::U32, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U16, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U16]),
    schema("ODO", 0x1E, &[FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8]),
    schema("PM2", 0x3B, &[FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U32, FieldType::U32, FieldType::U32, FieldType::U32, FieldType::U16, FieldType::U16]),
    schema("PWR", 0x57, &[FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U32]),
    schema("RINV", 0x34, &[FieldType::U8, FieldType::U8]),
    schema("SMGR", 0x62, &[FieldType::U8, FieldType::U8, FieldType::U16, FieldType::U16, FieldType::U8, FieldType::U8, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U16, FieldType::U32]),
    schema("TMODE2", 0x36, &[FieldType::U8, FieldType::U8, FieldType::U16, FieldType::I32, FieldType::I32, FieldType::I32, FieldType::U32, FieldType::U32, FieldType::U32]),
    schema("TMODE3", 0x71, &[FieldType::U8, FieldType::U8, FieldType::U16, FieldType::I32, FieldType::I32, FieldType::I32, FieldType::U32, FieldType::U32, FieldType::U32]),
    schema("TPS", 0x31, &[FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::I16, FieldType::I16, FieldType::U32, FieldType::U32, FieldType::U32, FieldType::U32, FieldType::I32, FieldType::U32]),
    schema("TXSLOT", 0x53, &[FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U32, FieldType::U32, FieldType::U32, FieldType::U32, FieldType::U32]),
    schema("VALDEL", 0x8C, &[FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8]),
    schema("VALGET", 0x8B, &[FieldType::U8, FieldType::U8, FieldType::U16]),
    schema("VALSET", 0x8A, &[FieldType::U8, FieldType::U8, FieldType::U8, FieldType::U8]),
];

static BY_NAME: Lazy<HashMap<&'static str, &'static CommandSchema>> =
    Lazy::new(|| SCHEMAS.iter().map(|s| (s.name, s)).collect());

/// Look up a schema by name (without the `CFG-` prefix). Case-sensitive.
pub fn lookup(name: &str) -> Option<&'static CommandSchema> {
    BY_NAME.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_are_unique() {
        assert_eq!(BY_NAME.len(), SCHEMAS.len());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup("RATE").is_some());
        assert!(lookup("rate").is_none());
        assert!(lookup("NOPE").is_none());
    }

    #[test]
    fn test_known_message_ids() {
        assert_eq!(lookup("RATE").unwrap().message_id, 0x08);
        assert_eq!(lookup("VALSET").unwrap().message_id, 0x8A);
        assert_eq!(lookup("VALGET").unwrap().message_id, 0x8B);
        assert_eq!(lookup("VALDEL").unwrap().message_id, 0x8C);
    }

    #[test]
    fn test_valset_prefix_layout() {
        // ver, layer, and two reserved bytes.
        assert_eq!(lookup("VALSET").unwrap().fields, &[FieldType::U8; 4]);
    }
}
