//! The command compiler: textual command to binary frame.
//!
//! Compilation is a fixed pipeline: tokenize, resolve the schema from the
//! first token, pack each payload field, then patch the length and append
//! the checksum. `CFG-VALSET` takes a side path for its key/value tail.
//! Every call is an independent, stateless transform.

use log::trace;

use crate::constants::*;
use crate::error::CompileError;
use crate::frame::FrameBuilder;
use crate::schema::CommandSchema;
use crate::{items, schema};

/// Compile a textual command into a complete frame.
///
/// The command has the form `CFG-<NAME> <arg1> <arg2> ...`, or for the
/// key/value extension `CFG-VALSET <ver> <layer> <res0> <res1> CFG-<KEY>
/// <value>`. Missing trailing arguments encode as defaults; tokens beyond
/// the schema's field count are ignored.
pub fn compile(command: &str) -> Result<Vec<u8>, CompileError> {
    let tokens = tokenize(command);
    let Some(&name_token) = tokens.first() else {
        return Err(CompileError::InvalidInput);
    };
    let name = name_token
        .strip_prefix("CFG-")
        .ok_or_else(|| CompileError::UnknownCommand(name_token.to_string()))?;
    let schema = schema::lookup(name)
        .ok_or_else(|| CompileError::UnknownCommand(name_token.to_string()))?;

    let mut frame = FrameBuilder::new(schema.message_id);
    if schema.name == "VALSET" {
        pack_valset(schema, &tokens, &mut frame)?;
    } else {
        for (i, &ty) in schema.fields.iter().enumerate() {
            frame.put_field(ty, tokens.get(i + 1).copied());
        }
    }

    let frame = frame.finish();
    trace!("compiled {name_token} into a {} byte frame", frame.len());
    Ok(frame)
}

/// Compile a textual command into a caller-owned buffer, returning the
/// encoded frame length.
///
/// An empty buffer, or one too small for the produced frame, fails with
/// [`CompileError::InvalidInput`]. On any error the buffer contents are
/// unspecified and must not be transmitted.
pub fn compile_into(command: &str, buf: &mut [u8]) -> Result<usize, CompileError> {
    if buf.is_empty() {
        return Err(CompileError::InvalidInput);
    }
    let frame = compile(command)?;
    if frame.len() > buf.len() {
        return Err(CompileError::InvalidInput);
    }
    buf[..frame.len()].copy_from_slice(&frame);
    Ok(frame.len())
}

/// Split on whitespace, bounded to [`MAX_TOKENS`]. Extra tokens are
/// dropped, not an error.
fn tokenize(command: &str) -> Vec<&str> {
    command.split_whitespace().take(MAX_TOKENS).collect()
}

/// Pack the VALSET prefix fields plus a single key/value pair.
///
/// Exactly one pair is supported per call, so the token count is fixed:
/// the command name, 4 prefix fields, one key, one value.
fn pack_valset(
    schema: &CommandSchema,
    tokens: &[&str],
    frame: &mut FrameBuilder,
) -> Result<(), CompileError> {
    if tokens.len() != VALSET_TOKENS {
        return Err(CompileError::InvalidArgumentCount {
            expected: VALSET_TOKENS,
            actual: tokens.len(),
        });
    }

    for (i, &ty) in schema.fields.iter().enumerate() {
        frame.put_field(ty, tokens.get(i + 1).copied());
    }

    let key_token = tokens[5];
    let key_name = key_token
        .strip_prefix("CFG-")
        .ok_or_else(|| CompileError::UnknownConfigKey(key_token.to_string()))?;
    let item = items::lookup(key_name)
        .ok_or_else(|| CompileError::UnknownConfigKey(key_token.to_string()))?;

    frame.put_key(item.key);
    frame.put_field(item.value_type, Some(tokens[6]));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::verify_checksum;

    fn frame_hex(command: &str) -> String {
        hex::encode_upper(compile(command).expect("should compile"))
    }

    #[test]
    fn test_golden_valset_vectors() {
        assert_eq!(
            frame_hex("CFG-VALSET 0 1 0 0 CFG-TMODE-MODE 0"),
            "B562068A0900000100000100032000BE7F"
        );
        assert_eq!(
            frame_hex("CFG-VALSET 0 1 0 0 CFG-TMODE-MODE 2"),
            "B562068A0900000100000100032002C081"
        );
        assert_eq!(
            frame_hex("CFG-VALSET 0 1 0 0 CFG-TMODE-POS_TYPE 1"),
            "B562068A0900000100000200032001C085"
        );
        assert_eq!(
            frame_hex("CFG-VALSET 0 1 0 0 CFG-TMODE-HEIGHT -100"),
            "B562068A0C00000100000B0003409CFFFFFF843D"
        );
    }

    #[test]
    fn test_golden_vectors_from_reference_firmware() {
        // CFG-TMODE-LAT 20.9600040 degrees in 1e-7 scaling.
        assert_eq!(
            frame_hex("CFG-VALSET 0 1 0 0 CFG-TMODE-LAT 209600040"),
            "B562068A0C000001000009000340283E7E0CD925"
        );
        assert_eq!(
            frame_hex("CFG-VALSET 0 1 0 0 CFG-TMODE-LON 1057684480"),
            "B562068A0C00000100000A00034000FC0A3F2F12"
        );
    }

    #[test]
    fn test_determinism() {
        let cmd = "CFG-VALSET 0 1 0 0 CFG-TMODE-MODE 1";
        assert_eq!(compile(cmd).unwrap(), compile(cmd).unwrap());
    }

    #[test]
    fn test_length_and_checksum_invariants() {
        for cmd in [
            "CFG-RATE 100 1 1",
            "CFG-MSG 0xF0 0x00 1",
            "CFG-PRT 1 0 0 0x8D0 115200 7 3 0 0",
            "CFG-USB 0x1546 0x01A9 0 0 0 0 u-blox",
            "CFG-VALSET 0 1 0 0 CFG-UART1-BAUDRATE 921600",
        ] {
            let frame = compile(cmd).unwrap();
            let len = u16::from_le_bytes([frame[4], frame[5]]) as usize;
            assert_eq!(len, frame.len() - FRAME_OVERHEAD, "length invariant for {cmd}");
            assert!(verify_checksum(&frame), "checksum invariant for {cmd}");
        }
    }

    #[test]
    fn test_fixed_schema_command() {
        // CFG-RATE: meas (U16), nav (U16), time (U16).
        assert_eq!(frame_hex("CFG-RATE 100 1 1"), "B562060806006400010001007A12");
    }

    #[test]
    fn test_missing_trailing_arguments_pack_as_defaults() {
        // CFG-MSG has 8 U8 fields; only 3 supplied.
        assert_eq!(
            frame_hex("CFG-MSG 0xF0 0x00 1"),
            "B56206010800F0000100000000000029"
        );
        // No arguments at all still produces a full-size payload.
        let frame = compile("CFG-RATE").unwrap();
        assert_eq!(&frame[HEADER_SIZE..frame.len() - CHECKSUM_SIZE], &[0u8; 6]);
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let exact = compile("CFG-RATE 100 1 1").unwrap();
        let extra = compile("CFG-RATE 100 1 1 9 9 9").unwrap();
        assert_eq!(exact, extra);
    }

    #[test]
    fn test_hex_decimal_equivalence() {
        assert_eq!(
            compile("CFG-MSG 0x1A 0 0").unwrap(),
            compile("CFG-MSG 26 0 0").unwrap()
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compile(""), Err(CompileError::InvalidInput));
        assert_eq!(compile("   \t  "), Err(CompileError::InvalidInput));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            compile("CFG-NOPE 1 2 3"),
            Err(CompileError::UnknownCommand("CFG-NOPE".to_string()))
        );
        // Missing prefix and case mismatches are both rejected.
        assert!(matches!(compile("RATE 100 1 1"), Err(CompileError::UnknownCommand(_))));
        assert!(matches!(compile("CFG-rate 100 1 1"), Err(CompileError::UnknownCommand(_))));
    }

    #[test]
    fn test_valset_arity_enforced() {
        for cmd in [
            "CFG-VALSET",
            "CFG-VALSET 0 1 0 0",
            "CFG-VALSET 0 1 0 0 CFG-TMODE-MODE",
            "CFG-VALSET 0 1 0 0 CFG-TMODE-MODE 1 CFG-TMODE-POS_TYPE 1",
        ] {
            assert!(
                matches!(compile(cmd), Err(CompileError::InvalidArgumentCount { expected: 7, .. })),
                "arity not enforced for {cmd}"
            );
        }
    }

    #[test]
    fn test_valset_unknown_key() {
        assert_eq!(
            compile("CFG-VALSET 0 1 0 0 CFG-TMODE-BOGUS 1"),
            Err(CompileError::UnknownConfigKey("CFG-TMODE-BOGUS".to_string()))
        );
        assert_eq!(
            compile("CFG-VALSET 0 1 0 0 TMODE-MODE 1"),
            Err(CompileError::UnknownConfigKey("TMODE-MODE".to_string()))
        );
    }

    #[test]
    fn test_valset_hex_value() {
        assert_eq!(
            compile("CFG-VALSET 0 1 0 0 CFG-TMODE-MODE 0x02").unwrap(),
            compile("CFG-VALSET 0 1 0 0 CFG-TMODE-MODE 2").unwrap()
        );
    }

    #[test]
    fn test_token_cap_drops_extras() {
        // 31 arguments past the name hit the 32-token cap; anything beyond
        // is dropped before packing. NAVX5 has 25 fields, so the frames
        // below pack identical payloads.
        let args31 = vec!["7"; 31].join(" ");
        let args40 = vec!["7"; 40].join(" ");
        let capped = compile(&format!("CFG-NAVX5 {args31}")).unwrap();
        let over = compile(&format!("CFG-NAVX5 {args40}")).unwrap();
        assert_eq!(capped, over);
    }

    #[test]
    fn test_compile_into() {
        let mut buf = [0u8; MAX_FRAME_SIZE];
        let len = compile_into("CFG-VALSET 0 1 0 0 CFG-TMODE-MODE 0", &mut buf).unwrap();
        assert_eq!(len, 17);
        assert_eq!(hex::encode_upper(&buf[..len]), frame_hex("CFG-VALSET 0 1 0 0 CFG-TMODE-MODE 0"));

        assert_eq!(
            compile_into("CFG-RATE 100 1 1", &mut []),
            Err(CompileError::InvalidInput)
        );
        let mut small = [0u8; 4];
        assert_eq!(
            compile_into("CFG-RATE 100 1 1", &mut small),
            Err(CompileError::InvalidInput)
        );
    }

    #[test]
    fn test_str32_fields_in_usb_schema() {
        // CFG-USB's last three fields are 32-byte strings.
        let frame = compile("CFG-USB 0x1546 0x01A9 0 0 0 0 u-blox product serial").unwrap();
        let payload = &frame[HEADER_SIZE..frame.len() - CHECKSUM_SIZE];
        assert_eq!(payload.len(), 2 * 6 + 32 * 3);
        assert_eq!(&payload[12..18], b"u-blox");
        assert_eq!(payload[18], b' ');
    }
}
