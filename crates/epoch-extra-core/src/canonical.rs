//! Canonical CBOR encoding of the extra-data payload.
//!
//! The payload is encoded as a positional CBOR array — field meaning comes
//! from position, nothing is self-describing beyond CBOR's own major types.
//! Definite lengths only, integers in their smallest valid encoding. The
//! encoding must be byte-identical across independent implementations: the
//! chain's divergence detection compares payloads that round-tripped through
//! these bytes.
//!
//! Schema, top to bottom:
//!
//! ```text
//! payload      = [root, epoch, epoch_block,
//!                 candidates, kick_out, cancel, validators, configs]
//! root         = [bytes32 x4]              ; epoch/candidate/mint-cnt/config
//! candidates.. = [bytes20 *]               ; construction order preserved
//! configs      = [config *]
//! config       = [period, epoch_interval, max_validator_count,
//!                 bytes16, effective_block] ; stake as 16-byte big-endian
//! ```

use ciborium::value::Value;

use crate::config::ChainConfig;
use crate::error::ExtraError;
use crate::extra::HeaderExtra;
use crate::root::Root;
use crate::types::{Address, Digest};

/// Number of fields in the top-level payload array.
const PAYLOAD_FIELDS: u64 = 8;

/// Number of fields in one config entry.
const CONFIG_FIELDS: u64 = 5;

/// Encode a payload to canonical CBOR bytes.
pub fn canonical_bytes(extra: &HeaderExtra) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_uint(&mut buf, 4, PAYLOAD_FIELDS);
    encode_root(&mut buf, &extra.root);
    encode_uint(&mut buf, 0, extra.epoch);
    encode_uint(&mut buf, 0, extra.epoch_block);
    encode_addresses(&mut buf, &extra.current_block_candidates);
    encode_addresses(&mut buf, &extra.current_block_kick_out_candidates);
    encode_addresses(&mut buf, &extra.current_block_cancel_candidates);
    encode_addresses(&mut buf, &extra.current_epoch_validators);
    encode_uint(&mut buf, 4, extra.chain_config.len() as u64);
    for config in &extra.chain_config {
        encode_config(&mut buf, config);
    }
    buf
}

/// Decode a payload from canonical CBOR bytes.
///
/// Any malformed or truncated structure fails with
/// [`ExtraError::SchemaMismatch`], as does trailing input after the
/// payload value: the wire form is exactly one value, so leftover bytes
/// mean the producer and consumer disagree on the schema.
pub fn from_canonical_bytes(bytes: &[u8]) -> Result<HeaderExtra, ExtraError> {
    let mut remaining = bytes;
    let value: Value = ciborium::from_reader(&mut remaining)
        .map_err(|e| ExtraError::SchemaMismatch(e.to_string()))?;
    if !remaining.is_empty() {
        return Err(ExtraError::SchemaMismatch(format!(
            "{} trailing bytes after payload",
            remaining.len()
        )));
    }
    parse_payload(&value)
}

fn encode_root(buf: &mut Vec<u8>, root: &Root) {
    encode_uint(buf, 4, 4);
    encode_bytes(buf, root.epoch_hash.as_bytes());
    encode_bytes(buf, root.candidate_hash.as_bytes());
    encode_bytes(buf, root.mint_cnt_hash.as_bytes());
    encode_bytes(buf, root.config_hash.as_bytes());
}

fn encode_addresses(buf: &mut Vec<u8>, addresses: &[Address]) {
    encode_uint(buf, 4, addresses.len() as u64);
    for address in addresses {
        encode_bytes(buf, address.as_bytes());
    }
}

fn encode_config(buf: &mut Vec<u8>, config: &ChainConfig) {
    encode_uint(buf, 4, CONFIG_FIELDS);
    encode_uint(buf, 0, config.period);
    encode_uint(buf, 0, config.epoch_interval);
    encode_uint(buf, 0, config.max_validator_count);
    encode_bytes(buf, &config.min_candidate_stake.to_be_bytes());
    encode_uint(buf, 0, config.effective_block);
}

/// Encode an unsigned integer with the given major type, smallest form.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

fn parse_payload(value: &Value) -> Result<HeaderExtra, ExtraError> {
    let fields = expect_array(value, PAYLOAD_FIELDS as usize, "payload")?;

    Ok(HeaderExtra {
        root: parse_root(&fields[0])?,
        epoch: expect_u64(&fields[1], "epoch")?,
        epoch_block: expect_u64(&fields[2], "epoch block")?,
        current_block_candidates: parse_addresses(&fields[3], "candidates")?,
        current_block_kick_out_candidates: parse_addresses(&fields[4], "kick-out candidates")?,
        current_block_cancel_candidates: parse_addresses(&fields[5], "cancel candidates")?,
        current_epoch_validators: parse_addresses(&fields[6], "validators")?,
        chain_config: parse_configs(&fields[7])?,
    })
}

fn parse_root(value: &Value) -> Result<Root, ExtraError> {
    let fields = expect_array(value, 4, "root")?;
    Ok(Root {
        epoch_hash: expect_digest(&fields[0], "epoch hash")?,
        candidate_hash: expect_digest(&fields[1], "candidate hash")?,
        mint_cnt_hash: expect_digest(&fields[2], "mint-cnt hash")?,
        config_hash: expect_digest(&fields[3], "config hash")?,
    })
}

fn parse_addresses(value: &Value, what: &str) -> Result<Vec<Address>, ExtraError> {
    let items = match value {
        Value::Array(items) => items,
        _ => return Err(schema(what, "expected address list")),
    };

    let mut addresses = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Bytes(b) if b.len() == 20 => {
                let mut arr = [0u8; 20];
                arr.copy_from_slice(b);
                addresses.push(Address::from_bytes(arr));
            }
            _ => return Err(schema(what, "expected 20-byte address")),
        }
    }
    Ok(addresses)
}

fn parse_configs(value: &Value) -> Result<Vec<ChainConfig>, ExtraError> {
    let items = match value {
        Value::Array(items) => items,
        _ => return Err(schema("chain config", "expected list")),
    };

    items.iter().map(parse_config).collect()
}

fn parse_config(value: &Value) -> Result<ChainConfig, ExtraError> {
    let fields = expect_array(value, CONFIG_FIELDS as usize, "config entry")?;
    Ok(ChainConfig {
        period: expect_u64(&fields[0], "config period")?,
        epoch_interval: expect_u64(&fields[1], "config epoch interval")?,
        max_validator_count: expect_u64(&fields[2], "config validator cap")?,
        min_candidate_stake: expect_stake(&fields[3])?,
        effective_block: expect_u64(&fields[4], "config effective block")?,
    })
}

fn expect_array<'a>(
    value: &'a Value,
    len: usize,
    what: &str,
) -> Result<&'a [Value], ExtraError> {
    match value {
        Value::Array(items) if items.len() == len => Ok(items),
        Value::Array(items) => Err(schema(
            what,
            &format!("expected {} fields, found {}", len, items.len()),
        )),
        _ => Err(schema(what, "expected array")),
    }
}

fn expect_u64(value: &Value, what: &str) -> Result<u64, ExtraError> {
    match value {
        Value::Integer(i) => u64::try_from(i128::from(*i))
            .map_err(|_| schema(what, "integer out of range")),
        _ => Err(schema(what, "expected unsigned integer")),
    }
}

fn expect_digest(value: &Value, what: &str) -> Result<Digest, ExtraError> {
    match value {
        Value::Bytes(b) if b.len() == 32 => {
            let mut arr = [0u8; 32];
            arr.copy_from_slice(b);
            Ok(Digest::from_bytes(arr))
        }
        _ => Err(schema(what, "expected 32-byte digest")),
    }
}

fn expect_stake(value: &Value) -> Result<u128, ExtraError> {
    match value {
        Value::Bytes(b) if b.len() == 16 => {
            let mut arr = [0u8; 16];
            arr.copy_from_slice(b);
            Ok(u128::from_be_bytes(arr))
        }
        _ => Err(schema("config stake", "expected 16-byte big-endian value")),
    }
}

fn schema(what: &str, detail: &str) -> ExtraError {
    ExtraError::SchemaMismatch(format!("{}: {}", what, detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    fn sample() -> HeaderExtra {
        HeaderExtra {
            root: Root {
                epoch_hash: Digest::from_bytes([0x11; 32]),
                candidate_hash: Digest::from_bytes([0x22; 32]),
                mint_cnt_hash: Digest::from_bytes([0x33; 32]),
                config_hash: Digest::from_bytes([0x44; 32]),
            },
            epoch: 12,
            epoch_block: 2400,
            current_block_candidates: vec![addr(1), addr(2), addr(3)],
            current_block_kick_out_candidates: vec![addr(4)],
            current_block_cancel_candidates: vec![],
            current_epoch_validators: vec![addr(1), addr(5)],
            chain_config: vec![ChainConfig {
                period: 3,
                epoch_interval: 200,
                max_validator_count: 21,
                min_candidate_stake: u128::from(u64::MAX) + 1,
                effective_block: 0,
            }],
        }
    }

    #[test]
    fn test_canonical_bytes_deterministic() {
        let extra = sample();
        assert_eq!(canonical_bytes(&extra), canonical_bytes(&extra));
    }

    #[test]
    fn test_canonical_roundtrip() {
        let extra = sample();
        let decoded = from_canonical_bytes(&canonical_bytes(&extra)).unwrap();
        assert!(extra.equal(&decoded));
        assert_eq!(extra.root, decoded.root);
        assert_eq!(
            extra.chain_config[0].min_candidate_stake,
            decoded.chain_config[0].min_candidate_stake
        );
    }

    #[test]
    fn test_golden_empty_payload() {
        // array(8), root = array(4) of bytes(32) zeros, two zero uints,
        // four empty lists, empty config list.
        let zero_digest = format!("5820{}", "00".repeat(32));
        let expected = format!("8884{d}{d}{d}{d}00008080808080", d = zero_digest);

        let bytes = canonical_bytes(&HeaderExtra::default());
        assert_eq!(hex::encode(bytes), expected);
    }

    #[test]
    fn test_smallest_integer_encoding() {
        let mut buf = Vec::new();
        encode_uint(&mut buf, 0, 23);
        assert_eq!(buf, vec![0x17]);

        buf.clear();
        encode_uint(&mut buf, 0, 24);
        assert_eq!(buf, vec![0x18, 24]);

        buf.clear();
        encode_uint(&mut buf, 0, 2400);
        assert_eq!(buf, vec![0x19, 0x09, 0x60]);

        buf.clear();
        encode_uint(&mut buf, 0, u64::MAX);
        assert_eq!(buf[0], 0x1b);
        assert_eq!(buf.len(), 9);
    }

    #[test]
    fn test_truncated_bytes_fail_schema() {
        let bytes = canonical_bytes(&sample());
        let err = from_canonical_bytes(&bytes[..bytes.len() - 3]).unwrap_err();
        assert!(matches!(err, ExtraError::SchemaMismatch(_)));
    }

    #[test]
    fn test_trailing_bytes_fail_schema() {
        let mut bytes = canonical_bytes(&HeaderExtra::default());
        bytes.extend_from_slice(&[0xde, 0xad]);
        let err = from_canonical_bytes(&bytes).unwrap_err();
        assert!(matches!(err, ExtraError::SchemaMismatch(_)));
    }

    #[test]
    fn test_wrong_field_count_fails_schema() {
        // array(2) [0, 0] is valid CBOR but not the payload schema.
        let err = from_canonical_bytes(&[0x82, 0x00, 0x00]).unwrap_err();
        assert!(matches!(err, ExtraError::SchemaMismatch(_)));
    }

    #[test]
    fn test_wrong_address_width_fails_schema() {
        let mut extra = sample();
        extra.current_block_candidates.clear();
        let mut bytes = canonical_bytes(&extra);

        // Splice a 19-byte entry into the (previously empty) candidate list.
        // Offset: array header (1) + root (1 + 4 * 34) + epoch (1) +
        // epoch_block (3 bytes for 2400).
        let offset = 1 + 1 + 4 * 34 + 1 + 3;
        assert_eq!(bytes[offset], 0x80);
        let mut spliced = bytes[..offset].to_vec();
        spliced.push(0x81);
        spliced.push(0x53); // bytes(19)
        spliced.extend_from_slice(&[0xee; 19]);
        spliced.extend_from_slice(&bytes.split_off(offset + 1));

        let err = from_canonical_bytes(&spliced).unwrap_err();
        assert!(matches!(err, ExtraError::SchemaMismatch(_)));
    }

    #[test]
    fn test_non_array_payload_fails_schema() {
        // A bare uint is valid CBOR, wrong shape.
        let err = from_canonical_bytes(&[0x05]).unwrap_err();
        assert!(matches!(err, ExtraError::SchemaMismatch(_)));
    }
}
