use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::protocol::{read_var_int, read_var_long, ByteSlice, ProtocolError, VarKind};

/// Values decoded back to back from one buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedSequence {
    pub values: Vec<i64>,
    /// Bytes of an incomplete trailing value
    pub leftover: usize,
    pub leftover_offset: usize,
}

/// Decode values of `kind` until `bytes` runs out.
///
/// A truncated value after at least one complete one ends the sequence and
/// is reported as leftover. Any other failure, including `InvalidEncoding`,
/// is an error.
pub fn decode_sequence(kind: VarKind, bytes: &[u8]) -> Result<DecodedSequence> {
    let mut source = ByteSlice::new(bytes);
    let mut values = Vec::new();

    while source.available() > 0 {
        let offset = source.position();
        let decoded = match kind {
            VarKind::Int => read_var_int(&mut source).map(i64::from),
            VarKind::Long => read_var_long(&mut source),
        };
        match decoded {
            Ok(value) => values.push(value),
            Err(ProtocolError::Truncated) if !values.is_empty() => {
                let leftover = bytes.len() - offset;
                warn!("{} leftover bytes at offset {}", leftover, offset);
                return Ok(DecodedSequence { values, leftover, leftover_offset: offset });
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to decode {} at byte offset {}", kind, offset));
            }
        }
    }

    Ok(DecodedSequence { values, leftover: 0, leftover_offset: bytes.len() })
}

/// Parse a hex string (whitespace ignored) and decode it with [`decode_sequence`]
pub fn decode_hex(kind: VarKind, input: &str) -> Result<DecodedSequence> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(&cleaned).context("input is not valid hex")?;
    info!("Decoding {} bytes as {}", bytes.len(), kind);
    decode_sequence(kind, &bytes)
}
