//! VarInt: 32-bit signed integers in 1 to 5 bytes

use tracing::{debug, trace};

use crate::protocol::constants::{CONTINUE_BIT, SEGMENT_BITS, SEGMENT_WIDTH};
use crate::protocol::error::ProtocolError;
use crate::protocol::stream::{ByteSink, ByteSource};
use crate::protocol::accumulator::Accumulator;
use crate::protocol::groups_for_bits;
use crate::utils::binary::format_binary;

/// Encode `value` into `sink`, least significant group first.
///
/// Negative values are written as their unsigned bit pattern and therefore
/// always take the full 5 bytes. Only sink failures can surface here.
pub fn write_var_int<S>(sink: &mut S, value: i32) -> Result<(), S::Error>
where
    S: ByteSink + ?Sized,
{
    // Logical shifts only: work on the raw bit pattern.
    let mut remaining = value as u32;
    loop {
        let segment = (remaining & SEGMENT_BITS as u32) as u8;
        let byte = if remaining & !(SEGMENT_BITS as u32) != 0 {
            segment | CONTINUE_BIT
        } else {
            segment
        };
        trace!("VarInt {} -> {}", value, format_binary(byte));
        sink.write_byte(byte)?;

        remaining >>= SEGMENT_WIDTH;
        if remaining == 0 {
            break;
        }
    }
    Ok(())
}

/// Decode one VarInt from `source`.
///
/// Fails with [`ProtocolError::InvalidEncoding`] when the 5th byte has any
/// of its top four bits set. Errors from the source are returned as-is.
pub fn read_var_int<S>(source: &mut S) -> Result<i32, S::Error>
where
    S: ByteSource + ?Sized,
    S::Error: From<ProtocolError>,
{
    let mut acc = Accumulator::<u32>::new();
    while acc.push(source.read_byte()?)? {}
    let (value, count) = acc.finish();

    debug!("Decoded VarInt {} from {} bytes", value as i32, count);
    Ok(value as i32)
}

/// Number of bytes [`write_var_int`] emits for `value`
pub fn var_int_size(value: i32) -> usize {
    groups_for_bits(u32::BITS - (value as u32).leading_zeros())
}

/// Encode `value` into a fresh buffer
pub fn encode_var_int(value: i32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(var_int_size(value));
    write_var_int(&mut buf, value).unwrap_or_else(|never| match never {});
    buf
}
