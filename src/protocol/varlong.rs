//! VarLong: 64-bit signed integers in 1 to 10 bytes

use tracing::{debug, trace};

use crate::protocol::constants::{CONTINUE_BIT, SEGMENT_BITS, SEGMENT_WIDTH};
use crate::protocol::error::ProtocolError;
use crate::protocol::stream::{ByteSink, ByteSource};
use crate::protocol::accumulator::Accumulator;
use crate::protocol::groups_for_bits;
use crate::utils::binary::format_binary;

/// Encode `value` into `sink`. Negative values always take 10 bytes.
pub fn write_var_long<S>(sink: &mut S, value: i64) -> Result<(), S::Error>
where
    S: ByteSink + ?Sized,
{
    let mut remaining = value as u64;
    loop {
        let segment = (remaining & SEGMENT_BITS as u64) as u8;
        let byte = if remaining & !(SEGMENT_BITS as u64) != 0 {
            segment | CONTINUE_BIT
        } else {
            segment
        };
        trace!("VarLong {} -> {}", value, format_binary(byte));
        sink.write_byte(byte)?;

        remaining >>= SEGMENT_WIDTH;
        if remaining == 0 {
            break;
        }
    }
    Ok(())
}

/// Decode one VarLong from `source`.
///
/// Only bit 0 may be set in a 10th byte; anything else is
/// [`ProtocolError::InvalidEncoding`].
pub fn read_var_long<S>(source: &mut S) -> Result<i64, S::Error>
where
    S: ByteSource + ?Sized,
    S::Error: From<ProtocolError>,
{
    let mut acc = Accumulator::<u64>::new();
    while acc.push(source.read_byte()?)? {}
    let (value, count) = acc.finish();

    debug!("Decoded VarLong {} from {} bytes", value as i64, count);
    Ok(value as i64)
}

/// Number of bytes [`write_var_long`] emits for `value`
pub fn var_long_size(value: i64) -> usize {
    groups_for_bits(u64::BITS - (value as u64).leading_zeros())
}

/// Encode `value` into a fresh buffer
pub fn encode_var_long(value: i64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(var_long_size(value));
    write_var_long(&mut buf, value).unwrap_or_else(|never| match never {});
    buf
}
