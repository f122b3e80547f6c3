pub(crate) mod accumulator;
pub mod constants;
pub mod error;
pub mod stream;
pub mod types;
pub mod varint;
pub mod varlong;

pub use constants::*;
pub use error::{ProtocolError, VarKind};
pub use stream::{sink_fn, source_fn, ByteSink, ByteSlice, ByteSource, IoSink, IoSource};
pub use types::{VarInt, VarLong};
pub use varint::{encode_var_int, read_var_int, var_int_size, write_var_int};
pub use varlong::{encode_var_long, read_var_long, var_long_size, write_var_long};

/// Number of 7-bit groups needed for `bits` significant bits, at least one
pub(crate) fn groups_for_bits(bits: u32) -> usize {
    let bits = bits.max(1) as usize;
    (bits + SEGMENT_WIDTH as usize - 1) / SEGMENT_WIDTH as usize
}
