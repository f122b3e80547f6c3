//! Minecraft-style VarInt / VarLong codecs.
//!
//! Values are split into 7-bit groups, least significant first, with the
//! high bit of each byte marking that another byte follows. Negative numbers
//! are encoded as their unsigned bit pattern and always take the maximum
//! length (5 bytes for a VarInt, 10 for a VarLong).

pub mod config;
pub mod protocol;
pub mod utils;

pub use protocol::{
    encode_var_int, encode_var_long, read_var_int, read_var_long, var_int_size, var_long_size,
    write_var_int, write_var_long, ByteSink, ByteSlice, ByteSource, ProtocolError, VarInt,
    VarKind, VarLong,
};
