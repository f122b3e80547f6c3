//! Wire constants for VarInt and VarLong encodings

/// High bit of a payload byte: set when another byte follows
pub const CONTINUE_BIT: u8 = 0b1000_0000;

/// Low 7 bits of a payload byte carrying the value
pub const SEGMENT_BITS: u8 = 0b0111_1111;

/// Number of value bits carried per byte
pub const SEGMENT_WIDTH: u32 = 7;

/// Maximum encoded length of a VarInt (ceil(32 / 7))
pub const VAR_INT_MAX_BYTES: usize = 5;

/// Maximum encoded length of a VarLong (ceil(64 / 7))
pub const VAR_LONG_MAX_BYTES: usize = 10;

/// Bits that must be clear in the 5th byte of a VarInt
pub const VAR_INT_FINAL_BYTE_MASK: u8 = 0b1111_0000;

/// Bits that must be clear in the 10th byte of a VarLong
pub const VAR_LONG_FINAL_BYTE_MASK: u8 = 0b1111_1110;
