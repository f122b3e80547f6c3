//! Byte-at-a-time decode state shared by the sync and async readers

use tracing::error;

use crate::protocol::constants::{
    CONTINUE_BIT, SEGMENT_BITS, SEGMENT_WIDTH, VAR_INT_FINAL_BYTE_MASK, VAR_INT_MAX_BYTES,
    VAR_LONG_FINAL_BYTE_MASK, VAR_LONG_MAX_BYTES,
};
use crate::protocol::error::{ProtocolError, VarKind};

/// Unsigned storage for one encoding width
pub(crate) trait Word: Copy {
    const KIND: VarKind;
    const MAX_BYTES: usize;
    const FINAL_BYTE_MASK: u8;
    const ZERO: Self;

    /// OR `segment` in at `shift`, dropping bits past the word's width
    fn with_segment(self, segment: u8, shift: u32) -> Self;
}

impl Word for u32 {
    const KIND: VarKind = VarKind::Int;
    const MAX_BYTES: usize = VAR_INT_MAX_BYTES;
    const FINAL_BYTE_MASK: u8 = VAR_INT_FINAL_BYTE_MASK;
    const ZERO: Self = 0;

    fn with_segment(self, segment: u8, shift: u32) -> Self {
        self | ((segment as u32) << shift)
    }
}

impl Word for u64 {
    const KIND: VarKind = VarKind::Long;
    const MAX_BYTES: usize = VAR_LONG_MAX_BYTES;
    const FINAL_BYTE_MASK: u8 = VAR_LONG_FINAL_BYTE_MASK;
    const ZERO: Self = 0;

    fn with_segment(self, segment: u8, shift: u32) -> Self {
        self | ((segment as u64) << shift)
    }
}

pub(crate) struct Accumulator<W> {
    value: W,
    count: usize,
}

impl<W: Word> Accumulator<W> {
    pub(crate) fn new() -> Self {
        Self { value: W::ZERO, count: 0 }
    }

    /// Fold in the next byte. Returns `true` while more bytes are expected.
    pub(crate) fn push(&mut self, byte: u8) -> Result<bool, ProtocolError> {
        self.value = self
            .value
            .with_segment(byte & SEGMENT_BITS, SEGMENT_WIDTH * self.count as u32);
        self.count += 1;

        check_final_byte(W::KIND, self.count, byte, W::MAX_BYTES, W::FINAL_BYTE_MASK)?;

        Ok(byte & CONTINUE_BIT != 0)
    }

    /// Decoded bit pattern and the number of bytes consumed
    pub(crate) fn finish(self) -> (W, usize) {
        (self.value, self.count)
    }
}

/// Rejects the last permitted byte of an encoding when it carries bits
/// outside the integer's width. `count` is the number of bytes read so far.
fn check_final_byte(
    kind: VarKind,
    count: usize,
    byte: u8,
    max_bytes: usize,
    mask: u8,
) -> Result<(), ProtocolError> {
    if count == max_bytes && byte & mask != 0 {
        error!("Invalid {}: byte {} is {:#04x}, mask {:#04x}", kind, count, byte, mask);
        return Err(ProtocolError::InvalidEncoding(kind));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<W: Word>(bytes: &[u8]) -> Result<(W, usize), ProtocolError> {
        let mut acc = Accumulator::<W>::new();
        for &byte in bytes {
            if !acc.push(byte)? {
                break;
            }
        }
        Ok(acc.finish())
    }

    #[test]
    fn stops_at_first_clear_continuation_bit() {
        assert_eq!(feed::<u32>(&[0xAC, 0x02, 0x7F]), Ok((300, 2)));
        assert_eq!(feed::<u64>(&[0x00, 0xFF]), Ok((0, 1)));
    }

    #[test]
    fn mask_applies_only_at_the_last_byte() {
        // 0xF0 in the 4th byte is an ordinary continuation
        assert!(feed::<u32>(&[0x80, 0x80, 0x80, 0xF0, 0x00]).is_ok());
        assert_eq!(
            feed::<u32>(&[0x80, 0x80, 0x80, 0x80, 0x10]),
            Err(ProtocolError::InvalidEncoding(VarKind::Int))
        );
        assert_eq!(
            feed::<u64>(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x02]),
            Err(ProtocolError::InvalidEncoding(VarKind::Long))
        );
    }

    #[test]
    fn fifth_int_byte_fills_the_top_nibble() {
        assert_eq!(feed::<u32>(&[0x80, 0x80, 0x80, 0x80, 0x0F]), Ok((0xF000_0000, 5)));
    }
}
