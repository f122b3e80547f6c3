use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

use crate::protocol::accumulator::Accumulator;
use crate::protocol::{encode_var_int, encode_var_long};

/// Read one VarInt from an async stream.
/// End of stream surfaces as the reader's `UnexpectedEof`.
pub async fn read_var_int_async<R: AsyncRead + Unpin>(reader: &mut R) -> std::io::Result<i32> {
    let mut acc = Accumulator::<u32>::new();
    while acc.push(reader.read_u8().await?)? {}
    let (value, count) = acc.finish();

    trace!("Read VarInt {} ({} bytes)", value as i32, count);
    Ok(value as i32)
}

/// Read one VarLong from an async stream
pub async fn read_var_long_async<R: AsyncRead + Unpin>(reader: &mut R) -> std::io::Result<i64> {
    let mut acc = Accumulator::<u64>::new();
    while acc.push(reader.read_u8().await?)? {}
    let (value, count) = acc.finish();

    trace!("Read VarLong {} ({} bytes)", value as i64, count);
    Ok(value as i64)
}

/// Write a VarInt; the writer is not flushed
pub async fn write_var_int_async<W: AsyncWrite + Unpin>(
    writer: &mut W,
    value: i32,
) -> std::io::Result<()> {
    writer.write_all(&encode_var_int(value)).await
}

/// Write a VarLong; the writer is not flushed
pub async fn write_var_long_async<W: AsyncWrite + Unpin>(
    writer: &mut W,
    value: i64,
) -> std::io::Result<()> {
    writer.write_all(&encode_var_long(value)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, ErrorKind};

    #[tokio::test]
    async fn async_round_trip() {
        let mut buf = Vec::new();
        write_var_int_async(&mut buf, -300).await.unwrap();
        write_var_long_async(&mut buf, 1 << 40).await.unwrap();

        let mut reader = Cursor::new(buf);
        assert_eq!(read_var_int_async(&mut reader).await.unwrap(), -300);
        assert_eq!(read_var_long_async(&mut reader).await.unwrap(), 1 << 40);

        let err = read_var_int_async(&mut reader).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn async_rejects_overlong() {
        let mut reader = Cursor::new(vec![0xFFu8; 5]);
        let err = read_var_int_async(&mut reader).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        let mut reader = Cursor::new(vec![0xFFu8; 10]);
        let err = read_var_long_async(&mut reader).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
