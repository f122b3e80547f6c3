use std::io::Cursor;

use varlen::protocol::{source_fn, IoSink, IoSource};
use varlen::{
    read_var_int, read_var_long, write_var_int, write_var_long, ByteSlice, ProtocolError,
    VarKind,
};

#[test]
fn var_int_values_survive_a_shared_buffer() {
    let values = [
        0, 1, 2, 127, 128, 255, 256, 6969, 2097151, i32::MAX,
        -1, -2, -127, -128, -255, -256, i32::MIN,
    ];

    let mut sink = Vec::new();
    for &value in &values {
        write_var_int(&mut sink, value).unwrap();
    }

    let mut source = ByteSlice::new(&sink);
    for (i, &value) in values.iter().enumerate() {
        assert_eq!(read_var_int(&mut source), Ok(value), "index {}", i);
    }
    assert_eq!(source.available(), 0, "no bytes left over");
}

#[test]
fn var_long_values_survive_a_shared_buffer() {
    let values = [
        0, 1, 2, 127, 128, 255, 256, 6969, 2097151, i32::MAX as i64, i64::MAX,
        -1, -2, -127, -128, -255, -256, i32::MIN as i64, i64::MIN,
    ];

    let mut sink = Vec::new();
    for &value in &values {
        write_var_long(&mut sink, value).unwrap();
    }

    let mut source = ByteSlice::new(&sink);
    for (i, &value) in values.iter().enumerate() {
        assert_eq!(read_var_long(&mut source), Ok(value), "index {}", i);
    }
    assert_eq!(source.available(), 0, "no bytes left over");
}

#[test]
fn malformed_streams_are_rejected() {
    let mut source = ByteSlice::new(&[0xFF; 5]);
    assert_eq!(
        read_var_int(&mut source),
        Err(ProtocolError::InvalidEncoding(VarKind::Int))
    );

    let mut source = ByteSlice::new(&[0xFF; 10]);
    assert_eq!(
        read_var_long(&mut source),
        Err(ProtocolError::InvalidEncoding(VarKind::Long))
    );
}

#[test]
fn std_io_streams() {
    let mut sink = IoSink::new(Vec::new());
    write_var_int(&mut sink, 25565).unwrap();
    write_var_long(&mut sink, -42).unwrap();
    let bytes = sink.into_inner();
    assert_eq!(bytes.len(), 3 + 10);

    let mut source = IoSource::new(Cursor::new(bytes));
    assert_eq!(read_var_int(&mut source).unwrap(), 25565);
    assert_eq!(read_var_long(&mut source).unwrap(), -42);

    let err = read_var_int(&mut source).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
}

#[test]
fn invalid_encoding_through_std_io() {
    let mut source = IoSource::new(Cursor::new(vec![0x80, 0x80, 0x80, 0x80, 0x10]));
    let err = read_var_int(&mut source).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    assert_eq!(err.to_string(), "invalid VarInt");
}

#[test]
fn closure_source_reads_exactly_one_value() {
    let data = [0xAC, 0x02, 0x05];
    let mut pos = 0;
    let mut source = source_fn(|| match data.get(pos) {
        Some(&byte) => {
            pos += 1;
            Ok(byte)
        }
        None => Err(ProtocolError::Truncated),
    });
    assert_eq!(read_var_int(&mut source), Ok(300));
    drop(source);
    assert_eq!(pos, 2);
}

#[test]
fn anyhow_callers_can_use_question_mark() -> anyhow::Result<()> {
    let bytes = varlen::encode_var_long(1 << 50);
    let value = read_var_long(&mut ByteSlice::new(&bytes))?;
    assert_eq!(value, 1 << 50);
    Ok(())
}
