//! Single-byte sink and source capabilities the codecs are written against

use std::convert::Infallible;
use std::io::{self, Read, Write};

use crate::protocol::error::ProtocolError;

/// Accepts one encoded byte at a time
pub trait ByteSink {
    type Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;
}

/// Yields one encoded byte at a time
pub trait ByteSource {
    type Error;

    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

impl<T: ByteSink + ?Sized> ByteSink for &mut T {
    type Error = T::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    type Error = T::Error;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        (**self).read_byte()
    }
}

impl ByteSink for Vec<u8> {
    type Error = Infallible;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }
}

/// Cursor over a borrowed byte slice
#[derive(Debug, Clone)]
pub struct ByteSlice<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteSlice<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed
    pub fn available(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub fn rewind(&mut self) {
        self.pos = 0;
    }
}

impl ByteSource for ByteSlice<'_> {
    type Error = ProtocolError;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let byte = *self.data.get(self.pos).ok_or(ProtocolError::Truncated)?;
        self.pos += 1;
        Ok(byte)
    }
}

/// Adapts any `std::io::Write` into a byte sink
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    type Error = io::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.inner.write_all(&[byte])
    }
}

/// Adapts any `std::io::Read` into a byte source
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

impl<R: Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    type Error = io::Error;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.inner.read_exact(&mut buf)?;
        Ok(buf[0])
    }
}

/// Sink backed by a closure, see [`sink_fn`]
pub struct SinkFn<F>(F);

/// Source backed by a closure, see [`source_fn`]
pub struct SourceFn<F>(F);

/// Wraps a `FnMut(u8) -> Result<(), E>` as a [`ByteSink`]
pub fn sink_fn<F, E>(f: F) -> SinkFn<F>
where
    F: FnMut(u8) -> Result<(), E>,
{
    SinkFn(f)
}

/// Wraps a `FnMut() -> Result<u8, E>` as a [`ByteSource`]
pub fn source_fn<F, E>(f: F) -> SourceFn<F>
where
    F: FnMut() -> Result<u8, E>,
{
    SourceFn(f)
}

impl<F, E> ByteSink for SinkFn<F>
where
    F: FnMut(u8) -> Result<(), E>,
{
    type Error = E;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (self.0)(byte)
    }
}

impl<F, E> ByteSource for SourceFn<F>
where
    F: FnMut() -> Result<u8, E>,
{
    type Error = E;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        (self.0)()
    }
}
