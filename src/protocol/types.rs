use std::fmt;

use serde::{Deserialize, Serialize};

use crate::protocol::constants::{VAR_INT_MAX_BYTES, VAR_LONG_MAX_BYTES};
use crate::protocol::error::ProtocolError;
use crate::protocol::stream::{ByteSink, ByteSource};
use crate::protocol::{varint, varlong};

/// A 32-bit integer that travels as a VarInt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarInt(pub i32);

/// A 64-bit integer that travels as a VarLong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarLong(pub i64);

impl VarInt {
    pub const MAX_SIZE: usize = VAR_INT_MAX_BYTES;

    pub fn written_size(&self) -> usize {
        varint::var_int_size(self.0)
    }

    pub fn encode<S: ByteSink + ?Sized>(&self, sink: &mut S) -> Result<(), S::Error> {
        varint::write_var_int(sink, self.0)
    }

    pub fn decode<S>(source: &mut S) -> Result<Self, S::Error>
    where
        S: ByteSource + ?Sized,
        S::Error: From<ProtocolError>,
    {
        varint::read_var_int(source).map(Self)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        varint::encode_var_int(self.0)
    }
}

impl VarLong {
    pub const MAX_SIZE: usize = VAR_LONG_MAX_BYTES;

    pub fn written_size(&self) -> usize {
        varlong::var_long_size(self.0)
    }

    pub fn encode<S: ByteSink + ?Sized>(&self, sink: &mut S) -> Result<(), S::Error> {
        varlong::write_var_long(sink, self.0)
    }

    pub fn decode<S>(source: &mut S) -> Result<Self, S::Error>
    where
        S: ByteSource + ?Sized,
        S::Error: From<ProtocolError>,
    {
        varlong::read_var_long(source).map(Self)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        varlong::encode_var_long(self.0)
    }
}

impl From<i32> for VarInt {
    fn from(value: i32) -> Self {
        VarInt(value)
    }
}

impl From<VarInt> for i32 {
    fn from(value: VarInt) -> Self {
        value.0
    }
}

impl From<i64> for VarLong {
    fn from(value: i64) -> Self {
        VarLong(value)
    }
}

impl From<VarLong> for i64 {
    fn from(value: VarLong) -> Self {
        value.0
    }
}

// Every VarInt value fits a VarLong, though the encodings differ for negatives.
impl From<VarInt> for VarLong {
    fn from(value: VarInt) -> Self {
        VarLong(value.0 as i64)
    }
}

impl fmt::Display for VarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for VarLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
