use std::fmt;
use std::io;

/// Integer width a codec operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Int,
    Long,
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarKind::Int => write!(f, "VarInt"),
            VarKind::Long => write!(f, "VarLong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    InvalidEncoding(VarKind),
    Truncated,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidEncoding(kind) =>
                write!(f, "invalid {}", kind),
            ProtocolError::Truncated =>
                write!(f, "truncated input"),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<ProtocolError> for io::Error {
    fn from(err: ProtocolError) -> Self {
        let kind = match err {
            ProtocolError::InvalidEncoding(_) => io::ErrorKind::InvalidData,
            ProtocolError::Truncated => io::ErrorKind::UnexpectedEof,
        };
        io::Error::new(kind, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_width() {
        assert_eq!(ProtocolError::InvalidEncoding(VarKind::Int).to_string(), "invalid VarInt");
        assert_eq!(ProtocolError::InvalidEncoding(VarKind::Long).to_string(), "invalid VarLong");
    }

    #[test]
    fn io_error_kinds() {
        let err: io::Error = ProtocolError::InvalidEncoding(VarKind::Long).into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let err: io::Error = ProtocolError::Truncated.into();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
