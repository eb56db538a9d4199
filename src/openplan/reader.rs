//! Little-endian primitives and the length-prefixed string used by table streams.

use std::io::{ErrorKind, Read};

use super::error::{Result, TableError};

/// Length byte value announcing that a 16-bit length follows
pub const EXTENDED_LENGTH: u8 = 255;

/// Forward-only reader over one table payload.
///
/// Never seeks and never re-reads; every method consumes exactly the bytes
/// of the primitive it decodes.
pub struct ByteReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Signed 32-bit little-endian integer
    pub fn read_int32(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf, "int32")?;
        Ok(i32::from_le_bytes(buf))
    }

    /// Signed 16-bit little-endian integer
    pub fn read_int16(&mut self) -> Result<i16> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf, "int16")?;
        Ok(i16::from_le_bytes(buf))
    }

    /// A single unsigned byte, or `None` once the stream is exhausted
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.position += 1;
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(TableError::stream("byte", e)),
            }
        }
    }

    /// Read one pstring.
    ///
    /// Layout: `length:u8 [extended:i16 if length == 255] bytes[length]`.
    /// A zero length byte means "no value" and yields `None`. Bytes are
    /// decoded as Latin-1.
    pub fn read_string(&mut self) -> Result<Option<String>> {
        let length = match self.read_byte()? {
            None => {
                return Err(TableError::stream(
                    "string length",
                    std::io::Error::from(ErrorKind::UnexpectedEof),
                ))
            }
            Some(0) => return Ok(None),
            Some(EXTENDED_LENGTH) => {
                let extended = self.read_int16()?;
                if extended < 0 {
                    return Err(TableError::format(format!(
                        "negative extended string length {} at offset {}",
                        extended, self.position
                    )));
                }
                extended as usize
            }
            Some(n) => n as usize,
        };

        let mut bytes = vec![0u8; length];
        self.fill(&mut bytes, "string body")?;
        Ok(Some(bytes.iter().map(|&b| b as char).collect()))
    }

    fn fill(&mut self, buf: &mut [u8], what: &'static str) -> Result<()> {
        self.inner
            .read_exact(buf)
            .map_err(|e| TableError::stream(what, e))?;
        self.position += buf.len() as u64;
        Ok(())
    }
}
