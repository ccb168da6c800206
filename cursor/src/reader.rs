//! Byte-level reader with bounded operations.

use crate::error::{CursorError, CursorResult};

/// A forward-only reader over a received packet.
///
/// Multi-byte integers are little-endian regardless of the host. All read
/// operations are bounds-checked and return errors on failure; the reader
/// never panics on malformed input.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if at least one unread byte is left.
    #[must_use]
    pub const fn has_remaining(&self) -> bool {
        self.pos < self.data.len()
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.has_remaining()
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads the next `len` bytes without copying them.
    pub fn read_bytes(&mut self, len: usize) -> CursorResult<&'a [u8]> {
        self.ensure_bytes(len)?;
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Reads a `u8`.
    pub fn read_u8(&mut self) -> CursorResult<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16(&mut self) -> CursorResult<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32(&mut self) -> CursorResult<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Reads a little-endian `u64`.
    pub fn read_u64(&mut self) -> CursorResult<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    /// Reads an `i8`.
    pub fn read_i8(&mut self) -> CursorResult<i8> {
        self.read_array().map(i8::from_le_bytes)
    }

    /// Reads a little-endian two's-complement `i16`.
    pub fn read_i16(&mut self) -> CursorResult<i16> {
        self.read_array().map(i16::from_le_bytes)
    }

    /// Reads a little-endian two's-complement `i32`.
    pub fn read_i32(&mut self) -> CursorResult<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    /// Reads a little-endian two's-complement `i64`.
    pub fn read_i64(&mut self) -> CursorResult<i64> {
        self.read_array().map(i64::from_le_bytes)
    }

    /// Reads a one-byte boolean. Any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> CursorResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a zero-terminated string.
    ///
    /// The terminator is consumed but not returned. Bytes that are not valid
    /// UTF-8 are replaced with U+FFFD. If no terminator exists before the end
    /// of the buffer the position is left unchanged.
    pub fn read_cstring(&mut self) -> CursorResult<String> {
        let start = self.pos;
        let rest = &self.data[start..];
        let Some(len) = rest.iter().position(|&byte| byte == 0) else {
            return Err(CursorError::UnterminatedString { start });
        };
        let text = String::from_utf8_lossy(&rest[..len]).into_owned();
        self.pos += len + 1;
        Ok(text)
    }

    fn ensure_bytes(&self, len: usize) -> CursorResult<()> {
        let available = self.remaining();
        if len > available {
            return Err(CursorError::OutOfBounds {
                requested: len,
                available,
            });
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> CursorResult<[u8; N]> {
        self.ensure_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = ByteReader::new(&[]);
        assert!(reader.is_empty());
        assert!(!reader.has_remaining());
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = ByteReader::new(&[]);
        let result = reader.read_u8();
        assert_eq!(
            result,
            Err(CursorError::OutOfBounds {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn read_u16_little_endian() {
        let mut reader = ByteReader::new(&[0x60, 0x09]);
        assert_eq!(reader.read_u16().unwrap(), 2400);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_u32_little_endian() {
        let mut reader = ByteReader::new(&[0x78, 0x56, 0x34, 0x12]);
        assert_eq!(reader.read_u32().unwrap(), 0x1234_5678);
    }

    #[test]
    fn read_u64_little_endian() {
        let mut reader = ByteReader::new(&[0x01, 0, 0, 0, 0, 0, 0, 0x80]);
        assert_eq!(reader.read_u64().unwrap(), 0x8000_0000_0000_0001);
    }

    #[test]
    fn read_signed_twos_complement() {
        let mut reader = ByteReader::new(&[
            0xFF, // -1
            0xFE, 0xFF, // -2
            0x00, 0x00, 0x00, 0x80, // i32::MIN
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, // i64::MAX
        ]);
        assert_eq!(reader.read_i8().unwrap(), -1);
        assert_eq!(reader.read_i16().unwrap(), -2);
        assert_eq!(reader.read_i32().unwrap(), i32::MIN);
        assert_eq!(reader.read_i64().unwrap(), i64::MAX);
        assert!(reader.is_empty());
    }

    #[test]
    fn short_read_does_not_advance() {
        let mut reader = ByteReader::new(&[0x01, 0x02, 0x03]);
        let err = reader.read_u32().unwrap_err();
        assert_eq!(
            err,
            CursorError::OutOfBounds {
                requested: 4,
                available: 3
            }
        );
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u16().unwrap(), 0x0201);
    }

    #[test]
    fn read_bool_any_nonzero_is_true() {
        let mut reader = ByteReader::new(&[0x00, 0x01, 0x02, 0xFF]);
        assert!(!reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
    }

    #[test]
    fn read_bytes_borrows() {
        let data = [0xFF, 0xFF, 0xFF, 0xFF, b'I'];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_bytes(4).unwrap(), &[0xFF; 4]);
        assert_eq!(reader.position(), 4);
        assert_eq!(reader.read_bytes(0).unwrap(), &[] as &[u8]);
        assert!(reader.read_bytes(2).is_err());
    }

    #[test]
    fn read_cstring_basic() {
        let mut reader = ByteReader::new(b"de_dust2\0cstrike\0");
        assert_eq!(reader.read_cstring().unwrap(), "de_dust2");
        assert_eq!(reader.position(), 9);
        assert_eq!(reader.read_cstring().unwrap(), "cstrike");
        assert!(reader.is_empty());
    }

    #[test]
    fn read_cstring_only_terminator() {
        let mut reader = ByteReader::new(&[0]);
        assert_eq!(reader.read_cstring().unwrap(), "");
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn read_cstring_unterminated() {
        let mut reader = ByteReader::new(b"ab\0cd");
        reader.read_cstring().unwrap();
        let err = reader.read_cstring().unwrap_err();
        assert_eq!(err, CursorError::UnterminatedString { start: 3 });
        assert_eq!(reader.position(), 3);
    }

    #[test]
    fn read_cstring_at_end_is_unterminated() {
        let mut reader = ByteReader::new(b"x\0");
        reader.read_cstring().unwrap();
        assert_eq!(
            reader.read_cstring(),
            Err(CursorError::UnterminatedString { start: 2 })
        );
    }

    #[test]
    fn read_cstring_invalid_utf8_is_lossy() {
        let mut reader = ByteReader::new(&[b'a', 0xFF, b'b', 0]);
        assert_eq!(reader.read_cstring().unwrap(), "a\u{FFFD}b");
    }
}
