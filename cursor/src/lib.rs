//! Bounded little-endian byte cursor for A2S query packets.
//!
//! This crate provides [`ByteReader`] and [`ByteWriter`] for byte-level
//! decoding and encoding. It is designed for bounded, panic-free operation
//! with explicit error handling.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - Every read is bounds-checked, including C-string scans.
//! - **Fixed byte order** - Multi-byte integers are little-endian on every host.
//! - **No domain knowledge** - This crate knows nothing about servers or queries.
//!
//! # Example
//!
//! ```
//! use cursor::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u16(27015);
//! writer.write_cstring("de_dust2").unwrap();
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u16().unwrap(), 27015);
//! assert_eq!(reader.read_cstring().unwrap(), "de_dust2");
//! assert!(!reader.has_remaining());
//! ```

mod error;
mod reader;
mod writer;

pub use error::{CursorError, CursorResult, WriteError, WriteResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let writer = ByteWriter::new();
        let bytes = writer.finish();
        assert!(bytes.is_empty());

        let reader = ByteReader::new(&bytes);
        assert!(reader.is_empty());
    }

    #[test]
    fn integers_roundtrip_all_widths() {
        let mut writer = ByteWriter::new();
        writer.write_u8(0xAB);
        writer.write_u16(0xABCD);
        writer.write_u32(0x1234_5678);
        writer.write_u64(u64::MAX - 1);
        writer.write_i8(i8::MIN);
        writer.write_i16(-300);
        writer.write_i32(-70_000);
        writer.write_i64(i64::MIN + 1);
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 1 + 2 + 4 + 8 + 1 + 2 + 4 + 8);

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_u8().unwrap(), 0xAB);
        assert_eq!(reader.read_u16().unwrap(), 0xABCD);
        assert_eq!(reader.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(reader.read_u64().unwrap(), u64::MAX - 1);
        assert_eq!(reader.read_i8().unwrap(), i8::MIN);
        assert_eq!(reader.read_i16().unwrap(), -300);
        assert_eq!(reader.read_i32().unwrap(), -70_000);
        assert_eq!(reader.read_i64().unwrap(), i64::MIN + 1);
        assert!(reader.is_empty());
    }

    #[test]
    fn mixed_roundtrip() {
        let mut writer = ByteWriter::new();
        writer.write_bool(true);
        writer.write_cstring("Counter-Strike").unwrap();
        writer.write_bool(false);
        writer.write_u16(240);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        assert!(reader.read_bool().unwrap());
        assert_eq!(reader.read_cstring().unwrap(), "Counter-Strike");
        assert!(!reader.read_bool().unwrap());
        assert_eq!(reader.read_u16().unwrap(), 240);
        assert!(!reader.has_remaining());
    }

    #[test]
    fn doctest_example() {
        let mut writer = ByteWriter::new();
        writer.write_u16(27015);
        writer.write_cstring("de_dust2").unwrap();

        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_u16().unwrap(), 27015);
        assert_eq!(reader.read_cstring().unwrap(), "de_dust2");
    }
}
