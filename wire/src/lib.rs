//! `A2S_INFO` request bytes and response layout.
//!
//! This crate decodes the server info reply of the Steam server query
//! protocol into a [`ServerInfo`]. It consumes a received datagram and never
//! touches sockets; sending the request and receiving the reply belong to the
//! caller.
//!
//! # Design Principles
//!
//! - **Stable wire format** - The layout is an external contract; see `WIRE_FORMAT.md`.
//! - **All or nothing** - A decode either yields a full record or a typed error.
//! - **Bounded decoding** - Every read, including string scans, stays inside the datagram.
//! - **No transport** - Retries, timeouts and split packets are out of scope.
//!
//! # Example
//!
//! ```
//! use wire::{decode_info, encode_info_to_vec, ExtraDataFlags, ServerInfo};
//!
//! let info = ServerInfo {
//!     name: "My Server".into(),
//!     map: "de_dust2".into(),
//!     app_id: 240,
//!     port: 27015,
//!     ..ServerInfo::default()
//! };
//! let flags = ExtraDataFlags::from_raw(ExtraDataFlags::PORT);
//! let bytes = encode_info_to_vec(&info, Some(flags)).unwrap();
//!
//! assert_eq!(decode_info(&bytes).unwrap(), info);
//! ```

mod error;
mod header;
mod info;
mod packet;

pub use error::{DecodeError, EncodeError, WireResult};
pub use header::{
    info_request, ExtraDataFlags, INFO_REQUEST, MAX_PACKET_BYTES, RESPONSE_INFO,
    RESPONSE_LEGACY_INFO, SIMPLE_HEADER, SIMPLE_HEADER_SIZE, THE_SHIP_APP_ID,
};
pub use info::{Platform, ServerInfo, ServerKind, SourceTv, TheShip};
pub use packet::{decode_info, decode_info_with_flags, encode_info, encode_info_to_vec};
