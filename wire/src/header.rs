//! Request bytes, response discriminators and extra data flags.

/// Prefix of every single-packet (unsplit) message: `-1` as a little-endian `i32`.
pub const SIMPLE_HEADER: [u8; 4] = [0xFF; 4];

/// Size of the simple header that precedes the response type byte.
pub const SIMPLE_HEADER_SIZE: usize = SIMPLE_HEADER.len();

/// The literal `A2S_INFO` request: simple header, `'T'`, `"Source Engine Query"`, terminator.
pub const INFO_REQUEST: [u8; 25] = *b"\xFF\xFF\xFF\xFFTSource Engine Query\0";

/// Response type byte of the supported info reply.
pub const RESPONSE_INFO: u8 = b'I';

/// Response type byte of the legacy GoldSource info reply.
pub const RESPONSE_LEGACY_INFO: u8 = b'm';

/// App id of The Ship, whose info reply carries three extra bytes.
pub const THE_SHIP_APP_ID: u16 = 2400;

/// Largest single datagram a server sends for an unsplit reply.
pub const MAX_PACKET_BYTES: usize = 1400;

/// Returns the raw `A2S_INFO` request datagram.
#[must_use]
pub const fn info_request() -> &'static [u8; 25] {
    &INFO_REQUEST
}

/// Extra data flags (EDF): which optional trailing fields follow the version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExtraDataFlags(u8);

impl ExtraDataFlags {
    /// Game id (u64) follows.
    pub const GAME_ID: u8 = 0x01;

    /// SteamID of the server (u64) follows.
    pub const STEAM_ID: u8 = 0x10;

    /// Keywords (C-string) follow.
    pub const KEYWORDS: u8 = 0x20;

    /// SourceTV port (u16) and name (C-string) follow.
    pub const SOURCE_TV: u8 = 0x40;

    /// Game port (u16) follows.
    pub const PORT: u8 = 0x80;

    /// Bits with no defined field.
    const UNKNOWN_MASK: u8 =
        !(Self::GAME_ID | Self::STEAM_ID | Self::KEYWORDS | Self::SOURCE_TV | Self::PORT);

    /// Creates flags from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw flag bits.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns `true` if every bit in `mask` is set.
    #[must_use]
    pub const fn contains(self, mask: u8) -> bool {
        self.0 & mask == mask
    }

    #[must_use]
    pub const fn has_port(self) -> bool {
        self.contains(Self::PORT)
    }

    #[must_use]
    pub const fn has_steam_id(self) -> bool {
        self.contains(Self::STEAM_ID)
    }

    #[must_use]
    pub const fn has_source_tv(self) -> bool {
        self.contains(Self::SOURCE_TV)
    }

    #[must_use]
    pub const fn has_keywords(self) -> bool {
        self.contains(Self::KEYWORDS)
    }

    #[must_use]
    pub const fn has_game_id(self) -> bool {
        self.contains(Self::GAME_ID)
    }

    /// Returns `true` if any bit without a defined field is set.
    ///
    /// Such bits are ignored by the decoder.
    #[must_use]
    pub const fn has_unknown_bits(self) -> bool {
        self.0 & Self::UNKNOWN_MASK != 0
    }
}
