//! The decoded `A2S_INFO` record.

use crate::header::THE_SHIP_APP_ID;

/// Fields only present for The Ship (app id 2400).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TheShip {
    /// Game mode.
    pub mode: u8,
    /// Number of witnesses needed to arrest a player.
    pub witnesses: u8,
    /// Seconds before a player is arrested while being witnessed.
    pub duration: u8,
}

/// SourceTV relay details, present when [`ExtraDataFlags::SOURCE_TV`](crate::ExtraDataFlags::SOURCE_TV) is set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceTv {
    pub port: u16,
    pub name: String,
}

/// Server information decoded from an `A2S_INFO` response.
///
/// Conditional fields that were absent on the wire hold their zero value.
/// The record does not say whether a zero was sent or defaulted; consult the
/// app id (for [`the_ship`](Self::the_ship)) or the flags the response was
/// encoded with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerInfo {
    /// Protocol version used by the server.
    pub protocol_version: u8,
    /// Server name.
    pub name: String,
    /// Map the server has loaded.
    pub map: String,
    /// Folder containing the game files.
    pub folder: String,
    /// Full name of the game.
    pub game: String,
    /// Steam application id of the game.
    pub app_id: u16,
    /// Players on the server.
    pub players: u8,
    /// Maximum players the server reports it can hold.
    pub max_players: u8,
    /// Bots on the server.
    pub bots: u8,
    /// Raw server type byte; see [`server_kind`](Self::server_kind).
    pub server_type: u8,
    /// Raw platform byte; see [`os`](Self::os).
    pub platform: u8,
    /// Whether a password is required to join.
    pub password: bool,
    /// Whether the server is VAC secured.
    pub vac: bool,
    pub the_ship: TheShip,
    /// Version of the game installed on the server.
    pub version: String,
    /// Game port.
    pub port: u16,
    /// Server SteamID.
    pub steam_id: u64,
    pub source_tv: SourceTv,
    /// Tags describing the game.
    pub keywords: String,
    /// 64-bit game id; the low 24 bits hold the app id.
    pub game_id: u64,
}

impl ServerInfo {
    /// Returns `true` if the app id identifies The Ship.
    #[must_use]
    pub const fn is_the_ship(&self) -> bool {
        self.app_id == THE_SHIP_APP_ID
    }

    #[must_use]
    pub const fn server_kind(&self) -> ServerKind {
        ServerKind::from_byte(self.server_type)
    }

    #[must_use]
    pub const fn os(&self) -> Platform {
        Platform::from_byte(self.platform)
    }
}

/// Server type reported in the info reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerKind {
    Dedicated,
    Listen,
    /// SourceTV relay.
    Proxy,
    Unknown(u8),
}

impl ServerKind {
    /// Parses a server type from its raw byte.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            b'd' => Self::Dedicated,
            b'l' => Self::Listen,
            b'p' => Self::Proxy,
            other => Self::Unknown(other),
        }
    }
}

/// Operating system reported in the info reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Windows,
    Mac,
    Unknown(u8),
}

impl Platform {
    /// Parses a platform from its raw byte. Both `'m'` and `'o'` denote macOS.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            b'l' => Self::Linux,
            b'w' => Self::Windows,
            b'm' | b'o' => Self::Mac,
            other => Self::Unknown(other),
        }
    }
}
