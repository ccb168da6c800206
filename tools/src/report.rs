//! Human-readable and JSON views of a decoded response.

use std::fmt;

use serde::Serialize;
use wire::{ExtraDataFlags, Platform, ServerInfo, ServerKind};

/// JSON output for a decoded response.
#[derive(Debug, Clone, Serialize)]
pub struct InfoReport<'a> {
    #[serde(flatten)]
    pub info: &'a ServerInfo,
    /// Raw extra data flags, absent when the response ended after the version.
    pub extra_data_flags: Option<u8>,
    pub server_kind: &'static str,
    pub os: &'static str,
}

impl<'a> InfoReport<'a> {
    #[must_use]
    pub fn new(info: &'a ServerInfo, flags: Option<ExtraDataFlags>) -> Self {
        Self {
            info,
            extra_data_flags: flags.map(ExtraDataFlags::raw),
            server_kind: server_kind_label(info.server_kind()),
            os: platform_label(info.os()),
        }
    }
}

const fn server_kind_label(kind: ServerKind) -> &'static str {
    match kind {
        ServerKind::Dedicated => "dedicated",
        ServerKind::Listen => "listen",
        ServerKind::Proxy => "proxy",
        ServerKind::Unknown(_) => "unknown",
    }
}

const fn platform_label(platform: Platform) -> &'static str {
    match platform {
        Platform::Linux => "linux",
        Platform::Windows => "windows",
        Platform::Mac => "mac",
        Platform::Unknown(_) => "unknown",
    }
}

/// Terminal view of a decoded response.
///
/// Conditional fields are printed only when the response carried them.
#[derive(Debug, Clone, Copy)]
pub struct InfoSummary<'a> {
    info: &'a ServerInfo,
    flags: Option<ExtraDataFlags>,
}

impl<'a> InfoSummary<'a> {
    #[must_use]
    pub const fn new(info: &'a ServerInfo, flags: Option<ExtraDataFlags>) -> Self {
        Self { info, flags }
    }
}

impl fmt::Display for InfoSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info;
        writeln!(f, "name: {}", info.name)?;
        writeln!(f, "map: {}", info.map)?;
        writeln!(f, "game: {} ({})", info.game, info.folder)?;
        writeln!(f, "app id: {}", info.app_id)?;
        writeln!(
            f,
            "players: {}/{} ({} bots)",
            info.players, info.max_players, info.bots
        )?;
        writeln!(
            f,
            "server: {} on {}",
            server_kind_label(info.server_kind()),
            platform_label(info.os())
        )?;
        writeln!(
            f,
            "password: {} vac: {}",
            yes_no(info.password),
            yes_no(info.vac)
        )?;
        writeln!(
            f,
            "version: {} (protocol {})",
            info.version, info.protocol_version
        )?;

        if info.is_the_ship() {
            let ship = info.the_ship;
            writeln!(
                f,
                "the ship: mode {} witnesses {} duration {}s",
                ship.mode, ship.witnesses, ship.duration
            )?;
        }

        let Some(flags) = self.flags else {
            return Ok(());
        };
        writeln!(f, "extra data flags: 0x{:02x}", flags.raw())?;
        if flags.has_port() {
            writeln!(f, "  port: {}", info.port)?;
        }
        if flags.has_steam_id() {
            writeln!(f, "  steam id: {}", info.steam_id)?;
        }
        if flags.has_source_tv() {
            writeln!(
                f,
                "  sourcetv: {} on port {}",
                info.source_tv.name, info.source_tv.port
            )?;
        }
        if flags.has_keywords() {
            writeln!(f, "  keywords: {}", info.keywords)?;
        }
        if flags.has_game_id() {
            writeln!(f, "  game id: {}", info.game_id)?;
        }
        Ok(())
    }
}

const fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
