//! `A2S_INFO` response decoding and encoding.

use cursor::{ByteReader, ByteWriter, CursorResult};

use crate::error::{DecodeError, EncodeError, WireResult};
use crate::header::{
    ExtraDataFlags, MAX_PACKET_BYTES, RESPONSE_INFO, RESPONSE_LEGACY_INFO, SIMPLE_HEADER,
    SIMPLE_HEADER_SIZE,
};
use crate::info::{ServerInfo, TheShip};

type ExtraDecodeStep = fn(&mut ByteReader<'_>, &mut ServerInfo) -> CursorResult<()>;
type ExtraEncodeStep = fn(&ServerInfo, &mut ByteWriter) -> Result<(), EncodeError>;

/// Extra data blocks in wire order.
///
/// The order is fixed by the protocol and differs from the numeric order of
/// the masks.
const EXTRA_DATA_BLOCKS: [(u8, ExtraDecodeStep, ExtraEncodeStep); 5] = [
    (ExtraDataFlags::PORT, decode_port, encode_port),
    (ExtraDataFlags::STEAM_ID, decode_steam_id, encode_steam_id),
    (ExtraDataFlags::SOURCE_TV, decode_source_tv, encode_source_tv),
    (ExtraDataFlags::KEYWORDS, decode_keywords, encode_keywords),
    (ExtraDataFlags::GAME_ID, decode_game_id, encode_game_id),
];

/// Decodes an `A2S_INFO` response datagram.
///
/// `buf` is the full datagram, including the 4-byte simple header.
pub fn decode_info(buf: &[u8]) -> WireResult<ServerInfo> {
    decode_info_with_flags(buf).map(|(info, _)| info)
}

/// Decodes an `A2S_INFO` response and also returns its extra data flags.
///
/// The flags are `None` when the response ends right after the version
/// string.
pub fn decode_info_with_flags(buf: &[u8]) -> WireResult<(ServerInfo, Option<ExtraDataFlags>)> {
    let mut reader = ByteReader::new(buf);
    reader.read_bytes(SIMPLE_HEADER_SIZE)?;

    match reader.read_u8()? {
        RESPONSE_INFO => {}
        RESPONSE_LEGACY_INFO => return Err(DecodeError::LegacyProtocolUnsupported),
        found => return Err(DecodeError::UnexpectedHeader { found }),
    }

    // Initializers run in source order, which is wire order.
    let mut info = ServerInfo {
        protocol_version: reader.read_u8()?,
        name: reader.read_cstring()?,
        map: reader.read_cstring()?,
        folder: reader.read_cstring()?,
        game: reader.read_cstring()?,
        app_id: reader.read_u16()?,
        players: reader.read_u8()?,
        max_players: reader.read_u8()?,
        bots: reader.read_u8()?,
        server_type: reader.read_u8()?,
        platform: reader.read_u8()?,
        password: reader.read_bool()?,
        vac: reader.read_bool()?,
        ..ServerInfo::default()
    };

    if info.is_the_ship() {
        info.the_ship = TheShip {
            mode: reader.read_u8()?,
            witnesses: reader.read_u8()?,
            duration: reader.read_u8()?,
        };
    }

    info.version = reader.read_cstring()?;

    if !reader.has_remaining() {
        return Ok((info, None));
    }

    let flags = ExtraDataFlags::from_raw(reader.read_u8()?);
    for (mask, decode, _) in EXTRA_DATA_BLOCKS {
        if flags.contains(mask) {
            decode(&mut reader, &mut info)?;
        }
    }

    Ok((info, Some(flags)))
}

/// Encodes `info` as an `A2S_INFO` response datagram.
///
/// The Ship block is written when the app id is 2400. The flags byte and
/// the blocks it selects are written only when `flags` is `Some`.
pub fn encode_info(
    info: &ServerInfo,
    flags: Option<ExtraDataFlags>,
    out: &mut ByteWriter,
) -> Result<(), EncodeError> {
    out.write_bytes(&SIMPLE_HEADER);
    out.write_u8(RESPONSE_INFO);
    out.write_u8(info.protocol_version);
    write_text(out, "name", &info.name)?;
    write_text(out, "map", &info.map)?;
    write_text(out, "folder", &info.folder)?;
    write_text(out, "game", &info.game)?;
    out.write_u16(info.app_id);
    out.write_u8(info.players);
    out.write_u8(info.max_players);
    out.write_u8(info.bots);
    out.write_u8(info.server_type);
    out.write_u8(info.platform);
    out.write_bool(info.password);
    out.write_bool(info.vac);

    if info.is_the_ship() {
        out.write_u8(info.the_ship.mode);
        out.write_u8(info.the_ship.witnesses);
        out.write_u8(info.the_ship.duration);
    }

    write_text(out, "version", &info.version)?;

    let Some(flags) = flags else {
        return Ok(());
    };
    out.write_u8(flags.raw());
    for (mask, _, encode) in EXTRA_DATA_BLOCKS {
        if flags.contains(mask) {
            encode(info, out)?;
        }
    }
    Ok(())
}

/// Encodes `info` into a fresh buffer.
pub fn encode_info_to_vec(
    info: &ServerInfo,
    flags: Option<ExtraDataFlags>,
) -> Result<Vec<u8>, EncodeError> {
    let mut out = ByteWriter::with_capacity(MAX_PACKET_BYTES);
    encode_info(info, flags, &mut out)?;
    Ok(out.finish())
}

fn write_text(out: &mut ByteWriter, field: &'static str, text: &str) -> Result<(), EncodeError> {
    out.write_cstring(text).map_err(EncodeError::text_field(field))
}

fn decode_port(reader: &mut ByteReader<'_>, info: &mut ServerInfo) -> CursorResult<()> {
    info.port = reader.read_u16()?;
    Ok(())
}

fn decode_steam_id(reader: &mut ByteReader<'_>, info: &mut ServerInfo) -> CursorResult<()> {
    info.steam_id = reader.read_u64()?;
    Ok(())
}

fn decode_source_tv(reader: &mut ByteReader<'_>, info: &mut ServerInfo) -> CursorResult<()> {
    info.source_tv.port = reader.read_u16()?;
    info.source_tv.name = reader.read_cstring()?;
    Ok(())
}

fn decode_keywords(reader: &mut ByteReader<'_>, info: &mut ServerInfo) -> CursorResult<()> {
    info.keywords = reader.read_cstring()?;
    Ok(())
}

fn decode_game_id(reader: &mut ByteReader<'_>, info: &mut ServerInfo) -> CursorResult<()> {
    info.game_id = reader.read_u64()?;
    Ok(())
}

#[allow(clippy::unnecessary_wraps)]
fn encode_port(info: &ServerInfo, out: &mut ByteWriter) -> Result<(), EncodeError> {
    out.write_u16(info.port);
    Ok(())
}

#[allow(clippy::unnecessary_wraps)]
fn encode_steam_id(info: &ServerInfo, out: &mut ByteWriter) -> Result<(), EncodeError> {
    out.write_u64(info.steam_id);
    Ok(())
}

fn encode_source_tv(info: &ServerInfo, out: &mut ByteWriter) -> Result<(), EncodeError> {
    out.write_u16(info.source_tv.port);
    write_text(out, "source_tv.name", &info.source_tv.name)
}

fn encode_keywords(info: &ServerInfo, out: &mut ByteWriter) -> Result<(), EncodeError> {
    write_text(out, "keywords", &info.keywords)
}

#[allow(clippy::unnecessary_wraps)]
fn encode_game_id(info: &ServerInfo, out: &mut ByteWriter) -> Result<(), EncodeError> {
    out.write_u64(info.game_id);
    Ok(())
}
