//! Single-shot `A2S_INFO` query over UDP.

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, instrument, warn};
use wire::{DecodeError, ExtraDataFlags, ServerInfo, INFO_REQUEST, SIMPLE_HEADER};

use crate::config::QueryConfig;

/// Port used when an address has none.
pub const DEFAULT_PORT: u16 = 27015;

/// Header of a split (multi-packet) response.
const SPLIT_HEADER: [u8; 4] = [0xFE, 0xFF, 0xFF, 0xFF];

/// Errors returned by a query.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("could not resolve server address {addr:?}")]
    Resolve { addr: String },

    #[error("socket error: {0}")]
    Io(#[from] io::Error),

    #[error("no response within {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("server sent a split response; reassembly is not supported")]
    SplitResponse,

    #[error("malformed response: {0}")]
    Decode(#[from] DecodeError),
}

/// A decoded response together with the datagram it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    pub info: ServerInfo,
    pub flags: Option<ExtraDataFlags>,
    pub raw: Vec<u8>,
}

/// Resolves `host:port`, or `host` with [`DEFAULT_PORT`].
pub fn resolve(addr: &str) -> Result<SocketAddr, QueryError> {
    let resolved = match addr.to_socket_addrs() {
        Ok(mut addrs) => addrs.next(),
        Err(_) => (addr, DEFAULT_PORT)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next()),
    };
    resolved.ok_or_else(|| QueryError::Resolve {
        addr: addr.to_string(),
    })
}

/// Sends the info request to `addr` and returns the raw reply datagram.
#[instrument(skip(config), fields(timeout = ?config.timeout))]
pub fn query_raw(addr: SocketAddr, config: &QueryConfig) -> Result<Vec<u8>, QueryError> {
    let local: SocketAddr = if addr.is_ipv4() {
        (Ipv4Addr::UNSPECIFIED, 0).into()
    } else {
        (Ipv6Addr::UNSPECIFIED, 0).into()
    };
    let socket = UdpSocket::bind(local)?;
    socket.set_read_timeout(Some(config.timeout))?;
    socket.set_write_timeout(Some(config.timeout))?;
    socket.connect(addr)?;

    let sent = socket.send(&INFO_REQUEST)?;
    debug!(sent, "sent info request");

    let mut buf = vec![0u8; config.max_packet_bytes];
    let received = match socket.recv(&mut buf) {
        Ok(received) => received,
        Err(err) if is_timeout(&err) => {
            warn!("no response before deadline");
            return Err(QueryError::Timeout {
                timeout: config.timeout,
            });
        }
        Err(err) => return Err(err.into()),
    };
    buf.truncate(received);
    debug!(received, "received response");

    if buf.starts_with(&SPLIT_HEADER) {
        return Err(QueryError::SplitResponse);
    }
    if !buf.starts_with(&SIMPLE_HEADER) {
        warn!(header = ?buf.get(..4), "response does not start with the simple header");
    }
    Ok(buf)
}

/// Queries `addr` and decodes the reply.
///
/// One request, one reply; there are no retries.
#[instrument(skip(config), fields(timeout = ?config.timeout))]
pub fn query_info(addr: SocketAddr, config: &QueryConfig) -> Result<QueryResponse, QueryError> {
    let raw = query_raw(addr, config)?;
    let (info, flags) = wire::decode_info_with_flags(&raw)?;
    debug!(
        app_id = info.app_id,
        flags = ?flags.map(ExtraDataFlags::raw),
        "decoded response"
    );
    Ok(QueryResponse { info, flags, raw })
}

fn is_timeout(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
    )
}
