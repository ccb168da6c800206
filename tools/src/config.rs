//! Query settings.

use std::time::Duration;

/// Settings for a single info query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Read and write deadline for the socket.
    pub timeout: Duration,

    /// Size of the receive buffer. Datagrams longer than this are truncated
    /// by the OS.
    pub max_packet_bytes: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(3),
            max_packet_bytes: wire::MAX_PACKET_BYTES,
        }
    }
}

impl QueryConfig {
    /// Creates settings with a short timeout for loopback tests.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            timeout: Duration::from_millis(500),
            max_packet_bytes: wire::MAX_PACKET_BYTES,
        }
    }

    /// Returns a copy with the given timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
