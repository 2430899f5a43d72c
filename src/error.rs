use std::io;

use thiserror::Error;

/// Failure to establish an outbound connection.
///
/// The only error kind this crate produces. Wraps the underlying I/O error
/// unchanged, adding the remote endpoint for context; DNS failures, refused
/// connections, and TLS handshake failures all surface here.
#[derive(Debug, Error)]
#[error("error creating socket to {host}:{port}")]
pub struct ConnectError {
    host: String,
    port: u16,
    #[source]
    source: io::Error,
}

impl ConnectError {
    pub(crate) fn new(host: impl Into<String>, port: u16, source: io::Error) -> Self {
        Self {
            host: host.into(),
            port,
            source,
        }
    }

    /// Remote host of the failed attempt.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Remote port of the failed attempt.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Kind of the underlying I/O error.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
