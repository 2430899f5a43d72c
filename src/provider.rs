mod platform;

use std::io;

use async_trait::async_trait;

pub use crate::provider::platform::PlatformProvider;
use crate::stream::Stream;

/// Default stream construction consumed by socket factories.
///
/// Implementations pick their own local address; the local bind is not part
/// of this interface.
#[async_trait]
pub trait StreamProvider {
    /// Connects a plain TCP stream to `(host, port)`.
    async fn connect_tcp(&self, host: &str, port: u16) -> io::Result<Stream>;

    /// Connects a TLS stream to `(host, port)`, completing the handshake.
    async fn connect_tls(&self, host: &str, port: u16) -> io::Result<Stream>;
}
