mod default;
mod direct;

use std::net::IpAddr;

use async_trait::async_trait;
use tracing::debug;

pub use crate::factory::default::DefaultSocketFactory;
pub use crate::factory::direct::DirectSocketFactory;
use crate::error::ConnectError;
use crate::params::ConnectParams;
use crate::stream::Stream;

/// Pluggable strategy a client invokes to obtain new outbound connections.
///
/// `local_addr` and `local_port` carry the caller's requested local bind;
/// the factories in this crate accept and deliberately ignore them, since
/// the platforms they exist for refuse explicit binds. A `local_port` of 0
/// means "any".
#[async_trait]
pub trait SocketFactory {
    /// Connects to `(host, port)`, optionally honoring a requested local
    /// bind address and port.
    async fn connect_bound(
        &self,
        host: &str,
        port: u16,
        local_addr: Option<IpAddr>,
        local_port: u16,
    ) -> Result<Stream, ConnectError>;

    /// Connects as [`SocketFactory::connect_bound`], with caller-supplied
    /// connection parameters.
    ///
    /// The parameters never reach the connect path; callers needing a
    /// deadline must wrap the call in an external timeout.
    async fn connect_with_params(
        &self,
        host: &str,
        port: u16,
        local_addr: Option<IpAddr>,
        local_port: u16,
        params: ConnectParams,
    ) -> Result<Stream, ConnectError> {
        debug!(?params, "connect called with connection params, ignoring them");
        self.connect_bound(host, port, local_addr, local_port).await
    }

    /// Connects to `(host, port)` with no local bind request.
    async fn connect(&self, host: &str, port: u16) -> Result<Stream, ConnectError> {
        debug!("connect called with just host and port");
        self.connect_bound(host, port, None, 0).await
    }
}
