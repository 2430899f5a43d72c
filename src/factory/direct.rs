use std::net::IpAddr;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tracing::debug;
use tracing::enabled;
use tracing::error;
use tracing::Level;

use crate::error::ConnectError;
use crate::factory::SocketFactory;
use crate::stream::Stream;

/// Factory that connects plain TCP streams directly with the runtime's
/// default local bind, with no protocol selection.
///
/// Requested local binds are accepted and ignored, same as
/// [`DefaultSocketFactory`](crate::factory::DefaultSocketFactory).
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectSocketFactory;

#[async_trait]
impl SocketFactory for DirectSocketFactory {
    async fn connect_bound(
        &self,
        host: &str,
        port: u16,
        local_addr: Option<IpAddr>,
        local_port: u16,
    ) -> Result<Stream, ConnectError> {
        if enabled!(Level::DEBUG) {
            debug!(
                host,
                port,
                ?local_addr,
                local_port,
                "connect requested, ignoring local bind"
            );
        }

        match TcpStream::connect((host, port)).await {
            Ok(tcp) => {
                debug!("socket created");
                Ok(Stream::Tcp(tcp))
            }
            Err(source) => {
                error!(error = %source, "error creating socket");
                Err(ConnectError::new(host, port, source))
            }
        }
    }
}
