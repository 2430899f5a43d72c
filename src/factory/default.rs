use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use tracing::enabled;
use tracing::error;
use tracing::Level;

use crate::error::ConnectError;
use crate::factory::SocketFactory;
use crate::protocol::Protocol;
use crate::provider::PlatformProvider;
use crate::provider::StreamProvider;
use crate::stream::Stream;

/// Factory that delegates socket construction to the platform's default
/// stream providers, selecting plain or TLS transport by protocol.
///
/// Requested local binds are accepted and ignored: connections always
/// originate from whatever local address the provider picks. The optional
/// local host/port overrides are recorded and logged but never applied
/// either; the override path is kept inert on purpose, as the restriction
/// this factory works around rejects explicit binds outright.
#[derive(Clone)]
pub struct DefaultSocketFactory {
    protocol: Protocol,
    local_host_override: Option<String>,
    local_port_override: Option<u16>,
    provider: Arc<dyn StreamProvider + Send + Sync>,
}

impl DefaultSocketFactory {
    /// Creates a factory backed by [`PlatformProvider`].
    #[must_use]
    pub fn new(protocol: Protocol) -> Self {
        Self::with_provider(protocol, Arc::new(PlatformProvider::new()))
    }

    /// Creates a factory backed by the given provider.
    #[must_use]
    pub fn with_provider(
        protocol: Protocol,
        provider: Arc<dyn StreamProvider + Send + Sync>,
    ) -> Self {
        Self {
            protocol,
            local_host_override: None,
            local_port_override: None,
            provider,
        }
    }

    /// Records a local host override. Not applied when connecting.
    #[must_use]
    pub fn local_host_override(mut self, host: impl Into<String>) -> Self {
        self.local_host_override = Some(host.into());
        self
    }

    /// Records a local port override. Not applied when connecting.
    #[must_use]
    pub fn local_port_override(mut self, port: u16) -> Self {
        self.local_port_override = Some(port);
        self
    }

    /// Protocol this factory connects with.
    #[must_use]
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }
}

#[async_trait]
impl SocketFactory for DefaultSocketFactory {
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
                local_host_override = ?self.local_host_override,
                local_port_override = ?self.local_port_override,
                "connect requested, ignoring local bind"
            );
        }

        let result = match self.protocol {
            Protocol::Http => self.provider.connect_tcp(host, port).await,
            Protocol::Https => self.provider.connect_tls(host, port).await,
        };

        match result {
            Ok(stream) => {
                debug!("socket created");
                Ok(stream)
            }
            Err(source) => {
                error!(error = %source, "error creating socket");
                Err(ConnectError::new(host, port, source))
            }
        }
    }
}

/// Factories compare equal when they connect with the same protocol; the
/// override fields and the provider do not participate.
impl PartialEq for DefaultSocketFactory {
    fn eq(&self, other: &Self) -> bool {
        self.protocol == other.protocol
    }
}

impl Eq for DefaultSocketFactory {}

impl Hash for DefaultSocketFactory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.protocol.hash(state);
    }
}

impl fmt::Debug for DefaultSocketFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultSocketFactory")
            .field("protocol", &self.protocol)
            .field("local_host_override", &self.local_host_override)
            .field("local_port_override", &self.local_port_override)
            .finish_non_exhaustive()
    }
}
