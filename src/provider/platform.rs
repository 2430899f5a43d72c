use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use rustls::pki_types::ServerName;
use rustls::ClientConfig;
use rustls::RootCertStore;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;

use crate::provider::StreamProvider;
use crate::stream::Stream;

/// The platform's default providers: plain streams from the runtime's TCP
/// connect, TLS streams from a rustls handshake over the same connect.
///
/// Name resolution is left to [`TcpStream::connect`]. TLS uses either an
/// injected client config or a process-wide default trusting the Mozilla
/// roots.
#[derive(Debug, Clone, Default)]
pub struct PlatformProvider {
    tls_config: Option<Arc<ClientConfig>>,
}

impl PlatformProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a pre-built rustls client config for TLS connects.
    #[must_use]
    pub fn with_tls_config(tls_config: Arc<ClientConfig>) -> Self {
        Self {
            tls_config: Some(tls_config),
        }
    }

    fn tls_config(&self) -> io::Result<Arc<ClientConfig>> {
        match &self.tls_config {
            Some(config) => Ok(config.clone()),
            None => default_tls_config(),
        }
    }
}

#[async_trait]
impl StreamProvider for PlatformProvider {
    async fn connect_tcp(&self, host: &str, port: u16) -> io::Result<Stream> {
        let tcp = TcpStream::connect((host, port)).await?;
        Ok(Stream::Tcp(tcp))
    }

    async fn connect_tls(&self, host: &str, port: u16) -> io::Result<Stream> {
        let server_name = ServerName::try_from(host)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
            .to_owned();
        let config = self.tls_config()?;

        let tcp = TcpStream::connect((host, port)).await?;
        let tls = TlsConnector::from(config).connect(server_name, tcp).await?;
        Ok(Stream::Tls(Box::new(tls)))
    }
}

fn default_tls_config() -> io::Result<Arc<ClientConfig>> {
    static DEFAULT: OnceCell<Arc<ClientConfig>> = OnceCell::new();
    DEFAULT
        .get_or_try_init(|| {
            let mut roots = RootCertStore::empty();
            roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

            let config = ClientConfig::builder_with_provider(
                rustls::crypto::ring::default_provider().into(),
            )
            .with_safe_default_protocol_versions()
            .map_err(io::Error::other)?
            .with_root_certificates(roots)
            .with_no_client_auth();
            Ok(Arc::new(config))
        })
        .cloned()
}
