use std::fmt;

/// Wire protocol a factory connects with, selecting the plain or TLS
/// default stream provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Plain TCP, scheme code `http`.
    Http,
    /// TLS over TCP, scheme code `https`.
    Https,
}

impl Protocol {
    /// Scheme code as it appears in URLs.
    #[must_use]
    pub fn scheme(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }

    /// Whether this protocol wraps the connection in TLS.
    #[must_use]
    pub fn is_secure(self) -> bool {
        matches!(self, Protocol::Https)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}
