use std::time::Duration;

/// Caller-supplied connection parameters.
///
/// Factories in this crate accept these for interface compatibility and do
/// not apply them. Callers that need a deadline must wrap the connect call
/// in an external timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectParams {
    /// Requested timeout for establishing the connection.
    pub connect_timeout: Option<Duration>,
    /// Requested read timeout for the established stream.
    pub read_timeout: Option<Duration>,
}
