//! The seam to the externally supplied HTTP transport.

use std::future::Future;
use std::time::Duration;

use crate::Result;

/// What the transport reports back for one POST exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub text: String,
    pub elapsed: Duration,
}

/// The provided send primitive: POST `body` as JSON to `url` with `headers`
/// and report status, body text, and elapsed time.
///
/// The workbench core ships no HTTP implementation; retry and timeout
/// policy belong to the embedding application's transport.
pub trait GraphQLTransport {
    fn send(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> impl Future<Output = Result<TransportResponse>> + Send;
}
