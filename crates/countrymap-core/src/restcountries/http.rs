//! HTTP client abstraction for testability

use crate::error::Result;

/// Status and body of a completed GET request.
///
/// Non-success statuses are *not* errors at this layer: the REST client
/// turns a 404 into a "not found" value, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for synchronous HTTP GET.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// Returns `Err` only for transport failures (DNS, connect, TLS, body
    /// read); any status code the server answers with is `Ok`.
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url)
    }
}

#[cfg(feature = "http")]
pub use self::reqwest_client::ReqwestClient;

#[cfg(feature = "http")]
mod reqwest_client {
    use super::{HttpClient, HttpResponse};
    use crate::error::Result;
    use std::time::Duration;
    use tracing::trace;

    const USER_AGENT: &str = concat!("countrymap/", env!("CARGO_PKG_VERSION"));

    /// Real HTTP client implementation using blocking reqwest.
    ///
    /// Must not be called from inside an async executor; the web front-end
    /// runs lookups on its blocking pool.
    #[derive(Clone, Debug)]
    pub struct ReqwestClient {
        client: reqwest::blocking::Client,
    }

    impl ReqwestClient {
        /// Creates a new ReqwestClient with reqwest's default timeout.
        pub fn new() -> Result<Self> {
            let client = reqwest::blocking::Client::builder()
                .user_agent(USER_AGENT)
                .build()?;
            Ok(Self { client })
        }

        /// Creates a new ReqwestClient with a custom request timeout.
        pub fn with_timeout(timeout: Duration) -> Result<Self> {
            let client = reqwest::blocking::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(timeout)
                .build()?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        fn get(&self, url: &str) -> Result<HttpResponse> {
            let response = self.client.get(url).send()?;
            let status = response.status().as_u16();
            let body = response.bytes()?.to_vec();
            trace!(url, status, bytes = body.len(), "GET");
            Ok(HttpResponse { status, body })
        }
    }
}
