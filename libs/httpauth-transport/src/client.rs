//! Pooled HTTP client used for the single outbound call of each operation.

use std::time::Duration;

use bytes::Bytes;
use http::{HeaderMap, Method, Request, StatusCode, Uri};
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;

use crate::error::TransportError;

type Inner = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

/// Fully buffered response of a round trip.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// HTTP client shared by every call of a plugin instance.
///
/// Cloning is cheap and all clones share the same connection pool, so one
/// client can serve concurrent operations without further locking.
#[derive(Clone)]
pub struct HttpClient {
    inner: Inner,
    request_timeout: Option<Duration>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

/// Builder for [`HttpClient`].
///
/// Without explicit timeouts the transport defaults apply.
#[derive(Debug, Clone, Default)]
pub struct HttpClientBuilder {
    connect_timeout: Option<Duration>,
    request_timeout: Option<Duration>,
}

impl HttpClientBuilder {
    /// Bound the time spent establishing a TCP connection.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Bound the whole round trip, including reading the response body.
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Tls`] if the TLS configuration cannot be
    /// built for the bundled root certificates.
    pub fn build(self) -> Result<HttpClient, TransportError> {
        let mut http = HttpConnector::new();
        http.enforce_http(false);
        http.set_connect_timeout(self.connect_timeout);

        let https = HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(rustls::crypto::aws_lc_rs::default_provider())
            .map_err(TransportError::Tls)?
            .https_or_http()
            .enable_http1()
            .wrap_connector(http);

        Ok(HttpClient {
            inner: Client::builder(TokioExecutor::new()).build(https),
            request_timeout: self.request_timeout,
        })
    }
}

impl HttpClient {
    #[must_use]
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Send a single `POST` and buffer the full response.
    ///
    /// No retries are attempted; any status code is returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] for connection, protocol and body-read
    /// faults, or when the request timeout elapses.
    pub async fn post(
        &self,
        uri: &Uri,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<HttpResponse, TransportError> {
        let mut request = Request::new(Full::new(body));
        *request.method_mut() = Method::POST;
        *request.uri_mut() = uri.clone();
        *request.headers_mut() = headers;

        let round_trip = self.round_trip(request);
        match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, round_trip)
                .await
                .map_err(|_| TransportError::Timeout(limit))?,
            None => round_trip.await,
        }
    }

    async fn round_trip(
        &self,
        request: Request<Full<Bytes>>,
    ) -> Result<HttpResponse, TransportError> {
        let response = self
            .inner
            .request(request)
            .await
            .map_err(TransportError::Send)?;

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(TransportError::Body)?
            .to_bytes();

        tracing::trace!(
            status = status.as_u16(),
            body_len = body.len(),
            "received response"
        );
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use http::header::CONTENT_TYPE;
    use httpmock::prelude::*;

    fn uri(server: &MockServer, path: &str) -> Uri {
        server.url(path).parse().unwrap()
    }

    #[tokio::test]
    async fn post_sends_headers_and_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/echo")
                    .header("content-type", "application/json")
                    .body("{\"k\":1}");
                then.status(201).body("created");
            })
            .await;

        let client = HttpClient::builder().build().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());

        let response = client
            .post(&uri(&server, "/echo"), headers, Bytes::from_static(b"{\"k\":1}"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(&response.body[..], b"created");
    }

    #[tokio::test]
    async fn error_statuses_are_returned_not_raised() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/fail");
                then.status(503).body("down");
            })
            .await;

        let client = HttpClient::builder().build().unwrap();
        let response = client
            .post(&uri(&server, "/fail"), HeaderMap::new(), Bytes::new())
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn connection_refused_is_a_send_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::builder().build().unwrap();
        let target: Uri = format!("http://{addr}/auth").parse().unwrap();
        let err = client
            .post(&target, HeaderMap::new(), Bytes::new())
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Send(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn request_timeout_is_enforced() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/slow");
                then.status(200).delay(Duration::from_millis(500));
            })
            .await;

        let client = HttpClient::builder()
            .request_timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let err = client
            .post(&uri(&server, "/slow"), HeaderMap::new(), Bytes::new())
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Timeout(d) if d == Duration::from_millis(50)));
    }
}
