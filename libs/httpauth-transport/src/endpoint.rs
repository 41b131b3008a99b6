//! Endpoint URL validation.

use http::Uri;
use url::Url;

use crate::error::EndpointError;

/// Parse a configured endpoint into a request URI.
///
/// Only absolute `http` and `https` URLs with a host are accepted.
///
/// # Errors
///
/// Returns an [`EndpointError`] describing why the value cannot be called.
pub fn parse_endpoint(raw: &str) -> Result<Uri, EndpointError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(EndpointError::Empty);
    }

    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(EndpointError::Scheme(other.to_owned())),
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(EndpointError::MissingHost);
    }

    Ok(url.as_str().parse::<Uri>()?)
}
