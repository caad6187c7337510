// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the remote slide images.
//!
//! A single [`reqwest::Client`] is built at startup and cloned into every
//! task; clones share the connection pool.

use crate::app::config::{HTTP_CONNECT_TIMEOUT, HTTP_MAX_REDIRECTS};
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("IcedCarousel/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client.
///
/// # Errors
///
/// Returns [`Error::Network`] when the TLS backend cannot be initialised.
pub fn client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(HTTP_MAX_REDIRECTS))
        .user_agent(USER_AGENT)
        .connect_timeout(HTTP_CONNECT_TIMEOUT)
        .build()
        .map_err(|e| Error::Network(e.to_string()))
}

/// Sends a GET request and returns the response once its status is known
/// to be a success.
///
/// # Errors
///
/// [`Error::Network`] on transport failure, [`Error::Http`] on a
/// non-success status.
pub async fn get(client: &reqwest::Client, url: &str) -> Result<reqwest::Response> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Http(status.as_u16()));
    }
    Ok(response)
}

/// Fetches the whole body of `url` into memory.
///
/// # Errors
///
/// See [`get`]; body read failures are reported as [`Error::Network`].
pub async fn fetch_bytes(client: reqwest::Client, url: String) -> Result<Vec<u8>> {
    let response = get(&client, &url).await?;
    let bytes = response.bytes().await?;
    tracing::debug!(%url, len = bytes.len(), "fetched slide image");
    Ok(bytes.to_vec())
}
