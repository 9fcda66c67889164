//! The HTTP seam between the client and the device.
//!
//! A [`Transport`] POSTs one JSON body and hands back the raw reply body. It
//! does not interpret the reply: device error bodies come back as bytes so the
//! response model can decode them.

use std::future::Future;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use tracing::debug;

use crate::config::{ApiKey, TlsPolicy};
use crate::Result;

/// Header carrying the device access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";

/// Sends one request body and returns the reply body.
///
/// Dropping the returned future must abort the request.
pub trait Transport: Send + Sync {
    /// POST `body` to `url` authenticated with `api_key`.
    fn post(
        &self,
        url: &Url,
        api_key: &ApiKey,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// reqwest based transport.
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport for a device with the given certificate policy.
    pub fn new(tls: TlsPolicy, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if tls == TlsPolicy::AcceptDeviceCertificate {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    async fn post(&self, url: &Url, api_key: &ApiKey, body: Vec<u8>) -> Result<Vec<u8>> {
        let response = self
            .client
            .post(url.clone())
            .header(ACCESS_TOKEN_HEADER, api_key.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        // Non-2xx replies still carry the device's `errors` body
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(%status, len = bytes.len(), "device replied");

        Ok(bytes.to_vec())
    }
}
