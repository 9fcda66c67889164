//! Device connection settings.

use std::fmt;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Url;

use crate::{ClientError, Result};

/// Port of the device's HTTPS API.
pub const DEVICE_PORT: u16 = 4343;

/// Path of the notification endpoint.
pub const NOTIFICATIONS_PATH: &str = "/api/v1/dev/device/notifications";

/// Length of a raw device API key as shown in the developer portal.
pub const RAW_API_KEY_LEN: usize = 64;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Value sent in the `X-Access-Token` header.
///
/// A raw 64 character key is base64 encoded; anything else is assumed to be
/// encoded already and kept as is.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Build the header value from a raw or pre-encoded key.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        if key.chars().count() == RAW_API_KEY_LEN {
            ApiKey(STANDARD.encode(key.as_bytes()))
        } else {
            ApiKey(key)
        }
    }

    /// The header value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// How the device's TLS certificate is checked.
///
/// The device serves a self-signed certificate, so verifying it against the
/// system roots fails. The override only applies to the client built from the
/// [`DeviceConfig`] carrying it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsPolicy {
    /// Accept the device's self-signed certificate.
    #[default]
    AcceptDeviceCertificate,
    /// Verify the certificate against the system roots.
    Verify,
}

/// Where and how to reach one device.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Access token.
    pub api_key: ApiKey,
    /// Device address, normally an IPv4 address on the local network.
    pub ip_address: String,
    /// Certificate handling.
    pub tls: TlsPolicy,
    /// Per-request timeout; `None` waits forever.
    pub timeout: Option<Duration>,
}

impl DeviceConfig {
    /// Settings with the default TLS policy and timeout.
    pub fn new(api_key: impl Into<String>, ip_address: impl Into<String>) -> Self {
        DeviceConfig {
            api_key: ApiKey::new(api_key),
            ip_address: ip_address.into(),
            tls: TlsPolicy::default(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Replace the TLS policy.
    pub fn with_tls(mut self, tls: TlsPolicy) -> Self {
        self.tls = tls;
        self
    }

    /// Replace the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// `https://<ip>:4343/api/v1/dev/device/notifications`.
    pub fn notifications_url(&self) -> Result<Url> {
        let invalid = |reason: String| ClientError::InvalidHostUrl {
            host: self.ip_address.clone(),
            reason,
        };

        let url = Url::parse(&format!(
            "https://{}:{}{}",
            self.ip_address, DEVICE_PORT, NOTIFICATIONS_PATH
        ))
        .map_err(|e| invalid(e.to_string()))?;

        // An address smuggling in a port, path or query would move the request
        if url.port() != Some(DEVICE_PORT)
            || url.path() != NOTIFICATIONS_PATH
            || url.query().is_some()
            || url.fragment().is_some()
            || !url.username().is_empty()
        {
            return Err(invalid("not a plain host address".to_string()));
        }

        Ok(url)
    }
}
