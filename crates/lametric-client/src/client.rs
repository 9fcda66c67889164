//! Push client.

use lametric_model::{Notification, PushResponse, PushResult};
use reqwest::Url;
use tracing::{debug, warn};

use crate::config::DeviceConfig;
use crate::transport::{HttpTransport, Transport};
use crate::Result;

/// Pushes notifications to one device.
///
/// Every [`push`](Client::push) is a single independent request; nothing is
/// queued, ordered or retried between calls.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    config: DeviceConfig,
    url: Url,
    transport: T,
}

impl Client<HttpTransport> {
    /// Client over HTTPS using the config's TLS policy and timeout.
    pub fn new(config: DeviceConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.tls, config.timeout)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> Client<T> {
    /// Client over a caller supplied transport.
    ///
    /// Fails with [`ClientError::InvalidHostUrl`](crate::ClientError::InvalidHostUrl)
    /// when the device address cannot form the endpoint URL.
    pub fn with_transport(config: DeviceConfig, transport: T) -> Result<Self> {
        let url = config.notifications_url()?;
        Ok(Self {
            config,
            url,
            transport,
        })
    }

    /// Device settings.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Endpoint the notifications go to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Send `notification` and decode the device reply.
    ///
    /// The payload is encoded before anything is sent, so icon encoding errors
    /// never reach the network. A device rejection is a successful call whose
    /// [`PushResponse::result`] is a failure.
    pub async fn push(&self, notification: &Notification) -> Result<PushResponse> {
        let body = notification.to_json()?;
        debug!(
            url = %self.url,
            frames = notification.frames.len(),
            len = body.len(),
            "pushing notification"
        );

        let reply = self
            .transport
            .post(&self.url, &self.config.api_key, body)
            .await?;
        let response = PushResponse::decode(&reply)?;

        match &response.result {
            PushResult::Success { id } => debug!(%id, "notification accepted"),
            PushResult::Failure { messages } => {
                warn!(?messages, "device rejected notification")
            }
        }

        Ok(response)
    }
}
