//! # lametric-client
//!
//! Pushes [`Notification`](lametric_model::Notification)s to a LaMetric device
//! on the local network.
//!
//! The device listens on `https://<ip>:4343/api/v1/dev/device/notifications`,
//! authenticates with an `X-Access-Token` header and serves a self-signed
//! certificate. Trust of that certificate is an explicit [`TlsPolicy`] on the
//! [`DeviceConfig`], not process wide state.
//!
//! ## Example
//!
//! ```no_run
//! use lametric_client::{Client, DeviceConfig};
//! use lametric_model::{Frame, Notification, PushResult};
//!
//! # async fn run() -> lametric_client::Result<()> {
//! let client = Client::new(DeviceConfig::new("<64 char key>", "192.168.1.20"))?;
//! let response = client
//!     .push(&Notification::new(vec![Frame::text("Hello")]))
//!     .await?;
//!
//! if let PushResult::Failure { messages } = response.result {
//!     eprintln!("rejected: {:?}", messages);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod transport;

pub use client::Client;
pub use config::{ApiKey, DeviceConfig, TlsPolicy, DEFAULT_TIMEOUT, DEVICE_PORT, NOTIFICATIONS_PATH, RAW_API_KEY_LEN};
pub use error::{ClientError, Result};
pub use transport::{HttpTransport, Transport, ACCESS_TOKEN_HEADER};
