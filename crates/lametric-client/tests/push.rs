//! Push tests against in-memory transports.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lametric_client::{ApiKey, Client, ClientError, DeviceConfig, Result, Transport};
use lametric_model::{Frame, Icon, ModelError, Notification, PushResult};
use reqwest::Url;

/// A request as seen by the transport.
#[derive(Debug, Clone)]
struct Recorded {
    url: String,
    token: String,
    body: serde_json::Value,
}

/// Replies with a canned body and records every request.
#[derive(Default)]
struct CannedTransport {
    reply: &'static str,
    requests: Mutex<Vec<Recorded>>,
}

impl CannedTransport {
    fn replying(reply: &'static str) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for &CannedTransport {
    async fn post(&self, url: &Url, api_key: &ApiKey, body: Vec<u8>) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(Recorded {
            url: url.to_string(),
            token: api_key.as_str().to_string(),
            body: serde_json::from_slice(&body).unwrap(),
        });
        Ok(self.reply.as_bytes().to_vec())
    }
}

/// Fails every request.
struct RefusingTransport {
    calls: AtomicUsize,
}

impl Transport for &RefusingTransport {
    async fn post(&self, _url: &Url, _api_key: &ApiKey, _body: Vec<u8>) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ClientError::Transport(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))))
    }
}

/// Never answers; records when the pending request is dropped.
struct HangingTransport {
    dropped: Arc<AtomicBool>,
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl Transport for HangingTransport {
    async fn post(&self, _url: &Url, _api_key: &ApiKey, _body: Vec<u8>) -> Result<Vec<u8>> {
        let _flag = DropFlag(self.dropped.clone());
        std::future::pending::<()>().await;
        unreachable!()
    }
}

fn config() -> DeviceConfig {
    DeviceConfig::new("k".repeat(64), "192.168.1.20")
}

#[tokio::test]
async fn test_push_success() {
    let transport = CannedTransport::replying(r#"{"success":{"id":"12"}}"#);
    let client = Client::with_transport(config(), &transport).unwrap();

    let notification = Notification::new(vec![Frame::simple(
        Icon::new(2867),
        Some("hello".to_string()),
    )])
    .with_cycles(1);
    let response = client.push(&notification).await.unwrap();

    assert_eq!(response.result, PushResult::Success { id: "12".into() });

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url,
        "https://192.168.1.20:4343/api/v1/dev/device/notifications"
    );
    assert_eq!(requests[0].token, ApiKey::new("k".repeat(64)).as_str());
    assert_ne!(requests[0].token, "k".repeat(64));
    assert_eq!(
        requests[0].body,
        serde_json::json!({
            "model": {"frames": [{"icon": "i2867", "text": "hello"}], "cycles": 1}
        })
    );
}

#[tokio::test]
async fn test_device_rejection_is_a_response() {
    let transport = CannedTransport::replying(r#"{"errors":[{"message":"Invalid frame"}]}"#);
    let client = Client::with_transport(config(), &transport).unwrap();

    let response = client
        .push(&Notification::new(vec![Frame::text("x")]))
        .await
        .unwrap();

    assert_eq!(
        response.into_result(),
        Err(ModelError::DeviceRejected {
            messages: vec!["Invalid frame".into()]
        })
    );
}

#[tokio::test]
async fn test_malformed_reply() {
    let transport = CannedTransport::replying("{}");
    let client = Client::with_transport(config(), &transport).unwrap();

    let result = client.push(&Notification::new(vec![Frame::text("x")])).await;
    assert!(matches!(
        result,
        Err(ClientError::Model(ModelError::Decode(_)))
    ));
}

#[tokio::test]
async fn test_bad_icon_fails_before_sending() {
    let transport = CannedTransport::replying(r#"{"success":{"id":"1"}}"#);
    let client = Client::with_transport(config(), &transport).unwrap();

    let notification = Notification::new(vec![Frame::simple(
        Icon::image(b"definitely not a png".to_vec()),
        None,
    )]);
    let result = client.push(&notification).await;

    assert!(matches!(
        result,
        Err(ClientError::Model(ModelError::ImageEncodingFailed(_)))
    ));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_transport_failure_surfaces_once() {
    let transport = RefusingTransport {
        calls: AtomicUsize::new(0),
    };
    let client = Client::with_transport(config(), &transport).unwrap();

    let result = client.push(&Notification::new(vec![Frame::text("x")])).await;

    assert!(matches!(result, Err(ClientError::Transport(_))));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_dropping_push_cancels_request() {
    let dropped = Arc::new(AtomicBool::new(false));
    let transport = HangingTransport {
        dropped: dropped.clone(),
    };
    let client = Client::with_transport(config(), transport).unwrap();

    let notification = Notification::new(vec![Frame::text("x")]);
    let outcome = tokio::time::timeout(Duration::from_millis(20), client.push(&notification)).await;

    assert!(outcome.is_err());
    assert!(dropped.load(Ordering::SeqCst));
}

#[test]
fn test_invalid_host_is_rejected_up_front() {
    let transport = CannedTransport::replying("{}");
    let result = Client::with_transport(DeviceConfig::new("k", "not a host"), &transport);
    assert!(matches!(result, Err(ClientError::InvalidHostUrl { .. })));
}

#[test]
fn test_http_client_builds_for_both_policies() {
    use lametric_client::TlsPolicy;

    assert!(Client::new(config()).is_ok());
    assert!(Client::new(config().with_tls(TlsPolicy::Verify).with_timeout(None)).is_ok());
}
