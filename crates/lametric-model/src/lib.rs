//! LaMetric notification model
//!
//! This crate describes the payload pushed to a LaMetric device's
//! notification endpoint and the reply it sends back. It does no I/O; the
//! `lametric-client` crate carries the bytes.
//!
//! # Overview
//!
//! - [`Frame`]: one screen of a notification (text, goal or chart)
//! - [`Icon`], [`Sound`], [`Priority`], [`IconType`]: frame and delivery details
//! - [`Composer`] / [`compose`]: build frame lists with optional, either/or and
//!   repeated pieces
//! - [`Notification`]: the envelope, encoded with [`Notification::to_json`]
//! - [`PushResponse`]: decoded reply
//!
//! # Example
//!
//! ```
//! use lametric_model::{Frame, Icon, Notification, NoticeSound, Priority, Sound};
//!
//! let build_failed = true;
//! let notification = Notification::composed(|c| {
//!     c.frame(Frame::simple(Icon::new(2867), Some("CI".to_string())))
//!         .when(build_failed, || Frame::text("main is red"));
//!     Ok(())
//! })?
//! .with_priority(Priority::Warning)
//! .with_sound(Sound::notice(NoticeSound::Negative1));
//!
//! let body = notification.to_json()?;
//! assert!(body.starts_with(br#"{"priority":"warning""#));
//! # Ok::<(), lametric_model::ModelError>(())
//! ```

mod compose;
mod error;
mod frame;
mod icon;
mod notification;
mod response;
mod sound;
mod types;

pub use compose::*;
pub use error::*;
pub use frame::Frame;
pub use icon::*;
pub use notification::*;
pub use response::*;
pub use sound::*;
pub use types::*;
