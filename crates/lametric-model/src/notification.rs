//! The notification envelope.
//!
//! Wire layout (absent optionals are omitted):
//!
//! ```text
//! {
//!   "priority": "info",
//!   "iconType": "none",
//!   "lifetime": 120000,
//!   "model": {
//!     "frames": [ ... ],
//!     "sound": {"id": "cat", "repeat": 1, "category": "notifications"},
//!     "cycles": 1
//!   }
//! }
//! ```

use serde::Serialize;

use crate::compose::{compose, Composer};
use crate::error::{ModelError, Result};
use crate::frame::{Frame, WireFrame};
use crate::sound::Sound;
use crate::types::{IconType, Priority};

/// Frames plus delivery metadata, pushed to the device in one request.
///
/// No field is validated here; the device rejects values it does not accept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    /// Frames in display order.
    pub frames: Vec<Frame>,
    /// Sound to play on arrival.
    pub sound: Option<Sound>,
    /// Times the frame sequence is shown; 0 keeps it until dismissed.
    /// Unset means once.
    pub cycles: Option<u32>,
    /// Delivery priority.
    pub priority: Option<Priority>,
    /// Indicator shown before the frames.
    pub icon_type: Option<IconType>,
    /// Milliseconds the notification stays queued on the device.
    pub lifetime: Option<u64>,
}

impl Notification {
    /// A notification with an explicit frame list.
    pub fn new(frames: Vec<Frame>) -> Self {
        Notification {
            frames,
            ..Default::default()
        }
    }

    /// A notification whose frames come from a composition block.
    pub fn composed<F>(block: F) -> Result<Self>
    where
        F: FnOnce(&mut Composer) -> Result<()>,
    {
        Ok(Self::new(compose(block)?))
    }

    /// Set the sound.
    pub fn with_sound(mut self, sound: Sound) -> Self {
        self.sound = Some(sound);
        self
    }

    /// Set the number of cycles.
    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.cycles = Some(cycles);
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the indicator icon type.
    pub fn with_icon_type(mut self, icon_type: IconType) -> Self {
        self.icon_type = Some(icon_type);
        self
    }

    /// Set the lifetime in milliseconds.
    pub fn with_lifetime(mut self, lifetime: u64) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// Encode to a JSON value.
    pub fn encode(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self.wire()?).map_err(|e| ModelError::Serialize(e.to_string()))
    }

    /// Encode to the HTTP request body.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.wire()?).map_err(|e| ModelError::Serialize(e.to_string()))
    }

    fn wire(&self) -> Result<WireNotification<'_>> {
        let frames = self
            .frames
            .iter()
            .map(Frame::encode)
            .collect::<Result<Vec<_>>>()?;

        Ok(WireNotification {
            priority: self.priority,
            icon_type: self.icon_type,
            lifetime: self.lifetime,
            model: WireModel {
                frames,
                sound: self.sound,
                cycles: self.cycles,
            },
        })
    }
}

#[derive(Serialize)]
struct WireNotification<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(rename = "iconType", skip_serializing_if = "Option::is_none")]
    icon_type: Option<IconType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lifetime: Option<u64>,
    model: WireModel<'a>,
}

#[derive(Serialize)]
struct WireModel<'a> {
    frames: Vec<WireFrame<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sound: Option<Sound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cycles: Option<u32>,
}
