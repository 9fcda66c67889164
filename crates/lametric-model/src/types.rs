//! Delivery metadata enumerations.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ModelError;

/// How urgently the device should present a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Regular notification.
    Info,
    /// Shown ahead of info notifications.
    Warning,
    /// Interrupts everything else, even in screensaver mode.
    Critical,
}

impl Priority {
    /// Wire name of the priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Info => "info",
            Priority::Warning => "warning",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Priority::Info),
            "warning" => Ok(Priority::Warning),
            "critical" => Ok(Priority::Critical),
            _ => Err(ModelError::UnknownPriority(s.to_string())),
        }
    }
}

/// Indicator icon shown before the notification frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    /// No indicator.
    None,
    /// "i" indicator.
    Info,
    /// "!" indicator.
    Alert,
}

impl IconType {
    /// Wire name of the icon type.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconType::None => "none",
            IconType::Info => "info",
            IconType::Alert => "alert",
        }
    }
}

impl fmt::Display for IconType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(IconType::None),
            "info" => Ok(IconType::Info),
            "alert" => Ok(IconType::Alert),
            _ => Err(ModelError::UnknownIconType(s.to_string())),
        }
    }
}
