//! Notification frames and their wire encoding.
//!
//! Each variant has its own JSON layout and never carries fields of another:
//!
//! ```text
//! Simple  {"icon": "i42", "text": "hello"}
//! Goal    {"icon": "i42", "goalData": {"start": 0, "current": 5, "end": 10, "unit": "km"}}
//! Chart   {"chartData": [1, 4, 2]}
//! ```

use serde::Serialize;

use crate::error::Result;
use crate::icon::Icon;

/// One screen of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Icon with an optional line of text.
    Simple {
        /// Icon on the left.
        icon: Icon,
        /// Text; `None` is sent as `null`.
        text: Option<String>,
    },
    /// Progress towards a goal.
    Goal {
        /// Icon on the left.
        icon: Icon,
        /// Start of the range.
        start: i64,
        /// Current value.
        current: i64,
        /// End of the range.
        end: i64,
        /// Unit label, e.g. `"km"`.
        unit: String,
    },
    /// A small bar chart.
    Chart {
        /// Bar heights, left to right.
        points: Vec<i64>,
    },
}

impl Frame {
    /// A simple frame with the default icon.
    pub fn text(text: impl Into<String>) -> Self {
        Frame::Simple {
            icon: Icon::default(),
            text: Some(text.into()),
        }
    }

    /// A simple frame.
    pub fn simple(icon: Icon, text: Option<String>) -> Self {
        Frame::Simple { icon, text }
    }

    /// A goal frame.
    pub fn goal(icon: Icon, start: i64, current: i64, end: i64, unit: impl Into<String>) -> Self {
        Frame::Goal {
            icon,
            start,
            current,
            end,
            unit: unit.into(),
        }
    }

    /// A chart frame.
    pub fn chart(points: impl Into<Vec<i64>>) -> Self {
        Frame::Chart {
            points: points.into(),
        }
    }

    /// Encode to the wire layout for this variant.
    pub(crate) fn encode(&self) -> Result<WireFrame<'_>> {
        Ok(match self {
            Frame::Simple { icon, text } => WireFrame::Simple {
                icon: icon.encode()?,
                text: text.as_deref(),
            },
            Frame::Goal {
                icon,
                start,
                current,
                end,
                unit,
            } => WireFrame::Goal {
                icon: icon.encode()?,
                goal_data: WireGoal {
                    start: *start,
                    current: *current,
                    end: *end,
                    unit,
                },
            },
            Frame::Chart { points } => WireFrame::Chart { chart_data: points },
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum WireFrame<'a> {
    Simple {
        icon: String,
        text: Option<&'a str>,
    },
    Goal {
        icon: String,
        #[serde(rename = "goalData")]
        goal_data: WireGoal<'a>,
    },
    Chart {
        #[serde(rename = "chartData")]
        chart_data: &'a [i64],
    },
}

#[derive(Debug, Serialize)]
pub(crate) struct WireGoal<'a> {
    start: i64,
    current: i64,
    end: i64,
    unit: &'a str,
}
