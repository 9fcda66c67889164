//! YAML notification documents.
//!
//! ```yaml
//! priority: warning
//! icon_type: info
//! lifetime: 60000
//! cycles: 2
//! sound: { notice: positive1, repeat: 1 }
//! frames:
//!   - simple: { icon: i2867, text: Backup finished }
//!   - goal: { icon: a120, start: 0, current: 42, end: 100, unit: "%" }
//!   - chart: { points: [1, 4, 2, 8] }
//!   - simple: { icon_file: disk.png, text: "!" }
//!     repeat: 3
//! ```
//!
//! `icon_file` paths are relative to the document.

use std::fs;
use std::path::{Path, PathBuf};

use lametric_model::{Composer, Frame, Icon, IconType, Notification, Priority, Sound};
use serde::Deserialize;

use crate::error::{CliError, CliResult};

/// Top level of a notification document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationDoc {
    /// Frames in display order.
    pub frames: Vec<FrameEntry>,
    /// Sound to play.
    pub sound: Option<SoundDoc>,
    /// Number of cycles.
    pub cycles: Option<u32>,
    /// `info`, `warning` or `critical`.
    pub priority: Option<String>,
    /// `none`, `info` or `alert`.
    pub icon_type: Option<String>,
    /// Lifetime in milliseconds.
    pub lifetime: Option<u64>,
}

/// One frame, optionally shown several times in a row.
///
/// An entry names exactly one of `simple`, `goal` or `chart`.
#[derive(Debug, Deserialize)]
#[serde(try_from = "RawFrameEntry")]
pub struct FrameEntry {
    /// The frame itself.
    pub frame: FrameDoc,
    /// Show the frame this many times.
    pub repeat: Option<usize>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFrameEntry {
    simple: Option<SimpleDoc>,
    goal: Option<GoalDoc>,
    chart: Option<ChartDoc>,
    repeat: Option<usize>,
}

impl TryFrom<RawFrameEntry> for FrameEntry {
    type Error = String;

    fn try_from(raw: RawFrameEntry) -> Result<Self, Self::Error> {
        let frame = match (raw.simple, raw.goal, raw.chart) {
            (Some(simple), None, None) => FrameDoc::Simple(simple),
            (None, Some(goal), None) => FrameDoc::Goal(goal),
            (None, None, Some(chart)) => FrameDoc::Chart(chart),
            (None, None, None) => {
                return Err("frame entry needs one of `simple`, `goal` or `chart`".to_string())
            }
            _ => {
                return Err(
                    "frame entry takes only one of `simple`, `goal` or `chart`".to_string(),
                )
            }
        };
        Ok(FrameEntry {
            frame,
            repeat: raw.repeat,
        })
    }
}

/// A frame as written in a document.
#[derive(Debug)]
pub enum FrameDoc {
    /// Icon and text.
    Simple(SimpleDoc),
    /// Goal progress.
    Goal(GoalDoc),
    /// Chart.
    Chart(ChartDoc),
}

/// `simple:` frame fields.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimpleDoc {
    pub icon: Option<String>,
    pub icon_file: Option<PathBuf>,
    pub text: Option<String>,
}

/// `goal:` frame fields.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoalDoc {
    pub icon: Option<String>,
    pub icon_file: Option<PathBuf>,
    pub start: i64,
    pub current: i64,
    pub end: i64,
    pub unit: String,
}

/// `chart:` frame fields.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartDoc {
    pub points: Vec<i64>,
}

/// Sound as written in a document: exactly one of `alarm` or `notice`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoundDoc {
    /// Alarm catalog id.
    pub alarm: Option<String>,
    /// Notification catalog id.
    pub notice: Option<String>,
    /// Times to play; 0 loops.
    pub repeat: Option<u32>,
}

impl SoundDoc {
    fn into_sound(self) -> CliResult<Sound> {
        match (self.alarm, self.notice) {
            (Some(id), None) => parse_sound(&id, true, self.repeat),
            (None, Some(id)) => parse_sound(&id, false, self.repeat),
            _ => Err(CliError::Document(
                "sound needs exactly one of `alarm` or `notice`".to_string(),
            )),
        }
    }
}

/// Look up `id` in the alarm or notification catalog.
pub fn parse_sound(id: &str, alarm: bool, repeat: Option<u32>) -> CliResult<Sound> {
    let sound = if alarm {
        Sound::alarm(id.parse()?)
    } else {
        Sound::notice(id.parse()?)
    };
    Ok(match repeat {
        Some(repeat) => sound.with_repeat(repeat),
        None => sound,
    })
}

fn resolve_icon(
    icon: Option<String>,
    icon_file: Option<PathBuf>,
    base_dir: &Path,
) -> CliResult<Icon> {
    match (icon, icon_file) {
        (Some(_), Some(_)) => Err(CliError::Document(
            "a frame takes `icon` or `icon_file`, not both".to_string(),
        )),
        (Some(icon), None) => Ok(icon.parse()?),
        (None, Some(file)) => {
            let path = base_dir.join(file);
            let bytes = fs::read(&path).map_err(|source| CliError::Io { path, source })?;
            Ok(Icon::image(bytes))
        }
        (None, None) => Ok(Icon::default()),
    }
}

impl FrameDoc {
    fn into_frame(self, base_dir: &Path) -> CliResult<Frame> {
        Ok(match self {
            FrameDoc::Simple(simple) => Frame::simple(
                resolve_icon(simple.icon, simple.icon_file, base_dir)?,
                simple.text,
            ),
            FrameDoc::Goal(goal) => Frame::goal(
                resolve_icon(goal.icon, goal.icon_file, base_dir)?,
                goal.start,
                goal.current,
                goal.end,
                goal.unit,
            ),
            FrameDoc::Chart(chart) => Frame::chart(chart.points),
        })
    }
}

impl NotificationDoc {
    /// Parse a document from YAML text.
    pub fn from_yaml(text: &str) -> CliResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Build the notification; `icon_file`s are read relative to `base_dir`.
    pub fn into_notification(self, base_dir: &Path) -> CliResult<Notification> {
        let mut composer = Composer::new();
        for entry in self.frames {
            let frame = entry.frame.into_frame(base_dir)?;
            match entry.repeat {
                Some(count) => {
                    composer.repeat(frame, count)?;
                }
                None => {
                    composer.frame(frame);
                }
            }
        }

        let mut notification = Notification::new(composer.finish());
        notification.sound = self.sound.map(SoundDoc::into_sound).transpose()?;
        notification.cycles = self.cycles;
        notification.priority = self
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?;
        notification.icon_type = self
            .icon_type
            .as_deref()
            .map(str::parse::<IconType>)
            .transpose()?;
        notification.lifetime = self.lifetime;
        Ok(notification)
    }
}

/// Read and build the notification stored at `path`.
pub fn load_document(path: &Path) -> CliResult<Notification> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    NotificationDoc::from_yaml(&text)?.into_notification(base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lametric_model::NoticeSound;
    use serde_json::json;

    fn build(text: &str) -> CliResult<Notification> {
        NotificationDoc::from_yaml(text)?.into_notification(Path::new("."))
    }

    #[test]
    fn test_full_document() {
        let notification = build(
            r#"
priority: warning
icon_type: info
lifetime: 60000
cycles: 2
sound: { notice: positive1 }
frames:
  - simple: { icon: i2867, text: Backup finished }
  - goal: { icon: a120, start: 0, current: 42, end: 100, unit: "%" }
  - chart: { points: [1, 4, 2, 8] }
    repeat: 2
"#,
        )
        .unwrap();

        assert_eq!(notification.priority, Some(Priority::Warning));
        assert_eq!(notification.icon_type, Some(IconType::Info));
        assert_eq!(
            notification.sound,
            Some(Sound::notice(NoticeSound::Positive1))
        );
        assert_eq!(
            notification.encode().unwrap()["model"]["frames"],
            json!([
                {"icon": "i2867", "text": "Backup finished"},
                {"icon": "a120", "goalData": {"start": 0, "current": 42, "end": 100, "unit": "%"}},
                {"chartData": [1, 4, 2, 8]},
                {"chartData": [1, 4, 2, 8]}
            ])
        );
    }

    #[test]
    fn test_defaults() {
        let notification = build("frames:\n  - simple: { text: hi }\n").unwrap();
        assert_eq!(notification, Notification::new(vec![Frame::text("hi")]));
    }

    #[test]
    fn test_inconsistent_documents() {
        let both_icons = "frames:\n  - simple: { icon: i1, icon_file: x.png }\n";
        assert!(matches!(build(both_icons), Err(CliError::Document(_))));

        let both_sounds = "sound: { alarm: alarm1, notice: cat }\nframes: []\n";
        assert!(matches!(build(both_sounds), Err(CliError::Document(_))));

        let bad_sound = "sound: { alarm: cat }\nframes: []\n";
        assert!(matches!(build(bad_sound), Err(CliError::Model(_))));

        let bad_priority = "priority: urgent\nframes: []\n";
        assert!(matches!(build(bad_priority), Err(CliError::Model(_))));

        let unknown_key = "frames: []\ncolour: red\n";
        assert!(matches!(build(unknown_key), Err(CliError::Yaml(_))));
    }

    #[test]
    fn test_frame_entries_are_strict() {
        let two_frames = "frames:\n  - simple: { text: a }\n    chart: { points: [1] }\n";
        assert!(matches!(build(two_frames), Err(CliError::Yaml(_))));

        let misspelled_repeat = "frames:\n  - simple: { text: a }\n    repaet: 3\n";
        assert!(matches!(build(misspelled_repeat), Err(CliError::Yaml(_))));

        let misspelled_field = "frames:\n  - simple: { txt: a }\n";
        assert!(matches!(build(misspelled_field), Err(CliError::Yaml(_))));

        let misspelled_goal = "frames:\n  - goal: { start: 0, current: 1, end: 2, unit: x, icn: i1 }\n";
        assert!(matches!(build(misspelled_goal), Err(CliError::Yaml(_))));

        let no_frame = "frames:\n  - repeat: 2\n";
        assert!(matches!(build(no_frame), Err(CliError::Yaml(_))));
    }

    #[test]
    fn test_missing_icon_file() {
        let result = build("frames:\n  - simple: { icon_file: does-not-exist.png }\n");
        assert!(matches!(result, Err(CliError::Io { .. })));
    }

    #[test]
    fn test_parse_sound() {
        assert_eq!(
            parse_sound("alarm5", true, Some(0)).unwrap().category(),
            "alarms"
        );
        assert_eq!(parse_sound("cat", false, None).unwrap().repeat(), 1);
        assert!(parse_sound("cat", true, None).is_err());
    }
}
