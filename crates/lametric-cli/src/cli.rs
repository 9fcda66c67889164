//! Command line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use lametric_client::{DeviceConfig, TlsPolicy};
use lametric_model::{Frame, Icon, IconType, Notification, Priority};

use crate::document::parse_sound;
use crate::error::CliResult;

/// Push notifications to a LaMetric device.
#[derive(Debug, Parser)]
#[command(name = "lametric", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Push a notification described on the command line.
    Notify(NotifyArgs),
    /// Push a notification described in a YAML document.
    Send {
        #[command(flatten)]
        device: DeviceArgs,
        /// Notification document.
        file: PathBuf,
    },
    /// Print the JSON body for a YAML document without sending it.
    Render {
        /// Notification document.
        file: PathBuf,
    },
}

/// How to reach the device.
#[derive(Debug, Args)]
pub struct DeviceArgs {
    /// Device IP address.
    #[arg(long)]
    pub ip: String,

    /// Device API key (raw 64 characters or already base64 encoded).
    #[arg(long)]
    pub api_key: String,

    /// Verify the device certificate instead of accepting its self-signed one.
    #[arg(long)]
    pub verify_tls: bool,

    /// Request timeout in seconds; 0 disables it.
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}

impl DeviceArgs {
    /// Connection settings for the client.
    pub fn config(&self) -> DeviceConfig {
        let tls = if self.verify_tls {
            TlsPolicy::Verify
        } else {
            TlsPolicy::AcceptDeviceCertificate
        };
        let timeout = (self.timeout > 0).then(|| Duration::from_secs(self.timeout));
        DeviceConfig::new(self.api_key.clone(), self.ip.clone())
            .with_tls(tls)
            .with_timeout(timeout)
    }
}

/// A notification built from flags.
#[derive(Debug, Args)]
pub struct NotifyArgs {
    #[command(flatten)]
    pub device: DeviceArgs,

    /// Text frame; repeat the flag for several frames.
    #[arg(long = "text", required = true)]
    pub texts: Vec<String>,

    /// Icon for the text frames, e.g. `i2867` or `a120`.
    #[arg(long)]
    pub icon: Option<Icon>,

    /// Append a chart frame, e.g. `--chart 1,5,3`.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub chart: Option<Vec<i64>>,

    /// Sound id from the notification catalog (or alarm catalog with `--alarm`).
    #[arg(long)]
    pub sound: Option<String>,

    /// Look `--sound` up in the alarm catalog.
    #[arg(long, requires = "sound")]
    pub alarm: bool,

    /// Times to play the sound; 0 loops until dismissed.
    #[arg(long, requires = "sound")]
    pub repeat: Option<u32>,

    /// `info`, `warning` or `critical`.
    #[arg(long)]
    pub priority: Option<Priority>,

    /// `none`, `info` or `alert`.
    #[arg(long)]
    pub icon_type: Option<IconType>,

    /// Times to cycle through the frames; 0 keeps it until dismissed.
    #[arg(long)]
    pub cycles: Option<u32>,

    /// Lifetime in milliseconds.
    #[arg(long)]
    pub lifetime: Option<u64>,
}

impl NotifyArgs {
    /// Build the notification the flags describe.
    pub fn notification(&self) -> CliResult<Notification> {
        let icon = self.icon.clone().unwrap_or_default();

        let mut notification = Notification::composed(|c| {
            for text in &self.texts {
                c.frame(Frame::simple(icon.clone(), Some(text.clone())));
            }
            c.optional(self.chart.clone().map(Frame::chart));
            Ok(())
        })?;

        notification.sound = self
            .sound
            .as_deref()
            .map(|id| parse_sound(id, self.alarm, self.repeat))
            .transpose()?;
        notification.priority = self.priority;
        notification.icon_type = self.icon_type;
        notification.cycles = self.cycles;
        notification.lifetime = self.lifetime;
        Ok(notification)
    }
}
