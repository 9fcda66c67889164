//! `lametric` command line tool.
//!
//! ```text
//! lametric notify --ip 192.168.1.20 --api-key <key> --text "Deploy done" --icon i2867
//! lametric send --ip 192.168.1.20 --api-key <key> build.yaml
//! lametric render build.yaml
//! ```

pub mod cli;
pub mod document;
pub mod error;

use lametric_client::Client;
use lametric_model::Notification;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use cli::{Cli, Command, DeviceArgs, NotifyArgs};
pub use document::{load_document, NotificationDoc};
pub use error::{CliError, CliResult};

/// Install the log subscriber. `RUST_LOG` overrides `verbose`.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Execute one command.
pub async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Notify(args) => {
            let notification = args.notification()?;
            push(&args.device, &notification).await
        }
        Command::Send { device, file } => {
            let notification = load_document(&file)?;
            push(&device, &notification).await
        }
        Command::Render { file } => {
            let notification = load_document(&file)?;
            println!("{}", serde_json::to_string_pretty(&notification.encode()?)?);
            Ok(())
        }
    }
}

async fn push(device: &DeviceArgs, notification: &Notification) -> CliResult<()> {
    let client = Client::new(device.config())?;
    let id = client.push(notification).await?.into_result()?;
    info!(%id, "notification queued");
    println!("{}", id);
    Ok(())
}
