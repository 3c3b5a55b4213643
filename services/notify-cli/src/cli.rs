//! Command-line arguments

use clap::{Args, Parser, Subcommand};
use line_notify::Notification;

#[derive(Debug, Parser)]
#[command(name = "line-notify", version)]
#[command(about = "LINE Notify OAuth and messaging client", long_about = None)]
#[command(
    after_help = "Credentials fall back to LINE_NOTIFY_CLIENT_ID, LINE_NOTIFY_CLIENT_SECRET and\nLINE_NOTIFY_REDIRECT_URI when not set in the config file."
)]
pub struct Cli {
    /// Config file (defaults to $LINE_NOTIFY_CONFIG, then ./line-notify.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Print the consent URL (random STATE if omitted)
    AuthorizeUrl {
        #[arg(value_name = "STATE")]
        state: Option<String>,

        /// Ask the service to POST the code back instead of redirecting
        #[arg(long)]
        form_post: bool,
    },

    /// Exchange an authorization code for a token
    Exchange {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Show what TOKEN is bound to
    Status {
        #[arg(value_name = "TOKEN")]
        token: String,
    },

    /// Revoke TOKEN
    Revoke {
        #[arg(value_name = "TOKEN")]
        token: String,
    },

    /// Send a notification
    Send(SendArgs),
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct SendArgs {
    #[arg(value_name = "TOKEN")]
    pub token: String,

    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Thumbnail image (JPEG, max 240x240)
    #[arg(long, value_name = "URL")]
    pub thumbnail: Option<String>,

    /// Full-size image (JPEG, max 2048x2048)
    #[arg(long, value_name = "URL")]
    pub fullsize: Option<String>,

    /// Attach a sticker
    #[arg(long, num_args = 2, value_names = ["PACKAGE_ID", "STICKER_ID"])]
    pub sticker: Option<Vec<u32>>,

    /// Do not push a notification to the recipient
    #[arg(long)]
    pub silent: bool,
}

impl SendArgs {
    pub fn notification(&self) -> Notification {
        let mut notification = Notification::new(self.message.clone()).silent(self.silent);
        notification.image_thumbnail = self.thumbnail.clone();
        notification.image_fullsize = self.fullsize.clone();
        if let Some([package_id, sticker_id]) = self.sticker.as_deref() {
            notification = notification.sticker(*package_id, *sticker_id);
        }
        notification
    }
}
