//! Notification message and its multipart encoding
//!
//! Optional fields are only sent when set. In particular
//! `notificationDisabled` is sent as `"true"` or not at all; the service
//! treats its absence as "push as usual".

use reqwest::multipart::Form;

use crate::constants::MAX_MESSAGE_CHARS;
use crate::error::{Error, Result};

/// A message to send through `NotifyClient::notify`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    /// Thumbnail URL, JPEG up to 240x240px
    pub image_thumbnail: Option<String>,
    /// Full-size image URL, JPEG up to 2048x2048px
    pub image_fullsize: Option<String>,
    pub sticker_package_id: Option<u32>,
    pub sticker_id: Option<u32>,
    /// When true the recipient gets no push notification for this message.
    pub notification_disabled: bool,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn image(mut self, thumbnail: impl Into<String>, fullsize: impl Into<String>) -> Self {
        self.image_thumbnail = Some(thumbnail.into());
        self.image_fullsize = Some(fullsize.into());
        self
    }

    pub fn sticker(mut self, package_id: u32, sticker_id: u32) -> Self {
        self.sticker_package_id = Some(package_id);
        self.sticker_id = Some(sticker_id);
        self
    }

    pub fn silent(mut self, disabled: bool) -> Self {
        self.notification_disabled = disabled;
        self
    }

    /// Form fields in send order. Unset, empty and zero values are skipped.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("message", self.message.clone())];

        let urls = [
            ("imageThumbnail", &self.image_thumbnail),
            ("imageFullsize", &self.image_fullsize),
        ];
        for (name, value) in urls {
            if let Some(url) = value.as_deref().filter(|u| !u.is_empty()) {
                fields.push((name, url.to_owned()));
            }
        }

        let stickers = [
            ("stickerPackageId", self.sticker_package_id),
            ("stickerId", self.sticker_id),
        ];
        for (name, value) in stickers {
            if let Some(id) = value.filter(|id| *id != 0) {
                fields.push((name, id.to_string()));
            }
        }

        if self.notification_disabled {
            fields.push(("notificationDisabled", "true".to_owned()));
        }
        fields
    }

    pub(crate) fn to_form(&self) -> Form {
        self.fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value))
    }
}

/// Check notify preconditions. Runs before any request is built.
pub(crate) fn validate(token: &str, notification: &Notification) -> Result<()> {
    if token.is_empty() {
        return Err(Error::InvalidInput(
            "Token is required for sending notification",
        ));
    }
    if notification.message.is_empty() {
        return Err(Error::InvalidInput(
            "Message is required for sending notification",
        ));
    }
    if notification.message.encode_utf16().count() > MAX_MESSAGE_CHARS {
        return Err(Error::InvalidInput(
            "Message maximum allowed length is 1000 characters",
        ));
    }
    Ok(())
}
