use crate::api::TelegramApi;
use crate::client::Response;
use crate::error::Result;
use crate::request::Request;

/// Request for registering an outgoing webhook.
///
/// Leaving the url unset or empty removes the webhook. While a webhook is set,
/// getUpdates fails.
#[derive(Debug)]
pub struct SetWebhook {
    api: TelegramApi,
    url: Option<String>,
}

impl SetWebhook {
    pub(crate) fn new(api: TelegramApi) -> Self {
        SetWebhook { api, url: None }
    }

    /// Optional. HTTPS url to send updates to
    pub fn url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl Request for SetWebhook {
    type Output = serde_json::Value;

    fn send(&self) -> Result<Option<Response<serde_json::Value>>> {
        self.api.set_webhook(self.url.as_deref())
    }
}
