/*!
 * Telegram-api-rs - typed request builders for the Telegram Bot API
 *
 * Every remote operation has a builder that collects parameters, checks the
 * required ones and decodes the response envelope into typed data objects.
 * Calls are blocking; each `execute` issues exactly one HTTP request.
 */

pub mod api;
pub mod client;
pub mod configuration;
pub mod error;
pub mod formatter;
pub mod request;
pub mod types;

use std::sync::Arc;

use log::debug;

use crate::api::TelegramApi;
use crate::client::{HttpTransport, Transport};
use crate::configuration::Configuration;
use crate::request::{
    ForwardMessage, GetMe, GetUpdates, SendChatAction, SendLocation, SendMessage, SendSticker,
    SetWebhook,
};

/// The main entry point: a factory of request builders bound to one bot.
///
/// Builders share the underlying transport but no other state, so a service can
/// be cloned and used from several threads. A single builder must not be.
#[derive(Debug, Clone)]
pub struct TelegramService {
    api: TelegramApi,
}

impl TelegramService {
    /// Prefix the bot token is appended to
    pub const BASE_URL: &'static str = configuration::DEFAULT_BASE_URL;

    /// Create a service for a bot token with the default configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use telegram_api_rs::request::{Reply, Request};
    /// use telegram_api_rs::types::ReplyKeyboardMarkup;
    /// use telegram_api_rs::TelegramService;
    ///
    /// let service = TelegramService::new("YOUR_BOT_TOKEN")?;
    ///
    /// let me = service.get_me().execute()?;
    /// println!("Running as @{}", me.username.unwrap_or_default());
    ///
    /// let keyboard = ReplyKeyboardMarkup::new(vec![vec!["Yes", "No"]]).auto_hide(true);
    /// let sent = service
    ///     .send_message()
    ///     .chat(123456789_i64)
    ///     .text("Continue?")
    ///     .reply_keyboard_markup(keyboard)?
    ///     .execute()?;
    /// println!("Sent message {}", sent.id);
    /// # Ok::<(), telegram_api_rs::Error>(())
    /// ```
    pub fn new<S: AsRef<str>>(token: S) -> Result<Self, Error> {
        Self::with_configuration(token, &Configuration::default())
    }

    /// Create a service for a bot token with custom transport settings
    pub fn with_configuration<S: AsRef<str>>(
        token: S,
        config: &Configuration,
    ) -> Result<Self, Error> {
        debug!("Creating Telegram service for {}", config.base_url());
        let transport = HttpTransport::new(token.as_ref(), config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a service on top of any transport, e.g. a test double
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        TelegramService {
            api: TelegramApi::new(transport),
        }
    }

    /// The endpoint table builders dispatch through
    pub fn api(&self) -> &TelegramApi {
        &self.api
    }

    /// Test the bot's auth token. Returns basic information about the bot.
    pub fn get_me(&self) -> GetMe {
        GetMe::new(self.api.clone())
    }

    /// Send a text message
    pub fn send_message(&self) -> SendMessage {
        SendMessage::new(self.api.clone())
    }

    /// Forward a message of any kind
    pub fn forward_message(&self) -> ForwardMessage {
        ForwardMessage::new(self.api.clone())
    }

    /// Send a .webp sticker
    pub fn send_sticker(&self) -> SendSticker {
        SendSticker::new(self.api.clone())
    }

    /// Send a point on the map
    pub fn send_location(&self) -> SendLocation {
        SendLocation::new(self.api.clone())
    }

    /// Tell the user that something is happening on the bot's side
    pub fn send_chat_action(&self) -> SendChatAction {
        SendChatAction::new(self.api.clone())
    }

    /// Receive incoming updates with a single (long) poll
    pub fn get_updates(&self) -> GetUpdates {
        GetUpdates::new(self.api.clone())
    }

    /// Register or remove an outgoing webhook
    pub fn set_webhook(&self) -> SetWebhook {
        SetWebhook::new(self.api.clone())
    }
}

// Re-export main components for easy access
pub use client::{ApiRequest, Method, Response};
pub use error::Error;
pub use formatter::Formatter;
pub use request::{Reply, Request};
