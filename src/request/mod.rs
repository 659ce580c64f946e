//! Request builders, one per remote operation.
//!
//! A builder is created by [`TelegramService`](crate::TelegramService), filled in
//! through chained setters and finished with [`Request::execute`]. Required values
//! are checked at `execute`, before anything is sent.

mod forward_message;
mod get_me;
mod get_updates;
mod params;
mod send_chat_action;
mod send_location;
mod send_message;
mod send_sticker;
mod set_webhook;

use serde::de::DeserializeOwned;

use crate::client::Response;
use crate::error::{Error, Result};
use crate::types::{ForceReply, ReplyKeyboardHide, ReplyKeyboardMarkup, ReplyMarkup};

pub use forward_message::ForwardMessage;
pub use get_me::GetMe;
pub use get_updates::GetUpdates;
pub use params::{ChatAction, ChatId, IntoCoordinate, ParseMode};
pub use send_chat_action::SendChatAction;
pub use send_location::SendLocation;
pub use send_message::SendMessage;
pub use send_sticker::SendSticker;
pub use set_webhook::SetWebhook;

/// Shared behaviour of every request builder
pub trait Request {
    /// Payload returned on success
    type Output: DeserializeOwned;

    /// Check required values and issue the call, returning the decoded envelope
    /// (`None` if the server sent none).
    fn send(&self) -> Result<Option<Response<Self::Output>>>;

    /// Issue the call and unwrap the payload of a successful envelope
    fn execute(&self) -> Result<Self::Output> {
        Response::into_result(self.send()?)
    }
}

/// Unwrap a required builder value
pub(crate) fn require<'a, T>(value: &'a Option<T>, field: &str) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| Error::required(field))
}

/// Reply settings shared by builders that send a message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyOptions {
    reply_to: Option<i64>,
    markup: Option<ReplyMarkup>,
}

impl ReplyOptions {
    /// ID of the message being replied to
    pub fn reply_to(&self) -> Option<i64> {
        self.reply_to
    }

    /// The active reply directive
    pub fn markup(&self) -> Option<&ReplyMarkup> {
        self.markup.as_ref()
    }

    fn set_reply_to(&mut self, message_id: i64) {
        self.reply_to = Some(message_id);
    }

    /// Activate a directive. Replacing a directive of the same kind is allowed,
    /// activating a second kind is not.
    fn set_markup(&mut self, markup: ReplyMarkup) -> Result<()> {
        if let Some(current) = &self.markup {
            if std::mem::discriminant(current) != std::mem::discriminant(&markup) {
                return Err(Error::invalid_argument(format!(
                    "{} is already set, cannot also set {}",
                    current.name(),
                    markup.name()
                )));
            }
        }
        self.markup = Some(markup);
        Ok(())
    }
}

/// Setters for builders that send a message which can be a reply
/// and can carry a reply directive
pub trait Reply: Sized {
    fn reply_options(&self) -> &ReplyOptions;

    fn reply_options_mut(&mut self) -> &mut ReplyOptions;

    /// Optional. If the message is a reply, ID of the original message
    fn reply_to(mut self, message_id: i64) -> Self {
        self.reply_options_mut().set_reply_to(message_id);
        self
    }

    /// Optional. Attach a reply directive.
    ///
    /// Fails if a directive of another kind is already set.
    fn reply_markup<M: Into<ReplyMarkup>>(mut self, markup: M) -> Result<Self> {
        self.reply_options_mut().set_markup(markup.into())?;
        Ok(self)
    }

    /// Optional. Show a custom reply keyboard
    fn reply_keyboard_markup(self, markup: ReplyKeyboardMarkup) -> Result<Self> {
        self.reply_markup(markup)
    }

    /// Optional. Hide the current custom keyboard
    fn reply_keyboard_hide(self, hide: ReplyKeyboardHide) -> Result<Self> {
        self.reply_markup(hide)
    }

    /// Optional. Force a reply from the user
    fn force_reply(self, force: ForceReply) -> Result<Self> {
        self.reply_markup(force)
    }
}
