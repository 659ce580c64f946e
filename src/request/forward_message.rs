use crate::api::TelegramApi;
use crate::client::Response;
use crate::error::Result;
use crate::request::{require, ChatId, Request};
use crate::types::Message;

/// Request for forwarding a message of any kind.
///
/// On success, the sent [`Message`] is returned.
#[derive(Debug)]
pub struct ForwardMessage {
    api: TelegramApi,
    chat: Option<ChatId>,
    from_chat: Option<ChatId>,
    message: Option<i64>,
}

impl ForwardMessage {
    pub(crate) fn new(api: TelegramApi) -> Self {
        ForwardMessage {
            api,
            chat: None,
            from_chat: None,
            message: None,
        }
    }

    /// Required. Target chat id or `@channelusername`
    pub fn chat<C: Into<ChatId>>(mut self, chat: C) -> Self {
        self.chat = Some(chat.into());
        self
    }

    /// Required. Chat where the original message was sent
    pub fn from_chat<C: Into<ChatId>>(mut self, from_chat: C) -> Self {
        self.from_chat = Some(from_chat.into());
        self
    }

    /// Required. Identifier of the message in `from_chat`
    pub fn message(mut self, message_id: i64) -> Self {
        self.message = Some(message_id);
        self
    }
}

impl Request for ForwardMessage {
    type Output = Message;

    fn send(&self) -> Result<Option<Response<Message>>> {
        let chat = require(&self.chat, "chat")?;
        let from_chat = require(&self.from_chat, "fromChat")?;
        let message = require(&self.message, "message")?;

        self.api.forward_message(chat, from_chat, *message)
    }
}
