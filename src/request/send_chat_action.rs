use crate::api::TelegramApi;
use crate::client::Response;
use crate::error::Result;
use crate::request::{require, ChatAction, ChatId, Request};

/// Request for telling the user that something is happening on the bot's side.
///
/// The status is shown for 5 seconds or until the bot's next message arrives.
#[derive(Debug)]
pub struct SendChatAction {
    api: TelegramApi,
    chat: Option<ChatId>,
    action: Option<ChatAction>,
}

impl SendChatAction {
    pub(crate) fn new(api: TelegramApi) -> Self {
        SendChatAction {
            api,
            chat: None,
            action: None,
        }
    }

    /// Required. Target chat id or `@channelusername`
    pub fn chat<C: Into<ChatId>>(mut self, chat: C) -> Self {
        self.chat = Some(chat.into());
        self
    }

    /// Required. Type of action to broadcast
    pub fn action(mut self, action: ChatAction) -> Self {
        self.action = Some(action);
        self
    }
}

impl Request for SendChatAction {
    type Output = serde_json::Value;

    fn send(&self) -> Result<Option<Response<serde_json::Value>>> {
        let chat = require(&self.chat, "chat")?;
        let action = require(&self.action, "action")?;

        self.api.send_chat_action(chat, *action)
    }
}
