use crate::api::TelegramApi;
use crate::client::Response;
use crate::error::Result;
use crate::request::{require, ChatId, Reply, ReplyOptions, Request};
use crate::types::Message;

/// Request for sending a .webp sticker.
///
/// On success, the sent [`Message`] is returned.
#[derive(Debug)]
pub struct SendSticker {
    api: TelegramApi,
    chat: Option<ChatId>,
    sticker: Option<String>,
    reply: ReplyOptions,
}

impl SendSticker {
    pub(crate) fn new(api: TelegramApi) -> Self {
        SendSticker {
            api,
            chat: None,
            sticker: None,
            reply: ReplyOptions::default(),
        }
    }

    /// Required. Target chat id or `@channelusername`
    pub fn chat<C: Into<ChatId>>(mut self, chat: C) -> Self {
        self.chat = Some(chat.into());
        self
    }

    /// Required. `file_id` of a sticker already stored on the Telegram servers
    pub fn sticker<S: Into<String>>(mut self, sticker: S) -> Self {
        self.sticker = Some(sticker.into());
        self
    }
}

impl Reply for SendSticker {
    fn reply_options(&self) -> &ReplyOptions {
        &self.reply
    }

    fn reply_options_mut(&mut self) -> &mut ReplyOptions {
        &mut self.reply
    }
}

impl Request for SendSticker {
    type Output = Message;

    fn send(&self) -> Result<Option<Response<Message>>> {
        let chat = require(&self.chat, "chat")?;
        let sticker = require(&self.sticker, "sticker")?;

        self.api
            .send_sticker(chat, sticker, self.reply.reply_to(), self.reply.markup())
    }
}
