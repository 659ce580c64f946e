use crate::api::TelegramApi;
use crate::client::Response;
use crate::error::Result;
use crate::request::{require, ChatId, ParseMode, Reply, ReplyOptions, Request};
use crate::types::Message;

/// Request for sending a text message.
///
/// On success, the sent [`Message`] is returned.
#[derive(Debug)]
pub struct SendMessage {
    api: TelegramApi,
    chat: Option<ChatId>,
    text: Option<String>,
    mode: Option<ParseMode>,
    disable_preview: bool,
    reply: ReplyOptions,
}

impl SendMessage {
    pub(crate) fn new(api: TelegramApi) -> Self {
        SendMessage {
            api,
            chat: None,
            text: None,
            mode: None,
            disable_preview: false,
            reply: ReplyOptions::default(),
        }
    }

    /// Required. Target chat id or `@channelusername`
    pub fn chat<C: Into<ChatId>>(mut self, chat: C) -> Self {
        self.chat = Some(chat.into());
        self
    }

    /// Required. Text of the message to be sent
    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Optional. How clients should render entities in the text
    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Optional. Disables link previews for links in this message
    pub fn disable_web_page_preview(mut self) -> Self {
        self.disable_preview = true;
        self
    }
}

impl Reply for SendMessage {
    fn reply_options(&self) -> &ReplyOptions {
        &self.reply
    }

    fn reply_options_mut(&mut self) -> &mut ReplyOptions {
        &mut self.reply
    }
}

impl Request for SendMessage {
    type Output = Message;

    fn send(&self) -> Result<Option<Response<Message>>> {
        let chat = require(&self.chat, "chat")?;
        let text = require(&self.text, "text")?;

        self.api.send_message(
            chat,
            text,
            self.mode,
            self.disable_preview,
            self.reply.reply_to(),
            self.reply.markup(),
        )
    }
}
