//! Endpoint table of the Telegram Bot API.
//!
//! Each function maps one remote operation to its HTTP method, endpoint name and
//! query parameters, then decodes the envelope. Nothing here validates, retries
//! or times out; that belongs to the builders and the [`Transport`].

use std::fmt;
use std::sync::Arc;

use log::debug;
use bigdecimal::BigDecimal;
use serde::de::DeserializeOwned;

use crate::client::{ApiRequest, Method, Response, Transport};
use crate::error::Result;
use crate::request::{ChatAction, ChatId, ParseMode};
use crate::types::{Message, ReplyMarkup, Update, User};

/// Declarative binding of the remote endpoints onto a [`Transport`]
#[derive(Clone)]
pub struct TelegramApi {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for TelegramApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramApi").finish_non_exhaustive()
    }
}

impl TelegramApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        TelegramApi { transport }
    }

    /// Deliver a request and decode the envelope. An empty or `null` body is no envelope.
    pub fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Option<Response<T>>> {
        let body = match self.transport.execute(&request)? {
            Some(body) if !body.trim().is_empty() => body,
            _ => return Ok(None),
        };

        let response: Option<Response<T>> = serde_json::from_str(&body)?;
        debug!(
            "/{} answered ok={:?}",
            request.endpoint,
            response.as_ref().map(|r| r.ok)
        );
        Ok(response)
    }

    /// `GET /getMe`
    pub fn get_me(&self) -> Result<Option<Response<User>>> {
        self.call(ApiRequest::new(Method::Get, "getMe"))
    }

    /// `POST /sendMessage?chat_id=&text=&parse_mode=&disable_web_page_preview=&reply_to_message_id=&reply_markup=`
    pub fn send_message(
        &self,
        chat: &ChatId,
        text: &str,
        mode: Option<ParseMode>,
        disable_preview: bool,
        reply_to: Option<i64>,
        reply: Option<&ReplyMarkup>,
    ) -> Result<Option<Response<Message>>> {
        let request = ApiRequest::new(Method::Post, "sendMessage")
            .param("chat_id", chat)
            .param("text", text)
            .optional_param("parse_mode", mode)
            .param("disable_web_page_preview", disable_preview)
            .optional_param("reply_to_message_id", reply_to)
            .optional_param("reply_markup", encode_markup(reply)?);
        self.call(request)
    }

    /// `POST /forwardMessage?chat_id=&from_chat_id=&message_id=`
    pub fn forward_message(
        &self,
        chat: &ChatId,
        from_chat: &ChatId,
        message: i64,
    ) -> Result<Option<Response<Message>>> {
        let request = ApiRequest::new(Method::Post, "forwardMessage")
            .param("chat_id", chat)
            .param("from_chat_id", from_chat)
            .param("message_id", message);
        self.call(request)
    }

    /// `POST /sendSticker?chat_id=&sticker=&reply_to_message_id=&reply_markup=`
    pub fn send_sticker(
        &self,
        chat: &ChatId,
        sticker: &str,
        reply_to: Option<i64>,
        reply: Option<&ReplyMarkup>,
    ) -> Result<Option<Response<Message>>> {
        let request = ApiRequest::new(Method::Post, "sendSticker")
            .param("chat_id", chat)
            .param("sticker", sticker)
            .optional_param("reply_to_message_id", reply_to)
            .optional_param("reply_markup", encode_markup(reply)?);
        self.call(request)
    }

    /// `POST /sendLocation?chat_id=&latitude=&longitude=&reply_to_message_id=&reply_markup=`
    pub fn send_location(
        &self,
        chat: &ChatId,
        latitude: &BigDecimal,
        longitude: &BigDecimal,
        reply_to: Option<i64>,
        reply: Option<&ReplyMarkup>,
    ) -> Result<Option<Response<Message>>> {
        let request = ApiRequest::new(Method::Post, "sendLocation")
            .param("chat_id", chat)
            .param("latitude", latitude)
            .param("longitude", longitude)
            .optional_param("reply_to_message_id", reply_to)
            .optional_param("reply_markup", encode_markup(reply)?);
        self.call(request)
    }

    /// `POST /sendChatAction?chat_id=&action=`
    pub fn send_chat_action(
        &self,
        chat: &ChatId,
        action: ChatAction,
    ) -> Result<Option<Response<serde_json::Value>>> {
        let request = ApiRequest::new(Method::Post, "sendChatAction")
            .param("chat_id", chat)
            .param("action", action);
        self.call(request)
    }

    /// `GET /getUpdates?offset=&limit=&timeout=`
    pub fn get_updates(
        &self,
        offset: Option<i64>,
        limit: Option<u32>,
        timeout: Option<u32>,
    ) -> Result<Option<Response<Vec<Update>>>> {
        let request = ApiRequest::new(Method::Get, "getUpdates")
            .optional_param("offset", offset)
            .optional_param("limit", limit)
            .optional_param("timeout", timeout);
        self.call(request)
    }

    /// `POST /setWebhook?url=`
    pub fn set_webhook(&self, url: Option<&str>) -> Result<Option<Response<serde_json::Value>>> {
        self.call(ApiRequest::new(Method::Post, "setWebhook").optional_param("url", url))
    }
}

fn encode_markup(reply: Option<&ReplyMarkup>) -> Result<Option<String>> {
    Ok(reply.map(ReplyMarkup::to_json).transpose()?)
}
