use bigdecimal::BigDecimal;

use crate::api::TelegramApi;
use crate::client::Response;
use crate::error::{Error, Result};
use crate::request::{require, ChatId, IntoCoordinate, Reply, ReplyOptions, Request};
use crate::types::Message;

/// Request for sending a point on the map.
///
/// Coordinates accept integers, floats, [`BigDecimal`] and decimal strings.
/// On success, the sent [`Message`] is returned.
#[derive(Debug)]
pub struct SendLocation {
    api: TelegramApi,
    chat: Option<ChatId>,
    // Conversion failures are kept and reported at execute
    latitude: Option<std::result::Result<BigDecimal, String>>,
    longitude: Option<std::result::Result<BigDecimal, String>>,
    reply: ReplyOptions,
}

impl SendLocation {
    pub(crate) fn new(api: TelegramApi) -> Self {
        SendLocation {
            api,
            chat: None,
            latitude: None,
            longitude: None,
            reply: ReplyOptions::default(),
        }
    }

    /// Required. Target chat id or `@channelusername`
    pub fn chat<C: Into<ChatId>>(mut self, chat: C) -> Self {
        self.chat = Some(chat.into());
        self
    }

    /// Required. Latitude of the location
    pub fn latitude<C: IntoCoordinate>(mut self, latitude: C) -> Self {
        self.latitude = Some(latitude.into_coordinate());
        self
    }

    /// Required. Longitude of the location
    pub fn longitude<C: IntoCoordinate>(mut self, longitude: C) -> Self {
        self.longitude = Some(longitude.into_coordinate());
        self
    }

    /// The normalized latitude, if set and valid
    pub fn latitude_value(&self) -> Option<BigDecimal> {
        self.latitude.as_ref().and_then(|l| l.as_ref().ok().cloned())
    }

    /// The normalized longitude, if set and valid
    pub fn longitude_value(&self) -> Option<BigDecimal> {
        self.longitude.as_ref().and_then(|l| l.as_ref().ok().cloned())
    }
}

fn coordinate<'a>(
    value: &'a Option<std::result::Result<BigDecimal, String>>,
    field: &str,
) -> Result<&'a BigDecimal> {
    require(value, field)?
        .as_ref()
        .map_err(|e| Error::invalid_argument(format!("{}: {}", field, e)))
}

impl Reply for SendLocation {
    fn reply_options(&self) -> &ReplyOptions {
        &self.reply
    }

    fn reply_options_mut(&mut self) -> &mut ReplyOptions {
        &mut self.reply
    }
}

impl Request for SendLocation {
    type Output = Message;

    fn send(&self) -> Result<Option<Response<Message>>> {
        let chat = require(&self.chat, "chat")?;
        let latitude = coordinate(&self.latitude, "latitude")?;
        let longitude = coordinate(&self.longitude, "longitude")?;

        self.api.send_location(
            chat,
            latitude,
            longitude,
            self.reply.reply_to(),
            self.reply.markup(),
        )
    }
}
