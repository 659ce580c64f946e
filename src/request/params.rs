use bigdecimal::BigDecimal;
use std::fmt;
use std::str::FromStr;

/// Target chat: a numeric identifier or the username of a channel (`@channelusername`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{}", id),
            ChatId::Username(username) => f.write_str(username),
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId::Id(id)
    }
}

impl From<i32> for ChatId {
    fn from(id: i32) -> Self {
        ChatId::Id(id.into())
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        ChatId::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        ChatId::Username(username)
    }
}

/// Text formatting mode of an outgoing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Markdown,
    MarkdownV2,
    Html,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Markdown => "Markdown",
            ParseMode::MarkdownV2 => "MarkdownV2",
            ParseMode::Html => "HTML",
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity broadcast by sendChatAction, picked by what the user is about to receive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordAudio,
    UploadAudio,
    UploadDocument,
    FindLocation,
}

impl ChatAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatAction::Typing => "typing",
            ChatAction::UploadPhoto => "upload_photo",
            ChatAction::RecordVideo => "record_video",
            ChatAction::UploadVideo => "upload_video",
            ChatAction::RecordAudio => "record_audio",
            ChatAction::UploadAudio => "upload_audio",
            ChatAction::UploadDocument => "upload_document",
            ChatAction::FindLocation => "find_location",
        }
    }
}

impl fmt::Display for ChatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion of the accepted numeric shapes into an exact decimal coordinate.
///
/// Floats are converted through their shortest round-trip text, so `10.1_f64`
/// becomes exactly `10.1`. Strings are parsed as-is with every digit kept.
pub trait IntoCoordinate {
    fn into_coordinate(self) -> Result<BigDecimal, String>;
}

impl IntoCoordinate for BigDecimal {
    fn into_coordinate(self) -> Result<BigDecimal, String> {
        Ok(self)
    }
}

impl IntoCoordinate for i32 {
    fn into_coordinate(self) -> Result<BigDecimal, String> {
        Ok(BigDecimal::from(self))
    }
}

impl IntoCoordinate for i64 {
    fn into_coordinate(self) -> Result<BigDecimal, String> {
        Ok(BigDecimal::from(self))
    }
}

impl IntoCoordinate for f64 {
    fn into_coordinate(self) -> Result<BigDecimal, String> {
        self.to_string().as_str().into_coordinate()
    }
}

impl IntoCoordinate for f32 {
    fn into_coordinate(self) -> Result<BigDecimal, String> {
        self.to_string().as_str().into_coordinate()
    }
}

impl IntoCoordinate for &str {
    fn into_coordinate(self) -> Result<BigDecimal, String> {
        BigDecimal::from_str(self.trim())
            .map_err(|e| format!("'{}' is not a valid decimal: {}", self, e))
    }
}

impl IntoCoordinate for String {
    fn into_coordinate(self) -> Result<BigDecimal, String> {
        self.as_str().into_coordinate()
    }
}

impl IntoCoordinate for &String {
    fn into_coordinate(self) -> Result<BigDecimal, String> {
        self.as_str().into_coordinate()
    }
}
