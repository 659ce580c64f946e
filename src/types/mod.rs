//! Data objects mirroring the JSON schema of the Telegram Bot API.
//!
//! All types are plain values: they are produced by decoding responses or
//! assembled by callers for outgoing requests, and carry no behaviour beyond
//! small accessors.

mod chat;
mod media;
mod message;
mod reply_markup;
mod update;
mod user;

pub use chat::{Chat, ChatKind};
pub use media::{Contact, Location, PhotoSize, Sticker};
pub use message::Message;
pub use reply_markup::{ForceReply, ReplyKeyboardHide, ReplyKeyboardMarkup, ReplyMarkup};
pub use update::Update;
pub use user::User;
