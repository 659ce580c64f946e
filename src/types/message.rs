use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{Chat, Contact, Location, PhotoSize, Sticker, User};

/// A message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier
    #[serde(rename = "message_id")]
    pub id: i64,
    /// Optional. Sender, can be empty for messages sent to channels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    /// Date the message was sent in Unix time
    pub date: i64,
    /// Conversation the message belongs to
    pub chat: Chat,
    /// Optional. For forwarded messages, sender of the original message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_from: Option<User>,
    /// Optional. For forwarded messages, date the original message was sent in Unix time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_date: Option<i64>,
    /// Optional. For replies, the original message.
    ///
    /// The nested message never carries a reply of its own.
    #[serde(
        rename = "reply_to_message",
        default,
        deserialize_with = "one_level_reply",
        skip_serializing_if = "Option::is_none"
    )]
    pub reply_to: Option<Box<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Optional. A new member was added to the group (this member may be the bot itself)
    #[serde(
        rename = "new_chat_participant",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub new_member: Option<User>,
    /// Optional. A member was removed from the group (this member may be the bot itself)
    #[serde(
        rename = "left_chat_participant",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub left_member: Option<User>,
    /// Optional. A group title was changed to this value
    #[serde(rename = "new_chat_title", default, skip_serializing_if = "Option::is_none")]
    pub new_title: Option<String>,
    /// Optional. A group photo was changed to this value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_chat_photo: Option<Vec<PhotoSize>>,
    /// Service message: the chat photo was deleted
    #[serde(default, skip_serializing_if = "is_false")]
    pub delete_chat_photo: bool,
    /// Service message: the group has been created
    #[serde(default, skip_serializing_if = "is_false")]
    pub group_chat_created: bool,
    /// Service message: the supergroup has been created
    #[serde(default, skip_serializing_if = "is_false")]
    pub supergroup_chat_created: bool,
    /// Service message: the channel has been created
    #[serde(default, skip_serializing_if = "is_false")]
    pub channel_chat_created: bool,
    /// Optional. The group has been migrated to a supergroup with this identifier
    #[serde(rename = "migrate_to_chat_id", default, skip_serializing_if = "Option::is_none")]
    pub migrate_to: Option<i64>,
    /// Optional. The supergroup has been migrated from a group with this identifier
    #[serde(
        rename = "migrate_from_chat_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub migrate_from: Option<i64>,
}

impl Message {
    /// The send date as a UTC timestamp
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }

    /// The original send date of a forwarded message as a UTC timestamp
    pub fn forward_date_time(&self) -> Option<DateTime<Utc>> {
        self.forward_date
            .and_then(|date| DateTime::from_timestamp(date, 0))
    }

    /// Whether this is a service message about a chat change rather than content
    pub fn is_service(&self) -> bool {
        self.new_member.is_some()
            || self.left_member.is_some()
            || self.new_title.is_some()
            || self.new_chat_photo.is_some()
            || self.delete_chat_photo
            || self.group_chat_created
            || self.supergroup_chat_created
            || self.channel_chat_created
            || self.migrate_to.is_some()
            || self.migrate_from.is_some()
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn one_level_reply<'de, D>(deserializer: D) -> Result<Option<Box<Message>>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut reply = Option::<Box<Message>>::deserialize(deserializer)?;
    if let Some(reply) = reply.as_mut() {
        reply.reply_to = None;
    }
    Ok(reply)
}
