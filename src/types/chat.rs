use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Type of a chat
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
    /// A chat type this crate does not know about yet, kept verbatim
    Unknown(String),
}

impl ChatKind {
    pub fn as_str(&self) -> &str {
        match self {
            ChatKind::Private => "private",
            ChatKind::Group => "group",
            ChatKind::Supergroup => "supergroup",
            ChatKind::Channel => "channel",
            ChatKind::Unknown(kind) => kind,
        }
    }
}

impl From<&str> for ChatKind {
    fn from(kind: &str) -> Self {
        match kind {
            "private" => ChatKind::Private,
            "group" => ChatKind::Group,
            "supergroup" => ChatKind::Supergroup,
            "channel" => ChatKind::Channel,
            other => ChatKind::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ChatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ChatKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChatKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kind = String::deserialize(deserializer)?;
        Ok(ChatKind::from(kind.as_str()))
    }
}

/// A private chat, group, supergroup or channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    /// Unique identifier for this chat, not exceeding 1e13 by absolute value
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatKind,
    /// Optional. Title, for channels and group chats
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional. Username, for private chats and channels if available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Optional. First name of the other party in a private chat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Optional. Last name of the other party in a private chat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_kind_decoding() {
        let chat: Chat =
            serde_json::from_str(r#"{"id":-1001234567890,"type":"supergroup","title":"Rust"}"#)
                .unwrap();
        assert_eq!(chat.id, -1001234567890);
        assert_eq!(chat.kind, ChatKind::Supergroup);
        assert_eq!(chat.title.as_deref(), Some("Rust"));

        let chat: Chat = serde_json::from_str(r#"{"id":1,"type":"sender"}"#).unwrap();
        assert_eq!(chat.kind, ChatKind::Unknown("sender".to_string()));
    }

    #[test]
    fn test_unknown_chat_kind_is_written_back_verbatim() {
        let chat: Chat = serde_json::from_str(r#"{"id":1,"type":"sender"}"#).unwrap();
        assert_eq!(chat.kind.as_str(), "sender");

        let json = serde_json::to_value(&chat).unwrap();
        assert_eq!(json["type"], "sender");

        let json = serde_json::to_value(ChatKind::Channel).unwrap();
        assert_eq!(json, "channel");
    }
}
