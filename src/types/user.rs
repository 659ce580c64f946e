use serde::{Deserialize, Serialize};

/// A Telegram user or bot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user or bot
    pub id: i64,
    /// True if this user is a bot
    #[serde(default)]
    pub is_bot: bool,
    /// User's or bot's first name
    pub first_name: String,
    /// Optional. User's or bot's last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Optional. User's or bot's username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl User {
    /// First and last name joined by a space
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last_name) => format!("{} {}", self.first_name, last_name),
            None => self.first_name.clone(),
        }
    }
}
