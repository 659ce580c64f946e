use serde::{Deserialize, Serialize};

use super::Message;

/// An incoming update.
///
/// At most one of the optional payloads is present in any given update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// The update's unique identifier. Identifiers increase sequentially.
    #[serde(rename = "update_id")]
    pub id: i64,
    /// Optional. New incoming message of any kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_without_message() {
        let update: Update = serde_json::from_str(r#"{"update_id":100}"#).unwrap();
        assert_eq!(update.id, 100);
        assert!(update.message.is_none());
    }
}
