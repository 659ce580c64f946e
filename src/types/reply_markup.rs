use serde::{Deserialize, Serialize};

/// A custom keyboard with reply options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    /// Button rows, each represented by a list of button labels
    pub keyboard: Vec<Vec<String>>,
    /// Requests clients to resize the keyboard vertically for optimal fit
    #[serde(rename = "resize_keyboard", default)]
    pub resize: bool,
    /// Requests clients to hide the keyboard as soon as it's been used
    #[serde(rename = "one_time_keyboard", default)]
    pub auto_hide: bool,
    /// Show the keyboard to mentioned users and the sender of the replied-to message only
    #[serde(default)]
    pub selective: bool,
}

impl ReplyKeyboardMarkup {
    /// Create a keyboard from rows of button labels
    pub fn new<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReplyKeyboardMarkup {
            keyboard: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            ..Default::default()
        }
    }

    pub fn resize(mut self, resize: bool) -> Self {
        self.resize = resize;
        self
    }

    pub fn auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    pub fn selective(mut self, selective: bool) -> Self {
        self.selective = selective;
        self
    }
}

/// Instructs clients to remove the current custom keyboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardHide {
    /// Always true
    pub hide_keyboard: bool,
    #[serde(default)]
    pub selective: bool,
}

impl Default for ReplyKeyboardHide {
    fn default() -> Self {
        ReplyKeyboardHide {
            hide_keyboard: true,
            selective: false,
        }
    }
}

impl ReplyKeyboardHide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selective(mut self, selective: bool) -> Self {
        self.selective = selective;
        self
    }
}

/// Makes clients display a reply interface, as if the user tapped 'Reply' on the bot's message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceReply {
    #[serde(rename = "force_reply")]
    pub forced: bool,
    #[serde(default)]
    pub selective: bool,
}

impl Default for ForceReply {
    fn default() -> Self {
        ForceReply {
            forced: true,
            selective: false,
        }
    }
}

impl ForceReply {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selective(mut self, selective: bool) -> Self {
        self.selective = selective;
        self
    }
}

/// The reply interface directive attached to an outgoing message.
///
/// Exactly one variant can be active, so a request can never carry two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    Keyboard(ReplyKeyboardMarkup),
    HideKeyboard(ReplyKeyboardHide),
    ForceReply(ForceReply),
}

impl ReplyMarkup {
    /// Name of the directive, used in validation messages
    pub fn name(&self) -> &'static str {
        match self {
            ReplyMarkup::Keyboard(_) => "replyKeyboardMarkup",
            ReplyMarkup::HideKeyboard(_) => "replyKeyboardHide",
            ReplyMarkup::ForceReply(_) => "forceReply",
        }
    }

    /// JSON encoding sent in the `reply_markup` parameter
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        ReplyMarkup::Keyboard(markup)
    }
}

impl From<ReplyKeyboardHide> for ReplyMarkup {
    fn from(hide: ReplyKeyboardHide) -> Self {
        ReplyMarkup::HideKeyboard(hide)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(force: ForceReply) -> Self {
        ReplyMarkup::ForceReply(force)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_survives_encoding() {
        let markup = ReplyKeyboardMarkup::new(vec![vec!["1", "2"], vec!["3", "4"]])
            .resize(true)
            .auto_hide(true)
            .selective(false);

        let json = serde_json::to_string(&markup).unwrap();
        assert!(json.contains(r#""resize_keyboard":true"#));
        assert!(json.contains(r#""one_time_keyboard":true"#));

        let decoded: ReplyKeyboardMarkup = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, markup);
        assert_eq!(decoded.keyboard[1], vec!["3".to_string(), "4".to_string()]);
    }

    #[test]
    fn test_directive_wire_shapes() {
        assert_eq!(
            ReplyMarkup::from(ReplyKeyboardHide::new()).to_json().unwrap(),
            r#"{"hide_keyboard":true,"selective":false}"#
        );
        assert_eq!(
            ReplyMarkup::from(ForceReply::new().selective(true))
                .to_json()
                .unwrap(),
            r#"{"force_reply":true,"selective":true}"#
        );
    }
}
