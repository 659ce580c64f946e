use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::request::ParseMode;

/// Maximum length of a text message accepted by the API, in characters
pub const MAX_MESSAGE_LENGTH: usize = 4096;

/// Characters with a meaning in legacy Markdown mode
const MARKDOWN_SPECIAL_CHARS: &[char] = &['_', '*', '`', '['];

/// Characters that need escaping in MarkdownV2 mode
const MARKDOWN_V2_SPECIAL_CHARS: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    '\\',
];

/// Regex for identifying HTML entities
static HTML_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[<>&]").unwrap());

/// Helpers for preparing literal text for a given parse mode
pub struct Formatter;

impl Formatter {
    /// Escape `text` so that it renders literally under `mode`
    pub fn escape(text: &str, mode: ParseMode) -> String {
        let escaped = match mode {
            ParseMode::Markdown => Self::escape_with(text, MARKDOWN_SPECIAL_CHARS),
            ParseMode::MarkdownV2 => Self::escape_with(text, MARKDOWN_V2_SPECIAL_CHARS),
            ParseMode::Html => Self::escape_html(text),
        };
        trace!("Escaped for {}: {}", mode, escaped);
        escaped
    }

    /// Escape legacy Markdown entity characters
    pub fn escape_markdown(text: &str) -> String {
        Self::escape_with(text, MARKDOWN_SPECIAL_CHARS)
    }

    /// Escape HTML special characters
    pub fn escape_html(text: &str) -> String {
        HTML_REGEX
            .replace_all(text, |caps: &regex::Captures| match &caps[0] {
                "<" => "&lt;",
                ">" => "&gt;",
                _ => "&amp;",
            })
            .to_string()
    }

    /// Truncate text to at most `max_chars` characters, appending `...` when cut.
    ///
    /// Cuts at the last space when there is one, and never inside a UTF-8 character.
    pub fn truncate(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            return text.to_string();
        }

        let keep = max_chars.saturating_sub(3);
        let end = text
            .char_indices()
            .nth(keep)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        let head = &text[..end];

        match head.rfind(' ') {
            Some(last_space) if last_space > 0 => format!("{}...", &head[..last_space]),
            _ => format!("{}...", head),
        }
    }

    fn escape_with(text: &str, special: &[char]) -> String {
        let mut result = String::with_capacity(text.len() * 2);
        for c in text.chars() {
            if special.contains(&c) {
                result.push('\\');
            }
            result.push(c);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markdown() {
        assert_eq!(
            Formatter::escape("snake_case *bold* `code` [link]", ParseMode::Markdown),
            r"snake\_case \*bold\* \`code\` \[link]"
        );
    }

    #[test]
    fn test_escape_markdown_v2() {
        assert_eq!(
            Formatter::escape("1.5 + (2) = 3.5!", ParseMode::MarkdownV2),
            r"1\.5 \+ \(2\) \= 3\.5\!"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            Formatter::escape("<b>Tom & Jerry</b>", ParseMode::Html),
            "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(Formatter::truncate("short", 10), "short");
        assert_eq!(Formatter::truncate("hello brave new world", 15), "hello brave...");
        assert_eq!(Formatter::truncate("abcdefghij", 6), "abc...");
        // multi-byte characters are never split
        assert_eq!(Formatter::truncate("ééééééé", 5), "éé...");
    }
}
