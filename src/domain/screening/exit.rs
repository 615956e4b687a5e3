//! Exit vocabulary detection.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words that end the conversation when they appear as whole words.
pub const EXIT_KEYWORDS: [&str; 6] = ["exit", "quit", "stop", "bye", "terminate", "goodbye"];

/// Phrase that ends the conversation wherever it appears.
pub const EXIT_PHRASE: &str = "end conversation";

/// Fixed farewell sent when the candidate leaves early.
pub const FAREWELL_MESSAGE: &str = "I understand you'd like to end the conversation. Thank you for your time today! Your session has been closed. Have a great day! 👋";

static EXIT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"(?i)\b(?:{})\b", EXIT_KEYWORDS.join("|"));
    Regex::new(&pattern).expect("exit keyword pattern is valid")
});

/// Returns true if `text` asks to end the conversation.
///
/// Keywords match whole words only, so "exited" does not count but "I quit" does.
pub fn is_exit_request(text: &str) -> bool {
    EXIT_PATTERN.is_match(text) || text.to_lowercase().contains(EXIT_PHRASE)
}
