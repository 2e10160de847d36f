//! Inbound token recognition.

/// Token that restarts the conversation from any step.
pub const RESET_TOKEN: &str = "start";

const GREETINGS: &[&str] = &["hi", "مرحبا"];

pub fn is_reset(token: &str) -> bool {
    token.trim() == RESET_TOKEN
}

/// Greetings are matched case-insensitively.
pub fn is_greeting(token: &str) -> bool {
    let token = token.trim().to_lowercase();
    GREETINGS.contains(&token.as_str())
}

/// Parse a 1-based menu choice, accepted only when `1 <= n <= max`.
///
/// Only plain ASCII digits are accepted; signs, decimals and spaces inside
/// the number are rejected.
pub fn parse_choice(token: &str, max: usize) -> Option<usize> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<usize>().ok().filter(|n| (1..=max).contains(n))
}
