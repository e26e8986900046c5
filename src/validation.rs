use regex::Regex;
use std::sync::OnceLock;

/// Email shape accepted by both the client pre-check and the server-side
/// validation. The two layers validate independently but must agree, so the
/// pattern lives here and nowhere else.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Checks an email against the shared `local@domain.tld` pattern.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// True when the field is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
