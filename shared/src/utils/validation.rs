//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Common validation functions
pub mod validators {
    use super::EMAIL_REGEX;

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if an email address is well formed: `local@domain.tld`, no whitespace
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }
}

pub use validators::is_valid_email;

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("thandi@example.co.za"));
        assert!(is_valid_email("a.b+c@d.io"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty("x"));
        assert!(!not_empty("   "));
    }
}
