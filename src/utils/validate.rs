//! Email and phone number predicates.
//!
//! Both validators are total: any input, including empty or malformed text,
//! yields a boolean. Matching is purely syntactic; no DNS or numbering-plan
//! lookups are performed.

use regex::Regex;
use std::sync::LazyLock;

// Conventional local@domain.tld shape: non-empty local part, dotted domain,
// top-level label of at least two letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

// NANP grouping: optional +, optional country code 1, then 3-3-4 digit
// groups with at most one separator between groups.
static PHONE_NANP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?1?[-.\s]?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}$").unwrap()
});

// Bare international form: optional + followed by 10-15 digits.
static PHONE_INTL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").unwrap());

/// Check whether text is a conventionally formatted email address.
pub fn validate_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

/// Check whether text is a plausibly formatted phone number.
///
/// The input is first reduced to digits, `+` and `-`; separator noise such
/// as spaces, dots and parentheses is dropped. The reduced text must then
/// form either a NANP-style 3-3-4 grouping or a bare international number
/// of 10-15 digits.
pub fn validate_phone_number(phone: &str) -> bool {
    if phone.is_empty() {
        return false;
    }

    let reduced: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+' || *c == '-')
        .collect();

    PHONE_NANP_PATTERN.is_match(&reduced) || PHONE_INTL_PATTERN.is_match(&reduced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com")]
    #[case("test.email@domain.co.uk")]
    #[case("user+tag@example.org")]
    #[case("user123@test-domain.com")]
    #[case("a@b.cd")]
    fn email_accepts_conventional_addresses(#[case] email: &str) {
        assert!(validate_email(email));
    }

    #[rstest]
    #[case("invalid-email")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@.com")]
    #[case("user@example")]
    #[case("user name@example.com")]
    #[case("")]
    fn email_rejects_malformed_addresses(#[case] email: &str) {
        assert!(!validate_email(email));
    }

    #[rstest]
    #[case("+1-555-123-4567")]
    #[case("555-123-4567")]
    #[case("(555) 123-4567")]
    #[case("555.123.4567")]
    #[case("555 123 4567")]
    #[case("+44 20 7946 0958")]
    #[case("+1 555 123 4567")]
    fn phone_accepts_plausible_numbers(#[case] phone: &str) {
        assert!(validate_phone_number(phone));
    }

    #[rstest]
    #[case("invalid")]
    #[case("123")]
    #[case("555-123")]
    #[case("555-123-456")]
    #[case("555-123-45678")]
    #[case("abc-def-ghij")]
    #[case("")]
    fn phone_rejects_malformed_numbers(#[case] phone: &str) {
        assert!(!validate_phone_number(phone));
    }

    #[test]
    fn phone_tolerates_mixed_separators() {
        assert!(validate_phone_number("(555) 123.4567"));
    }
}
