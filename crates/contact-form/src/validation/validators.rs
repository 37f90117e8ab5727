// File: src/validation/validators.rs
// Purpose: Single-field rule checks used by the contact form validator

use crate::field::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;

// Minimal local@domain.tld shape with no whitespace and a single '@' per part.
// U+FEFF is listed explicitly: browsers count it as `\s`, Unicode White_Space does not.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern is valid")
});

/// Whitespace as browsers trim it: Unicode White_Space plus U+FEFF
pub fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Trim the way a browser's `String.prototype.trim` does
pub fn trim_form_value(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Validate email shape (not RFC 5322; intentionally permissive)
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// True when `value` holds exactly `digits` ASCII digits and nothing else
pub fn is_numeric_of_length(value: &str, digits: usize) -> bool {
    value.len() == digits && value.bytes().all(|b| b.is_ascii_digit())
}

/// True for a 10-digit, digits-only phone number
pub fn is_ten_digit_phone(value: &str) -> bool {
    is_numeric_of_length(value, 10)
}

/// Only U+0020 counts; tabs and newlines are caught by the email pattern instead
pub fn contains_space(value: &str) -> bool {
    value.contains(' ')
}

/// Length in UTF-16 code units
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Required text without spaces (name, surname)
///
/// The empty check short-circuits the space check.
pub fn check_text(value: FieldValue<'_>, label: &str) -> Result<(), String> {
    let value = value.trimmed();
    if value.is_empty() {
        return Err(format!("{} is required.", label));
    }
    if contains_space(value) {
        return Err(format!("{} must not contain spaces.", label));
    }
    Ok(())
}

/// Email check shared by the personal and work address
///
/// An empty value is only an error when `required` is set; an empty optional
/// address is not checked at all. The space check short-circuits the pattern
/// check.
pub fn check_email(value: FieldValue<'_>, label: &str, required: bool) -> Result<(), String> {
    let value = value.trimmed();
    if value.is_empty() {
        if required {
            return Err(format!("{} is required.", label));
        }
        return Ok(());
    }
    if contains_space(value) {
        return Err(format!("{} should not contain spaces.", label));
    }
    if !is_valid_email(value) {
        return Err(format!(
            "{} must be a valid email address (e.g., user@domain.com).",
            label
        ));
    }
    Ok(())
}

/// Optional fixed-length numeric phone number
pub fn check_phone(value: FieldValue<'_>, label: &str, digits: usize) -> Result<(), String> {
    let value = value.trimmed();
    if value.is_empty() || is_numeric_of_length(value, digits) {
        return Ok(());
    }
    Err(format!(
        "{} must be exactly {} digits and numeric only (e.g., {}).",
        label,
        digits,
        example_phone(digits)
    ))
}

/// Required, length-bounded message
///
/// Emptiness is judged on the trimmed text, length on the raw text, and the
/// two checks are independent: whitespace-only overlong input fails both.
pub fn check_message(value: FieldValue<'_>, label: &str, max_length: usize) -> Vec<String> {
    let mut errors = Vec::new();

    if value.is_blank() {
        errors.push(format!("{} cannot be empty.", label));
    }

    let length = value.len();
    if length > max_length {
        errors.push(format!(
            "{} must be {} characters or less (currently {} characters).",
            label, max_length, length
        ));
    }

    errors
}

/// "1234567890" for ten digits; cycles 1..9,0 for other lengths
fn example_phone(digits: usize) -> String {
    (1..=digits)
        .map(|i| char::from(b'0' + (i % 10) as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
        // Permissive: anything but whitespace and '@' is accepted
        assert!(is_valid_email("!#$@%^&.*"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("us\ter@example.com"));
        assert!(!is_valid_email("a\u{FEFF}b@x.com"));
        assert!(!is_valid_email("a@x.\u{FEFF}com"));
    }

    #[test]
    fn test_trim_form_value() {
        assert_eq!(trim_form_value("\u{FEFF} Jane \u{FEFF}"), "Jane");
        assert_eq!(trim_form_value("\u{FEFF}"), "");
        assert_eq!(trim_form_value("\u{FEFF}\u{00A0}\t\n"), "");
        assert_eq!(trim_form_value("a\u{FEFF}b"), "a\u{FEFF}b");
    }

    #[test]
    fn test_phone_digits() {
        assert!(is_ten_digit_phone("1234567890"));
        assert!(!is_ten_digit_phone("12345"));
        assert!(!is_ten_digit_phone("12345678901"));
        assert!(!is_ten_digit_phone("123456789a"));
        assert!(!is_ten_digit_phone("123-456-78"));
        // Non-ASCII digits are rejected
        assert!(!is_ten_digit_phone("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_check_text() {
        assert_eq!(check_text(FieldValue::new("Jane"), "Name"), Ok(()));
        assert_eq!(
            check_text(FieldValue::new("   "), "Name"),
            Err("Name is required.".to_string())
        );
        assert_eq!(
            check_text(FieldValue::new(" John Doe "), "Name"),
            Err("Name must not contain spaces.".to_string())
        );
    }

    #[test]
    fn test_check_email_optional_empty_is_skipped() {
        assert_eq!(check_email(FieldValue::new(""), "Work Email", false), Ok(()));
        assert_eq!(check_email(FieldValue::new("   "), "Work Email", false), Ok(()));
    }

    #[test]
    fn test_check_email_space_short_circuits_pattern() {
        assert_eq!(
            check_email(FieldValue::new("a b@x.com"), "Personal Email", true),
            Err("Personal Email should not contain spaces.".to_string())
        );
    }

    #[test]
    fn test_check_phone_message() {
        assert_eq!(
            check_phone(FieldValue::new("12345"), "Phone Number", 10),
            Err("Phone Number must be exactly 10 digits and numeric only (e.g., 1234567890).".to_string())
        );
        assert_eq!(check_phone(FieldValue::new(" 1234567890 "), "Phone Number", 10), Ok(()));
    }

    #[test]
    fn test_check_message_both_errors() {
        let spaces = " ".repeat(501);
        let errors = check_message(FieldValue::new(&spaces), "Message", 500);
        assert_eq!(
            errors,
            vec![
                "Message cannot be empty.".to_string(),
                "Message must be 500 characters or less (currently 501 characters).".to_string(),
            ]
        );
    }

    #[test]
    fn test_check_message_at_limit() {
        let text = "a".repeat(500);
        assert!(check_message(FieldValue::new(&text), "Message", 500).is_empty());
    }

    #[test]
    fn test_example_phone() {
        assert_eq!(example_phone(10), "1234567890");
        assert_eq!(example_phone(3), "123");
    }
}
