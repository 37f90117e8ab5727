// File: src/validation/mod.rs
// Purpose: Contact form validator and its result type

use crate::config::RuleConfig;
use crate::field::{Field, FormValues};
use serde::Serialize;
use std::fmt;

pub mod validators;

/// One failed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of validating the whole form
///
/// Errors keep rule-check order. The form is accepted iff there are none;
/// the verdict is derived, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self::default()
    }

    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Error messages in display order
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Get first error for a specific field
    pub fn get_error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Get all errors for a specific field
    pub fn get_errors(&self, field: Field) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    fn push(&mut self, field: Field, message: String) {
        tracing::trace!(field = %field, %message, "rule failed");
        self.errors.push(ValidationError::new(field, message));
    }

    fn push_result(&mut self, field: Field, result: Result<(), String>) {
        if let Err(message) = result {
            self.push(field, message);
        }
    }
}

/// Evaluates the fixed contact form rule set
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: RuleConfig,
}

impl Validator {
    pub fn new(rules: RuleConfig) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Run every rule against `values`, in field order
    pub fn validate(&self, values: &FormValues) -> ValidationResult {
        let mut result = ValidationResult::success();

        for field in [Field::Name, Field::Surname] {
            result.push_result(
                field,
                validators::check_text(values.value(field), field.label()),
            );
        }

        result.push_result(
            Field::PersonalEmail,
            validators::check_email(
                values.value(Field::PersonalEmail),
                Field::PersonalEmail.label(),
                self.rules.require_personal_email,
            ),
        );
        result.push_result(
            Field::WorkEmail,
            validators::check_email(values.value(Field::WorkEmail), Field::WorkEmail.label(), false),
        );

        result.push_result(
            Field::Phone,
            validators::check_phone(
                values.value(Field::Phone),
                Field::Phone.label(),
                self.rules.phone_digits,
            ),
        );

        for message in validators::check_message(
            values.value(Field::Message),
            Field::Message.label(),
            self.rules.message_max_length,
        ) {
            result.push(Field::Message, message);
        }

        tracing::debug!(
            fields = values.len(),
            errors = result.errors.len(),
            "validated contact form"
        );

        result
    }
}

/// Validate with the default rules
pub fn validate(values: &FormValues) -> ValidationResult {
    Validator::default().validate(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormValues {
        FormValues::new()
            .with(Field::Name, "Jane")
            .with(Field::Surname, "Doe")
            .with(Field::PersonalEmail, "jane@doe.com")
            .with(Field::WorkEmail, "")
            .with(Field::Phone, "5551234567")
            .with(Field::Message, "Hi there")
    }

    #[test]
    fn test_valid_form_is_accepted() {
        let result = validate(&valid_form());
        assert!(result.is_valid());
        assert!(!result.has_errors());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_errors_follow_field_order() {
        let values = valid_form()
            .with(Field::Message, "")
            .with(Field::Name, "")
            .with(Field::Phone, "12");
        let result = validate(&values);
        assert!(result.has_errors());
        let fields: Vec<Field> = result.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Phone, Field::Message]);
    }

    #[test]
    fn test_get_error_by_field() {
        let result = validate(&valid_form().with(Field::WorkEmail, "nope"));
        assert_eq!(
            result.get_error(Field::WorkEmail).map(|e| e.message.as_str()),
            Some("Work Email must be a valid email address (e.g., user@domain.com).")
        );
        assert!(result.get_error(Field::Name).is_none());
        assert_eq!(result.get_errors(Field::WorkEmail).count(), 1);
    }

    #[test]
    fn test_personal_email_deferred_when_not_required() {
        let validator = Validator::new(RuleConfig {
            require_personal_email: false,
            ..RuleConfig::default()
        });
        let result = validator.validate(&valid_form().with(Field::PersonalEmail, "  "));
        assert!(result.is_valid());
    }

    #[test]
    fn test_custom_limits_flow_into_messages() {
        let validator = Validator::new(RuleConfig {
            message_max_length: 5,
            phone_digits: 4,
            ..RuleConfig::default()
        });
        assert_eq!(validator.rules().message_max_length, 5);
        assert_eq!(Validator::default().rules(), &RuleConfig::default());
        let result = validator.validate(&valid_form().with(Field::Message, "Hi there"));
        assert_eq!(
            result.messages(),
            vec![
                "Phone Number must be exactly 4 digits and numeric only (e.g., 1234).",
                "Message must be 5 characters or less (currently 8 characters).",
            ]
        );
    }

    #[test]
    fn test_display_is_message() {
        let error = ValidationError::new(Field::Name, "Name is required.");
        assert_eq!(error.to_string(), "Name is required.");
    }
}
