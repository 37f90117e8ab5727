// File: src/trigger.rs
// Purpose: Submit and reset handling, independent of any host UI

use crate::field::FormValues;
use crate::panel::ErrorPanel;
use crate::validation::{ValidationResult, Validator};

/// Whether a submission may proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
}

/// Everything the host needs after a submit trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub result: ValidationResult,
    pub panel: ErrorPanel,
    pub verdict: Verdict,
}

impl SubmitOutcome {
    /// The host must cancel navigation/network submission when true
    pub fn should_prevent_default(&self) -> bool {
        self.verdict == Verdict::Reject
    }
}

/// Validate the current values and decide on the submission
pub fn on_submit(validator: &Validator, values: &FormValues) -> SubmitOutcome {
    let result = validator.validate(values);
    let panel = ErrorPanel::from_result(&result);
    let verdict = if result.is_valid() {
        Verdict::Accept
    } else {
        Verdict::Reject
    };

    tracing::debug!(?verdict, "contact form submit");

    SubmitOutcome {
        result,
        panel,
        verdict,
    }
}

/// Panel state once the host has cleared the inputs
///
/// The host schedules this after `UiConfig::reset_delay`.
pub fn on_reset() -> ErrorPanel {
    ErrorPanel::cleared()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    #[test]
    fn test_reject_prevents_default() {
        let outcome = on_submit(&Validator::default(), &FormValues::new());
        assert_eq!(outcome.verdict, Verdict::Reject);
        assert!(outcome.should_prevent_default());
        assert!(outcome.panel.is_visible());
        assert_eq!(outcome.panel.messages().len(), outcome.result.errors().len());
    }

    #[test]
    fn test_accept_hides_panel() {
        let values = FormValues::from_pairs([
            ("name", "Jane"),
            ("surname", "Doe"),
            ("personal_email", "jane@doe.com"),
            ("message", "Hello"),
        ]);
        let outcome = on_submit(&Validator::default(), &values);
        assert_eq!(outcome.verdict, Verdict::Accept);
        assert!(!outcome.should_prevent_default());
        assert_eq!(outcome.panel, ErrorPanel::Hidden);
        assert!(!values.contains(Field::Phone));
    }

    #[test]
    fn test_reset_clears() {
        assert!(!on_reset().is_visible());
    }
}
