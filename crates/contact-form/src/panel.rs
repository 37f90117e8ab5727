// File: src/panel.rs
// Purpose: Error panel shown above the contact form

use crate::validation::{ValidationError, ValidationResult};
use maud::{html, Markup};

/// Heading rendered above the error list
pub const HEADING: &str = "Validation Errors:";

/// State of the error region
///
/// Rendering goes through maud, so every message is HTML-escaped and user
/// input echoed in a message can never inject markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ErrorPanel {
    /// Region hidden and emptied
    #[default]
    Hidden,
    /// Region shown with one list item per message
    Visible(Vec<String>),
}

impl ErrorPanel {
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        Self::from_messages(errors.iter().map(|e| e.message.clone()))
    }

    pub fn from_result(result: &ValidationResult) -> Self {
        Self::from_errors(result.errors())
    }

    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            Self::Hidden
        } else {
            Self::Visible(messages)
        }
    }

    /// Panel state after a form reset
    pub fn cleared() -> Self {
        Self::Hidden
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    pub fn messages(&self) -> &[String] {
        match self {
            Self::Hidden => &[],
            Self::Visible(messages) => messages,
        }
    }

    /// CSS `display` value for the region
    pub fn display_value(&self) -> &'static str {
        if self.is_visible() {
            "block"
        } else {
            "none"
        }
    }

    /// Inner markup of the region; empty when hidden
    pub fn render(&self) -> Markup {
        match self {
            Self::Hidden => html! {},
            Self::Visible(messages) => html! {
                strong { (HEADING) }
                ul {
                    @for message in messages {
                        li { (message) }
                    }
                }
            },
        }
    }

    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}
