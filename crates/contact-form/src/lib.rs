//! Contact form validation
//!
//! Pure rules for the contact form (name, surname, personal and work email,
//! phone, message), the error panel they feed, and the submit/reset
//! triggers. Nothing here touches the DOM; `contact-form-wasm` binds it to a
//! live page.
//!
//! ```
//! use contact_form::{validate, Field, FormValues};
//!
//! let values = FormValues::new()
//!     .with(Field::Name, "Jane")
//!     .with(Field::Surname, "Doe")
//!     .with(Field::PersonalEmail, "jane@doe.com")
//!     .with(Field::Message, "Hi there");
//!
//! assert!(validate(&values).is_valid());
//! ```

pub mod config;
pub mod field;
pub mod panel;
pub mod trigger;
pub mod validation;

pub use config::{Config, RuleConfig, UiConfig};
pub use field::{Field, FieldValue, FormValues};
pub use panel::ErrorPanel;
pub use trigger::{on_reset, on_submit, SubmitOutcome, Verdict};
pub use validation::{validate, ValidationError, ValidationResult, Validator};
