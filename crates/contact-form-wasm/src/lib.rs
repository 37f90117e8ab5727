//! Contact Form WASM
//!
//! WebAssembly bindings for the contact form validator.
//! Runs the same rules in the browser that `contact-form` exposes to Rust.

use contact_form::validation::validators;
use contact_form::{Config, ErrorPanel, FormValues, RuleConfig, ValidationError, Validator};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod dom;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validation outcome returned to JavaScript
#[derive(Serialize, Debug, Clone)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// `undefined`/`null` mean "use the defaults"
fn from_js_or_default<T: DeserializeOwned + Default>(value: JsValue, what: &str) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse {}: {}", what, e)))
}

/// Validate a plain object of field values
///
/// # Arguments
/// * `values` - Object mapping field names to their text
/// * `rules` - Optional object overriding the rule limits
///
/// # Example (JavaScript)
/// ```javascript
/// const report = validateContactForm({
///     name: 'Jane',
///     surname: 'Doe',
///     personal_email: 'jane@doe.com',
///     message: 'Hi there'
/// });
/// // { valid: true, errors: [] }
/// ```
#[wasm_bindgen(js_name = validateContactForm)]
pub fn validate_contact_form(values: JsValue, rules: JsValue) -> Result<JsValue, JsValue> {
    let values: FormValues = from_js_or_default(values, "form values")?;
    let rules: RuleConfig = from_js_or_default(rules, "rules")?;

    let result = Validator::new(rules).validate(&values);
    let report = ValidationReport {
        valid: result.is_valid(),
        errors: result.into_errors(),
    };

    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// Escaped error panel HTML for an array of messages
#[wasm_bindgen(js_name = renderErrors)]
pub fn render_errors(messages: JsValue) -> Result<String, JsValue> {
    let messages: Vec<String> = from_js_or_default(messages, "messages")?;
    Ok(ErrorPanel::from_messages(messages).to_html())
}

/// Bind validation to the page's contact form
///
/// # Example (JavaScript)
/// ```javascript
/// attachContactForm({ ui: { form_name: 'ContactUs', reset_delay_ms: 50 } });
/// ```
#[wasm_bindgen(js_name = attachContactForm)]
pub fn attach_contact_form(config: JsValue) -> Result<(), JsValue> {
    let config: Config = from_js_or_default(config, "config")?;
    dom::attach(Validator::new(config.rules), config.ui)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    validators::is_valid_email(validators::trim_form_value(email))
}

/// Quick phone validation
#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(phone: &str) -> bool {
    validators::is_ten_digit_phone(validators::trim_form_value(phone))
}
