// File: src/field.rs
// Purpose: Contact form field names and the values read from them

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A recognised contact form field
///
/// Variants are declared in evaluation order, which is also the order
/// errors are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Surname,
    PersonalEmail,
    WorkEmail,
    Phone,
    Message,
}

impl Field {
    /// Every field, in evaluation order
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Surname,
        Field::PersonalEmail,
        Field::WorkEmail,
        Field::Phone,
        Field::Message,
    ];

    /// The `name` attribute of the form input
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Surname => "surname",
            Field::PersonalEmail => "personal_email",
            Field::WorkEmail => "work_email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    /// Human-readable label used in error messages
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Surname => "Surname",
            Field::PersonalEmail => "Personal Email",
            Field::WorkEmail => "Work Email",
            Field::Phone => "Phone Number",
            Field::Message => "Message",
        }
    }

    /// Look up a field by its form key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Text read from a single input at validation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValue<'a> {
    raw: &'a str,
}

impl<'a> FieldValue<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Text with leading/trailing whitespace removed, including U+FEFF
    pub fn trimmed(&self) -> &'a str {
        crate::validation::validators::trim_form_value(self.raw)
    }

    /// Length of the untrimmed text in UTF-16 code units, the unit browsers
    /// report for input values
    pub fn len(&self) -> usize {
        crate::validation::validators::utf16_len(self.raw)
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// True when the value is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

/// Current values of the contact form, keyed by input name
///
/// Missing fields read as empty strings, so a required field that was never
/// submitted goes through the normal required check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, value)` pairs; later pairs win
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a JSON object of field values
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse form values as a JSON object")
    }

    /// Parse an `application/x-www-form-urlencoded` body, as produced by a
    /// native form submission
    pub fn from_urlencoded(body: &str) -> Result<Self> {
        let mut values = HashMap::new();

        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            // '+' encodes a space in form bodies; urlencoding only handles %XX
            let key = urlencoding::decode(&key.replace('+', " "))
                .with_context(|| format!("Invalid percent-encoding in key: {}", key))?
                .into_owned();
            let value = urlencoding::decode(&value.replace('+', " "))
                .with_context(|| format!("Invalid percent-encoding in value for: {}", key))?
                .into_owned();
            values.insert(key, value);
        }

        Ok(Self { values })
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field.key().to_string(), value.into());
    }

    /// Builder-style variant of [`FormValues::set`]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Raw text of a field, or `""` when it is absent
    pub fn get(&self, field: Field) -> &str {
        self.values.get(field.key()).map(String::as_str).unwrap_or("")
    }

    pub fn value(&self, field: Field) -> FieldValue<'_> {
        FieldValue::new(self.get(field))
    }

    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(field.key())
    }

    /// Number of recognised fields present
    pub fn len(&self) -> usize {
        Field::ALL.iter().filter(|f| self.contains(**f)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
