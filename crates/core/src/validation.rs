//! Field-level validation for the admin "add store" and "add user" forms.
//!
//! Every rule is checked independently and all failures are reported
//! together, so the form can show one message under each bad field.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::types::{Email, Role};

/// Form field names, as submitted by the HTML forms.
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const ADDRESS: &str = "address";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirm_password";
}

pub const USER_NAME_MIN: usize = 20;
pub const USER_NAME_MAX: usize = 60;
pub const STORE_NAME_MIN: usize = 3;
pub const STORE_NAME_MAX: usize = 60;
pub const ADDRESS_MAX: usize = 400;

pub const USER_NAME_MESSAGE: &str = "Name must be between 20 and 60 characters";
pub const STORE_NAME_MESSAGE: &str = "Store name must be between 3 and 60 characters";
pub const ADDRESS_MESSAGE: &str = "Address must be less than 400 characters";
pub const PASSWORD_MESSAGE: &str =
    "Password must be 8-16 characters with at least one uppercase letter and one special character";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const CONFIRM_PASSWORD_MESSAGE: &str = "Passwords do not match";

/// Allowed password alphabet and length.
static PASSWORD_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9!@#$%^&*]{8,16}$").expect("Invalid regex"));

static UPPERCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("Invalid regex"));

static SPECIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!@#$%^&*]").expect("Invalid regex"));

/// Validation messages keyed by field, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    /// Create an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record a message for a field, replacing any previous one.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        if let Some(entry) = self.errors.iter_mut().find(|(f, _)| *f == field) {
            entry.1 = message;
        } else {
            self.errors.push((field, message));
        }
    }

    /// The message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    /// Whether the field failed.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Whether every field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Submitted "add user" form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUserForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Submitted "add store" form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewStoreForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Length of `text` in UTF-16 code units, the unit browsers count form
/// input in. Characters outside the Basic Multilingual Plane count as two.
fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Whether the length of `text` falls within `min..=max`.
fn length_within(text: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&text_length(text))
}

/// Whether an address is short enough.
#[must_use]
pub fn is_valid_address(address: &str) -> bool {
    text_length(address) <= ADDRESS_MAX
}

/// Whether a password is 8-16 allowed characters with an uppercase letter
/// and one of `!@#$%^&*`.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_CHARSET_RE.is_match(password)
        && UPPERCASE_RE.is_match(password)
        && SPECIAL_RE.is_match(password)
}

/// Checks shared by both forms: address, password, email, confirmation.
fn validate_account_fields(
    errors: &mut FieldErrors,
    email: &str,
    address: &str,
    password: &str,
    confirm_password: &str,
) {
    if !is_valid_address(address) {
        errors.insert(fields::ADDRESS, ADDRESS_MESSAGE);
    }

    if !is_valid_password(password) {
        errors.insert(fields::PASSWORD, PASSWORD_MESSAGE);
    }

    if Email::parse(email).is_err() {
        errors.insert(fields::EMAIL, EMAIL_MESSAGE);
    }

    if password != confirm_password {
        errors.insert(fields::CONFIRM_PASSWORD, CONFIRM_PASSWORD_MESSAGE);
    }
}

/// Validate the "add user" form.
///
/// # Errors
///
/// Returns every failed field with its message.
pub fn validate_new_user(form: &NewUserForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if !length_within(&form.name, USER_NAME_MIN, USER_NAME_MAX) {
        errors.insert(fields::NAME, USER_NAME_MESSAGE);
    }

    validate_account_fields(
        &mut errors,
        &form.email,
        &form.address,
        &form.password,
        &form.confirm_password,
    );

    errors.into_result()
}

/// Validate the "add store" form.
///
/// # Errors
///
/// Returns every failed field with its message.
pub fn validate_new_store(form: &NewStoreForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if !length_within(&form.name, STORE_NAME_MIN, STORE_NAME_MAX) {
        errors.insert(fields::NAME, STORE_NAME_MESSAGE);
    }

    validate_account_fields(
        &mut errors,
        &form.email,
        &form.address,
        &form.password,
        &form.confirm_password,
    );

    errors.into_result()
}
