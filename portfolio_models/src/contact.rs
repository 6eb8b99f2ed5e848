use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{macros::nutype_string, notification::Notification};

/// Some non-whitespace characters, an `@`, some more, a `.` and a non-empty
/// top level part. None of the segments may contain whitespace or another `@`.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

nutype_string!(ContactName(
    sanitize(trim),
    validate(len_char_min = ContactName::MIN_LENGTH)
));
impl ContactName {
    pub const MIN_LENGTH: usize = 2;
}

nutype_string!(ContactEmail(validate(regex = CONTACT_EMAIL_REGEX)));

nutype_string!(ContactContent(
    sanitize(trim),
    validate(len_char_min = ContactContent::MIN_LENGTH)
));
impl ContactContent {
    pub const MIN_LENGTH: usize = 10;
}

/// A message that passed validation of all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: ContactName,
    pub email: ContactEmail,
    pub content: ContactContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactFormField {
    Name,
    Email,
    Message,
}

impl ContactFormField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Validates `value` with the rule that belongs to this field.
    pub fn validate(self, value: &str) -> ValidationResult {
        match self {
            Self::Name => validate_name(value),
            Self::Email => validate_email(value),
            Self::Message => validate_message(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

impl ValidationError {
    pub fn field(self) -> ContactFormField {
        match self {
            Self::NameTooShort => ContactFormField::Name,
            Self::InvalidEmail => ContactFormField::Email,
            Self::MessageTooShort => ContactFormField::Message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "reason", rename_all = "lowercase")]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error(self) -> Option<ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(err) => Some(err),
        }
    }
}

impl<T> From<Result<T, ValidationError>> for ValidationResult {
    fn from(value: Result<T, ValidationError>) -> Self {
        match value {
            Ok(_) => Self::Valid,
            Err(err) => Self::Invalid(err),
        }
    }
}

pub fn validate_name(value: &str) -> ValidationResult {
    ContactName::try_new(value)
        .map_err(|_| ValidationError::NameTooShort)
        .into()
}

pub fn validate_email(value: &str) -> ValidationResult {
    ContactEmail::try_new(value)
        .map_err(|_| ValidationError::InvalidEmail)
        .into()
}

pub fn validate_message(value: &str) -> ValidationResult {
    ContactContent::try_new(value)
        .map_err(|_| ValidationError::MessageTooShort)
        .into()
}

/// The raw text of the three inputs, as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormInput {
    pub fn get(&self, field: ContactFormField) -> &str {
        match field {
            ContactFormField::Name => &self.name,
            ContactFormField::Email => &self.email,
            ContactFormField::Message => &self.message,
        }
    }

    /// Runs every field rule. All three results are always computed.
    pub fn validate(&self) -> FormValidation {
        FormValidation {
            name: validate_name(&self.name),
            email: validate_email(&self.email),
            message: validate_message(&self.message),
        }
    }
}

impl TryFrom<&ContactFormInput> for ContactMessage {
    type Error = FormValidation;

    fn try_from(input: &ContactFormInput) -> Result<Self, Self::Error> {
        match (
            ContactName::try_new(input.name.as_str()),
            ContactEmail::try_new(input.email.as_str()),
            ContactContent::try_new(input.message.as_str()),
        ) {
            (Ok(name), Ok(email), Ok(content)) => Ok(Self {
                name,
                email,
                content,
            }),
            _ => Err(input.validate()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValidation {
    pub name: ValidationResult,
    pub email: ValidationResult,
    pub message: ValidationResult,
}

impl FormValidation {
    pub fn get(&self, field: ContactFormField) -> ValidationResult {
        match field {
            ContactFormField::Name => self.name,
            ContactFormField::Email => self.email,
            ContactFormField::Message => self.message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.name.is_valid() && self.email.is_valid() && self.message.is_valid()
    }

    pub fn errors(&self) -> impl Iterator<Item = ValidationError> + '_ {
        ContactFormField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).error())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub value: String,
    pub error: Option<ValidationError>,
}

impl FormField {
    /// Replaces the error with the outcome of the latest validation.
    pub fn set_result(&mut self, result: ValidationResult) {
        self.error = result.error();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
}

impl ContactForm {
    pub fn field(&self, field: ContactFormField) -> &FormField {
        match field {
            ContactFormField::Name => &self.name,
            ContactFormField::Email => &self.email,
            ContactFormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactFormField) -> &mut FormField {
        match field {
            ContactFormField::Name => &mut self.name,
            ContactFormField::Email => &mut self.email,
            ContactFormField::Message => &mut self.message,
        }
    }

    pub fn input(&self) -> ContactFormInput {
        ContactFormInput {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            message: self.message.value.clone(),
        }
    }

    /// Stores all values of `input` together with their validation results.
    pub fn apply(&mut self, input: &ContactFormInput, validation: &FormValidation) {
        for field in ContactFormField::ALL {
            let slot = self.field_mut(field);
            slot.value = input.get(field).into();
            slot.set_result(validation.get(field));
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Everything the page needs to render the contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub submission: SubmissionState,
    pub notification: Option<Notification>,
}
