use std::future::Future;

use portfolio_models::{
    contact::{ContactFormField, ContactFormInput, ContactFormState, FormValidation, ValidationResult},
    notification::Notification,
};
use thiserror::Error;
use tokio::sync::watch;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormFeatureService: Send + Sync + 'static {
    /// Store the current text of a field.
    ///
    /// The value is only validated if the field currently shows an error, so
    /// an error never outlives the text that caused it.
    fn update_field(&self, field: ContactFormField, value: String);

    /// Store the current text of a field and validate it.
    ///
    /// The field's error is replaced by the outcome, so a valid value clears
    /// any previous error immediately.
    fn validate_field(&self, field: ContactFormField, value: String) -> ValidationResult;

    /// Store and validate all three fields.
    ///
    /// Every field is validated, so all invalid fields are flagged at once.
    fn validate_all(&self, input: ContactFormInput) -> bool;

    /// Validate the form and, if every field is valid, perform the simulated
    /// send.
    ///
    /// On success the fields are cleared and the returned notification is
    /// shown until it is dismissed or expires.
    fn submit(
        &self,
        input: ContactFormInput,
    ) -> impl Future<Output = Result<Notification, ContactFormSubmitError>> + Send;

    /// Remove the visible notification, if any.
    fn dismiss_notification(&self);

    /// Return a snapshot of the current state.
    fn state(&self) -> ContactFormState;

    /// Observe every future state change.
    fn subscribe(&self) -> watch::Receiver<ContactFormState>;
}

#[derive(Debug, Error)]
pub enum ContactFormSubmitError {
    #[error("The contact form contains invalid fields.")]
    Invalid(FormValidation),
    #[error("A submission is already in progress.")]
    InProgress,
}

#[cfg(feature = "mock")]
impl MockContactFormFeatureService {
    pub fn with_validate_field(
        mut self,
        field: ContactFormField,
        value: String,
        result: ValidationResult,
    ) -> Self {
        self.expect_validate_field()
            .once()
            .with(
                mockall::predicate::eq(field),
                mockall::predicate::eq(value),
            )
            .return_const(result);
        self
    }

    pub fn with_submit(
        mut self,
        input: ContactFormInput,
        result: Result<Notification, ContactFormSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(input))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_subscribe(mut self, receiver: watch::Receiver<ContactFormState>) -> Self {
        self.expect_subscribe().once().return_once(move || receiver);
        self
    }
}
