use portfolio_models::contact::{ContactFormField, ContactFormState, FormField, SubmissionState};
use serde::Serialize;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormView {
    pub fields: Vec<FieldView>,
    pub submit: SubmitButtonView,
    pub notification: Option<NotificationView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: ContactFormField,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub border: BorderColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderColor {
    Default,
    Error,
}

impl BorderColor {
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Error => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButtonView {
    pub label: &'static str,
    pub disabled: bool,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationView {
    pub message: String,
}

impl From<&ContactFormState> for ContactFormView {
    fn from(state: &ContactFormState) -> Self {
        let submitting = state.submission == SubmissionState::Submitting;
        Self {
            fields: ContactFormField::ALL
                .into_iter()
                .map(|field| FieldView::new(field, state.form.field(field)))
                .collect(),
            submit: SubmitButtonView {
                label: if submitting {
                    SUBMITTING_LABEL
                } else {
                    SUBMIT_LABEL
                },
                disabled: submitting,
                loading: submitting,
            },
            notification: state.notification.as_ref().map(|notification| NotificationView {
                message: notification.message.clone(),
            }),
        }
    }
}

impl FieldView {
    fn new(field: ContactFormField, form_field: &FormField) -> Self {
        Self {
            field,
            label: field.label(),
            value: form_field.value.clone(),
            error: form_field.error.map(|err| err.to_string()),
            border: match form_field.error {
                Some(_) => BorderColor::Error,
                None => BorderColor::Default,
            },
        }
    }
}
