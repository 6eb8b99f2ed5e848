use std::{sync::Arc, time::Duration};

use portfolio_core_contact_contracts::{ContactFormFeatureService, ContactFormSubmitError};
use portfolio_models::{
    contact::{
        ContactFormField, ContactFormInput, ContactFormState, ContactMessage, SubmissionState,
        ValidationResult,
    },
    notification::{Notification, NotificationId},
};
use portfolio_shared_contracts::{id::IdService, time::TimeService};
use portfolio_utils::trace_instrument;
use tokio::{
    sync::{watch, Mutex},
    task::JoinSet,
};
use tracing::{debug, info};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct ContactFormFeatureServiceImpl<Time, Id> {
    time: Time,
    id: Id,
    config: ContactFormFeatureConfig,
    state: Arc<watch::Sender<ContactFormState>>,
    timers: Arc<Mutex<JoinSet<()>>>,
}

#[derive(Debug, Clone)]
pub struct ContactFormFeatureConfig {
    /// Simulated latency of a submission.
    pub submission_delay: Duration,
    /// Time after which a notification is removed automatically.
    pub notification_duration: Duration,
    pub success_message: String,
}

impl<Time, Id> ContactFormFeatureServiceImpl<Time, Id> {
    pub fn new(time: Time, id: Id, config: ContactFormFeatureConfig) -> Self {
        Self {
            time,
            id,
            config,
            state: Arc::new(watch::Sender::new(ContactFormState::default())),
            timers: Default::default(),
        }
    }

    /// Abort all pending notification timers.
    ///
    /// Dropping the last clone of the service has the same effect.
    pub async fn shutdown(&self) {
        self.timers.lock().await.shutdown().await;
    }
}

impl<Time, Id> ContactFormFeatureServiceImpl<Time, Id>
where
    Time: TimeService,
    Id: IdService,
{
    /// Simulated transport. Always succeeds after the configured delay.
    async fn send(&self, message: &ContactMessage) {
        debug!(
            name = message.name.as_str(),
            email = message.email.as_str(),
            "sending contact message"
        );
        tokio::time::sleep(self.config.submission_delay).await;
    }

    async fn schedule_dismissal(&self, notification_id: NotificationId) {
        let state = Arc::clone(&self.state);
        let duration = self.config.notification_duration;

        let mut timers = self.timers.lock().await;
        while timers.try_join_next().is_some() {}
        timers.spawn(async move {
            tokio::time::sleep(duration).await;
            if dismiss(&state, Some(notification_id)) {
                debug!(notification_id = %notification_id.into_inner(), "notification expired");
            }
        });
    }
}

impl<Time, Id> ContactFormFeatureService for ContactFormFeatureServiceImpl<Time, Id>
where
    Time: TimeService,
    Id: IdService,
{
    #[trace_instrument(skip(self))]
    fn update_field(&self, field: ContactFormField, value: String) {
        self.state.send_if_modified(|state| {
            let slot = state.form.field_mut(field);
            if slot.value == value {
                return false;
            }
            if slot.error.is_some() {
                slot.set_result(field.validate(&value));
            }
            slot.value = value;
            true
        });
    }

    #[trace_instrument(skip(self))]
    fn validate_field(&self, field: ContactFormField, value: String) -> ValidationResult {
        let result = field.validate(&value);
        self.state.send_modify(|state| {
            let slot = state.form.field_mut(field);
            slot.value = value;
            slot.set_result(result);
        });
        result
    }

    #[trace_instrument(skip(self))]
    fn validate_all(&self, input: ContactFormInput) -> bool {
        let validation = input.validate();
        self.state
            .send_modify(|state| state.form.apply(&input, &validation));
        validation.is_valid()
    }

    #[trace_instrument(skip(self))]
    async fn submit(&self, input: ContactFormInput) -> Result<Notification, ContactFormSubmitError> {
        let validation = input.validate();
        self.state
            .send_modify(|state| state.form.apply(&input, &validation));

        let message = ContactMessage::try_from(&input).map_err(|validation| {
            debug!(errors = ?validation.errors().collect::<Vec<_>>(), "rejected submission");
            ContactFormSubmitError::Invalid(validation)
        })?;

        let started = self.state.send_if_modified(|state| {
            if state.submission == SubmissionState::Submitting {
                return false;
            }
            state.submission = SubmissionState::Submitting;
            state.notification = None;
            true
        });
        if !started {
            return Err(ContactFormSubmitError::InProgress);
        }
        let guard = SubmittingGuard {
            state: &self.state,
        };

        self.send(&message).await;

        let notification = Notification {
            id: self.id.notification_id(),
            message: self.config.success_message.clone(),
            created_at: self.time.now(),
        };

        self.state.send_modify(|state| {
            state.form.clear();
            state.submission = SubmissionState::Succeeded;
            state.notification = Some(notification.clone());
        });
        guard.disarm();
        info!(notification_id = %notification.id.into_inner(), "contact message sent");

        self.schedule_dismissal(notification.id).await;

        Ok(notification)
    }

    #[trace_instrument(skip(self))]
    fn dismiss_notification(&self) {
        dismiss(&self.state, None);
    }

    fn state(&self) -> ContactFormState {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<ContactFormState> {
        self.state.subscribe()
    }
}

/// Resets [`SubmissionState::Submitting`] to [`SubmissionState::Idle`] when a
/// submission is dropped before it completes.
struct SubmittingGuard<'a> {
    state: &'a watch::Sender<ContactFormState>,
}

impl SubmittingGuard<'_> {
    fn disarm(self) {
        std::mem::forget(self);
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        let reset = self.state.send_if_modified(|state| {
            if state.submission != SubmissionState::Submitting {
                return false;
            }
            state.submission = SubmissionState::Idle;
            true
        });
        if reset {
            debug!("submission cancelled");
        }
    }
}

/// Remove the visible notification and return to [`SubmissionState::Idle`].
///
/// If `only` is set, nothing happens unless the visible notification has that
/// id. Returns whether anything changed.
fn dismiss(state: &watch::Sender<ContactFormState>, only: Option<NotificationId>) -> bool {
    state.send_if_modified(|state| {
        let Some(notification) = &state.notification else {
            return false;
        };
        if only.is_some_and(|id| id != notification.id) {
            return false;
        }
        state.notification = None;
        if state.submission == SubmissionState::Succeeded {
            state.submission = SubmissionState::Idle;
        }
        true
    })
}
