use portfolio_models::contact::ContactFormState;
use tokio::{sync::watch, task::JoinHandle};
use tracing::debug;

use crate::ContactFormView;

#[cfg_attr(test, mockall::automock)]
pub trait Renderer: Send + Sync + 'static {
    fn render(&self, view: &ContactFormView);
}

/// Keeps a [`Renderer`] in sync with a state channel until dropped.
#[derive(Debug)]
#[must_use = "dropping the binding stops rendering"]
pub struct Binding {
    task: JoinHandle<()>,
}

impl Binding {
    /// Stop rendering.
    pub fn unbind(self) {}

    /// Whether the state channel is still open.
    pub fn is_bound(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for Binding {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Render the current state and then every change of it.
///
/// Rendering stops when the returned [`Binding`] is dropped or the sending
/// side of the channel goes away.
pub fn bind(
    mut receiver: watch::Receiver<ContactFormState>,
    renderer: impl Renderer,
) -> Binding {
    let task = tokio::spawn(async move {
        loop {
            let view = ContactFormView::from(&*receiver.borrow_and_update());
            renderer.render(&view);
            if receiver.changed().await.is_err() {
                debug!("contact form state closed");
                break;
            }
        }
    });
    Binding { task }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use portfolio_models::contact::SubmissionState;

    use super::*;
    use crate::view::{SUBMITTING_LABEL, SUBMIT_LABEL};

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<ContactFormView>>>);

    impl Renderer for Recorder {
        fn render(&self, view: &ContactFormView) {
            self.0.lock().unwrap().push(view.clone());
        }
    }

    impl Recorder {
        fn labels(&self) -> Vec<&'static str> {
            self.0
                .lock()
                .unwrap()
                .iter()
                .map(|view| view.submit.label)
                .collect()
        }
    }

    #[tokio::test]
    async fn renders_initial_state() {
        // Arrange
        let (_sender, receiver) = watch::channel(ContactFormState::default());
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .once()
            .withf(|view| view.submit.label == SUBMIT_LABEL && view.notification.is_none())
            .return_const(());

        // Act
        let binding = bind(receiver, renderer);
        tokio::task::yield_now().await;

        // Assert
        assert!(binding.is_bound());
    }

    #[tokio::test]
    async fn renders_changes() {
        // Arrange
        let (sender, receiver) = watch::channel(ContactFormState::default());
        let recorder = Recorder::default();
        let binding = bind(receiver, recorder.clone());
        tokio::task::yield_now().await;

        // Act
        sender.send_modify(|state| state.submission = SubmissionState::Submitting);
        tokio::task::yield_now().await;
        sender.send_modify(|state| state.submission = SubmissionState::Succeeded);
        tokio::task::yield_now().await;

        // Assert
        assert_eq!(
            recorder.labels(),
            [SUBMIT_LABEL, SUBMITTING_LABEL, SUBMIT_LABEL]
        );
        drop(binding);
    }

    #[tokio::test]
    async fn unbind_stops_rendering() {
        // Arrange
        let (sender, receiver) = watch::channel(ContactFormState::default());
        let recorder = Recorder::default();
        let binding = bind(receiver, recorder.clone());
        tokio::task::yield_now().await;

        // Act
        binding.unbind();
        tokio::task::yield_now().await;
        sender.send_modify(|state| state.submission = SubmissionState::Submitting);
        tokio::task::yield_now().await;

        // Assert
        assert_eq!(recorder.labels(), [SUBMIT_LABEL]);
    }

    #[tokio::test]
    async fn stops_when_sender_is_dropped() {
        // Arrange
        let (sender, receiver) = watch::channel(ContactFormState::default());
        let binding = bind(receiver, Recorder::default());
        tokio::task::yield_now().await;

        // Act
        drop(sender);
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;

        // Assert
        assert!(!binding.is_bound());
    }
}
