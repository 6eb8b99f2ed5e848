use std::{
    fmt::Write as _,
    io::{self, Write},
    sync::Mutex,
};

use crate::{BorderColor, ContactFormView, Renderer};

/// Writes a plain text rendition of every view to a writer.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: Mutex<W>,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send + 'static> Renderer for TextRenderer<W> {
    fn render(&self, view: &ContactFormView) {
        let text = render_text(view);
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(err) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!("Failed to render contact form: {err}");
        }
    }
}

pub fn render_text(view: &ContactFormView) -> String {
    let mut out = String::new();
    for field in &view.fields {
        let marker = match field.border {
            BorderColor::Default => ' ',
            BorderColor::Error => '!',
        };
        let _ = writeln!(out, "{marker} {:<8} {:?}", field.label, field.value);
        if let Some(error) = &field.error {
            let _ = writeln!(out, "           {error}");
        }
    }
    let _ = writeln!(
        out,
        "  [{}]{}",
        view.submit.label,
        if view.submit.disabled {
            " (disabled)"
        } else {
            ""
        }
    );
    if let Some(notification) = &view.notification {
        let _ = writeln!(out, "  >> {}", notification.message);
    }
    out
}

#[cfg(test)]
mod tests {
    use portfolio_demo::contact::{INVALID, NOTIFICATION_1};
    use portfolio_models::contact::{ContactForm, ContactFormState, SubmissionState};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn invalid_form() {
        // Arrange
        let mut form = ContactForm::default();
        form.apply(&INVALID, &INVALID.validate());
        let view = ContactFormView::from(&ContactFormState {
            form,
            ..Default::default()
        });

        // Act
        let text = render_text(&view);

        // Assert
        assert_eq!(
            text,
            "! Name     \"J\"\n           Name must be at least 2 characters long\n\
             ! Email    \"bad\"\n           Please enter a valid email address\n\
             ! Message  \"short\"\n           Message must be at least 10 characters long\n\
             \x20 [Send Message]\n"
        );
    }

    #[test]
    fn succeeded_to_writer() {
        // Arrange
        let sut = TextRenderer::new(Vec::new());
        let view = ContactFormView::from(&ContactFormState {
            submission: SubmissionState::Succeeded,
            notification: Some(NOTIFICATION_1.clone()),
            ..Default::default()
        });

        // Act
        sut.render(&view);

        // Assert
        let text = String::from_utf8(sut.into_inner()).unwrap();
        assert!(text.ends_with(&format!("  >> {}\n", NOTIFICATION_1.message)));
    }
}
