//! Presentation of the contact form state.
//!
//! The views in this crate are plain data derived from
//! [`ContactFormState`](portfolio_models::contact::ContactFormState).
//! A [`Renderer`] turns them into something visible and [`bind`] keeps a
//! renderer in sync with a state channel.

pub use binding::{bind, Binding, Renderer};
pub use text::TextRenderer;
pub use view::{
    BorderColor, ContactFormView, FieldView, NotificationView, SubmitButtonView,
};

mod binding;
mod text;
mod view;
