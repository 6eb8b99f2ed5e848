//! Browser independent versions of the page handlers that live next to the
//! contact form: navigation, scroll effects, reveal animations and the like.
//!
//! None of these exchange data with the contact form.

pub mod debounce;
pub mod focus;
pub mod nav;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod typewriter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
