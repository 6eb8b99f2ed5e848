use crate::Rect;

/// Geometry of the circle drawn when a button is clicked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Centers a circle covering the whole button on the click position.
    /// `x`/`y` and `button` share a coordinate space.
    pub fn at(x: f64, y: f64, button: Rect) -> Self {
        let size = button.width.max(button.height);
        Self {
            size,
            left: x - button.left - size / 2.0,
            top: y - button.top - size / 2.0,
        }
    }
}
