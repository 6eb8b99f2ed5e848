/// A page section that a navigation link points to.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Returns the id of the section whose navigation link should be highlighted.
///
/// This is the last section in document order whose top, shifted up by
/// `offset`, has been scrolled past.
pub fn active_section(sections: &[Section], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - offset)
        .map(|section| section.id.as_str())
}

pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Vertical translation of the hero background for a parallax effect.
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}
