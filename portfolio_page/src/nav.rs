use serde::Serialize;

/// State of the collapsible mobile navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// The hamburger button was clicked.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link inside the menu was clicked.
    pub fn link_clicked(&mut self) {
        self.open = false;
    }

    /// CSS class applied to both the hamburger icon and the menu.
    pub fn class(self) -> Option<&'static str> {
        self.open.then_some("active")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.class(), Some("active"));

        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(menu.class(), None);
    }

    #[test]
    fn link_click_closes() {
        let mut menu = NavMenu::default();
        menu.toggle();

        menu.link_clicked();
        assert!(!menu.is_open());

        menu.link_clicked();
        assert!(!menu.is_open());
    }
}
