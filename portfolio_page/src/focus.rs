/// Whether focus outlines should be shown.
///
/// Pressing Tab switches to keyboard navigation, any mouse press switches
/// back to pointer mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusMode {
    #[default]
    Pointer,
    Keyboard,
}

impl FocusMode {
    pub const KEYBOARD_CLASS: &'static str = "keyboard-navigation";

    pub fn key_down(&mut self, key: &str) {
        if key == "Tab" {
            *self = Self::Keyboard;
        }
    }

    pub fn mouse_down(&mut self) {
        *self = Self::Pointer;
    }

    /// Class to put on `<body>`.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Pointer => None,
            Self::Keyboard => Some(Self::KEYBOARD_CLASS),
        }
    }
}
