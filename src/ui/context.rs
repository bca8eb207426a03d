use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Rendering decisions for one run, derived from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new() -> Self {
        Self::from_caps(detect_capabilities())
    }

    pub(crate) fn from_caps(caps: TerminalCapabilities) -> Self {
        Self {
            color: caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
        }
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}
