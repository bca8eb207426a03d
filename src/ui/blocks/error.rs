use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed error with the thing that went wrong and how to fix it
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    subject: String,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut b = Box::with_title(ColoredText::error("ERROR").bold().render(supports_color))
            .style(BoxStyle::Error);

        b.add_line(self.subject.clone());
        b.add_empty();
        b.add_line(self.message.clone());

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}
