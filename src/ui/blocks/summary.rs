use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    stats: Vec<(String, usize)>,
    infos: Vec<String>,
    warnings: Vec<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stats: Vec::new(),
            infos: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    /// Add an informational message (shown with success icon)
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(self.title.as_str())
                .bold()
                .render(supports_color)
        );

        let mut b = Box::with_title(header).style(BoxStyle::Success);
        b.add_empty();

        for (label, count) in &self.stats {
            b.add_line(format!("{} {}", count, label));
        }

        if !self.infos.is_empty() {
            b.add_empty();
            for info in &self.infos {
                b.add_line(format!(
                    "{} {}",
                    Icon::Success.colored(supports_color, supports_unicode),
                    info
                ));
            }
        }

        if !self.warnings.is_empty() {
            b.add_empty();
            for warning in &self.warnings {
                b.add_line(format!(
                    "{} {}",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    warning
                ));
            }
        }

        b.render(supports_color, supports_unicode)
    }
}
