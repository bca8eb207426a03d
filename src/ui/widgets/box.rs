use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderSet;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Error,
}

/// Bordered panel sized to its widest line
#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.content.extend(line.lines().map(str::to_string));
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let lines: Vec<&str> = self
            .title
            .iter()
            .chain(self.content.iter())
            .map(String::as_str)
            .collect();

        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let border = BorderSet::for_terminal(supports_unicode);
        let v = color_border(border.vertical, supports_color, self.style);

        let mut out = String::new();
        let top = border.rule(border.top_left, border.top_right, inner_width);
        out.push_str(&color_border(&top, supports_color, self.style));
        out.push('\n');

        for line in &lines {
            let pad = inner_width - 1 - visible_width(line);
            out.push_str(&format!("{v} {line}{}{v}\n", " ".repeat(pad)));
        }

        let bottom = border.rule(border.bottom_left, border.bottom_right, inner_width);
        out.push_str(&color_border(&bottom, supports_color, self.style));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool, style: BoxStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        BoxStyle::Info => theme::colors::INFO,
        BoxStyle::Success => theme::colors::SUCCESS,
        BoxStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        // ESC [ ... <final letter>
        if matches!(chars.peek(), Some('[') | Some(']')) {
            chars.next();
        }
        for next in chars.by_ref() {
            if next.is_ascii_alphabetic() {
                break;
            }
        }
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_splits_multiline_content_into_rows() {
        let mut b = Box::with_title("TITLE");
        b.add_line("Line1\nLine2");
        let rendered = b.render(false, true);

        let line2 = rendered
            .lines()
            .find(|l| l.contains("Line2"))
            .expect("expected Line2 to appear in output");
        assert!(line2.starts_with(BorderSet::for_terminal(true).vertical));
    }

    #[test]
    fn rows_share_the_same_width_despite_ansi_codes() {
        let mut b = Box::with_title("T");
        b.add_line(format!("{}", "colored".with(theme::colors::INFO)));
        b.add_line("plain text line");
        let rendered = b.render(false, false);

        let widths: Vec<usize> = rendered.lines().map(visible_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{rendered}");
    }
}
