use crossterm::style::Color;

/// Design tokens for the web-icons CLI UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const SKIP: &str = "○";

    // Command identifiers (used in headers).
    pub const GENERATE: &str = "🎨";
    pub const FOLDER: &str = "📁";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const SKIP: &str = "[SKIP]";

    pub const GENERATE: &str = "[ICONS]";
    pub const FOLDER: &str = "[DIR]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_icons_are_plain_ascii() {
        for icon in [
            icons_ascii::SUCCESS,
            icons_ascii::ERROR,
            icons_ascii::WARNING,
            icons_ascii::PROGRESS,
            icons_ascii::SKIP,
            icons_ascii::GENERATE,
            icons_ascii::FOLDER,
        ] {
            assert!(icon.is_ascii(), "{icon} is not ascii");
        }
    }
}
