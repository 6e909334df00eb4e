//! Visual theme, built once and handed to the app at construction.

use crossterm::style::{Color, Stylize};

/// What a piece of text is, for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Accent,
    Muted,
    Danger,
    Selected,
}

/// Theme configuration for terminal rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub muted: Color,
    pub danger: Color,
    pub selected: Color,
    /// Maximum sidebar title width in characters.
    pub sidebar_width: usize,
    pub color: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            muted: Color::DarkGrey,
            danger: Color::Red,
            selected: Color::Yellow,
            sidebar_width: 32,
            color: true,
        }
    }
}

impl Theme {
    /// Theme without colors.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    pub fn paint(&self, text: &str, role: Role) -> String {
        if !self.color {
            return text.to_string();
        }
        let color = match role {
            Role::Accent => self.accent,
            Role::Muted => self.muted,
            Role::Danger => self.danger,
            Role::Selected => self.selected,
        };
        text.with(color).to_string()
    }

    /// Cuts `text` to the sidebar width, marking the cut with `…`.
    pub fn fit_sidebar(&self, text: &str) -> String {
        if text.chars().count() <= self.sidebar_width {
            return text.to_string();
        }
        let mut cut: String = text
            .chars()
            .take(self.sidebar_width.saturating_sub(1))
            .collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::{Role, Theme};

    #[test]
    fn plain_theme_does_not_emit_escape_codes() {
        assert_eq!(Theme::plain().paint("hi", Role::Danger), "hi");
    }

    #[test]
    fn fit_sidebar_truncates_by_chars() {
        let theme = Theme {
            sidebar_width: 4,
            ..Theme::plain()
        };
        assert_eq!(theme.fit_sidebar("abcd"), "abcd");
        assert_eq!(theme.fit_sidebar("äbcde"), "äbc…");
    }
}
