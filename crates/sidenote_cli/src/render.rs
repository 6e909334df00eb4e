//! Text rendering of the list and detail view models.

use crate::theme::{Role, Theme};
use sidenote_core::{DetailViewModel, ListViewModel};
use std::fmt::Write as _;

const RULE_CHAR: char = '─';

/// Draws the sidebar: search line, numbered entries or the empty state.
pub fn render_list(model: &ListViewModel, theme: &Theme) -> String {
    let mut out = String::new();
    let search = if model.search.is_empty() {
        theme.paint("(no filter)", Role::Muted)
    } else {
        model.search.clone()
    };
    let _ = writeln!(out, "{} {search}", theme.paint("search:", Role::Muted));

    if let Some(message) = &model.empty_message {
        let _ = writeln!(out, "  {}", theme.paint(message, Role::Muted));
        return out;
    }

    for (index, item) in model.items.iter().enumerate() {
        let marker = if item.selected { ">" } else { " " };
        let title = theme.fit_sidebar(&item.title);
        let title = if item.selected {
            theme.paint(&title, Role::Selected)
        } else {
            title
        };
        let _ = writeln!(
            out,
            "{marker}{:>3}. {title}  {}",
            index + 1,
            theme.paint(&item.date, Role::Muted)
        );
    }
    out
}

/// Draws the detail pane for any of its three modes.
pub fn render_detail(model: &DetailViewModel, theme: &Theme) -> String {
    let mut out = String::new();
    match model {
        DetailViewModel::Empty { prompt } => {
            let _ = writeln!(out, "{}", theme.paint(prompt, Role::Muted));
        }
        DetailViewModel::Viewing {
            title,
            content,
            updated,
        } => {
            let _ = writeln!(out, "{}", theme.paint(title, Role::Accent));
            let _ = writeln!(
                out,
                "{}",
                theme.paint(&format!("updated {updated}"), Role::Muted)
            );
            let _ = writeln!(out);
            let _ = writeln!(out, "{content}");
            let _ = writeln!(out, "{}", theme.paint("[edit]", Role::Muted));
        }
        DetailViewModel::Editing {
            title,
            content,
            is_new,
            can_delete,
        } => {
            let heading = if *is_new { "New note" } else { "Editing" };
            let _ = writeln!(out, "{}", theme.paint(heading, Role::Accent));
            let _ = writeln!(out, "title:   {title}");
            let _ = writeln!(out, "content:");
            for line in content.lines() {
                let _ = writeln!(out, "  {line}");
            }
            let mut actions = String::from("[save] [cancel]");
            if *can_delete {
                actions.push(' ');
                actions.push_str(&theme.paint("[delete]", Role::Danger));
            }
            let _ = writeln!(out, "{actions}");
        }
    }
    out
}

/// Horizontal separator as wide as the sidebar.
pub fn rule(theme: &Theme) -> String {
    let width = theme.sidebar_width + 16;
    theme.paint(&RULE_CHAR.to_string().repeat(width), Role::Muted)
}
