//! Blocking delete confirmation on the terminal.

use crate::theme::{Role, Theme};
use log::warn;
use sidenote_core::view::display_title;
use sidenote_core::{ConfirmDelete, Note};
use std::io::{BufRead, Write};

/// Asks `Delete "<title>"? [y/N]` and reads one answer line.
///
/// Anything but `y`/`yes` declines, including end of input and I/O errors.
pub struct PromptConfirm<'a, R, W> {
    pub input: &'a mut R,
    pub output: &'a mut W,
    pub theme: &'a Theme,
}

impl<R: BufRead, W: Write> PromptConfirm<'_, R, W> {
    fn ask(&mut self, note: &Note) -> std::io::Result<bool> {
        let question = format!("Delete \"{}\"? [y/N] ", display_title(&note.title));
        write!(self.output, "{}", self.theme.paint(&question, Role::Danger))?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

impl<R: BufRead, W: Write> ConfirmDelete for PromptConfirm<'_, R, W> {
    fn confirm_delete(&mut self, note: &Note) -> bool {
        match self.ask(note) {
            Ok(accepted) => accepted,
            Err(err) => {
                warn!("event=delete_confirm module=cli status=error error={err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PromptConfirm;
    use crate::theme::Theme;
    use sidenote_core::{ConfirmDelete, Note};
    use std::io::Cursor;
    use uuid::Uuid;

    fn note() -> Note {
        Note {
            id: Uuid::new_v4(),
            title: "Taxes".to_string(),
            content: "x".to_string(),
            created_at: 1,
            updated_at: 1,
        }
    }

    fn answer(input: &str) -> (bool, String) {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let theme = Theme::plain();
        let accepted = PromptConfirm {
            input: &mut input,
            output: &mut output,
            theme: &theme,
        }
        .confirm_delete(&note());
        (accepted, String::from_utf8(output).unwrap())
    }

    #[test]
    fn yes_accepts_and_prompt_names_the_note() {
        let (accepted, prompt) = answer("YES\n");
        assert!(accepted);
        assert_eq!(prompt, "Delete \"Taxes\"? [y/N] ");
    }

    #[test]
    fn anything_else_declines() {
        assert!(!answer("n\n").0);
        assert!(!answer("\n").0);
        assert!(!answer("").0);
    }
}
