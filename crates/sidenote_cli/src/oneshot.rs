//! Non-interactive actions sharing the controller/store path.

use crate::config::Action;
use crate::prompt::PromptConfirm;
use crate::theme::{Role, Theme};
use anyhow::{bail, Context};
use sidenote_core::view::format::{list_date, updated_label};
use sidenote_core::{DeleteOutcome, Note, NoteDraft, NoteStore, NotesController};
use std::io::{BufRead, Write};

pub async fn run_action<S: NoteStore>(
    action: Action,
    mut controller: NotesController<S>,
    theme: &Theme,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    controller.load().await.context("failed to load notes")?;

    match action {
        Action::List { search } => {
            controller.set_search(search.unwrap_or_default());
            for note in controller.visible_notes() {
                writeln!(
                    output,
                    "{}  {}  {}",
                    note.id,
                    theme.paint(&list_date(note.updated_at), Role::Muted),
                    note.title
                )?;
            }
        }
        Action::Show { id } => {
            let Some(note) = controller.store().get_by_id(id).await? else {
                bail!("note not found: {id}");
            };
            writeln!(output, "{}", theme.paint(&note.title, Role::Accent))?;
            writeln!(
                output,
                "{}",
                theme.paint(&format!("updated {}", updated_label(note.updated_at)), Role::Muted)
            )?;
            writeln!(output)?;
            writeln!(output, "{}", note.content)?;
        }
        Action::Add { title, content } => {
            let id = controller.save(&NoteDraft::new(title, content)).await?;
            writeln!(output, "{id}")?;
        }
        Action::Delete { id, yes } => {
            let outcome = if yes {
                controller.delete(id, &mut |_: &Note| true).await?
            } else {
                let mut confirm = PromptConfirm {
                    input,
                    output: &mut *output,
                    theme,
                };
                controller.delete(id, &mut confirm).await?
            };
            match outcome {
                DeleteOutcome::Deleted => writeln!(output, "deleted {id}")?,
                DeleteOutcome::Declined => writeln!(output, "kept {id}")?,
                DeleteOutcome::Missing => bail!("note not found: {id}"),
            }
        }
    }
    Ok(())
}
