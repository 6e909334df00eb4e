//! Interactive session: the root view composing sidebar and detail pane.
//!
//! # Responsibility
//! - Draw the list and detail view models after every command.
//! - Translate commands into list/detail events for the controller.
//! - Show store failures in a one-line banner instead of exiting.
//!
//! # Invariants
//! - The detail view is resynchronized from controller props before every
//!   draw.
//! - Only I/O errors on the terminal itself end the session early.

use crate::command::{Command, HELP};
use crate::prompt::PromptConfirm;
use crate::render::{render_detail, render_list, rule};
use crate::theme::{Role, Theme};
use log::{error, info};
use sidenote_core::{
    DeleteOutcome, DetailEvent, DetailMode, DetailOutcome, DetailView, ListView, ListViewModel,
    NoteStore, NotesController,
};
use std::io::{BufRead, Write};

const PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Banner {
    Info(String),
    Error(String),
}

pub struct App<S: NoteStore, R, W> {
    controller: NotesController<S>,
    detail: DetailView,
    theme: Theme,
    banner: Option<Banner>,
    input: R,
    output: W,
}

impl<S: NoteStore, R: BufRead, W: Write> App<S, R, W> {
    /// Builds the session; `theme` is applied to everything it draws.
    pub fn new(controller: NotesController<S>, theme: Theme, input: R, output: W) -> Self {
        Self {
            controller,
            detail: DetailView::new(),
            theme,
            banner: None,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &NotesController<S> {
        &self.controller
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    pub async fn run(&mut self) -> std::io::Result<()> {
        if let Err(err) = self.controller.load().await {
            error!("event=notes_load module=cli status=error error={err}");
            self.banner = Some(Banner::Error(format!("could not load notes: {err}")));
        }
        info!("event=session_start module=cli status=ok");

        loop {
            self.detail
                .sync(self.controller.active_note(), self.controller.is_editing());
            self.draw()?;

            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command).await,
                Err(err) => self.banner = Some(Banner::Error(err.to_string())),
            }
        }

        info!("event=session_end module=cli status=ok");
        Ok(())
    }

    fn list_model(&self) -> ListViewModel {
        ListView::render(
            &self.controller.visible_notes(),
            self.controller.selected(),
            self.controller.search(),
        )
    }

    fn draw(&mut self) -> std::io::Result<()> {
        let list = render_list(&self.list_model(), &self.theme);
        let detail = render_detail(&self.detail.render(), &self.theme);
        let rule = rule(&self.theme);

        writeln!(self.output)?;
        if let Some(banner) = self.banner.take() {
            let line = match banner {
                Banner::Info(text) => self.theme.paint(&text, Role::Accent),
                Banner::Error(text) => self.theme.paint(&format!("error: {text}"), Role::Danger),
            };
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output, "{rule}")?;
        write!(self.output, "{list}")?;
        writeln!(self.output, "{rule}")?;
        write!(self.output, "{detail}")?;
        Ok(())
    }

    async fn dispatch(&mut self, command: Command) {
        match command {
            Command::New => self.controller.handle_list_event(ListView::create()),
            Command::Open(position) => match self.list_model().select_at(position - 1) {
                Some(event) => self.controller.handle_list_event(event),
                None => self.error(format!("there is no note #{position} in the list")),
            },
            Command::Search(text) => self
                .controller
                .handle_list_event(ListView::search_input(text)),
            Command::Edit => match self.detail.edit() {
                Some(event) => self.apply_detail(event).await,
                None => self.error("nothing to edit; open a note first"),
            },
            Command::Title(text) => {
                if !self.detail.set_title(text) {
                    self.error("not editing; use `edit` or `new` first");
                }
            }
            Command::Content(text) => {
                if !self.detail.set_content(text) {
                    self.error("not editing; use `edit` or `new` first");
                }
            }
            Command::Save => match self.detail.submit() {
                Ok(event) => self.apply_detail(event).await,
                Err(err) => self.error(err.to_string()),
            },
            Command::Cancel => match self.detail.cancel() {
                Some(event) => self.apply_detail(event).await,
                None => self.error("nothing to cancel"),
            },
            Command::Delete => match self.detail.request_delete() {
                Some(event) => self.apply_detail(event).await,
                None if self.detail.mode() == DetailMode::Viewing => {
                    self.error("use `edit` first; delete is offered while editing")
                }
                None => self.error("only saved notes can be deleted"),
            },
            Command::Help => self.banner = Some(Banner::Info(HELP.to_string())),
            Command::Quit => {}
        }
    }

    async fn apply_detail(&mut self, event: DetailEvent) {
        let mut confirm = PromptConfirm {
            input: &mut self.input,
            output: &mut self.output,
            theme: &self.theme,
        };
        match self.controller.handle_detail_event(event, &mut confirm).await {
            Ok(DetailOutcome::Saved(_)) => self.info("saved"),
            Ok(DetailOutcome::Delete(DeleteOutcome::Deleted)) => self.info("note deleted"),
            Ok(DetailOutcome::Delete(DeleteOutcome::Declined)) => self.info("delete cancelled"),
            Ok(DetailOutcome::Delete(DeleteOutcome::Missing)) => {
                self.error("that note no longer exists")
            }
            Ok(DetailOutcome::Editing(_) | DetailOutcome::Cancelled) => {}
            Err(err) => {
                error!("event=detail_event module=cli status=error error={err}");
                self.error(err.to_string());
            }
        }
    }

    fn info(&mut self, text: impl Into<String>) {
        self.banner = Some(Banner::Info(text.into()));
    }

    fn error(&mut self, text: impl Into<String>) {
        self.banner = Some(Banner::Error(text.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::theme::Theme;
    use sidenote_core::{LocalNoteStore, MemoryKvStore, NoteDraft, NoteStore, NotesController};
    use std::io::Cursor;

    type TestApp = App<LocalNoteStore<MemoryKvStore>, Cursor<Vec<u8>>, Vec<u8>>;

    fn app(store: LocalNoteStore<MemoryKvStore>, script: &str) -> TestApp {
        App::new(
            NotesController::new(store),
            Theme::plain(),
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    #[tokio::test]
    async fn create_and_save_through_commands() {
        let mut app = app(
            LocalNoteStore::new(MemoryKvStore::new()),
            "new\ntitle Groceries\ncontent milk\\neggs\nsave\nquit\n",
        );
        app.run().await.unwrap();

        let notes = app.controller().notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Groceries");
        assert_eq!(notes[0].content, "milk\neggs");
        assert_eq!(app.controller().selected(), Some(notes[0].id));

        let output = String::from_utf8(app.into_output()).unwrap();
        assert!(output.contains("No notes yet"));
        assert!(output.contains("saved"));
    }

    #[tokio::test]
    async fn save_with_blank_content_shows_error_and_keeps_editing() {
        let mut app = app(
            LocalNoteStore::new(MemoryKvStore::new()),
            "new\ntitle A\nsave\n",
        );
        app.run().await.unwrap();

        assert!(app.controller().notes().is_empty());
        assert!(app.controller().is_editing());
        let output = String::from_utf8(app.into_output()).unwrap();
        assert!(output.contains("error: content is required"));
    }

    #[tokio::test]
    async fn delete_asks_and_honors_answer() {
        let mut store = LocalNoteStore::new(MemoryKvStore::new());
        store.save(&NoteDraft::new("Taxes", "x")).await.unwrap();

        let mut app = app(store, "edit\ndelete\nn\ndelete\ny\nquit\n");
        app.run().await.unwrap();

        assert!(app.controller().notes().is_empty());
        assert_eq!(app.controller().selected(), None);
        let output = String::from_utf8(app.into_output()).unwrap();
        assert_eq!(output.matches("Delete \"Taxes\"? [y/N]").count(), 2);
        assert!(output.contains("delete cancelled"));
        assert!(output.contains("note deleted"));
    }

    #[tokio::test]
    async fn search_and_open_select_from_visible_list() {
        let mut store = LocalNoteStore::new(MemoryKvStore::new());
        store.save(&NoteDraft::new("Groceries", "milk")).await.unwrap();
        let taxes = store.save(&NoteDraft::new("Taxes", "april")).await.unwrap()[0].id;
        store.save(&NoteDraft::new("Travel", "tickets")).await.unwrap();

        let mut app = app(store, "search TAX\nopen 1\nopen 2\n");
        app.run().await.unwrap();

        assert_eq!(app.controller().selected(), Some(taxes));
        let output = String::from_utf8(app.into_output()).unwrap();
        assert!(output.contains("there is no note #2 in the list"));
    }

    #[tokio::test]
    async fn edit_then_cancel_does_not_touch_store() {
        let mut store = LocalNoteStore::new(MemoryKvStore::new());
        let before = store.save(&NoteDraft::new("A", "x")).await.unwrap();

        let mut app = app(store, "edit\ncontent changed\ncancel\nquit\n");
        app.run().await.unwrap();

        assert_eq!(app.controller().notes(), before.as_slice());
        assert!(!app.controller().is_editing());
    }
}
