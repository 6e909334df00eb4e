use sidenote_core::{
    DeleteOutcome, DetailEvent, DetailMode, DetailView, ListEvent, ListView, LocalNoteStore,
    MemoryKvStore, Note, NoteDraft, NoteStore, NotesController, StoreError,
};

type Controller = NotesController<LocalNoteStore<MemoryKvStore>>;

fn controller() -> Controller {
    NotesController::new(LocalNoteStore::new(MemoryKvStore::new()))
}

fn accept(_: &Note) -> bool {
    true
}

fn decline(_: &Note) -> bool {
    false
}

#[tokio::test]
async fn load_selects_most_recent_note() {
    let mut store = LocalNoteStore::new(MemoryKvStore::new());
    store.save(&NoteDraft::new("old", "x")).await.unwrap();
    let newest = store.save(&NoteDraft::new("new", "y")).await.unwrap()[0].id;

    let mut controller = NotesController::new(store);
    controller.load().await.unwrap();
    assert_eq!(controller.notes().len(), 2);
    assert_eq!(controller.selected(), Some(newest));
    assert!(!controller.is_editing());
}

#[tokio::test]
async fn load_of_empty_store_selects_nothing() {
    let mut controller = controller();
    controller.load().await.unwrap();
    assert_eq!(controller.selected(), None);
    assert!(controller.active_note().is_none());
}

#[tokio::test]
async fn create_edit_delete_scenario() {
    let mut controller = controller();
    controller.load().await.unwrap();

    controller.handle_list_event(ListEvent::Create);
    assert!(controller.is_editing());
    assert_eq!(controller.selected(), None);

    let id = controller.save(&NoteDraft::new("A", "x")).await.unwrap();
    assert_eq!(controller.notes().len(), 1);
    assert_eq!(controller.selected(), Some(id));
    assert!(!controller.is_editing());
    let created = controller.store().get_by_id(id).await.unwrap().unwrap();

    let mut draft = created.to_draft();
    draft.content = "y".to_string();
    let same_id = controller.save(&draft).await.unwrap();
    assert_eq!(same_id, id);
    let edited = controller.active_note().unwrap();
    assert_eq!(edited.created_at, created.created_at);
    assert_eq!(edited.content, "y");

    let outcome = controller.delete(id, &mut accept).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(controller.notes().is_empty());
    assert_eq!(controller.selected(), None);
    assert!(!controller.is_editing());
}

#[tokio::test]
async fn declined_confirmation_changes_nothing() {
    let mut controller = controller();
    let id = controller.save(&NoteDraft::new("A", "x")).await.unwrap();
    controller.begin_edit();

    let outcome = controller.delete(id, &mut decline).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(controller.notes().len(), 1);
    assert_eq!(controller.selected(), Some(id));
    assert!(controller.is_editing());
    assert!(controller.store().get_by_id(id).await.unwrap().is_some());
}

#[tokio::test]
async fn delete_selects_most_recent_remaining_note() {
    let mut controller = controller();
    let first = controller.save(&NoteDraft::new("first", "x")).await.unwrap();
    let second = controller.save(&NoteDraft::new("second", "y")).await.unwrap();
    let third = controller.save(&NoteDraft::new("third", "z")).await.unwrap();

    let mut asked = Vec::new();
    let mut confirm = |note: &Note| {
        asked.push(note.title.clone());
        true
    };
    controller.delete(third, &mut confirm).await.unwrap();
    assert_eq!(asked, vec!["third".to_string()]);
    assert_eq!(controller.selected(), Some(second));
    assert_ne!(controller.selected(), Some(first));
}

#[tokio::test]
async fn second_note_is_listed_first() {
    let mut controller = controller();
    controller.save(&NoteDraft::new("A", "x")).await.unwrap();
    controller.begin_create();
    let second = controller.save(&NoteDraft::new("B", "y")).await.unwrap();

    assert_eq!(controller.notes()[0].id, second);
    assert_eq!(controller.store().list().await.unwrap()[0].id, second);
    assert_eq!(controller.selected(), Some(second));
}

#[tokio::test]
async fn search_filters_title_and_content_case_insensitively() {
    let mut controller = controller();
    controller
        .save(&NoteDraft::new("Groceries", "milk, eggs"))
        .await
        .unwrap();
    controller
        .save(&NoteDraft::new("Taxes", "file by April"))
        .await
        .unwrap();

    controller.handle_list_event(ListView::search_input("TAX"));
    let visible = controller.visible_notes();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Taxes");

    controller.set_search("EGGS");
    assert_eq!(controller.visible_notes()[0].title, "Groceries");

    controller.set_search("");
    assert_eq!(controller.visible_notes().len(), 2);
}

#[tokio::test]
async fn failed_save_leaves_state_untouched() {
    let mut controller = controller();
    controller.begin_create();
    let err = controller
        .save(&NoteDraft::new("A", "   "))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(controller.is_editing());
    assert!(controller.notes().is_empty());
}

#[tokio::test]
async fn views_and_controller_compose() {
    let mut controller = controller();
    let mut detail = DetailView::new();
    controller.load().await.unwrap();
    detail.sync(controller.active_note(), controller.is_editing());
    assert_eq!(detail.mode(), DetailMode::Empty);

    controller.handle_list_event(ListView::create());
    detail.sync(controller.active_note(), controller.is_editing());
    assert_eq!(detail.mode(), DetailMode::Editing);

    detail.set_title("Groceries");
    detail.set_content("milk");
    let save = detail.submit().unwrap();
    controller
        .handle_detail_event(save, &mut accept)
        .await
        .unwrap();
    detail.sync(controller.active_note(), controller.is_editing());
    assert_eq!(detail.mode(), DetailMode::Viewing);

    let list = ListView::render(
        &controller.visible_notes(),
        controller.selected(),
        controller.search(),
    );
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.selected_index(), Some(0));

    let edit = detail.edit().unwrap();
    controller
        .handle_detail_event(edit, &mut accept)
        .await
        .unwrap();
    detail.sync(controller.active_note(), controller.is_editing());
    let delete = detail.request_delete().unwrap();
    assert!(matches!(delete, DetailEvent::Delete(_)));
    controller
        .handle_detail_event(delete, &mut accept)
        .await
        .unwrap();
    detail.sync(controller.active_note(), controller.is_editing());
    assert_eq!(detail.mode(), DetailMode::Empty);
    assert!(controller.notes().is_empty());
}
