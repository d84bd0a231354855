use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use memopad_memo::session::Session;
use memopad_memo::storage::MemStorage;
use memopad_memo::store::MemoStore;
use memopad_memo::types::MemoField;
use memopad_tui::app::App;
use memopad_tui::app::Mode;
use memopad_tui::ui;

fn fresh_app(export_dir: std::path::PathBuf) -> App {
    let session = Session::load(MemoStore::new(Box::new(MemStorage::new())))
        .expect("load in-memory session");
    App::new(session, export_dir)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn render_text(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 14)).expect("terminal");
    terminal.draw(|frame| ui::draw(frame, app)).expect("draw");
    terminal.backend().to_string()
}

#[test]
fn empty_list_renders_placeholder() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = fresh_app(dir.path().to_path_buf());
    let screen = render_text(&mut app);
    assert!(screen.contains("memopad (0 memos)"));
    assert!(screen.contains("Select a memo or create a new one."));
}

#[test]
fn new_memo_starts_title_edit_and_lists_default_title() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = fresh_app(dir.path().to_path_buf());

    app.handle_key(key(KeyCode::Char('n'))).expect("new");
    assert_eq!(app.mode, Mode::EditTitle);
    app.handle_key(key(KeyCode::Esc)).expect("esc");

    let screen = render_text(&mut app);
    assert!(screen.contains("memopad (1 memos)"));
    assert!(screen.contains("New memo"));
}

#[test]
fn title_edits_write_through_to_the_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = fresh_app(dir.path().to_path_buf());
    app.session.create_at(1).expect("create");

    app.handle_key(key(KeyCode::Char('t'))).expect("edit title");
    for _ in 0.."New memo".len() {
        app.handle_key(key(KeyCode::Backspace)).expect("clear");
    }
    for ch in "Plan".chars() {
        app.handle_key(key(KeyCode::Char(ch))).expect("type");
    }
    app.handle_key(key(KeyCode::Enter)).expect("finish");

    assert_eq!(app.mode, Mode::List);
    assert_eq!(app.session.memos()[0].title, "Plan");
}

#[test]
fn content_edits_write_through_to_the_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = fresh_app(dir.path().to_path_buf());
    app.session.create_at(1).expect("create");

    app.handle_key(key(KeyCode::Enter)).expect("edit content");
    assert_eq!(app.mode, Mode::EditContent);
    for ch in "milk".chars() {
        app.handle_key(key(KeyCode::Char(ch))).expect("type");
    }
    app.handle_key(key(KeyCode::Enter)).expect("newline");
    for ch in "eggs".chars() {
        app.handle_key(key(KeyCode::Char(ch))).expect("type");
    }
    app.handle_key(key(KeyCode::Esc)).expect("finish");

    assert_eq!(app.session.memos()[0].content, "milk\neggs");
}

#[test]
fn selection_moves_and_delete_clears_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = fresh_app(dir.path().to_path_buf());
    app.session.create_at(1).expect("create");
    app.session.create_at(2).expect("create");
    app.session.create_at(3).expect("create");
    // Creation selects the newest memo, which sits at index 0.
    assert_eq!(app.selected_index(), Some(0));

    app.handle_key(key(KeyCode::Down)).expect("down");
    assert_eq!(app.selected_index(), Some(1));
    app.handle_key(key(KeyCode::Char('d'))).expect("delete");
    assert_eq!(app.session.memos().len(), 2);
    assert_eq!(app.selected_index(), None);
}

#[test]
fn delete_all_is_gated_on_the_confirmation_dialog() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = fresh_app(dir.path().to_path_buf());
    app.session.create_at(1).expect("create");
    app.session.create_at(2).expect("create");

    app.handle_key(key(KeyCode::Char('D'))).expect("open dialog");
    assert_eq!(app.mode, Mode::ConfirmDeleteAll);
    let screen = render_text(&mut app);
    assert!(screen.contains("Really delete all 2 memos?"));
    assert!(screen.contains("This cannot be undone."));

    app.handle_key(key(KeyCode::Char('n'))).expect("decline");
    assert_eq!(app.session.memos().len(), 2);

    app.handle_key(key(KeyCode::Char('D'))).expect("reopen");
    app.handle_key(key(KeyCode::Char('y'))).expect("confirm");
    assert!(app.session.memos().is_empty());
    assert_eq!(app.selected_index(), None);
}

#[test]
fn export_writes_the_active_memo_next_to_the_app() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = fresh_app(dir.path().to_path_buf());
    app.session.create_at(1).expect("create");
    app.session
        .update_active_at(MemoField::Content, "remember this", 2)
        .expect("content");

    app.handle_key(key(KeyCode::Char('s'))).expect("export");
    let exported = dir.path().join("New memo.txt");
    let payload = std::fs::read_to_string(exported).expect("exported file");
    assert_eq!(payload, "Title: New memo\n\nremember this");
}
