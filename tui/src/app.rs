use std::path::PathBuf;

use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::widgets::ListState;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use memopad_memo::export;
use memopad_memo::session::Session;
use memopad_memo::types::MemoField;

use crate::editor::EditorBuffer;

/// Which part of the UI owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    EditTitle,
    EditContent,
    ConfirmDeleteAll,
}

/// Top-level UI state: the session plus list selection, the title input,
/// the content editor and the confirmation overlay.
pub struct App {
    pub session: Session,
    pub mode: Mode,
    pub title_input: Input,
    pub editor: EditorBuffer,
    pub list_state: ListState,
    pub status: Option<String>,
    pub export_dir: PathBuf,
    should_quit: bool,
}

impl App {
    pub fn new(session: Session, export_dir: PathBuf) -> Self {
        Self {
            session,
            mode: Mode::List,
            title_input: Input::default(),
            editor: EditorBuffer::default(),
            list_state: ListState::default(),
            status: None,
            export_dir,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Index of the active memo in the list, if any.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.session.active_id()?;
        self.session.memos().iter().position(|m| m.id == id)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        self.status = None;
        match self.mode {
            Mode::List => self.handle_list_key(key),
            Mode::EditTitle => self.handle_title_key(key),
            Mode::EditContent => self.handle_content_key(key),
            Mode::ConfirmDeleteAll => self.handle_confirm_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Char('n') => {
                let memo = self.session.create()?;
                tracing::info!("created memo {}", memo.id);
                self.begin_title_edit();
            }
            KeyCode::Char('t') => self.begin_title_edit(),
            KeyCode::Enter | KeyCode::Char('e') => self.begin_content_edit(),
            KeyCode::Char('d') => {
                if let Some(id) = self.session.active_id().map(str::to_string) {
                    self.session.delete(&id)?;
                    tracing::info!("deleted memo {id}");
                }
            }
            KeyCode::Char('D') => {
                if !self.session.memos().is_empty() {
                    self.mode = Mode::ConfirmDeleteAll;
                }
            }
            KeyCode::Char('s') => self.export_active()?,
            _ => {}
        }
        Ok(())
    }

    fn handle_title_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.mode = Mode::List,
            _ => {
                // Save on every change, like the field's edit handler does.
                self.title_input.handle_event(&Event::Key(key));
                let value = self.title_input.value().to_string();
                self.session.update_active(MemoField::Title, &value)?;
            }
        }
        Ok(())
    }

    fn handle_content_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        let mut changed = false;
        match key.code {
            KeyCode::Esc => self.mode = Mode::List,
            KeyCode::Enter => {
                self.editor.insert_newline();
                changed = true;
            }
            KeyCode::Backspace => changed = self.editor.backspace(),
            KeyCode::Left => {
                self.editor.move_left();
            }
            KeyCode::Right => {
                self.editor.move_right();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.editor.insert_char(ch);
                changed = true;
            }
            _ => {}
        }
        if changed {
            let value = self.editor.text().to_string();
            self.session.update_active(MemoField::Content, &value)?;
        }
        Ok(())
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.session.delete_all(true)?;
                tracing::info!("deleted all memos");
                self.status = Some("All memos deleted".to_string());
                self.mode = Mode::List;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                // Declined: nothing is touched.
                self.mode = Mode::List;
            }
            _ => {}
        }
        Ok(())
    }

    /// Move the list selection, clamped to the collection. Moving with no
    /// selection picks the first (or last) memo.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.session.memos().len();
        if len == 0 {
            return;
        }
        let next = match self.selected_index() {
            Some(current) => (current as isize + delta).clamp(0, len as isize - 1) as usize,
            None if delta < 0 => len - 1,
            None => 0,
        };
        let id = self.session.memos()[next].id.clone();
        self.session.select(&id);
    }

    fn begin_title_edit(&mut self) {
        let Some(memo) = self.session.active() else {
            return;
        };
        self.title_input = Input::new(memo.title.clone());
        self.mode = Mode::EditTitle;
    }

    fn begin_content_edit(&mut self) {
        let Some(memo) = self.session.active() else {
            return;
        };
        self.editor = EditorBuffer::with_text(&memo.content);
        self.mode = Mode::EditContent;
    }

    fn export_active(&mut self) -> anyhow::Result<()> {
        let Some(memo) = self.session.active() else {
            return Ok(());
        };
        let path = export::write_export(memo, &self.export_dir)?;
        tracing::info!("exported memo {} to {}", memo.id, path.display());
        self.status = Some(format!("Exported to {}", path.display()));
        Ok(())
    }
}
