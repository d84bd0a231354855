//! Interactive terminal UI for memopad: a sidebar list of memos and a
//! detail pane editing the selected one, write-through to storage on
//! every change.

pub mod app;
pub mod editor;
pub mod ui;

use std::path::Path;

use crossterm::event::Event;
use crossterm::event::KeyEventKind;
use ratatui::DefaultTerminal;

use memopad_memo::factory;
use memopad_memo::session::Session;

use crate::app::App;

/// Load the session from `data_dir` and run the UI until the user quits.
/// Exports land in the current working directory.
pub fn launch(data_dir: &Path) -> anyhow::Result<()> {
    let session = Session::load(factory::open_store_in(data_dir))?;
    let export_dir = std::env::current_dir()?;
    let mut app = App::new(session, export_dir);
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;
        if let Event::Key(key) = crossterm::event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key)?;
        }
    }
    Ok(())
}
