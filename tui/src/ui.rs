use chrono::TimeZone;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Text;
use ratatui::widgets::Block;
use ratatui::widgets::Clear;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::WidgetRef;
use unicode_width::UnicodeWidthStr;

use memopad_memo::types::Memo;

use crate::app::App;
use crate::app::Mode;

const SIDEBAR_WIDTH: u16 = 34;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(body);

    render_header(frame, header, app);
    render_list(frame, sidebar, app);
    render_main(frame, main, app);
    render_status(frame, status, app);

    if app.mode == Mode::ConfirmDeleteAll {
        let dialog = ConfirmDialog {
            count: app.session.memos().len(),
        };
        dialog.render_ref(frame.area(), frame.buffer_mut());
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.session.memos().len();
    let title = Paragraph::new(format!(" memopad ({count} memos)"))
        .style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(title, area);
}

fn render_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .session
        .memos()
        .iter()
        .map(|memo| {
            let meta = format!(
                "{} / {}",
                format_timestamp(memo.created_at),
                format_timestamp(memo.updated_at)
            );
            ListItem::new(Text::from(vec![
                Line::raw(memo.display_title().to_string()),
                Line::styled(meta, Style::default().add_modifier(Modifier::DIM)),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(Block::bordered().title("Memos"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let selected = app.selected_index();
    app.list_state.select(selected);
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_main(frame: &mut Frame, area: Rect, app: &App) {
    let Some(memo) = app.session.active() else {
        let hint = Paragraph::new("Select a memo or create a new one.")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(Block::bordered());
        frame.render_widget(hint, area);
        return;
    };

    let [title_area, content_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    render_title_field(frame, title_area, app, memo);
    render_content_field(frame, content_area, app, memo);
}

fn render_title_field(frame: &mut Frame, area: Rect, app: &App, memo: &Memo) {
    let block = Block::bordered().title("Title");
    let inner_width = area.width.saturating_sub(2) as usize;
    if app.mode == Mode::EditTitle {
        let scroll = app.title_input.visual_scroll(inner_width);
        let field = Paragraph::new(app.title_input.value())
            .scroll((0, scroll as u16))
            .block(block);
        frame.render_widget(field, area);
        let cursor_x = app.title_input.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor_position(Position::new(area.x + 1 + cursor_x, area.y + 1));
    } else if memo.title.is_empty() {
        let field = Paragraph::new(memo.display_title())
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(field, area);
    } else {
        let field = Paragraph::new(memo.title.as_str()).block(block);
        frame.render_widget(field, area);
    }
}

fn render_content_field(frame: &mut Frame, area: Rect, app: &App, memo: &Memo) {
    let block = Block::bordered().title("Content");
    if app.mode == Mode::EditContent {
        let field = Paragraph::new(app.editor.text()).block(block);
        frame.render_widget(field, area);
        let (line, prefix) = app.editor.cursor_line_prefix();
        let cursor_x = area.x + 1 + prefix.width() as u16;
        let cursor_y = area.y + 1 + line as u16;
        if cursor_x < area.right() && cursor_y < area.bottom() {
            frame.set_cursor_position(Position::new(cursor_x, cursor_y));
        }
    } else if memo.content.is_empty() {
        let field = Paragraph::new("Type your memo here..")
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(field, area);
    } else {
        let field = Paragraph::new(memo.content.as_str()).block(block);
        frame.render_widget(field, area);
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status {
        Some(message) => message.clone(),
        None => match app.mode {
            Mode::List => {
                " n new  t title  enter edit  d delete  D delete all  s export  q quit".to_string()
            }
            Mode::EditTitle => " editing title (enter/esc to finish)".to_string(),
            Mode::EditContent => " editing content (esc to finish)".to_string(),
            Mode::ConfirmDeleteAll => " y confirm  n cancel".to_string(),
        },
    };
    let bar = Paragraph::new(text).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(bar, area);
}

/// Centered modal asking to confirm deletion of the whole collection.
pub struct ConfirmDialog {
    pub count: usize,
}

impl WidgetRef for ConfirmDialog {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let area = centered(area, 46, 5);
        Clear.render(area, buf);
        let count = self.count;
        let body = Paragraph::new(vec![
            Line::raw(format!("Really delete all {count} memos?")),
            Line::raw("This cannot be undone."),
            Line::raw("[y] delete   [n] cancel"),
        ])
        .alignment(Alignment::Center)
        .block(Block::bordered().title("Delete all memos"));
        body.render(area, buf);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn format_timestamp(ms: i64) -> String {
    match chrono::Local.timestamp_millis_opt(ms) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        _ => ms.to_string(),
    }
}
