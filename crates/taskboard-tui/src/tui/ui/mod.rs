/*
[INPUT]:  App state, board snapshot, and log buffer
[OUTPUT]: Ratatui rendering of header, task list, error banner, logs, footer
[POS]:    TUI UI - panel renderers
[UPDATE]: When changing layout or panel content
*/

pub(super) mod task_form;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use taskboard_adapter::Task;

use super::app::{App, Tab};
use super::logs::LogBufferHandle;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(frame, layout[0], app);

    match app.current_tab {
        Tab::Board => draw_board(frame, layout[1], app),
        Tab::Logs => draw_logs(frame, layout[1], &app.log_buffer),
    }

    draw_footer(frame, layout[2]);

    if let Some(form) = app.form.as_mut() {
        form.draw(frame, area);
    }
}

fn draw_header(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "Taskboard",
        Style::default().add_modifier(Modifier::BOLD),
    )];

    if let Some(health) = app.board.state().health() {
        let color = if health.status.eq_ignore_ascii_case("ok") {
            Color::Green
        } else {
            Color::Yellow
        };
        spans.push(Span::raw("  |  backend: "));
        spans.push(Span::styled(health.status.clone(), Style::default().fg(color)));
        spans.push(Span::styled(
            format!("  {}", health.environment),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_board(frame: &mut ratatui::Frame, area: Rect, app: &mut App) {
    let state = app.board.state();

    let list_area = if let Some(message) = state.error_message() {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);
        let banner = Paragraph::new(message.to_string())
            .style(Style::default().fg(Color::Red))
            .block(Block::default().borders(Borders::ALL).title("Error"));
        frame.render_widget(banner, layout[0]);
        layout[1]
    } else {
        area
    };

    let tasks = state.tasks();
    let items: Vec<ListItem> = if state.is_loading() && tasks.is_empty() {
        vec![ListItem::new("Loading...")]
    } else if tasks.is_empty() {
        vec![ListItem::new("No tasks yet. Press 'a' to add one.")]
    } else {
        tasks.iter().map(task_list_item).collect()
    };

    let title = if state.is_loading() {
        "Tasks (loading...)".to_string()
    } else {
        format!("Tasks ({})", tasks.len())
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, list_area, &mut app.list_state);
}

fn task_list_item(task: &Task) -> ListItem<'static> {
    let marker = if task.completed { "[x] " } else { "[ ] " };
    let title_style = if task.completed {
        Style::default().add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(marker),
        Span::styled(task.title.clone(), title_style),
        Span::styled(
            format!("  {}", format_created_at(&task.created_at)),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    if !task.description.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("    {}", task.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    ListItem::new(lines)
}

fn draw_logs(frame: &mut ratatui::Frame, area: Rect, buffer: &LogBufferHandle) {
    let lines = {
        let guard = buffer.lock().expect("log buffer lock");
        guard.snapshot()
    };
    let available = area.height.saturating_sub(2) as usize;
    let start = lines.len().saturating_sub(available);
    let view = &lines[start..];

    let text = view
        .iter()
        .map(|line| Line::from(Span::raw(line.clone())))
        .collect::<Vec<_>>();
    let log_widget =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Logs"));
    frame.render_widget(log_widget, area);
}

fn draw_footer(frame: &mut ratatui::Frame, area: Rect) {
    let footer = Paragraph::new(
        "[Up/Down] Select  [Space] Toggle  [a] Add  [d] Delete  [r] Refresh  [Tab] Logs  [q] Quit",
    )
    .block(Block::default().borders(Borders::ALL).title("Hotkeys"));
    frame.render_widget(footer, area);
}

/// Server timestamps are opaque; render RFC 3339 values compactly and pass
/// anything else through untouched.
fn format_created_at(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
