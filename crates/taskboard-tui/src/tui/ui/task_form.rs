/*
[INPUT]:  Key events and draft text for a new task
[OUTPUT]: Add-task modal rendering and form state
[POS]:    TUI UI add-task form
[UPDATE]: When changing form fields or submit flow
*/

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_textarea::TextArea;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::tui) enum FormAction {
    None,
    Cancel,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormFocus {
    Title,
    Description,
    Submit,
}

impl FormFocus {
    fn next(self) -> Self {
        match self {
            FormFocus::Title => FormFocus::Description,
            FormFocus::Description => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormFocus::Title => FormFocus::Submit,
            FormFocus::Description => FormFocus::Title,
            FormFocus::Submit => FormFocus::Description,
        }
    }
}

pub(in crate::tui) struct TaskForm {
    title: Input,
    description: TextArea<'static>,
    focus: FormFocus,
}

impl TaskForm {
    pub(in crate::tui) fn new(title: &str, description: &str) -> Self {
        let lines = if description.is_empty() {
            Vec::new()
        } else {
            description.lines().map(str::to_string).collect()
        };
        Self {
            title: Input::new(title.to_string()),
            description: TextArea::new(lines),
            focus: FormFocus::Title,
        }
    }

    pub(in crate::tui) fn title(&self) -> &str {
        self.title.value()
    }

    pub(in crate::tui) fn description(&self) -> String {
        self.description.lines().join("\n")
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => FormAction::Cancel,
            KeyCode::Tab => {
                self.focus = self.focus.next();
                FormAction::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                FormAction::None
            }
            KeyCode::Enter => match self.focus {
                FormFocus::Title => {
                    self.focus = FormFocus::Description;
                    FormAction::None
                }
                FormFocus::Description => {
                    // multi-line field: Enter inserts a newline
                    self.description.input(key);
                    FormAction::None
                }
                FormFocus::Submit => FormAction::Submit,
            },
            _ => {
                match self.focus {
                    FormFocus::Title => {
                        self.title.handle_event(&CrosstermEvent::Key(key));
                    }
                    FormFocus::Description => {
                        self.description.input(key);
                    }
                    FormFocus::Submit => {}
                }
                FormAction::None
            }
        }
    }

    pub(in crate::tui) fn draw(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let modal = centered_rect(60, 12, area);
        frame.render_widget(Clear, modal);

        let outer = Block::default().borders(Borders::ALL).title("Add Task");
        let inner = outer.inner(modal);
        frame.render_widget(outer, modal);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        let title_block = Block::default()
            .borders(Borders::ALL)
            .title("Title")
            .border_style(focus_style(self.focus == FormFocus::Title));
        let title_widget = Paragraph::new(self.title.value()).block(title_block);
        frame.render_widget(title_widget, layout[0]);

        self.description.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title("Description (optional)")
                .border_style(focus_style(self.focus == FormFocus::Description)),
        );
        frame.render_widget(&self.description, layout[1]);

        let submit = Paragraph::new("[ Enter: Create ]   Tab: next field   Esc: close")
            .style(focus_style(self.focus == FormFocus::Submit));
        frame.render_widget(submit, layout[2]);
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = area.width * width_percent / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let height = height.min(area.height);
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
