//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::FormField;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " Start Your Project ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Tell us about your business and we'll send you a quote",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw the status bar: the pending hint if any, keyboard help otherwise
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.state.status_message {
        Some(msg) => Line::from(Span::styled(
            format!(" {msg}"),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            format!(" {}", help_text(app)),
            Style::default().fg(Color::Gray),
        )),
    };

    let status = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the focused element
fn help_text(app: &App) -> String {
    let local = if app.state.is_editing_text() {
        "type to edit"
    } else {
        match app.state.focused_field() {
            FormField::Choice(_) => "←/→:choose",
            FormField::Sections => "arrows:move  Space:toggle",
            _ => "Enter:submit",
        }
    };
    format!("Tab:next  {local}  {SUBMIT_SHORTCUT}:submit  Esc:quit")
}
