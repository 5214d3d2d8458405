//! Submission result banner

use crate::state::SubmitStatus;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the success or error banner; nothing is drawn without a status
pub fn render_status_banner(frame: &mut Frame, area: Rect, status: Option<&SubmitStatus>) {
    let Some(status) = status else {
        return;
    };
    let color = if status.is_success() {
        Color::Green
    } else {
        Color::Red
    };

    let paragraph = Paragraph::new(status.message().to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, area);
}
