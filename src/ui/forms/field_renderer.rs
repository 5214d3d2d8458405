//! Field rendering utilities for forms

use crate::state::{Choice, ChoiceField, TextField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn field_styles(is_active: bool) -> (Style, Style) {
    if is_active {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::Cyan),
        )
    } else {
        (Style::default(), Style::default().fg(Color::DarkGray))
    }
}

fn field_block(label: &str, is_required: bool, border_style: Style) -> Block<'_> {
    let mut title = vec![Span::raw(format!(" {label} "))];
    if is_required {
        title.push(Span::styled("* ", Style::default().fg(Color::Red)));
    }
    Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Draw a free-text field
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: TextField,
    value: &str,
    is_active: bool,
) {
    let (style, border_style) = field_styles(is_active);
    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines).style(style)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = field_block(field.label(), field.is_required(), border_style);
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a select-style field; unset values show the placeholder dimmed
pub fn draw_choice_field<C: Choice>(
    frame: &mut Frame,
    area: Rect,
    field: ChoiceField,
    value: Option<C>,
    is_active: bool,
) {
    let (style, border_style) = field_styles(is_active);
    let text_style = if value.is_none() {
        Style::default().fg(Color::DarkGray)
    } else {
        style
    };

    let mut spans = Vec::new();
    if is_active {
        spans.push(Span::styled("◂ ", Style::default().fg(Color::Cyan)));
    }
    spans.push(Span::styled(C::display(value), text_style));
    if is_active {
        spans.push(Span::styled(" ▸", Style::default().fg(Color::Cyan)));
    }

    let block = field_block(field.label(), true, border_style);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Numbered group heading ("1 The Basics")
pub fn draw_group_header(frame: &mut Frame, area: Rect, number: u8, title: &str) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {number} "),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(format!(" {title}"), Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
