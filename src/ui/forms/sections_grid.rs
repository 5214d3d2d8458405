//! Page section checkbox grid

use crate::app::App;
use crate::state::{FormField, Section, SECTION_GRID_COLUMNS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of one checkbox cell, sized for the longest name plus badge
const CELL_WIDTH: usize = 26;

/// Rows needed to draw the grid, including borders
pub fn grid_height() -> u16 {
    (Section::ALL.len().div_ceil(SECTION_GRID_COLUMNS) + 2) as u16
}

pub fn draw_sections_grid(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = app.state.focused_field() == FormField::Sections;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines: Vec<Line> = Section::ALL
        .chunks(SECTION_GRID_COLUMNS)
        .map(|row| {
            let spans = row
                .iter()
                .flat_map(|section| {
                    let highlighted = is_focused && app.state.highlighted_section() == *section;
                    section_cell(app, *section, highlighted)
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect();

    let summary = form.sections_summary();
    let title = if summary.is_empty() {
        " Page Sections ".to_string()
    } else {
        format!(" Page Sections {summary} ")
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn section_cell(app: &App, section: Section, highlighted: bool) -> Vec<Span<'static>> {
    let form = &app.state.form;
    let checked = form.state().has_section(section);
    let locked = form.is_section_locked(section);
    let capped = form.is_section_capped(section);

    let mut style = if capped {
        Style::default().fg(Color::DarkGray)
    } else if checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    if highlighted {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let mark = if checked { "[x]" } else { "[ ]" };
    let label = format!("{mark} {section}");
    let mut used = label.chars().count();
    let mut spans = vec![Span::styled(label, style)];

    if locked {
        let badge = " Required";
        used += badge.len();
        spans.push(Span::styled(badge, Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::raw(" ".repeat(CELL_WIDTH.saturating_sub(used))));
    spans
}
