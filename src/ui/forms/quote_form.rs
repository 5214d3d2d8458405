//! The quote request form

use super::field_renderer::{draw_choice_field, draw_group_header, draw_text_field};
use super::sections_grid::{draw_sections_grid, grid_height};
use crate::app::App;
use crate::state::{ChoiceField, FormField, TextField};
use crate::ui::components::{render_status_banner, render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Height of a single-line bordered field
const FIELD_HEIGHT: u16 = 3;
/// Height of the address box (4 lines of text plus borders)
const ADDRESS_HEIGHT: u16 = 6;
/// Height of the result banner
const BANNER_HEIGHT: u16 = 3;

pub fn draw_quote_form(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Groups
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BANNER_HEIGHT), // Result banner
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_basics_and_contact(frame, columns[0], app);
    draw_project_details(frame, columns[1], app);

    let button_area = centered(chunks[1], 30);
    render_submit_button(
        frame,
        button_area,
        app.state.focused_field() == FormField::Submit,
        app.state.form.is_submitting(),
    );
    render_status_banner(frame, chunks[2], app.state.form.status());
}

fn draw_basics_and_contact(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // 1 The Basics
            Constraint::Length(FIELD_HEIGHT),   // Full name | Business name
            Constraint::Length(FIELD_HEIGHT),   // Business type
            Constraint::Length(1),              // Spacer
            Constraint::Length(1),              // 2 Contact Information
            Constraint::Length(FIELD_HEIGHT),   // Email | Phone
            Constraint::Length(ADDRESS_HEIGHT), // Address
            Constraint::Min(0),
        ])
        .split(area);

    draw_group_header(frame, rows[0], 1, "The Basics");
    draw_text_pair(
        frame,
        rows[1],
        app,
        TextField::FullName,
        TextField::BusinessName,
    );
    draw_choice(frame, rows[2], app, ChoiceField::BusinessType);

    draw_group_header(frame, rows[4], 2, "Contact Information");
    draw_text_pair(frame, rows[5], app, TextField::Email, TextField::Phone);
    draw_text(frame, rows[6], app, TextField::Address);
}

fn draw_project_details(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // 3 Project Details
            Constraint::Length(FIELD_HEIGHT),  // Timeline | Budget
            Constraint::Length(FIELD_HEIGHT),  // Plan
            Constraint::Length(grid_height()), // Sections
            Constraint::Length(FIELD_HEIGHT),  // Social media | Drive link
            Constraint::Min(0),
        ])
        .split(area);

    draw_group_header(frame, rows[0], 3, "Project Details");

    let pair = halves(rows[1]);
    draw_choice(frame, pair[0], app, ChoiceField::Timeline);
    draw_choice(frame, pair[1], app, ChoiceField::Budget);
    draw_choice(frame, rows[2], app, ChoiceField::Plan);

    draw_sections_grid(frame, rows[3], app);
    draw_text_pair(
        frame,
        rows[4],
        app,
        TextField::SocialMedia,
        TextField::GoogleDrive,
    );
}

fn draw_text(frame: &mut Frame, area: Rect, app: &App, field: TextField) {
    let is_active = app.state.focused_field() == FormField::Text(field);
    draw_text_field(frame, area, field, app.state.form.state().text(field), is_active);
}

fn draw_text_pair(frame: &mut Frame, area: Rect, app: &App, left: TextField, right: TextField) {
    let pair = halves(area);
    draw_text(frame, pair[0], app, left);
    draw_text(frame, pair[1], app, right);
}

fn draw_choice(frame: &mut Frame, area: Rect, app: &App, field: ChoiceField) {
    let is_active = app.state.focused_field() == FormField::Choice(field);
    let state = app.state.form.state();
    match field {
        ChoiceField::BusinessType => {
            draw_choice_field(frame, area, field, state.business_type, is_active)
        }
        ChoiceField::Timeline => draw_choice_field(frame, area, field, state.timeline, is_active),
        ChoiceField::Budget => draw_choice_field(frame, area, field, state.budget, is_active),
        ChoiceField::Plan => draw_choice_field(frame, area, field, state.plan, is_active),
    }
}

fn halves(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
