//! Application state definitions

use super::{Choice, ChoiceField, FieldUpdate, FormController, FormField, Section};

/// Columns in the section checkbox grid
pub const SECTION_GRID_COLUMNS: usize = 2;

/// UI state wrapped around the form controller
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: FormController,
    /// Tab index into `FormField::ORDER`
    pub active_form_field: usize,
    /// Catalog index of the highlighted section checkbox
    pub section_cursor: usize,
    /// Input hint or notice shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn focused_field(&self) -> FormField {
        FormField::at(self.active_form_field)
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % FormField::count();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = FormField::count() - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn focus(&mut self, field: FormField) {
        self.active_form_field = field.index();
    }

    /// Handle character input in the focused text field
    pub fn form_input_char(&mut self, c: char) {
        if let FormField::Text(field) = self.focused_field() {
            let mut value = self.form.state().text(field).to_string();
            value.push(c);
            self.form.set_field(FieldUpdate::Text(field, value));
        }
    }

    /// Handle backspace: deletes a character, or unsets a select
    pub fn form_backspace(&mut self) {
        match self.focused_field() {
            FormField::Text(field) => {
                let mut value = self.form.state().text(field).to_string();
                if value.pop().is_some() {
                    self.form.set_field(FieldUpdate::Text(field, value));
                }
            }
            FormField::Choice(ChoiceField::BusinessType) => {
                self.form.set_field(FieldUpdate::BusinessType(None));
            }
            FormField::Choice(ChoiceField::Timeline) => {
                self.form.set_field(FieldUpdate::Timeline(None));
            }
            FormField::Choice(ChoiceField::Budget) => {
                self.form.set_field(FieldUpdate::Budget(None));
            }
            // A chosen plan can be switched but not cleared
            FormField::Choice(ChoiceField::Plan) | FormField::Sections | FormField::Submit => {}
        }
    }

    /// Enter inside the multi-line address field
    pub fn form_newline(&mut self) {
        if self.focused_field().is_multiline() {
            self.form_input_char('\n');
        }
    }

    /// Step the focused select to its next or previous option
    pub fn cycle_choice(&mut self, forward: bool) {
        let FormField::Choice(field) = self.focused_field() else {
            return;
        };
        let state = self.form.state();
        match field {
            ChoiceField::BusinessType => {
                let value = step(state.business_type, forward);
                self.form.set_field(FieldUpdate::BusinessType(Some(value)));
            }
            ChoiceField::Timeline => {
                let value = step(state.timeline, forward);
                self.form.set_field(FieldUpdate::Timeline(Some(value)));
            }
            ChoiceField::Budget => {
                let value = step(state.budget, forward);
                self.form.set_field(FieldUpdate::Budget(Some(value)));
            }
            ChoiceField::Plan => {
                let value = step(state.plan, forward);
                self.form.toggle_plan(value);
            }
        }
    }

    pub fn highlighted_section(&self) -> Section {
        Section::ALL[self.section_cursor.min(Section::ALL.len() - 1)]
    }

    pub fn move_section_cursor_left(&mut self) {
        if self.section_cursor > 0 {
            self.section_cursor -= 1;
        }
    }

    pub fn move_section_cursor_right(&mut self) {
        if self.section_cursor + 1 < Section::ALL.len() {
            self.section_cursor += 1;
        }
    }

    pub fn move_section_cursor_up(&mut self) {
        if self.section_cursor >= SECTION_GRID_COLUMNS {
            self.section_cursor -= SECTION_GRID_COLUMNS;
        }
    }

    pub fn move_section_cursor_down(&mut self) {
        if self.section_cursor + SECTION_GRID_COLUMNS < Section::ALL.len() {
            self.section_cursor += SECTION_GRID_COLUMNS;
        }
    }

    /// Flip the highlighted checkbox; returns false if the plan rules refused
    pub fn toggle_highlighted_section(&mut self) -> bool {
        let section = self.highlighted_section();
        let checked = !self.form.state().has_section(section);
        self.form.toggle_section(section, checked)
    }

    /// Whether the focused element is a text field (characters go into it)
    pub fn is_editing_text(&self) -> bool {
        matches!(self.focused_field(), FormField::Text(_))
    }
}

fn step<C: Choice>(current: Option<C>, forward: bool) -> C {
    if forward {
        C::next(current)
    } else {
        C::prev(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BusinessType, Plan, TextField, Timeline};

    fn state_on(field: FormField) -> AppState {
        let mut state = AppState::default();
        state.focus(field);
        state
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_starts_on_full_name() {
            let state = AppState::default();
            assert_eq!(state.focused_field(), FormField::Text(TextField::FullName));
        }

        #[test]
        fn test_next_wraps_to_first() {
            let mut state = state_on(FormField::Submit);
            state.next_form_field();
            assert_eq!(state.active_form_field, 0);
        }

        #[test]
        fn test_prev_wraps_to_submit() {
            let mut state = AppState::default();
            state.prev_form_field();
            assert_eq!(state.focused_field(), FormField::Submit);
        }
    }

    mod text_input {
        use super::*;

        #[test]
        fn test_typing_and_backspace() {
            let mut state = AppState::default();
            for c in "Joy".chars() {
                state.form_input_char(c);
            }
            state.form_backspace();
            assert_eq!(state.form.state().full_name, "Jo");
        }

        #[test]
        fn test_typing_ignored_outside_text_fields() {
            let mut state = state_on(FormField::Sections);
            state.form_input_char('x');
            assert_eq!(state.form.state(), &crate::state::FormState::default());
        }

        #[test]
        fn test_newline_only_in_address() {
            let mut state = state_on(FormField::Text(TextField::Address));
            state.form_input_char('A');
            state.form_newline();
            state.form_input_char('B');
            assert_eq!(state.form.state().address, "A\nB");

            state.focus(FormField::Text(TextField::Phone));
            state.form_newline();
            assert!(state.form.state().phone.is_empty());
        }
    }

    mod choices {
        use super::*;

        #[test]
        fn test_cycle_sets_first_option() {
            let mut state = state_on(FormField::Choice(ChoiceField::Timeline));
            state.cycle_choice(true);
            assert_eq!(state.form.state().timeline, Some(Timeline::Urgent));
        }

        #[test]
        fn test_cycle_backwards() {
            let mut state = state_on(FormField::Choice(ChoiceField::BusinessType));
            state.cycle_choice(false);
            assert_eq!(state.form.state().business_type, Some(BusinessType::Both));
        }

        #[test]
        fn test_backspace_clears_select() {
            let mut state = state_on(FormField::Choice(ChoiceField::Budget));
            state.cycle_choice(true);
            state.form_backspace();
            assert!(state.form.state().budget.is_none());
        }

        #[test]
        fn test_plan_goes_through_repair() {
            let mut state = state_on(FormField::Choice(ChoiceField::Plan));
            state.cycle_choice(true);
            assert_eq!(state.form.plan(), Some(Plan::Basic));
            assert_eq!(
                state.form.state().sections,
                vec![Section::Hero, Section::Contact]
            );
        }

        #[test]
        fn test_plan_cannot_be_cleared() {
            let mut state = state_on(FormField::Choice(ChoiceField::Plan));
            state.cycle_choice(true);
            state.form_backspace();
            assert_eq!(state.form.plan(), Some(Plan::Basic));
        }
    }

    mod sections {
        use super::*;

        #[test]
        fn test_cursor_stays_in_grid() {
            let mut state = AppState::default();
            state.move_section_cursor_left();
            state.move_section_cursor_up();
            assert_eq!(state.section_cursor, 0);

            state.move_section_cursor_down();
            assert_eq!(
                state.highlighted_section(),
                Section::ALL[SECTION_GRID_COLUMNS]
            );
            state.move_section_cursor_up();
            assert_eq!(state.highlighted_section(), Section::Hero);

            for _ in 0..20 {
                state.move_section_cursor_down();
            }
            assert!(state.section_cursor + SECTION_GRID_COLUMNS >= Section::ALL.len());

            for _ in 0..20 {
                state.move_section_cursor_right();
            }
            assert_eq!(state.highlighted_section(), Section::Faq);
        }

        #[test]
        fn test_toggle_highlighted() {
            let mut state = AppState::default();
            state.move_section_cursor_right();
            assert!(state.toggle_highlighted_section());
            assert!(state.form.state().has_section(Section::About));
            assert!(state.toggle_highlighted_section());
            assert!(!state.form.state().has_section(Section::About));
        }

        #[test]
        fn test_toggle_locked_section_refused() {
            let mut state = state_on(FormField::Choice(ChoiceField::Plan));
            state.cycle_choice(true);
            // Cursor on Hero
            assert!(!state.toggle_highlighted_section());
            assert!(state.form.state().has_section(Section::Hero));
        }
    }
}
