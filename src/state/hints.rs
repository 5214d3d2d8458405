//! Input hints
//!
//! A terminal has no native `required` / `type="email"` checking, so the
//! form runs these checks itself before it lets a submission go out. They
//! are hints for the user, not submission errors.

use super::forms::{ChoiceField, FormField, FormState, TextField};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputHint {
    MissingText(TextField),
    MissingChoice(ChoiceField),
    MalformedEmail,
    MalformedUrl,
}

impl fmt::Display for InputHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingText(field) => write!(f, "{} is required", field.label()),
            Self::MissingChoice(field) => write!(f, "{} is required", field.label()),
            Self::MalformedEmail => f.write_str("Enter a valid email address"),
            Self::MalformedUrl => {
                f.write_str("Enter a full link, e.g. https://drive.google.com/...")
            }
        }
    }
}

impl InputHint {
    /// Form element the user has to fix
    pub fn field(&self) -> FormField {
        match self {
            Self::MissingText(field) => FormField::Text(*field),
            Self::MissingChoice(field) => FormField::Choice(*field),
            Self::MalformedEmail => FormField::Text(TextField::Email),
            Self::MalformedUrl => FormField::Text(TextField::GoogleDrive),
        }
    }
}

/// Every hint for the current form, in form order
pub fn input_hints(state: &FormState) -> Vec<InputHint> {
    let mut hints = Vec::new();

    let missing_text =
        |field: TextField| field.is_required() && state.text(field).trim().is_empty();

    if missing_text(TextField::FullName) {
        hints.push(InputHint::MissingText(TextField::FullName));
    }
    if state.business_type.is_none() {
        hints.push(InputHint::MissingChoice(ChoiceField::BusinessType));
    }
    if missing_text(TextField::Email) {
        hints.push(InputHint::MissingText(TextField::Email));
    } else if !is_email_shaped(&state.email) {
        hints.push(InputHint::MalformedEmail);
    }
    if missing_text(TextField::Phone) {
        hints.push(InputHint::MissingText(TextField::Phone));
    }
    if state.timeline.is_none() {
        hints.push(InputHint::MissingChoice(ChoiceField::Timeline));
    }
    if state.budget.is_none() {
        hints.push(InputHint::MissingChoice(ChoiceField::Budget));
    }
    if state.plan.is_none() {
        hints.push(InputHint::MissingChoice(ChoiceField::Plan));
    }
    let link = state.google_drive.trim();
    if !link.is_empty() && reqwest::Url::parse(link).is_err() {
        hints.push(InputHint::MalformedUrl);
    }

    hints
}

/// `local@domain` with no whitespace; domain labels are dot-separated and
/// non-empty, so `user@host` passes
pub fn is_email_shaped(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').all(|label| !label.is_empty())
}
