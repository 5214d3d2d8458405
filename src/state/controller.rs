//! Quote form controller
//!
//! Owns the `FormState`, enforces the plan-dependent section rules and
//! drives the submission state machine (Idle -> Submitting -> Succeeded or
//! Failed). Rule violations are ignored rather than reported: the UI keeps
//! the user from attempting them by disabling the matching controls.

use super::catalog::{BASIC_OPTIONAL_SLOTS, BASIC_SECTION_CAP, MANDATORY_UNDER_BASIC};
use super::forms::{FieldUpdate, FormState, SubmissionPayload};
use super::{Plan, Section};
use crate::submit::{SubmitError, SubmitTransport};
use chrono::Utc;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully! We will be in touch soon.";
pub const FAILURE_MESSAGE: &str = "Failed to submit form. Please try again.";

/// Outcome of the most recent submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Success(String),
    Error(String),
}

impl SubmitStatus {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Error(m) => m,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
    submitting: bool,
    status: Option<SubmitStatus>,
}

impl FormController {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current form snapshot
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn plan(&self) -> Option<Plan> {
        self.state.plan
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&SubmitStatus> {
        self.status.as_ref()
    }

    fn is_basic(&self) -> bool {
        self.state.plan == Some(Plan::Basic)
    }

    /// Overwrite a single scalar field; no validation
    pub fn set_field(&mut self, update: FieldUpdate) {
        self.state.apply(update);
    }

    /// Change the plan. Entering Basic appends any missing mandatory
    /// sections after the existing selection.
    pub fn toggle_plan(&mut self, plan: Plan) {
        self.state.plan = Some(plan);
        if plan == Plan::Basic {
            for section in MANDATORY_UNDER_BASIC {
                if !self.state.has_section(section) {
                    self.state.sections.push(section);
                }
            }
        }
        tracing::debug!(plan = ?plan, sections = %self.state.sections_joined(), "plan changed");
    }

    /// Check or uncheck a section. Returns false when the change is
    /// rejected by the Basic plan rules.
    pub fn toggle_section(&mut self, section: Section, checked: bool) -> bool {
        if self.is_basic() && section.is_mandatory_under_basic() && !checked {
            tracing::debug!(%section, "rejected: mandatory under Basic");
            return false;
        }
        if checked && self.is_basic() && self.state.sections.len() >= BASIC_SECTION_CAP {
            tracing::debug!(%section, "rejected: Basic section cap reached");
            return false;
        }

        if checked {
            if !self.state.has_section(section) {
                self.state.sections.push(section);
            }
        } else {
            self.state.sections.retain(|s| *s != section);
        }
        true
    }

    /// `toggle_section` by catalog name; unknown names are ignored
    #[allow(dead_code)]
    pub fn toggle_section_named(&mut self, name: &str, checked: bool) -> bool {
        match name.parse::<Section>() {
            Ok(section) => self.toggle_section(section, checked),
            Err(err) => {
                tracing::debug!("rejected: {err}");
                false
            }
        }
    }

    /// Checked and not editable: a mandatory section under Basic
    pub fn is_section_locked(&self, section: Section) -> bool {
        self.is_basic() && section.is_mandatory_under_basic()
    }

    /// Cannot be checked because the Basic cap is already reached
    pub fn is_section_capped(&self, section: Section) -> bool {
        self.is_basic()
            && !self.state.has_section(section)
            && !section.is_mandatory_under_basic()
            && self.state.sections.len() >= BASIC_SECTION_CAP
    }

    /// Selected sections that are not Hero or Contact
    pub fn optional_selected_count(&self) -> usize {
        self.state
            .sections
            .iter()
            .filter(|s| !s.is_mandatory_under_basic())
            .count()
    }

    /// Progress readout for the section picker
    pub fn sections_summary(&self) -> String {
        match self.state.plan {
            Some(Plan::Basic) => format!(
                "({}/{} optional + {} mandatory)",
                self.optional_selected_count(),
                BASIC_OPTIONAL_SLOTS,
                MANDATORY_UNDER_BASIC.len()
            ),
            Some(Plan::Pro) => format!("({} selected)", self.state.sections.len()),
            None => String::new(),
        }
    }

    /// Enter the Submitting state and build the payload. Returns `None`
    /// while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmissionPayload> {
        if self.submitting {
            tracing::debug!("submission already in flight");
            return None;
        }
        self.status = None;
        self.submitting = true;
        Some(self.state.to_payload(Utc::now()))
    }

    /// Leave the Submitting state with the transport outcome. The form
    /// contents are kept either way.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        self.status = Some(match result {
            Ok(()) => {
                tracing::debug!(
                    plan = ?self.state.plan,
                    sections = self.state.sections.len(),
                    "quote form submitted"
                );
                SubmitStatus::Success(SUCCESS_MESSAGE.to_string())
            }
            Err(err) => {
                tracing::debug!("error submitting form: {err}");
                SubmitStatus::Error(FAILURE_MESSAGE.to_string())
            }
        });
        self.submitting = false;
    }

    /// Run a whole submission against `transport`.
    ///
    /// Success means the request was dispatched, not that the endpoint
    /// accepted it; see `SubmitTransport`.
    #[allow(dead_code)]
    pub async fn submit<T: SubmitTransport + ?Sized>(&mut self, transport: &T) {
        let Some(payload) = self.begin_submit() else {
            return;
        };
        let result = transport.submit(&payload).await;
        self.finish_submit(result);
    }
}
