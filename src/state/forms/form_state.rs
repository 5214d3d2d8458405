//! The quote form record and its wire payload

use super::field::{ChoiceField, TextField};
use crate::state::{Budget, BusinessType, Choice, Plan, Section, Timeline};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Everything the client has entered so far
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    // The basics
    pub full_name: String,
    pub business_name: String,
    pub business_type: Option<BusinessType>,
    // Contact information
    pub email: String,
    pub phone: String,
    pub address: String,
    // Project details
    pub timeline: Option<Timeline>,
    pub budget: Option<Budget>,
    pub plan: Option<Plan>,
    /// Selected sections, in the order they were selected
    pub sections: Vec<Section>,
    pub social_media: String,
    pub google_drive: String,
}

/// A single-field write; covers every scalar field except `plan`,
/// which changes only through `FormController::toggle_plan`
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Text(TextField, String),
    BusinessType(Option<BusinessType>),
    Timeline(Option<Timeline>),
    Budget(Option<Budget>),
}

impl FormState {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FullName => &self.full_name,
            TextField::BusinessName => &self.business_name,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::Address => &self.address,
            TextField::SocialMedia => &self.social_media,
            TextField::GoogleDrive => &self.google_drive,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FullName => &mut self.full_name,
            TextField::BusinessName => &mut self.business_name,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
            TextField::Address => &mut self.address,
            TextField::SocialMedia => &mut self.social_media,
            TextField::GoogleDrive => &mut self.google_drive,
        }
    }

    /// Overwrite one field in place
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Text(field, value) => *self.text_mut(field) = value,
            FieldUpdate::BusinessType(value) => self.business_type = value,
            FieldUpdate::Timeline(value) => self.timeline = value,
            FieldUpdate::Budget(value) => self.budget = value,
        }
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    /// Selected section names joined the way the endpoint expects them
    pub fn sections_joined(&self) -> String {
        self.sections
            .iter()
            .map(Section::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Flatten the form into the key/value pairs sent to the endpoint
    pub fn to_payload(&self, submitted_at: DateTime<Utc>) -> SubmissionPayload {
        let text = |field: TextField| (field.key(), self.text(field).to_string());
        let fields = vec![
            text(TextField::FullName),
            text(TextField::BusinessName),
            (
                ChoiceField::BusinessType.key(),
                BusinessType::wire(self.business_type).to_string(),
            ),
            text(TextField::Email),
            text(TextField::Phone),
            text(TextField::Address),
            (
                ChoiceField::Timeline.key(),
                Timeline::wire(self.timeline).to_string(),
            ),
            (
                ChoiceField::Budget.key(),
                Budget::wire(self.budget).to_string(),
            ),
            (ChoiceField::Plan.key(), Plan::wire(self.plan).to_string()),
            ("sections", self.sections_joined()),
            text(TextField::SocialMedia),
            text(TextField::GoogleDrive),
            (
                "timestamp",
                submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
        ];
        SubmissionPayload { fields }
    }
}

/// Flat, ordered key/value pairs, URL-form-encoded on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    fields: Vec<(&'static str, String)>,
}

impl SubmissionPayload {
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[allow(dead_code)]
    pub fn keys(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(k, _)| *k).collect()
    }
}
