//! Form field descriptors

/// Free-text fields of the quote form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FullName,
    BusinessName,
    Email,
    Phone,
    Address,
    SocialMedia,
    GoogleDrive,
}

impl TextField {
    #[allow(dead_code)]
    pub const ALL: [TextField; 7] = [
        TextField::FullName,
        TextField::BusinessName,
        TextField::Email,
        TextField::Phone,
        TextField::Address,
        TextField::SocialMedia,
        TextField::GoogleDrive,
    ];

    /// Key used in the submitted payload
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::BusinessName => "businessName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::SocialMedia => "socialMedia",
            Self::GoogleDrive => "googleDrive",
        }
    }

    /// Placeholder label shown in the form
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::BusinessName => "Business Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Address => "Address",
            Self::SocialMedia => "Social Media Links",
            Self::GoogleDrive => "Google Drive Link for Assets",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Address)
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::FullName | Self::Email | Self::Phone)
    }
}

/// Select-style fields of the quote form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceField {
    BusinessType,
    Timeline,
    Budget,
    Plan,
}

impl ChoiceField {
    pub fn key(&self) -> &'static str {
        match self {
            Self::BusinessType => "businessType",
            Self::Timeline => "timeline",
            Self::Budget => "budget",
            Self::Plan => "plan",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BusinessType => "Business Type",
            Self::Timeline => "Project Timeline",
            Self::Budget => "Budget Range",
            Self::Plan => "Plan",
        }
    }
}

/// A focusable element of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text(TextField),
    Choice(ChoiceField),
    Sections,
    Submit,
}

impl FormField {
    /// Tab order; follows the three visual groups of the form
    pub const ORDER: [FormField; 13] = [
        FormField::Text(TextField::FullName),
        FormField::Text(TextField::BusinessName),
        FormField::Choice(ChoiceField::BusinessType),
        FormField::Text(TextField::Email),
        FormField::Text(TextField::Phone),
        FormField::Text(TextField::Address),
        FormField::Choice(ChoiceField::Timeline),
        FormField::Choice(ChoiceField::Budget),
        FormField::Choice(ChoiceField::Plan),
        FormField::Sections,
        FormField::Text(TextField::SocialMedia),
        FormField::Text(TextField::GoogleDrive),
        FormField::Submit,
    ];

    /// Field at a tab index; out-of-range indexes land on the submit button
    pub fn at(index: usize) -> Self {
        Self::ORDER
            .get(index)
            .copied()
            .unwrap_or(FormField::Submit)
    }

    pub fn index(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| f == self)
            .unwrap_or(Self::ORDER.len() - 1)
    }

    pub fn count() -> usize {
        Self::ORDER.len()
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Text(t) if t.is_multiline())
    }
}
