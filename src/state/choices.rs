//! Closed option sets for the select-style fields

use serde::Serialize;

/// A select-style field value with a wire value and a display label
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// All options, in display order
    const ALL: &'static [Self];
    /// Label shown while nothing is selected
    const PLACEHOLDER: &'static str;

    /// Value sent to the form endpoint
    fn value(&self) -> &'static str;

    /// Human readable option label
    fn label(&self) -> &'static str;

    /// Option after `current`, wrapping; an unset field starts at the first option
    fn next(current: Option<Self>) -> Self {
        match current.and_then(|c| Self::ALL.iter().position(|o| *o == c)) {
            Some(idx) => Self::ALL[(idx + 1) % Self::ALL.len()],
            None => Self::ALL[0],
        }
    }

    /// Option before `current`, wrapping; an unset field starts at the last option
    fn prev(current: Option<Self>) -> Self {
        match current.and_then(|c| Self::ALL.iter().position(|o| *o == c)) {
            Some(0) | None => Self::ALL[Self::ALL.len() - 1],
            Some(idx) => Self::ALL[idx - 1],
        }
    }

    /// Label for an optional value, falling back to the placeholder
    fn display(current: Option<Self>) -> &'static str {
        current.map_or(Self::PLACEHOLDER, |c| c.label())
    }

    /// Wire value for an optional value; unset fields are sent empty
    fn wire(current: Option<Self>) -> &'static str {
        current.map_or("", |c| c.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BusinessType {
    Physical,
    Online,
    Both,
}

impl Choice for BusinessType {
    const ALL: &'static [Self] = &[Self::Physical, Self::Online, Self::Both];
    const PLACEHOLDER: &'static str = "Business Type";

    fn value(&self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Online => "Online",
            Self::Both => "Both",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Physical => "Physical (Brick & Mortar)",
            Self::Online => "Online (E-commerce/Digital)",
            Self::Both => "Both (Hybrid)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    Urgent,
    Normal,
    Flexible,
}

impl Choice for Timeline {
    const ALL: &'static [Self] = &[Self::Urgent, Self::Normal, Self::Flexible];
    const PLACEHOLDER: &'static str = "Project Timeline";

    fn value(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Normal => "normal",
            Self::Flexible => "flexible",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Urgent => "Urgent (1-2 weeks)",
            Self::Normal => "Normal (1-2 months)",
            Self::Flexible => "Flexible (3+ months)",
        }
    }
}

/// Budget bracket, in pesos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Budget {
    #[serde(rename = "5k-10k")]
    From5kTo10k,
    #[serde(rename = "10k-25k")]
    From10kTo25k,
    #[serde(rename = "25k-50k")]
    From25kTo50k,
    #[serde(rename = "50k+")]
    Over50k,
}

impl Choice for Budget {
    const ALL: &'static [Self] = &[
        Self::From5kTo10k,
        Self::From10kTo25k,
        Self::From25kTo50k,
        Self::Over50k,
    ];
    const PLACEHOLDER: &'static str = "Budget Range";

    fn value(&self) -> &'static str {
        match self {
            Self::From5kTo10k => "5k-10k",
            Self::From10kTo25k => "10k-25k",
            Self::From25kTo50k => "25k-50k",
            Self::Over50k => "50k+",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::From5kTo10k => "₱5,000 - ₱10,000",
            Self::From10kTo25k => "₱10,000 - ₱25,000",
            Self::From25kTo50k => "₱25,000 - ₱50,000",
            Self::Over50k => "₱50,000+",
        }
    }
}

/// Service tier; controls the section selection rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Plan {
    Basic,
    Pro,
}

impl Choice for Plan {
    const ALL: &'static [Self] = &[Self::Basic, Self::Pro];
    const PLACEHOLDER: &'static str = "Select Plan";

    fn value(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Pro => "Pro",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic (4-6 sections max)",
            Self::Pro => "Pro (7-12+ sections)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod cycling {
        use super::*;

        #[test]
        fn test_next_from_unset_is_first() {
            assert_eq!(Timeline::next(None), Timeline::Urgent);
            assert_eq!(Plan::next(None), Plan::Basic);
        }

        #[test]
        fn test_prev_from_unset_is_last() {
            assert_eq!(Budget::prev(None), Budget::Over50k);
            assert_eq!(BusinessType::prev(None), BusinessType::Both);
        }

        #[test]
        fn test_next_wraps() {
            assert_eq!(Timeline::next(Some(Timeline::Flexible)), Timeline::Urgent);
            assert_eq!(Plan::next(Some(Plan::Pro)), Plan::Basic);
        }

        #[test]
        fn test_prev_wraps() {
            assert_eq!(Budget::prev(Some(Budget::From5kTo10k)), Budget::Over50k);
            assert_eq!(Plan::prev(Some(Plan::Basic)), Plan::Pro);
        }

        #[test]
        fn test_next_walks_all_options() {
            let mut current = Budget::next(None);
            let mut seen = vec![current];
            for _ in 1..Budget::ALL.len() {
                current = Budget::next(Some(current));
                seen.push(current);
            }
            assert_eq!(seen, Budget::ALL.to_vec());
        }
    }

    mod values {
        use super::*;

        #[test]
        fn test_wire_values() {
            assert_eq!(BusinessType::Online.value(), "Online");
            assert_eq!(Timeline::Normal.value(), "normal");
            assert_eq!(Budget::Over50k.value(), "50k+");
            assert_eq!(Budget::From10kTo25k.value(), "10k-25k");
            assert_eq!(Plan::Pro.value(), "Pro");
        }

        #[test]
        fn test_wire_of_unset_is_empty() {
            assert_eq!(Timeline::wire(None), "");
            assert_eq!(Plan::wire(Some(Plan::Basic)), "Basic");
        }

        #[test]
        fn test_display_falls_back_to_placeholder() {
            assert_eq!(BusinessType::display(None), "Business Type");
            assert_eq!(Timeline::display(None), "Project Timeline");
            assert_eq!(Budget::display(None), "Budget Range");
            assert_eq!(Plan::display(None), "Select Plan");
            assert_eq!(
                Plan::display(Some(Plan::Basic)),
                "Basic (4-6 sections max)"
            );
        }

        #[test]
        fn test_serde_matches_wire_values() {
            for budget in Budget::ALL {
                let json = serde_json::to_string(budget).unwrap();
                assert_eq!(json, format!("\"{}\"", budget.value()));
            }
            for timeline in Timeline::ALL {
                let json = serde_json::to_string(timeline).unwrap();
                assert_eq!(json, format!("\"{}\"", timeline.value()));
            }
        }
    }
}
