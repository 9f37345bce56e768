//! Lead-capture form and the payload delivered to a lead sink

use serde::{Deserialize, Serialize};

use crate::calculator::CalculationData;

/// Smoker declaration, serialized as `"yes"` / `"no"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokerStatus {
    Yes,
    #[default]
    No,
}

impl SmokerStatus {
    pub fn toggle(self) -> Self {
        match self {
            SmokerStatus::Yes => SmokerStatus::No,
            SmokerStatus::No => SmokerStatus::Yes,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SmokerStatus::Yes => "Yes",
            SmokerStatus::No => "No",
        }
    }
}

/// Suggested values for the free-text gender field
pub const GENDER_SUGGESTIONS: [&str; 2] = ["Male", "Female"];

/// Focusable elements of the quote form, in tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeadField {
    #[default]
    Name,
    Birthday,
    Gender,
    Smoker,
    Phone,
    Email,
    Submit,
}

impl LeadField {
    pub const ALL: [LeadField; 7] = [
        LeadField::Name,
        LeadField::Birthday,
        LeadField::Gender,
        LeadField::Smoker,
        LeadField::Phone,
        LeadField::Email,
        LeadField::Submit,
    ];

    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        match self {
            LeadField::Name => "Full Name",
            LeadField::Birthday => "Date of Birth",
            LeadField::Gender => "Gender",
            LeadField::Smoker => "Smoker",
            LeadField::Phone => "Phone Number",
            LeadField::Email => "Email Address",
            LeadField::Submit => "Get Detailed Quote",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            LeadField::Name | LeadField::Birthday | LeadField::Phone | LeadField::Email
        )
    }
}

/// Contact details entered in the quote modal.
///
/// Only presence of the required fields is checked; phone, email and
/// birthday formats are not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub name: String,
    pub birthday: String,
    pub is_smoker: SmokerStatus,
    pub gender: String,
    pub phone: String,
    pub email: String,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text value of a field, `None` for non-text fields.
    pub fn text(&self, field: LeadField) -> Option<&str> {
        match field {
            LeadField::Name => Some(&self.name),
            LeadField::Birthday => Some(&self.birthday),
            LeadField::Gender => Some(&self.gender),
            LeadField::Phone => Some(&self.phone),
            LeadField::Email => Some(&self.email),
            LeadField::Smoker | LeadField::Submit => None,
        }
    }

    /// Mutable text value of a field, `None` for non-text fields.
    pub fn text_mut(&mut self, field: LeadField) -> Option<&mut String> {
        match field {
            LeadField::Name => Some(&mut self.name),
            LeadField::Birthday => Some(&mut self.birthday),
            LeadField::Gender => Some(&mut self.gender),
            LeadField::Phone => Some(&mut self.phone),
            LeadField::Email => Some(&mut self.email),
            LeadField::Smoker | LeadField::Submit => None,
        }
    }

    /// Required fields that are empty after trimming, in form order.
    pub fn missing_required(&self) -> Vec<LeadField> {
        LeadField::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .filter(|f| self.text(*f).is_none_or(|v| v.trim().is_empty()))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Step the gender field through the suggestions.
    ///
    /// Free text that is not a suggestion moves to the first (forward) or
    /// last (backward) suggestion.
    pub fn cycle_gender(&mut self, forward: bool) {
        let len = GENDER_SUGGESTIONS.len();
        let current = GENDER_SUGGESTIONS
            .iter()
            .position(|g| g.eq_ignore_ascii_case(self.gender.trim()));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        self.gender = GENDER_SUGGESTIONS[next].to_string();
    }
}

/// Lead submitted to the sink: the form fields plus the calculation snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotePayload {
    #[serde(flatten)]
    pub form: LeadForm,
    pub calculation: CalculationData,
}

impl QuotePayload {
    pub fn new(form: LeadForm, calculation: CalculationData) -> Self {
        Self { form, calculation }
    }
}
