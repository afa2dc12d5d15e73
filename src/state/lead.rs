//! Lead domain types shared by the form, the store, and the ingestion client

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Industries offered by the capture form.
///
/// The lowercase serialized values are a stable wire contract with the
/// ingestion endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Education,
    Retail,
    Manufacturing,
    Consulting,
    Other,
}

impl Industry {
    /// All industries in display order
    pub const ALL: [Industry; 8] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Education,
        Industry::Retail,
        Industry::Manufacturing,
        Industry::Consulting,
        Industry::Other,
    ];

    /// Value sent to the ingestion endpoint
    #[allow(dead_code)]
    pub fn wire_value(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Healthcare => "healthcare",
            Self::Finance => "finance",
            Self::Education => "education",
            Self::Retail => "retail",
            Self::Manufacturing => "manufacturing",
            Self::Consulting => "consulting",
            Self::Other => "other",
        }
    }

    /// Parse a wire value back into an industry
    #[allow(dead_code)]
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.wire_value() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Education => "Education",
            Self::Retail => "Retail & E-commerce",
            Self::Manufacturing => "Manufacturing",
            Self::Consulting => "Consulting",
            Self::Other => "Other",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|i| i == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|i| i == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Form fields in declaration order (also the order validation reports in)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Industry,
}

impl LeadField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Industry => "Industry",
        }
    }
}

/// The in-progress lead held by the form while editing.
///
/// Industry is a select widget, so "not chosen" is the only invalid state
/// it can be in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub industry: Option<Industry>,
}

/// A draft that passed validation, captured at submission time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLead {
    pub name: String,
    pub email: String,
    pub industry: Industry,
}

/// An accepted lead as recorded in the session store.
///
/// `submitted_at` is stamped once the ingestion endpoint accepts the lead
/// and is never edited afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub industry: Industry,
    pub submitted_at: DateTime<Utc>,
}
