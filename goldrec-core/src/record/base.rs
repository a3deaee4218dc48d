use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::GoldrecError;

/// Stable record identifier: the 0-based row index of the source dataset.
pub type RecordId = usize;

/// One row of the source dataset. All fields are optional — uploaded
/// datasets routinely have holes. Immutable once loaded for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub birthdate: Option<NaiveDate>,
    /// Free-text accumulation field.
    pub notes: Option<String>,
    /// Cluster label from a prior resolution run, if the dataset carries one.
    /// Used only as approximate ground truth for model evaluation.
    #[serde(default)]
    pub source_cluster: Option<i64>,
}

impl Record {
    /// An entirely empty record.
    pub fn empty() -> Self {
        Self {
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
            gender: None,
            city: None,
            country: None,
            birthdate: None,
            notes: None,
            source_cluster: None,
        }
    }

    /// Composite text surrogate used for similarity: the identifier-bearing
    /// fields (first name and email) joined by a space, nulls skipped.
    pub fn surrogate(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(2);
        if let Some(first) = self.first_name.as_deref() {
            parts.push(first);
        }
        if let Some(email) = self.email.as_deref() {
            parts.push(email);
        }
        parts.join(" ")
    }
}

/// The record field used as the display name on candidate pairs.
/// Supplied by the caller as a column name and validated at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierField {
    FirstName,
    LastName,
    Email,
    Phone,
    Gender,
    City,
    Country,
}

impl IdentifierField {
    /// Parse a caller-supplied column name ("First Name", "email", ...).
    /// Case-insensitive; spaces and underscores are interchangeable.
    pub fn parse(name: &str) -> Result<Self, GoldrecError> {
        let normalized: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "firstname" => Ok(Self::FirstName),
            "lastname" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "gender" => Ok(Self::Gender),
            "city" => Ok(Self::City),
            "country" => Ok(Self::Country),
            _ => Err(GoldrecError::UnknownIdentifierField {
                name: name.to_string(),
            }),
        }
    }

    /// The canonical column header for this field.
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Gender => "Gender",
            Self::City => "City",
            Self::Country => "Country",
        }
    }

    /// The value of this field on a record, if present.
    pub fn value_of<'r>(&self, record: &'r Record) -> Option<&'r str> {
        match self {
            Self::FirstName => record.first_name.as_deref(),
            Self::LastName => record.last_name.as_deref(),
            Self::Email => record.email.as_deref(),
            Self::Phone => record.phone.as_deref(),
            Self::Gender => record.gender.as_deref(),
            Self::City => record.city.as_deref(),
            Self::Country => record.country.as_deref(),
        }
    }
}
