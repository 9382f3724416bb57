//! Company entity representing a registered organization.

use std::fmt;
use std::str::FromStr;

use cs_shared::validation::validators;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Maximum company name length in characters
pub const NAME_MAX_LENGTH: usize = 15;

/// Maximum description length in characters
pub const DESCRIPTION_MAX_LENGTH: usize = 3000;

/// Legal form of a company
///
/// Closed set; `Unspecified` is the explicit "no type" value and is spelled
/// as the empty string on the wire and in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalType {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Corporations,
    NonProfit,
    Cooperative,
    SoleProprietorship,
}

impl LegalType {
    /// Every member of the enumeration, sentinel included
    pub const ALL: [LegalType; 5] = [
        LegalType::Unspecified,
        LegalType::Corporations,
        LegalType::NonProfit,
        LegalType::Cooperative,
        LegalType::SoleProprietorship,
    ];

    /// Wire and storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LegalType::Unspecified => "",
            LegalType::Corporations => "Corporations",
            LegalType::NonProfit => "NonProfit",
            LegalType::Cooperative => "Cooperative",
            LegalType::SoleProprietorship => "SoleProprietorship",
        }
    }
}

impl fmt::Display for LegalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegalType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LegalType::ALL
            .into_iter()
            .find(|legal_type| legal_type.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidLegalType {
                value: s.to_string(),
            })
    }
}

/// Membership check for the legal type enumeration
///
/// Exact, case-sensitive match; the empty string is a member.
pub fn verify_legal_type(value: &str) -> bool {
    value.parse::<LegalType>().is_ok()
}

/// Company entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier, assigned once at creation
    pub id: Uuid,

    /// Display name (1..=15 characters)
    pub name: String,

    /// Free text, empty when not provided
    pub description: String,

    /// Head count
    pub employees: u32,

    /// Whether the company is officially registered
    pub registration_status: bool,

    /// Legal form
    pub legal_type: LegalType,
}

/// A company as submitted for creation, before an identifier exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub employees: u32,
    pub registration_status: bool,
    #[serde(default)]
    pub legal_type: LegalType,
}

impl NewCompany {
    /// Checks the field rules that hold for every stored company
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_description(&self.description)
    }

    /// Attaches the allocated identifier
    pub fn into_company(self, id: Uuid) -> Company {
        Company {
            id,
            name: self.name,
            description: self.description,
            employees: self.employees,
            registration_status: self.registration_status,
            legal_type: self.legal_type,
        }
    }
}

/// Sparse update: only the fields that are `Some` are applied
///
/// An empty `name` and [`LegalType::Unspecified`] count as not supplied, so
/// they leave the stored value in place. `description` is the exception: an
/// empty string clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub employees: Option<u32>,
    pub registration_status: Option<bool>,
    pub legal_type: Option<LegalType>,
}

impl CompanyPatch {
    fn supplied_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    fn supplied_legal_type(&self) -> Option<LegalType> {
        self.legal_type
            .filter(|legal_type| *legal_type != LegalType::Unspecified)
    }

    /// True when the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        self.supplied_name().is_none()
            && self.description.is_none()
            && self.employees.is_none()
            && self.registration_status.is_none()
            && self.supplied_legal_type().is_none()
    }

    /// Checks the supplied fields against the company field rules
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = self.supplied_name() {
            validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }

    /// Produces the merged record; `current` is left untouched
    pub fn apply_to(&self, current: &Company) -> Company {
        let mut merged = current.clone();
        if let Some(name) = self.supplied_name() {
            merged.name = name.to_string();
        }
        if let Some(description) = &self.description {
            merged.description = description.clone();
        }
        if let Some(employees) = self.employees {
            merged.employees = employees;
        }
        if let Some(registration_status) = self.registration_status {
            merged.registration_status = registration_status;
        }
        if let Some(legal_type) = self.supplied_legal_type() {
            merged.legal_type = legal_type;
        }
        merged
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if !validators::not_empty(name) {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        });
    }
    if !validators::char_length_at_most(name, NAME_MAX_LENGTH) {
        return Err(ValidationError::InvalidLength {
            field: "name".to_string(),
            max: NAME_MAX_LENGTH,
            actual: name.chars().count(),
        });
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    if !validators::char_length_at_most(description, DESCRIPTION_MAX_LENGTH) {
        return Err(ValidationError::InvalidLength {
            field: "description".to_string(),
            max: DESCRIPTION_MAX_LENGTH,
            actual: description.chars().count(),
        });
    }
    Ok(())
}
