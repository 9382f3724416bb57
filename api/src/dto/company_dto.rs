use cs_core::domain::entities::company::{
    verify_legal_type, Company, CompanyPatch, LegalType, NewCompany,
};
use cs_core::errors::ValidationError as DomainValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 15))]
    pub name: String,
    #[validate(length(max = 3000))]
    pub description: Option<String>,
    #[validate(range(min = 0_i64, max = 4_294_967_295_i64))]
    pub employees: i64,
    pub registration_status: bool,
    #[serde(default)]
    #[validate(custom(function = "validate_legal_type"))]
    pub legal_type: String,
}

impl CreateCompanyRequest {
    /// Converts a validated request into the domain value
    pub fn into_new_company(self) -> Result<NewCompany, DomainValidationError> {
        Ok(NewCompany {
            name: self.name,
            description: self.description.unwrap_or_default(),
            employees: employees_to_u32(self.employees)?,
            registration_status: self.registration_status,
            legal_type: self.legal_type.parse::<LegalType>()?,
        })
    }
}

/// Sparse update body; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    /// An empty name leaves the stored name in place
    #[validate(length(max = 15))]
    pub name: Option<String>,
    #[validate(length(max = 3000))]
    pub description: Option<String>,
    #[validate(range(min = 0_i64, max = 4_294_967_295_i64))]
    pub employees: Option<i64>,
    pub registration_status: Option<bool>,
    #[validate(custom(function = "validate_legal_type"))]
    pub legal_type: Option<String>,
}

impl UpdateCompanyRequest {
    /// Converts a validated request into the domain patch
    ///
    /// Empty `name` and `legalType` count as absent. A request that carries
    /// nothing else fails with `EmptyPatch`.
    pub fn into_patch(self) -> Result<CompanyPatch, DomainValidationError> {
        let patch = CompanyPatch {
            name: self.name.filter(|name| !name.is_empty()),
            description: self.description,
            employees: self.employees.map(employees_to_u32).transpose()?,
            registration_status: self.registration_status,
            legal_type: self
                .legal_type
                .filter(|value| !value.is_empty())
                .map(|value| value.parse::<LegalType>())
                .transpose()?,
        };

        if patch.is_empty() {
            return Err(DomainValidationError::EmptyPatch);
        }
        Ok(patch)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub employees: u32,
    pub registration_status: bool,
    pub legal_type: String,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            description: company.description,
            employees: company.employees,
            registration_status: company.registration_status,
            legal_type: company.legal_type.as_str().to_string(),
        }
    }
}

fn employees_to_u32(employees: i64) -> Result<u32, DomainValidationError> {
    u32::try_from(employees).map_err(|_| DomainValidationError::InvalidFormat {
        field: "employees".to_string(),
    })
}

fn validate_legal_type(value: &str) -> Result<(), ValidationError> {
    if verify_legal_type(value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_legal_type"))
    }
}
