//! MySQL implementation of the CompanyRepository trait.
//!
//! Identifiers are stored as BINARY(16). An empty description is stored as
//! NULL and read back as the empty string.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use cs_core::domain::entities::company::{Company, LegalType};
use cs_core::errors::DomainError;
use cs_core::repositories::CompanyRepository;

use super::map_sqlx_error;

const RESOURCE: &str = "Company";

/// MySQL implementation of CompanyRepository
pub struct MySqlCompanyRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCompanyRepository {
    /// Create a new MySQL company repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Company entity
    fn row_to_company(row: &sqlx::mysql::MySqlRow) -> Result<Company, DomainError> {
        let legal_type: String = row
            .try_get("legal_type")
            .map_err(|e| DomainError::internal(format!("Failed to get legal_type: {}", e)))?;
        let description: Option<String> = row
            .try_get("description")
            .map_err(|e| DomainError::internal(format!("Failed to get description: {}", e)))?;

        Ok(Company {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to get name: {}", e)))?,
            description: description.unwrap_or_default(),
            employees: row
                .try_get("employees")
                .map_err(|e| DomainError::internal(format!("Failed to get employees: {}", e)))?,
            registration_status: row.try_get("registration_status").map_err(|e| {
                DomainError::internal(format!("Failed to get registration_status: {}", e))
            })?,
            legal_type: legal_type.parse::<LegalType>().map_err(|e| {
                DomainError::internal(format!("Stored company has unknown legal type: {}", e))
            })?,
        })
    }
}

#[async_trait]
impl CompanyRepository for MySqlCompanyRepository {
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM companies WHERE id = ?
            ) AS company_exists
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(RESOURCE, "check", e))?;

        let exists: i64 = result
            .try_get("company_exists")
            .map_err(|e| DomainError::internal(format!("Failed to get existence result: {}", e)))?;

        Ok(exists == 1)
    }

    async fn create(&self, company: &Company) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO companies (
                id, name, description, employees,
                registration_status, legal_type
            ) VALUES (?, ?, NULLIF(?, ''), ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(company.id)
            .bind(&company.name)
            .bind(&company.description)
            .bind(company.employees)
            .bind(company.registration_status)
            .bind(company.legal_type.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(RESOURCE, "create", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, DomainError> {
        let query = r#"
            SELECT id, name, description, employees,
                   registration_status, legal_type
            FROM companies
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(RESOURCE, "fetch", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_company(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, company: &Company) -> Result<(), DomainError> {
        let query = r#"
            UPDATE companies SET
                name = ?,
                description = NULLIF(?, ''),
                employees = ?,
                registration_status = ?,
                legal_type = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&company.name)
            .bind(&company.description)
            .bind(company.employees)
            .bind(company.registration_status)
            .bind(company.legal_type.as_str())
            .bind(company.id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(RESOURCE, "update", e))?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        // Zero rows: either the row is gone or the values were already stored
        if self.exists(company.id).await? {
            Err(DomainError::NoModification)
        } else {
            Err(DomainError::not_found(RESOURCE))
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM companies WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(RESOURCE, "delete", e))?;

        Ok(result.rows_affected() > 0)
    }
}
