use actix_web::{web, HttpResponse};
use validator::Validate;

use cs_core::repositories::{CompanyRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{CompanyResponse, CreateCompanyRequest};
use crate::handlers::{handle_validation_errors, ApiError};
use crate::middleware::auth::AuthContext;

/// Handler for POST /api/v1/companies
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Acme",
///     "description": "Anvils and rockets",
///     "employees": 10,
///     "registrationStatus": true,
///     "legalType": "Corporations"
/// }
/// ```
///
/// # Response
///
/// * `201 Created` - The stored company, identifier included
/// * `400 Bad Request` - Field rules violated
/// * `401 Unauthorized` - Missing or invalid bearer token
/// * `503 Service Unavailable` - No identifier could be allocated
pub async fn create_company<C, U>(
    auth: AuthContext,
    state: web::Data<AppState<C, U>>,
    request: web::Json<CreateCompanyRequest>,
) -> Result<HttpResponse, ApiError>
where
    C: CompanyRepository + 'static,
    U: UserRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(errors));
    }

    let company = state
        .company_service
        .create(request.into_new_company()?)
        .await?;

    log::info!("User {} created company {}", auth.username, company.id);

    Ok(HttpResponse::Created().json(CompanyResponse::from(company)))
}
