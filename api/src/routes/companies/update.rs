use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use cs_core::repositories::{CompanyRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{CompanyResponse, UpdateCompanyRequest};
use crate::handlers::{handle_validation_errors, ApiError};
use crate::middleware::auth::AuthContext;

/// Handler for PATCH /api/v1/companies/{id}
///
/// Only the fields present in the body are changed. A body without any
/// field is rejected with 400.
///
/// # Response
///
/// * `200 OK` - The company after the update
/// * `404 Not Found` - No company with that identifier
/// * `409 Conflict` - The company changed concurrently
pub async fn update_company<C, U>(
    auth: AuthContext,
    state: web::Data<AppState<C, U>>,
    id: web::Path<Uuid>,
    request: web::Json<UpdateCompanyRequest>,
) -> Result<HttpResponse, ApiError>
where
    C: CompanyRepository + 'static,
    U: UserRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(errors));
    }

    let id = id.into_inner();
    let company = state
        .company_service
        .update(id, request.into_patch()?)
        .await?;

    log::info!("User {} updated company {}", auth.username, id);

    Ok(HttpResponse::Ok().json(CompanyResponse::from(company)))
}
