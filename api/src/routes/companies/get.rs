use actix_web::{web, HttpResponse};
use uuid::Uuid;

use cs_core::repositories::{CompanyRepository, UserRepository};

use crate::app::AppState;
use crate::dto::CompanyResponse;
use crate::handlers::ApiError;

/// Handler for GET /api/v1/companies/{id}
pub async fn get_company<C, U>(
    state: web::Data<AppState<C, U>>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    C: CompanyRepository + 'static,
    U: UserRepository + 'static,
{
    let company = state.company_service.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CompanyResponse::from(company)))
}
