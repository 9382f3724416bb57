use actix_web::{web, HttpResponse};
use uuid::Uuid;

use cs_core::repositories::{CompanyRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;

/// Handler for DELETE /api/v1/companies/{id}
///
/// * `204 No Content` - Company removed
/// * `404 Not Found` - Nothing matched
pub async fn delete_company<C, U>(
    auth: AuthContext,
    state: web::Data<AppState<C, U>>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    C: CompanyRepository + 'static,
    U: UserRepository + 'static,
{
    let id = id.into_inner();
    state.company_service.delete(id).await?;

    log::info!("User {} deleted company {}", auth.username, id);

    Ok(HttpResponse::NoContent().finish())
}
