use actix_web::{web, HttpResponse};
use validator::Validate;

use cs_core::repositories::{CompanyRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{SignInRequest, TokenResponse};
use crate::handlers::{handle_validation_errors, ApiError};

/// Handler for POST /api/v1/auth/signin
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "token_type": "Bearer",
///     "expires_in": 300,
///     "expires_at": "2025-01-01T00:05:00Z"
/// }
/// ```
///
/// ## Errors
/// * `401 Unauthorized` - Unknown user or wrong password, indistinguishably
pub async fn signin<C, U>(
    state: web::Data<AppState<C, U>>,
    request: web::Json<SignInRequest>,
) -> Result<HttpResponse, ApiError>
where
    C: CompanyRepository + 'static,
    U: UserRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(errors));
    }

    let issued = state
        .token_service
        .issue(&request.username, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(TokenResponse::from(issued)))
}
