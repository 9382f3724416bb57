use actix_web::{web, HttpResponse};
use validator::Validate;

use cs_core::repositories::{CompanyRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{SignUpRequest, SignUpResponse};
use crate::handlers::{handle_validation_errors, ApiError};

/// Handler for POST /api/v1/auth/signup
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "password": "secret123"
/// }
/// ```
///
/// # Response
///
/// * `201 Created` - User registered
/// * `400 Bad Request` - Username or password rejected
/// * `409 Conflict` - Username already taken
pub async fn signup<C, U>(
    state: web::Data<AppState<C, U>>,
    request: web::Json<SignUpRequest>,
) -> Result<HttpResponse, ApiError>
where
    C: CompanyRepository + 'static,
    U: UserRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(errors));
    }

    state
        .credential_store
        .register(&request.username, &request.password)
        .await?;

    log::info!("User {} signed up", request.username);

    Ok(HttpResponse::Created().json(SignUpResponse {
        message: "User registered successfully".to_string(),
        username: request.username,
    }))
}
