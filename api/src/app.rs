//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use cs_core::errors::DomainError;
use cs_core::repositories::{CompanyRepository, UserRepository};
use cs_core::services::{
    AccessGate, CompanyService, CredentialStore, CredentialStoreConfig, TokenService,
    TokenServiceConfig, TokenValidator,
};
use cs_infra::database::DatabasePool;
use cs_shared::{AuthConfig, CorsConfig};

use crate::handlers::error::{json_error_handler, path_error_handler};
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{auth, companies, health};

/// Shared state handed to every handler
pub struct AppState<C: CompanyRepository, U: UserRepository> {
    pub company_service: Arc<CompanyService<C>>,
    pub credential_store: Arc<CredentialStore<U>>,
    pub token_service: Arc<TokenService<U>>,
    pub access_gate: AccessGate,
    /// Present when the state is backed by MySQL; drives `/health`
    pub database: Option<DatabasePool>,
}

impl<C, U> AppState<C, U>
where
    C: CompanyRepository + 'static,
    U: UserRepository + 'static,
{
    /// Wires the services over the given repositories
    ///
    /// Fails when the token settings name an unsupported algorithm.
    pub fn new(
        company_repository: Arc<C>,
        user_repository: Arc<U>,
        auth: &AuthConfig,
    ) -> Result<Self, DomainError> {
        let credential_store = Arc::new(CredentialStore::new(
            user_repository,
            CredentialStoreConfig::from(&auth.password),
        ));
        let token_service = Arc::new(TokenService::new(
            Arc::clone(&credential_store),
            TokenServiceConfig::from_jwt_config(&auth.jwt)?,
        )?);
        let validator: Arc<dyn TokenValidator> = token_service.clone();

        Ok(Self {
            company_service: Arc::new(CompanyService::new(company_repository)),
            credential_store,
            token_service,
            access_gate: AccessGate::new(validator),
            database: None,
        })
    }

    /// Attaches the pool the repositories were built on
    pub fn with_database(mut self, database: DatabasePool) -> Self {
        self.database = Some(database);
        self
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<C, U>(
    app_state: web::Data<AppState<C, U>>,
    cors_config: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    C: CompanyRepository + 'static,
    U: UserRepository + 'static,
{
    let gate = app_state.access_gate.clone();

    App::new()
        .app_data(app_state)
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Registered last so CORS is the outermost layer
        .wrap(Logger::default())
        .wrap(create_cors(cors_config))
        .route("/ping", web::get().to(health::ping))
        .route("/health", web::get().to(health::health_check::<C, U>))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(auth::signup::<C, U>))
                        .route("/signin", web::post().to(auth::signin::<C, U>)),
                )
                .service(
                    web::scope("/companies")
                        .route(
                            "",
                            web::post()
                                .to(companies::create_company::<C, U>)
                                .wrap(JwtAuth::new(gate.clone())),
                        )
                        .route("/{id}", web::get().to(companies::get_company::<C, U>))
                        .route(
                            "/{id}",
                            web::patch()
                                .to(companies::update_company::<C, U>)
                                .wrap(JwtAuth::new(gate.clone())),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(companies::delete_company::<C, U>)
                                .wrap(JwtAuth::new(gate)),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
