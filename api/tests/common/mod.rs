//! Helpers shared by the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use cs_api::AppState;
use cs_core::repositories::{MockCompanyRepository, MockUserRepository};
use cs_shared::{AuthConfig, CorsConfig, JwtConfig, PasswordConfig};

pub type TestState = AppState<MockCompanyRepository, MockUserRepository>;

pub const MAX_PAYLOAD: usize = 64 * 1024;

/// Minimum bcrypt cost keeps the suite fast
pub fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt: JwtConfig::new("integration-test-secret"),
        password: PasswordConfig { bcrypt_cost: 4 },
    }
}

pub fn cors_config() -> CorsConfig {
    CorsConfig::default()
}

pub fn test_state() -> web::Data<TestState> {
    let state = AppState::new(
        Arc::new(MockCompanyRepository::new()),
        Arc::new(MockUserRepository::new()),
        &auth_config(),
    )
    .expect("test auth config is valid");
    web::Data::new(state)
}

/// Registers `username` and returns a fresh access token for it
pub async fn bearer_for(state: &TestState, username: &str) -> String {
    let password = "correct-horse-battery";
    state
        .credential_store
        .register(username, password)
        .await
        .expect("registration succeeds");
    let issued = state
        .token_service
        .issue(username, password)
        .await
        .expect("sign-in succeeds");
    format!("Bearer {}", issued.access_token)
}

pub fn acme_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Acme",
        "description": "Anvils and rockets",
        "employees": 10,
        "registrationStatus": true,
        "legalType": "Corporations"
    })
}
