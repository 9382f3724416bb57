//! Integration tests for the company endpoints

mod common;

use actix_web::{http::StatusCode, test, web, App, HttpResponse};
use cs_api::create_app;
use cs_api::middleware::auth::AuthContext;
use cs_shared::CorsConfig;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{acme_body, bearer_for, cors_config, test_state, MAX_PAYLOAD};

#[actix_web::test]
async fn test_mutations_require_token() {
    let app = test::init_service(create_app(test_state(), &cors_config(), MAX_PAYLOAD)).await;
    let id = Uuid::new_v4();

    let requests = vec![
        test::TestRequest::post()
            .uri("/api/v1/companies")
            .set_json(acme_body())
            .to_request(),
        test::TestRequest::patch()
            .uri(&format!("/api/v1/companies/{}", id))
            .set_json(json!({"employees": 1}))
            .to_request(),
        test::TestRequest::delete()
            .uri(&format!("/api/v1/companies/{}", id))
            .to_request(),
        test::TestRequest::post()
            .uri("/api/v1/companies")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .set_json(acme_body())
            .to_request(),
        test::TestRequest::post()
            .uri("/api/v1/companies")
            .insert_header(("Authorization", "Basic YWxpY2U6cHc="))
            .set_json(acme_body())
            .to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "AUTHENTICATION_REQUIRED");
    }
}

#[actix_web::test]
async fn test_company_lifecycle() {
    let state = test_state();
    let bearer = bearer_for(&state, "alice").await;
    let app = test::init_service(create_app(state, &cors_config(), MAX_PAYLOAD)).await;

    // create
    let req = test::TestRequest::post()
        .uri("/api/v1/companies")
        .insert_header(("Authorization", bearer.as_str()))
        .set_json(acme_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap_or_default().to_string();
    assert!(Uuid::parse_str(&id).is_ok());
    assert_eq!(created["name"], "Acme");
    assert_eq!(created["registrationStatus"], true);
    assert_eq!(created["legalType"], "Corporations");

    // anonymous read
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/companies/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);

    // sparse update
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/companies/{}", id))
        .insert_header(("Authorization", bearer.as_str()))
        .set_json(json!({"employees": 42}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["employees"], 42);
    assert_eq!(updated["name"], "Acme");
    assert_eq!(updated["description"], "Anvils and rockets");

    // same values again is still a success
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/companies/{}", id))
        .insert_header(("Authorization", bearer.as_str()))
        .set_json(json!({"employees": 42}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // delete, then everything is gone
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/companies/{}", id))
        .insert_header(("Authorization", bearer.as_str()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/companies/{}", id))
        .insert_header(("Authorization", bearer.as_str()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/companies/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_create_validation() {
    let state = test_state();
    let bearer = bearer_for(&state, "alice").await;
    let app = test::init_service(create_app(state, &cors_config(), MAX_PAYLOAD)).await;

    let mut too_long = acme_body();
    too_long["name"] = json!("Sixteen chars!!!");
    let mut bad_legal_type = acme_body();
    bad_legal_type["legalType"] = json!("LLC");
    let mut negative = acme_body();
    negative["employees"] = json!(-1);
    let mut huge = acme_body();
    huge["description"] = json!("x".repeat(3001));
    let mut missing_name = acme_body();
    if let Some(body) = missing_name.as_object_mut() {
        body.remove("name");
    }

    for payload in [too_long, bad_legal_type, negative, huge, missing_name] {
        let req = test::TestRequest::post()
            .uri("/api/v1/companies")
            .insert_header(("Authorization", bearer.as_str()))
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload {}", payload);
    }
}

#[actix_web::test]
async fn test_create_without_optional_fields() {
    let state = test_state();
    let bearer = bearer_for(&state, "alice").await;
    let app = test::init_service(create_app(state, &cors_config(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/companies")
        .insert_header(("Authorization", bearer.as_str()))
        .set_json(json!({"name": "Bare", "employees": 0, "registrationStatus": false}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["description"], "");
    assert_eq!(body["legalType"], "");
}

#[actix_web::test]
async fn test_update_rejections() {
    let state = test_state();
    let bearer = bearer_for(&state, "alice").await;
    let app = test::init_service(create_app(state, &cors_config(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/companies")
        .insert_header(("Authorization", bearer.as_str()))
        .set_json(acme_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/api/v1/companies/{}", created["id"].as_str().unwrap_or_default());

    for payload in [
        json!({}),
        json!({"name": ""}),
        json!({"legalType": ""}),
        json!({"name": "", "legalType": ""}),
        json!({"legalType": "LLC"}),
        json!({"name": "x".repeat(16)}),
    ] {
        let req = test::TestRequest::patch()
            .uri(&uri)
            .insert_header(("Authorization", bearer.as_str()))
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload {}", payload);
    }

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/companies/{}", Uuid::new_v4()))
        .insert_header(("Authorization", bearer.as_str()))
        .set_json(json!({"employees": 3}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_malformed_id_is_bad_request() {
    let state = test_state();
    let bearer = bearer_for(&state, "alice").await;
    let app = test::init_service(create_app(state, &cors_config(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/companies/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri("/api/v1/companies/12345")
        .insert_header(("Authorization", bearer.as_str()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_blank_fields_keep_stored_values() {
    let state = test_state();
    let bearer = bearer_for(&state, "alice").await;
    let app = test::init_service(create_app(state, &cors_config(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/companies")
        .insert_header(("Authorization", bearer.as_str()))
        .set_json(acme_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/api/v1/companies/{}", created["id"].as_str().unwrap_or_default());

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(("Authorization", bearer.as_str()))
        .set_json(json!({"name": "", "legalType": "", "description": "", "employees": 7}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], "Acme");
    assert_eq!(updated["legalType"], "Corporations");
    assert_eq!(updated["description"], "");
    assert_eq!(updated["employees"], 7);
}

#[actix_web::test]
async fn test_rejected_requests_carry_cors_headers() {
    let cors = CorsConfig {
        allowed_origins: vec!["http://localhost:3000".to_string()],
        ..CorsConfig::default()
    };
    let app = test::init_service(create_app(test_state(), &cors, MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/companies")
        .insert_header(("Origin", "http://localhost:3000"))
        .set_json(acme_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("http://localhost:3000")
    );
}

#[actix_web::test]
async fn test_auth_context_without_middleware_is_unauthorized() {
    async fn whoami(auth: AuthContext) -> HttpResponse {
        HttpResponse::Ok().body(auth.username)
    }

    let app = test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;

    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "AUTHENTICATION_REQUIRED");
}
