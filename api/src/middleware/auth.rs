//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware hands the Authorization header to the core access gate and
//! injects the resulting user context into the request. Requests that fail
//! the gate never reach the wrapped handler.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use cs_core::{domain::entities::token::Claims, errors::DomainError, services::AccessGate};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use crate::handlers::error::handle_domain_error;

/// Authenticated caller injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Username asserted by the token
    pub username: String,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            username: claims.sub,
        }
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let context = req.extensions().get::<AuthContext>().cloned();
        ready(context.ok_or_else(|| unauthorized(&DomainError::AuthenticationRequired)))
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    gate: AccessGate,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware around the access gate
    pub fn new(gate: AccessGate) -> Self {
        Self { gate }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            gate: self.gate.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    gate: AccessGate,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let authorization = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        match self.gate.authorize(authorization) {
            Ok(claims) => {
                log::debug!("Authenticated request for user {} (token {})", claims.sub, claims.jti);
                req.extensions_mut().insert(AuthContext::from_claims(claims));
                Box::pin(async move {
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                })
            }
            Err(error) => {
                log::info!(
                    "Rejected unauthenticated {} {}",
                    req.method(),
                    req.path()
                );
                // Answered as a response so outer middleware such as CORS still runs
                let response = req
                    .into_response(handle_domain_error(&error))
                    .map_into_right_body();
                Box::pin(async move { Ok(response) })
            }
        }
    }
}

fn unauthorized(error: &DomainError) -> Error {
    InternalError::from_response(error.to_string(), handle_domain_error(error)).into()
}
