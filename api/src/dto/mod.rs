//! Request and response bodies of the HTTP boundary

pub mod auth_dto;
pub mod company_dto;
pub mod error;

pub use auth_dto::{SignInRequest, SignUpRequest, SignUpResponse, TokenResponse};
pub use company_dto::{CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest};
pub use error::{ErrorResponse, ErrorResponseExt};
