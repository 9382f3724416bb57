//! Domain entities representing core business objects.

pub mod company;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use company::{
    verify_legal_type, Company, CompanyPatch, LegalType, NewCompany, DESCRIPTION_MAX_LENGTH,
    NAME_MAX_LENGTH,
};
pub use token::{Claims, IssuedToken, ACCESS_TOKEN_EXPIRY_SECONDS, JWT_AUDIENCE, JWT_ISSUER};
pub use user::User;
