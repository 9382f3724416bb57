pub mod company;
pub mod user;

pub use company::{CompanyRepository, MockCompanyRepository};
pub use user::{MockUserRepository, UserRepository};
