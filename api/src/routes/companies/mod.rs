//! Company route handlers
//!
//! Reads are public; create, update and delete sit behind `JwtAuth`.

pub mod create;
pub mod delete;
pub mod get;
pub mod update;

pub use create::create_company;
pub use delete::delete_company;
pub use get::get_company;
pub use update::update_company;
