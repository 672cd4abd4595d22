// Postgres storage layer with sqlx
//
// This crate provides the Database handle used by the API services,
// row models, and the password hashing primitives.

pub mod models;
pub mod password;
pub mod repositories;

pub use models::*;
pub use password::{hash_password, verify_password};
pub use repositories::{is_unique_violation, Database};
