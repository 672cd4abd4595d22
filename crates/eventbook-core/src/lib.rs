// Core domain types for the event-booking backend
//
// This crate has NO dependency on storage or HTTP - it's purely domain
// entities and the shared error taxonomy.

pub mod error;
pub mod event;
pub mod user;

pub use error::{Error, Result};
pub use event::{Event, EventStatus};
pub use user::{User, UserRole};
