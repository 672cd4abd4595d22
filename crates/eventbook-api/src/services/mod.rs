// Business-logic services sitting between routes and storage

pub mod auth;
pub mod event;
pub mod user;

pub use auth::AuthService;
pub use event::EventService;
pub use user::UserService;

use anyhow::anyhow;
use eventbook_core::{User, UserRole};
use eventbook_storage::UserRow;

/// Map a storage row to the domain User. The password hash is dropped here;
/// nothing past this point can serialize it.
pub(crate) fn row_to_user(row: UserRow) -> anyhow::Result<User> {
    let role = UserRole::parse(&row.role)
        .ok_or_else(|| anyhow!("unknown role {:?} on user {}", row.role, row.id))?;

    Ok(User {
        id: row.id,
        email: row.email,
        first_name: row.first_name,
        last_name: row.last_name,
        role,
        phone_number: row.phone_number,
        location: row.location,
        verified: row.verified,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}
