// Auth service: credential verification and account registration

use std::collections::BTreeMap;
use std::sync::Arc;

use eventbook_core::{Error, Result};
use eventbook_storage::{hash_password, is_unique_violation, verify_password, CreateUser, Database};

use super::row_to_user;
use crate::auth::config::AuthConfig;
use crate::auth::jwt;
use crate::auth::routes::{LoginRequest, LoginResponse, RegisterRequest};
use crate::common::MessageResponse;

const EMAIL_TAKEN: &str = "Email is already in use";

pub struct AuthService {
    db: Arc<Database>,
    config: Arc<AuthConfig>,
}

impl AuthService {
    pub fn new(db: Arc<Database>, config: Arc<AuthConfig>) -> Self {
        Self { db, config }
    }

    /// Verify credentials and issue a signed token.
    ///
    /// Unknown email and wrong password take the same exit: the response
    /// must not reveal which one happened.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse> {
        let row = match self.db.get_user_by_email(&req.email).await? {
            Some(row) => row,
            None => return Err(Error::bad_credentials()),
        };

        if !verify_password(&req.password, &row.password_hash)? {
            return Err(Error::bad_credentials());
        }

        let user = row_to_user(row)?;
        let token = jwt::issue_token(
            &self.config,
            user.id,
            &user.email,
            &user.display_name(),
            user.role,
        )?;

        tracing::info!(user_id = %user.id, role = %user.role, "user logged in");

        Ok(LoginResponse {
            token,
            id: user.id,
            username: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
        })
    }

    /// Create a new account. Does not log the caller in.
    ///
    /// The email pre-check gives a friendly error in the common case; the
    /// unique index closes the race, and a lost race maps to the same answer.
    pub async fn register(&self, req: RegisterRequest) -> Result<MessageResponse> {
        let errors = validate_registration(&req);
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        if self.db.email_exists(&req.email).await? {
            return Err(Error::field("email", EMAIL_TAKEN));
        }

        let input = CreateUser {
            email: req.email,
            password_hash: hash_password(&req.password)?,
            first_name: req.first_name,
            last_name: req.last_name,
            role: req.role.to_string(),
            phone_number: req.phone_number,
            location: req.location,
        };

        match self.db.create_user(input).await {
            Ok(row) => {
                tracing::info!(user_id = %row.id, role = %row.role, "user registered");
                Ok(MessageResponse::new("User registered successfully"))
            }
            Err(err) if is_unique_violation(&err) => Err(Error::field("email", EMAIL_TAKEN)),
            Err(err) => Err(err.into()),
        }
    }
}

/// Field-level checks; the returned map becomes the 400 body
fn validate_registration(req: &RegisterRequest) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if !is_valid_email(&req.email) {
        errors.insert("email".to_string(), "Email address is invalid".to_string());
    }
    if req.password.len() < 6 {
        errors.insert(
            "password".to_string(),
            "Password must be at least 6 characters".to_string(),
        );
    }
    if req.first_name.trim().is_empty() {
        errors.insert("firstName".to_string(), "First name is required".to_string());
    }
    if req.last_name.trim().is_empty() {
        errors.insert("lastName".to_string(), "Last name is required".to_string());
    }

    errors
}

/// Basic shape check: one `@`, non-empty local and domain, dotted domain
fn is_valid_email(email: &str) -> bool {
    if email.len() < 3 || email.len() > 255 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty() && !domain.is_empty() && domain.contains('.') && !domain.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventbook_core::UserRole;

    fn request() -> RegisterRequest {
        RegisterRequest {
            email: "vendor@example.com".to_string(),
            password: "s3cret-pass".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: UserRole::Vendor,
            phone_number: None,
            location: None,
        }
    }

    #[test]
    fn test_valid_registration_has_no_errors() {
        assert!(validate_registration(&request()).is_empty());
    }

    #[test]
    fn test_field_errors_are_keyed_by_wire_name() {
        let mut req = request();
        req.email = "not-an-email".to_string();
        req.password = "short".to_string();
        req.first_name = "  ".to_string();

        let errors = validate_registration(&req);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
        assert!(errors.contains_key("firstName"));
        assert!(!errors.contains_key("lastName"));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user+tag@sub.example.com"));
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("a@b@c.com"));
    }
}
