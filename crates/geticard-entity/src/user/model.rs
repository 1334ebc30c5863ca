//! User entity model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered user, stored in the users table keyed by `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login email; the partition key.
    pub email: String,
    /// Hex SHA-256 digest of the password.
    pub password: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Registration request schema.
///
/// Fields are optional at the type level so that missing values are
/// reported by validation as field errors instead of a decode failure.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    /// Display name.
    #[validate(length(max = 120, message = "name must be at most 120 characters"))]
    pub name: Option<String>,
    /// Login email.
    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid address")
    )]
    pub email: Option<String>,
    /// Plaintext password.
    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password must not be empty")
    )]
    pub password: Option<String>,
}

impl NewUser {
    /// Build the stored record from a validated schema and a password digest.
    pub fn into_user(self, password_digest: String) -> User {
        User {
            email: self.email.unwrap_or_default(),
            password: password_digest,
            name: self.name,
        }
    }
}

/// Login request schema.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Credentials {
    /// Login email.
    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email must not be empty")
    )]
    pub email: Option<String>,
    /// Plaintext password.
    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password must not be empty")
    )]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parse;
    use serde_json::json;

    #[test]
    fn test_register_schema_accepts_valid_body() {
        let new_user: NewUser = parse(json!({
            "name": "Ana",
            "email": "ana@example.com",
            "password": "hunter2",
            "ignored": true
        }))
        .expect("valid body");

        let user = new_user.into_user("digest".to_string());
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.password, "digest");
        assert_eq!(user.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_register_schema_reports_each_bad_field() {
        let err = parse::<NewUser>(json!({"email": "not-an-email"})).expect_err("invalid");
        let fields: Vec<_> = err.fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "password"]);
    }

    #[test]
    fn test_credentials_require_both_fields() {
        let err = parse::<Credentials>(json!({"email": "a@x.com"})).expect_err("no password");
        assert_eq!(err.fields.len(), 1);
        assert_eq!(err.fields[0].field, "password");

        let ok: Credentials = parse(json!({"email": "a@x.com", "password": "p"})).expect("valid");
        assert_eq!(ok.password.as_deref(), Some("p"));
    }

    #[test]
    fn test_user_without_name_omits_it() {
        let user = User {
            email: "a@x.com".to_string(),
            password: "d".to_string(),
            name: None,
        };
        let value = serde_json::to_value(&user).expect("serialize");
        assert!(value.get("name").is_none());
    }
}
