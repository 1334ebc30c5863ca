//! # geticard-auth
//!
//! Credential hashing and token handling for GetiCard.
//!
//! ## Modules
//!
//! - `password`: deterministic SHA-256 credential digests
//! - `jwt`: HS256 token issuance and verification against an injected clock

pub mod jwt;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, TokenError};
pub use password::PasswordHasher;
