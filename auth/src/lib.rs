//! Authentication utilities library
//!
//! Provides the authentication building blocks of the catalog service:
//! - Password hashing (Argon2id)
//! - Signed, time-bounded access tokens (JWT, HMAC family)
//! - Authentication coordination
//! - An injectable clock
//!
//! Token state is stateless: validity is decided by signature and embedded
//! expiry alone. Services define their own account lookup and adapt these
//! implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{JwtError, TokenCodec, TokenSettings};
//! use chrono::{Duration, Utc};
//!
//! let settings = TokenSettings::new("secret_key_at_least_32_bytes_long!", "HS256", Duration::minutes(30)).unwrap();
//! let codec = TokenCodec::new(&settings);
//!
//! let now = Utc::now();
//! let token = codec.issue("alice", now).unwrap();
//! assert_eq!(codec.validate(&token, now).unwrap().subject(), Some("alice"));
//! assert_eq!(codec.validate(&token, now + Duration::minutes(30)), Err(JwtError::Expired));
//! ```

pub mod authenticator;
pub mod clock;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AccessToken;
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::StoredCredentials;
pub use authenticator::TOKEN_TYPE;
pub use clock::Clock;
pub use clock::SystemClock;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenCodec;
pub use jwt::TokenSettings;
pub use password::PasswordError;
pub use password::PasswordHasher;
