use chrono::DateTime;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenCodec;
use crate::jwt::TokenSettings;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Token type label returned alongside every access token.
pub const TOKEN_TYPE: &str = "bearer";

const DECOY_PASSWORD: &str = "decoy-password-never-assigned";

/// Authentication coordinator combining password verification and token issuance.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and JWT token handling.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    // Verified against when no account matched, so both login branches pay
    // for one Argon2 run.
    decoy_hash: String,
}

/// Stored credentials of an account candidate for login.
#[derive(Debug, Clone, Copy)]
pub struct StoredCredentials<'a> {
    /// Token subject for this account
    pub subject: &'a str,
    /// Password hash in PHC string format
    pub password_hash: &'a str,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Signed access token
    pub access_token: String,
    /// Always [`TOKEN_TYPE`]
    pub token_type: &'static str,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// The login decoy is hashed here, once.
    ///
    /// # Arguments
    /// * `settings` - Signing secret, algorithm and token lifetime
    ///
    /// # Errors
    /// * `PasswordError` - Decoy hash could not be computed
    pub fn new(settings: &TokenSettings) -> Result<Self, PasswordError> {
        let password_hasher = PasswordHasher::new();
        let decoy_hash = password_hasher.hash(DECOY_PASSWORD)?;

        Ok(Self {
            password_hasher,
            token_codec: TokenCodec::new(settings),
            decoy_hash,
        })
    }

    /// Verify credentials and issue an access token.
    ///
    /// A missing account and a wrong password are indistinguishable to the
    /// caller, and cost the same amount of hashing work.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `candidate` - Stored credentials of the account, if one matched
    /// * `now` - Issue instant
    ///
    /// # Errors
    /// * `InvalidCredentials` - No account, or password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        candidate: Option<StoredCredentials<'_>>,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, AuthenticationError> {
        let Some(candidate) = candidate else {
            self.password_hasher.verify(password, &self.decoy_hash);
            return Err(AuthenticationError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(password, candidate.password_hash)
        {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(candidate.subject, now)?)
    }

    /// Issue a token without password verification.
    ///
    /// Used by the refresh flow, where the caller already proved its
    /// identity with a valid token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(&self, subject: &str, now: DateTime<Utc>) -> Result<AccessToken, JwtError> {
        self.token_codec
            .issue(subject, now)
            .map(|access_token| AccessToken {
                access_token,
                token_type: TOKEN_TYPE,
            })
    }

    /// Validate a token's signature and expiry at `now`.
    ///
    /// # Errors
    /// * `MalformedToken` - Signature or structure invalid
    /// * `Expired` - Token expired at or before `now`
    pub fn validate_token(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        self.token_codec.validate(token, now)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::TimeZone;

    use super::*;

    fn authenticator() -> Authenticator {
        let settings = TokenSettings::new(
            b"test_secret_key_at_least_32_bytes!".to_vec(),
            "HS256",
            Duration::minutes(30),
        )
        .unwrap();
        Authenticator::new(&settings).unwrap()
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let hash = PasswordHasher::new()
            .hash("my_password")
            .expect("Failed to hash password");

        let candidate = StoredCredentials {
            subject: "alice",
            password_hash: &hash,
        };
        let result = authenticator
            .authenticate("my_password", Some(candidate), t0())
            .expect("Authentication failed");

        assert_eq!(result.token_type, "bearer");

        let decoded = authenticator
            .validate_token(&result.access_token, t0())
            .expect("Token validation failed");
        assert_eq!(decoded.subject(), Some("alice"));
        assert_eq!(decoded.exp, (t0() + Duration::minutes(30)).timestamp());
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = PasswordHasher::new()
            .hash("my_password")
            .expect("Failed to hash password");

        let candidate = StoredCredentials {
            subject: "alice",
            password_hash: &hash,
        };
        let result = authenticator.authenticate("wrong_password", Some(candidate), t0());

        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_unknown_account() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("any_password", None, t0());

        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_decoy_hash_is_a_real_argon2_hash() {
        let authenticator = authenticator();

        assert!(authenticator.decoy_hash.starts_with("$argon2id$"));
        assert!(PasswordHasher::new().verify(DECOY_PASSWORD, &authenticator.decoy_hash));
    }

    #[test]
    fn test_authenticate_malformed_stored_hash() {
        let authenticator = authenticator();

        let candidate = StoredCredentials {
            subject: "alice",
            password_hash: "not-a-phc-string",
        };
        let result = authenticator.authenticate("my_password", Some(candidate), t0());

        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_issue_and_validate_token() {
        let authenticator = authenticator();

        let token = authenticator
            .issue_token("alice", t0())
            .expect("Failed to issue token");

        let later = t0() + Duration::minutes(29);
        let decoded = authenticator
            .validate_token(&token.access_token, later)
            .expect("Failed to validate token");
        assert_eq!(decoded.subject(), Some("alice"));

        let expired = t0() + Duration::minutes(31);
        assert_eq!(
            authenticator.validate_token(&token.access_token, expired),
            Err(JwtError::Expired)
        );
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = authenticator();

        let result = authenticator.validate_token("invalid.token.here", t0());
        assert!(matches!(result, Err(JwtError::MalformedToken(_))));
    }
}
