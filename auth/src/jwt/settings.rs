use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;

use super::errors::JwtError;

/// Immutable signing configuration for access tokens.
///
/// Built once at startup from process configuration and never mutated.
#[derive(Clone)]
pub struct TokenSettings {
    secret: Vec<u8>,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenSettings {
    pub const DEFAULT_ALGORITHM: &'static str = "HS256";

    /// Validate and assemble token settings.
    ///
    /// # Arguments
    /// * `secret` - Shared HMAC secret (should be at least 32 bytes)
    /// * `algorithm` - Algorithm name; only the HMAC family (`HS256`, `HS384`, `HS512`) is accepted
    /// * `ttl` - Lifetime of every issued token
    ///
    /// # Errors
    /// * `EmptySecret` - Secret has no bytes
    /// * `UnsupportedAlgorithm` - Unknown or asymmetric algorithm name
    /// * `InvalidLifetime` - Lifetime is zero or negative
    pub fn new(
        secret: impl Into<Vec<u8>>,
        algorithm: &str,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }

        let algorithm = Algorithm::from_str(algorithm)
            .ok()
            .filter(|alg| matches!(alg, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512))
            .ok_or_else(|| JwtError::UnsupportedAlgorithm(algorithm.to_string()))?;

        if ttl <= Duration::zero() {
            return Err(JwtError::InvalidLifetime);
        }

        Ok(Self {
            secret,
            algorithm,
            ttl,
        })
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_hmac_algorithms() {
        for name in ["HS256", "HS384", "HS512"] {
            let settings = TokenSettings::new("secret", name, Duration::minutes(30))
                .expect("HMAC algorithm should be accepted");
            assert_eq!(format!("{:?}", settings.algorithm()), name);
        }
    }

    #[test]
    fn test_rejects_asymmetric_and_unknown_algorithms() {
        for name in ["RS256", "ES256", "EdDSA", "none", "hs256"] {
            let result = TokenSettings::new("secret", name, Duration::minutes(30));
            assert_eq!(
                result.unwrap_err(),
                JwtError::UnsupportedAlgorithm(name.to_string())
            );
        }
    }

    #[test]
    fn test_rejects_empty_secret() {
        let result = TokenSettings::new("", "HS256", Duration::minutes(30));
        assert_eq!(result.unwrap_err(), JwtError::EmptySecret);
    }

    #[test]
    fn test_rejects_non_positive_lifetime() {
        let zero = TokenSettings::new("secret", "HS256", Duration::zero());
        let negative = TokenSettings::new("secret", "HS256", Duration::minutes(-1));

        assert_eq!(zero.unwrap_err(), JwtError::InvalidLifetime);
        assert_eq!(negative.unwrap_err(), JwtError::InvalidLifetime);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = TokenSettings::new("super-secret", "HS256", Duration::minutes(30)).unwrap();
        let debug = format!("{:?}", settings);

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
