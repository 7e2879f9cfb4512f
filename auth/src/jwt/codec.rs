use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Serialize;

use super::claims::Claims;
use super::errors::JwtError;
use super::settings::TokenSettings;

/// Access token codec.
///
/// Signs and verifies compact JWTs (`header.payload.signature`) with the
/// shared secret and algorithm from [`TokenSettings`]. Signature checks and
/// expiry checks are separate steps: [`TokenCodec::decode`] ignores time,
/// [`TokenCodec::validate`] adds the expiry check against a caller-supplied
/// instant.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec from validated settings.
    pub fn new(settings: &TokenSettings) -> Self {
        let mut validation = Validation::new(settings.algorithm());
        // Expiry is checked against the caller's clock in `validate`,
        // but `exp` must still be present for a token to decode.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(settings.secret()),
            decoding_key: DecodingKey::from_secret(settings.secret()),
            header: Header::new(settings.algorithm()),
            validation,
            ttl: settings.ttl(),
        }
    }

    /// Issue a token for `subject` that expires `ttl` after `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        self.encode(&Claims::for_subject(subject, now, self.ttl))
    }

    /// Encode arbitrary claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        encode(&self.header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify signature and structure, ignoring expiry.
    ///
    /// # Errors
    /// * `MalformedToken` - Bad signature, wrong algorithm, undecodable segments or missing `exp`
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| JwtError::MalformedToken(e.to_string()))
    }

    /// Verify signature and structure, then reject tokens expired at `now`.
    ///
    /// # Errors
    /// * `MalformedToken` - See [`TokenCodec::decode`]
    /// * `Expired` - `exp <= now`
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let claims = self.decode(token)?;

        if claims.is_expired(now) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }
}
