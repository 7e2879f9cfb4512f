use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// Timestamps are Unix seconds. `exp` is mandatory; a token without it
/// never decodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the account's username)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Build claims for `subject` issued at `issued_at` and valid for `ttl`.
    ///
    /// The issue instant is truncated to whole seconds before the lifetime
    /// is added, so `exp - iat` is always exactly `ttl`.
    pub fn for_subject(subject: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();

        Self {
            sub: Some(subject.to_string()),
            exp: iat + ttl.num_seconds(),
            iat: Some(iat),
        }
    }

    /// Subject, if present and non-empty.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|sub| !sub.is_empty())
    }

    /// Check whether the token is expired at `now`.
    ///
    /// A token is valid strictly before its expiry: `exp == now` is expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}
