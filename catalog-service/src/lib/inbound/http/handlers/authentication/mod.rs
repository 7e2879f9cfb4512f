use auth::AccessToken;
use serde::Serialize;

pub mod login;
pub mod refresh_token;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}

impl From<AccessToken> for TokenResponseData {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type.to_string(),
        }
    }
}
