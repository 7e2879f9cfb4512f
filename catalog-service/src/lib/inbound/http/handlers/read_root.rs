use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;

pub async fn read_root() -> ApiSuccess<MessageResponseData> {
    ApiSuccess::new(StatusCode::OK, MessageResponseData::new("Hello, World!"))
}
