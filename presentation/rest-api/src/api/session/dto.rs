use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::session::model::Session;

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    /// Value to send back in the `X-Session-Id` header
    pub session_id: String,
    pub logged_in: bool,
    #[oai(skip_serializing_if_is_none)]
    pub username: Option<String>,
    /// `customer` or `admin` while logged in
    #[oai(skip_serializing_if_is_none)]
    pub role: Option<String>,
    /// Number of distinct products in the cart
    pub cart_lines: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            session_id: session.id.to_string(),
            logged_in: session.is_logged_in(),
            username: session.username().map(str::to_string),
            role: session.role().map(|r| r.to_string()),
            cart_lines: session.cart.lines().len() as u64,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}
