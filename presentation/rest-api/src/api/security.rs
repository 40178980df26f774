use poem::Request;
use poem_openapi::{SecurityScheme, auth::ApiKey};
use uuid::Uuid;

use business::domain::shared::value_objects::SessionId;

/// Visitor session issued by `POST /sessions`
///
/// Identifies which cart and login state a request acts on. It is not a
/// credential: anyone holding the id acts as that visitor.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-Session-Id",
    key_in = "header",
    checker = "session_id_checker"
)]
pub struct SessionHeader(pub SessionId);

async fn session_id_checker(_req: &Request, api_key: ApiKey) -> Option<SessionId> {
    let session_id = parse_session_id(&api_key.key);
    if session_id.is_none() {
        tracing::warn!("rejected malformed session id header");
    }
    session_id
}

fn parse_session_id(raw: &str) -> Option<SessionId> {
    Uuid::parse_str(raw.trim())
        .ok()
        .map(|uuid| SessionId::new(uuid.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_uuid_session_ids() {
        let id = Uuid::new_v4().to_string();

        let parsed = parse_session_id(&id);

        assert_eq!(parsed.map(|s| s.as_str().to_string()), Some(id));
    }

    #[test]
    fn should_normalize_uppercase_ids() {
        let id = Uuid::new_v4();

        let parsed = parse_session_id(&id.to_string().to_uppercase());

        assert_eq!(parsed, Some(SessionId::new(id.to_string())));
    }

    #[test]
    fn should_reject_non_uuid_ids() {
        assert!(parse_session_id("not-a-session").is_none());
        assert!(parse_session_id("").is_none());
    }
}
