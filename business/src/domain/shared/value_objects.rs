use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one visitor's session.
/// Every cart and login state is keyed by it; there is no ambient session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a SessionId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Issues a fresh random identifier for a new visitor.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_session_id_from_str() {
        let session_id = SessionId::new("session-456");
        assert_eq!(session_id.as_str(), "session-456");
    }

    #[test]
    fn should_display_session_id() {
        let session_id = SessionId::new("visitor");
        assert_eq!(format!("{}", session_id), "visitor");
    }

    #[test]
    fn should_generate_distinct_ids() {
        let first = SessionId::generate();
        let second = SessionId::generate();

        assert_ne!(first, second);
        assert!(Uuid::parse_str(first.as_str()).is_ok());
    }

    #[test]
    fn should_convert_from_string() {
        let session_id: SessionId = "from-string".to_string().into();
        assert_eq!(session_id.as_str(), "from-string");
    }
}
