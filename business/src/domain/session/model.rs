use chrono::{DateTime, Utc};

use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::SessionId;

use super::errors::SessionError;
use super::value_objects::{AuthState, Role};

/// One visitor's state: login and the cart it owns.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub auth: AuthState,
    pub cart: Cart,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Fresh logged-out session with an empty cart.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::generate(),
            auth: AuthState::LoggedOut,
            cart: Cart::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// LoggedOut -> LoggedIn(role). Credentials are checked by the caller.
    pub fn login(&mut self, username: impl Into<String>, role: Role) -> Result<(), SessionError> {
        if self.is_logged_in() {
            return Err(SessionError::AlreadyLoggedIn);
        }
        self.auth = AuthState::LoggedIn {
            username: username.into(),
            role,
        };
        self.touch();
        Ok(())
    }

    /// Drops the role; the cart stays. No-op when already logged out.
    pub fn logout(&mut self) {
        if self.is_logged_in() {
            self.auth = AuthState::LoggedOut;
            self.touch();
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.auth, AuthState::LoggedIn { .. })
    }

    pub fn role(&self) -> Option<Role> {
        match &self.auth {
            AuthState::LoggedIn { role, .. } => Some(*role),
            AuthState::LoggedOut => None,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match &self.auth {
            AuthState::LoggedIn { username, .. } => Some(username.as_str()),
            AuthState::LoggedOut => None,
        }
    }

    /// Username of the logged-in visitor, or `NotLoggedIn`.
    pub fn require_login(&self) -> Result<&str, SessionError> {
        self.username().ok_or(SessionError::NotLoggedIn)
    }

    /// Gate for catalog and order administration.
    pub fn require_admin(&self) -> Result<(), SessionError> {
        match self.role() {
            Some(Role::Admin) => Ok(()),
            Some(Role::Customer) => Err(SessionError::Forbidden),
            None => Err(SessionError::NotLoggedIn),
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
