//! Test-only credential table.
//!
//! Plaintext pairs come from configuration and are kept as SHA-256 digests.
//! This is a placeholder login for the demo, not an authorization boundary.

use std::collections::HashMap;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256};

use business::domain::session::services::CredentialStore;
use business::domain::session::value_objects::Role;

#[derive(Debug, Clone)]
pub struct DemoCredential {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl DemoCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    /// `admin/admin123` and `customer/customer123`.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("admin", "admin123", Role::Admin),
            Self::new("customer", "customer123", Role::Customer),
        ]
    }
}

struct StoredCredential {
    digest: String,
    role: Role,
}

pub struct DemoCredentialStore {
    entries: HashMap<String, StoredCredential>,
}

impl DemoCredentialStore {
    pub fn new(credentials: impl IntoIterator<Item = DemoCredential>) -> Self {
        let entries = credentials
            .into_iter()
            .map(|c| {
                (
                    c.username,
                    StoredCredential {
                        digest: digest(&c.password),
                        role: c.role,
                    },
                )
            })
            .collect::<HashMap<_, _>>();
        tracing::debug!(count = entries.len(), "demo credential store loaded");
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn digest(password: &str) -> String {
    STANDARD.encode(Sha256::digest(password.as_bytes()))
}

#[async_trait]
impl CredentialStore for DemoCredentialStore {
    async fn verify(&self, username: &str, password: &str) -> Option<Role> {
        self.entries
            .get(username)
            .filter(|stored| stored.digest == digest(password))
            .map(|stored| stored.role)
    }
}
