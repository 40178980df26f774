use async_trait::async_trait;

use super::value_objects::Role;

/// Service port resolving a username/password pair to a role.
///
/// The bundled adapter is a static demo table, not an identity provider.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> Option<Role>;
}
