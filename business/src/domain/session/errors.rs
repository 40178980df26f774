#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session.not_found")]
    NotFound,
    #[error("session.invalid_credentials")]
    InvalidCredentials,
    #[error("session.already_logged_in")]
    AlreadyLoggedIn,
    #[error("session.not_logged_in")]
    NotLoggedIn,
    #[error("session.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
