use crate::domain::errors::RepositoryError;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::repository::SessionRepository;
use crate::domain::shared::value_objects::SessionId;

/// Loads a session, turning a missing entry into `SessionError::NotFound`.
pub async fn load_session(
    repository: &dyn SessionRepository,
    id: &SessionId,
) -> Result<Session, SessionError> {
    repository.get_by_id(id).await.map_err(|e| match e {
        RepositoryError::NotFound => SessionError::NotFound,
        other => SessionError::Repository(other),
    })
}

/// Loads a session and checks it belongs to a logged-in admin.
pub async fn load_admin_session(
    repository: &dyn SessionRepository,
    id: &SessionId,
) -> Result<Session, SessionError> {
    let session = load_session(repository, id).await?;
    session.require_admin()?;
    Ok(session)
}
