//! Authentication service
//!
//! Credentials are checked by the backend; the portal only turns a
//! successful answer into a [`Session`] and tears it down again on logout.

use tracing::{info, warn};

use crate::{
    access::{self, Action},
    backend::Backend,
    error::{AppError, AppResult},
    models::{Credentials, Registration, Role},
    session::{Session, SessionStore},
};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Log in at the backend and establish a session
    pub async fn login(
        backend: &dyn Backend,
        sessions: &SessionStore,
        credentials: &Credentials,
    ) -> AppResult<(Session, String)> {
        let auth = backend.login(credentials).await?;
        if !auth.user.role.is_recognized() {
            warn!(user_id = %auth.user.id, "Backend returned an unrecognized role; session will have no permissions");
        }
        sessions.establish(auth).await
    }

    /// Register a new account and establish a session for it.
    ///
    /// The registration payload carries no role; whatever role the backend
    /// assigns is kept as-is.
    pub async fn register(
        backend: &dyn Backend,
        sessions: &SessionStore,
        registration: &Registration,
    ) -> AppResult<(Session, String)> {
        let auth = backend.register(registration).await?;
        if auth.user.role != Role::User {
            warn!(user_id = %auth.user.id, role = %auth.user.role, "Registration answered with a non-default role");
        }
        info!(user_id = %auth.user.id, "Account registered");
        sessions.establish(auth).await
    }

    /// End the caller's session
    pub async fn logout(sessions: &SessionStore, session: &Session) -> AppResult<()> {
        access::enforce(session.role(), Action::Logout)?;
        sessions.teardown(session.id).await;
        Ok(())
    }

    /// Re-read the caller's profile from the backend and cache it in the session
    pub async fn refresh_profile(
        backend: &dyn Backend,
        sessions: &SessionStore,
        session: &Session,
    ) -> AppResult<Session> {
        access::enforce(session.role(), Action::ViewProfile)?;

        let user = backend.profile(&session.backend_token).await?;
        if user.id != session.user.id {
            warn!(session_id = %session.id, "Profile answer belongs to another account");
            return Err(AppError::InvalidSession);
        }

        sessions
            .update_user(session.id, user)
            .await
            .ok_or(AppError::InvalidSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::models::Authenticated;
    use crate::testing::{config, user};

    fn store() -> SessionStore {
        SessionStore::new(&config().session)
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "me@example.com".into(),
            password: "secret1".into(),
        }
    }

    #[tokio::test]
    async fn test_login_establishes_session_with_backend_role() {
        let mut backend = MockBackend::new();
        backend.expect_login().times(1).returning(|_| {
            Ok(Authenticated {
                token: "jwt".into(),
                user: user("me", Role::Admin),
            })
        });
        let sessions = store();

        let (session, token) = AuthService::login(&backend, &sessions, &credentials()).await.unwrap();
        assert_eq!(session.role(), Some(Role::Admin));
        assert_eq!(session.backend_token, "jwt");
        assert_eq!(sessions.resolve(&token).await.unwrap().id, session.id);
    }

    #[tokio::test]
    async fn test_failed_login_creates_no_session() {
        let mut backend = MockBackend::new();
        backend.expect_login().returning(|_| Err(AppError::InvalidCredentials));
        let sessions = store();

        let err = AuthService::login(&backend, &sessions, &credentials()).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
        assert_eq!(sessions.active_count().await, 0);
    }

    #[tokio::test]
    async fn test_logout_tears_session_down() {
        let mut backend = MockBackend::new();
        backend.expect_login().returning(|_| {
            Ok(Authenticated {
                token: "jwt".into(),
                user: user("me", Role::User),
            })
        });
        let sessions = store();
        let (session, token) = AuthService::login(&backend, &sessions, &credentials()).await.unwrap();

        AuthService::logout(&sessions, &session).await.unwrap();
        assert!(sessions.resolve(&token).await.is_err());
    }

    #[tokio::test]
    async fn test_refresh_profile_updates_cached_user() {
        let mut backend = MockBackend::new();
        backend.expect_login().returning(|_| {
            Ok(Authenticated {
                token: "jwt".into(),
                user: user("me", Role::User),
            })
        });
        backend
            .expect_profile()
            .withf(|token| token.to_string() == "jwt")
            .returning(|_| {
                let mut fresh = user("me", Role::User);
                fresh.phone = "+52 984 000 0000".into();
                Ok(fresh)
            });
        let sessions = store();
        let (session, _) = AuthService::login(&backend, &sessions, &credentials()).await.unwrap();

        let refreshed = AuthService::refresh_profile(&backend, &sessions, &session).await.unwrap();
        assert_eq!(refreshed.user.phone, "+52 984 000 0000");
    }

    #[tokio::test]
    async fn test_refresh_profile_rejects_foreign_account() {
        let mut backend = MockBackend::new();
        backend.expect_login().returning(|_| {
            Ok(Authenticated {
                token: "jwt".into(),
                user: user("me", Role::User),
            })
        });
        backend.expect_profile().returning(|_| Ok(user("someone-else", Role::Superadmin)));
        let sessions = store();
        let (session, _) = AuthService::login(&backend, &sessions, &credentials()).await.unwrap();

        let err = AuthService::refresh_profile(&backend, &sessions, &session).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidSession));
    }
}
