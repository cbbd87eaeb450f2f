//! Session context
//!
//! A [`Session`] is created when login or registration succeeds and removed
//! on logout. Handlers receive it explicitly; nothing reads it ambiently.
//! Callers hold a signed session token whose subject is the session id, so a
//! torn-down session stops resolving even while its token is still unexpired.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Authenticated, Role, User};

/// Per-login context: the backend bearer token and the account it belongs to
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    /// Bearer token issued by the backend; never leaves the portal
    pub backend_token: String,
    pub user: User,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Role as assigned by the backend at login
    pub fn role(&self) -> Option<Role> {
        Some(self.user.role)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Session token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // session id
    pub uid: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// In-memory registry of live sessions
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    secret: String,
    lifetime: Duration,
}

impl SessionStore {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            secret: config.secret.clone(),
            lifetime: Duration::hours(config.expiry_hours),
        }
    }

    /// Start a session for a successful authentication.
    ///
    /// Returns the session and the signed token the caller must present.
    pub async fn establish(&self, auth: Authenticated) -> AppResult<(Session, String)> {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            backend_token: auth.token,
            user: auth.user,
            created_at: now,
            expires_at: now + self.lifetime,
        };

        let claims = SessionClaims {
            sub: session.id.to_string(),
            uid: session.user.id.clone(),
            role: session.user.role.as_str().to_string(),
            exp: session.expires_at.timestamp(),
            iat: now.timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to sign session token: {}", e)))?;

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| !s.is_expired_at(now));
        sessions.insert(session.id, session.clone());

        info!(session_id = %session.id, user_id = %session.user.id, role = %session.user.role, "Session established");
        Ok((session, token))
    }

    /// Look up the live session a token refers to
    pub async fn resolve(&self, token: &str) -> AppResult<Session> {
        let claims = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?
        .claims;

        let id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidSession)?;

        let session = self
            .sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| {
                debug!(session_id = %id, "Session token refers to no live session");
                AppError::InvalidSession
            })?;

        if session.is_expired_at(Utc::now()) {
            self.sessions.write().await.remove(&id);
            return Err(AppError::SessionExpired);
        }

        Ok(session)
    }

    /// Replace the cached profile, e.g. after a profile refresh
    pub async fn update_user(&self, id: Uuid, user: User) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.user = user;
        Some(session.clone())
    }

    /// End a session; returns whether it existed
    pub async fn teardown(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!(session_id = %id, "Session torn down");
        }
        removed
    }

    pub async fn active_count(&self) -> usize {
        let now = Utc::now();
        self.sessions
            .read()
            .await
            .values()
            .filter(|s| !s.is_expired_at(now))
            .count()
    }
}
