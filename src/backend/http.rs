//! HTTP transport for the resort backend

use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error};

use super::envelope::{extract_message, ItemEnvelope, ListEnvelope};
use super::Backend;
use crate::config::BackendConfig;
use crate::error::{AppError, AppResult};
use crate::models::{
    AuthEnvelope, Authenticated, Booking, BookingDraft, BookingStatus, Credentials, Registration,
    Resort, ResortDraft, User, UserAccount,
};
use crate::utils::validation::validate_path_id;

/// reqwest-backed [`Backend`]
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: HttpClient,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = Url::parse(&config.api_url)
            .map_err(|e| AppError::Configuration(format!("Invalid backend URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Configuration(format!(
                "Backend URL cannot carry a path: {}",
                config.api_url
            )));
        }

        Ok(Self { http, base_url })
    }

    /// Backend URL for `segments`, each appended as one percent-encoded segment
    fn url(&self, segments: &[&str]) -> AppResult<Url> {
        for segment in segments {
            validate_path_id(segment).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Configuration("Backend URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and turn non-2xx answers into [`AppError`]s
    async fn send(&self, request: RequestBuilder, what: &'static str) -> AppResult<Response> {
        let response = request.send().await.map_err(|e| {
            error!("{} request failed: {}", what, e);
            AppError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{} failed with status {}: {}", what, status, body);
            return Err(AppError::from_backend(status.as_u16(), extract_message(&body)));
        }

        Ok(response)
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &'static str,
    ) -> AppResult<Vec<T>> {
        let items = self
            .send(request, what)
            .await?
            .json::<ListEnvelope<T>>()
            .await?
            .into_vec();
        debug!("{} returned {} items", what, items.len());
        Ok(items)
    }

    async fn fetch_item<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &'static str,
    ) -> AppResult<T> {
        Ok(self
            .send(request, what)
            .await?
            .json::<ItemEnvelope<T>>()
            .await?
            .into_inner())
    }

    async fn authenticate(
        &self,
        request: RequestBuilder,
        what: &'static str,
    ) -> AppResult<Authenticated> {
        let envelope: AuthEnvelope = self.send(request, what).await?.json().await?;
        let message = envelope.message.clone();

        envelope.into_authenticated().ok_or_else(|| {
            error!("{} answered without token or user", what);
            AppError::from_backend(502, message)
        })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> AppResult<Authenticated> {
        let request = self.http.post(self.url(&["auth", "login"])?).json(credentials);

        match self.authenticate(request, "Login").await {
            Err(AppError::Unauthorized) | Err(AppError::Backend { status: 400, .. }) => {
                Err(AppError::InvalidCredentials)
            }
            other => other,
        }
    }

    async fn register(&self, registration: &Registration) -> AppResult<Authenticated> {
        let request = self.http.post(self.url(&["auth", "register"])?).json(registration);
        self.authenticate(request, "Registration").await
    }

    async fn profile(&self, token: &str) -> AppResult<User> {
        let request = self.http.get(self.url(&["auth", "profile"])?).bearer_auth(token);
        self.fetch_item(request, "Profile").await
    }

    async fn list_resorts(&self) -> AppResult<Vec<Resort>> {
        let request = self.http.get(self.url(&["resorts"])?);
        self.fetch_list(request, "Resort listing").await
    }

    async fn get_resort(&self, id: &str) -> AppResult<Resort> {
        let request = self.http.get(self.url(&["resorts", id])?);
        self.fetch_item(request, "Resort lookup").await
    }

    async fn create_resort(&self, token: &str, draft: &ResortDraft) -> AppResult<()> {
        let request = self
            .http
            .post(self.url(&["resorts"])?)
            .bearer_auth(token)
            .json(draft);
        self.send(request, "Resort creation").await?;
        Ok(())
    }

    async fn update_resort(&self, token: &str, id: &str, draft: &ResortDraft) -> AppResult<()> {
        let request = self
            .http
            .put(self.url(&["resorts", id])?)
            .bearer_auth(token)
            .json(draft);
        self.send(request, "Resort update").await?;
        Ok(())
    }

    async fn delete_resort(&self, token: &str, id: &str) -> AppResult<()> {
        let request = self
            .http
            .delete(self.url(&["resorts", id])?)
            .bearer_auth(token);
        self.send(request, "Resort deletion").await?;
        Ok(())
    }

    async fn create_booking(
        &self,
        token: &str,
        draft: &BookingDraft,
    ) -> AppResult<Option<Booking>> {
        let request = self
            .http
            .post(self.url(&["bookings"])?)
            .bearer_auth(token)
            .json(draft);
        let body = self.send(request, "Booking creation").await?.text().await?;

        // The stored booking is informational; an unexpected shape is not a failure
        match serde_json::from_str::<ItemEnvelope<Booking>>(&body) {
            Ok(envelope) => Ok(Some(envelope.into_inner())),
            Err(e) => {
                debug!("Booking creation response not parsed: {}", e);
                Ok(None)
            }
        }
    }

    async fn list_bookings(&self, token: &str) -> AppResult<Vec<Booking>> {
        let request = self.http.get(self.url(&["bookings"])?).bearer_auth(token);
        self.fetch_list(request, "Booking listing").await
    }

    async fn get_booking(&self, token: &str, id: &str) -> AppResult<Booking> {
        let request = self
            .http
            .get(self.url(&["bookings", id])?)
            .bearer_auth(token);
        self.fetch_item(request, "Booking lookup").await
    }

    async fn update_booking_status(
        &self,
        token: &str,
        id: &str,
        status: BookingStatus,
    ) -> AppResult<()> {
        let request = self
            .http
            .patch(self.url(&["bookings", id, "status"])?)
            .bearer_auth(token)
            .json(&json!({ "status": status }));
        self.send(request, "Booking status update").await?;
        Ok(())
    }

    async fn list_all_bookings(&self, token: &str) -> AppResult<Vec<Booking>> {
        let request = self
            .http
            .get(self.url(&["bookings", "admin", "all"])?)
            .bearer_auth(token);
        self.fetch_list(request, "Admin booking listing").await
    }

    async fn list_users(&self, token: &str) -> AppResult<Vec<User>> {
        let request = self.http.get(self.url(&["users"])?).bearer_auth(token);
        self.fetch_list(request, "User listing").await
    }

    async fn create_user(&self, token: &str, account: &UserAccount) -> AppResult<()> {
        let request = self
            .http
            .post(self.url(&["users"])?)
            .bearer_auth(token)
            .json(account);
        self.send(request, "User creation").await?;
        Ok(())
    }

    async fn update_user(&self, token: &str, id: &str, account: &UserAccount) -> AppResult<()> {
        let request = self
            .http
            .put(self.url(&["users", id])?)
            .bearer_auth(token)
            .json(account);
        self.send(request, "User update").await?;
        Ok(())
    }

    async fn delete_user(&self, token: &str, id: &str) -> AppResult<()> {
        let request = self
            .http
            .delete(self.url(&["users", id])?)
            .bearer_auth(token);
        self.send(request, "User deletion").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode, Uri},
        routing::{get, patch, post},
        Json, Router,
    };
    use serde_json::Value;
    use tokio::net::TcpListener;

    /// Serve a canned backend on an ephemeral port and return its base URL
    async fn spawn_backend() -> String {
        let app = Router::new()
            .route(
                "/api/auth/login",
                post(|Json(body): Json<Value>| async move {
                    if body["password"] == "secret1" {
                        (
                            StatusCode::OK,
                            Json(json!({
                                "success": true,
                                "token": "backend-token",
                                "user": {"id": "u1", "name": "Ana", "email": "ana@example.com", "role": "admin"}
                            })),
                        )
                    } else {
                        (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({"success": false, "message": "Invalid email or password"})),
                        )
                    }
                }),
            )
            .route(
                "/api/resorts",
                get(|| async {
                    Json(json!({"data": [{
                        "_id": "r1", "name": "Paradise", "pricePerNight": 450,
                        "amenities": ["WiFi"], "maxGuests": 4, "rooms": 10
                    }]}))
                }),
            )
            .route(
                "/api/resorts/{id}",
                get(|Path(id): Path<String>| async move {
                    if id == "r1" {
                        Ok(Json(json!({
                            "id": "r1", "name": "Paradise", "pricePerNight": 450,
                            "maxGuests": 4, "rooms": 10
                        })))
                    } else {
                        Err((StatusCode::NOT_FOUND, Json(json!({"message": "Resort r9 not found"}))))
                    }
                }),
            )
            .route(
                "/api/bookings",
                get(|headers: HeaderMap| async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    if auth == "Bearer backend-token" {
                        Ok(Json(json!([])))
                    } else {
                        Err(StatusCode::UNAUTHORIZED)
                    }
                }),
            )
            .route(
                "/api/bookings/{id}/status",
                patch(|Json(body): Json<Value>| async move {
                    if body["status"] == "confirmed" {
                        StatusCode::OK
                    } else {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    /// Serve a backend that answers 200 to everything and records each path it sees
    async fn spawn_recording_backend() -> (String, Arc<Mutex<Vec<String>>>) {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let recorded = hits.clone();
        let app = Router::new().fallback(move |uri: Uri| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(uri.path().to_string());
                Json(json!({}))
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/api/", addr), hits)
    }

    fn backend(base_url: String) -> HttpBackend {
        HttpBackend::new(&BackendConfig {
            api_url: base_url,
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_login_success_and_failure() {
        let backend = backend(spawn_backend().await);

        let auth = backend
            .login(&Credentials {
                email: "ana@example.com".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap();
        assert_eq!(auth.token, "backend-token");
        assert_eq!(auth.user.role, crate::models::Role::Admin);

        let err = backend
            .login(&Credentials {
                email: "ana@example.com".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_wrapped_list_and_bare_item() {
        let backend = backend(spawn_backend().await);

        let resorts = backend.list_resorts().await.unwrap();
        assert_eq!(resorts.len(), 1);
        assert_eq!(resorts[0].id, "r1");

        let resort = backend.get_resort("r1").await.unwrap();
        assert_eq!(resort.name, "Paradise");

        let missing = backend.get_resort("r9").await.unwrap_err();
        assert!(matches!(missing, AppError::NotFound(msg) if msg == "Resource not found"));
    }

    #[tokio::test]
    async fn test_bearer_token_is_sent() {
        let backend = backend(spawn_backend().await);

        assert!(backend.list_bookings("backend-token").await.unwrap().is_empty());
        assert!(matches!(
            backend.list_bookings("other").await.unwrap_err(),
            AppError::Unauthorized
        ));
    }

    #[tokio::test]
    async fn test_status_update_errors_fall_back_to_generic_message() {
        let backend = backend(spawn_backend().await);

        backend
            .update_booking_status("backend-token", "b1", BookingStatus::Confirmed)
            .await
            .unwrap();

        let err = backend
            .update_booking_status("backend-token", "b1", BookingStatus::Cancelled)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Backend { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_upstream_error() {
        let backend = backend("http://127.0.0.1:9/api".to_string());
        let err = backend.list_resorts().await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_ids_cannot_leave_their_path_segment() {
        let (base_url, hits) = spawn_recording_backend().await;
        let backend = backend(base_url);

        for id in ["../users/root", "..", ".", "a/b", "a\\b", ""] {
            let err = backend.delete_resort("admin-token", id).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "id {:?}", id);
        }
        let err = backend
            .update_booking_status("admin-token", "../../users/u1", BookingStatus::Confirmed)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(hits.lock().unwrap().is_empty());

        backend.delete_resort("admin-token", "r 1?x#y").await.unwrap();
        backend.delete_user("admin-token", "u1").await.unwrap();
        assert_eq!(
            *hits.lock().unwrap(),
            vec!["/api/resorts/r%201%3Fx%23y".to_string(), "/api/users/u1".to_string()]
        );
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let err = HttpBackend::new(&BackendConfig {
            api_url: "not a url".to_string(),
            timeout_seconds: 5,
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
