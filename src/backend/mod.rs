//! Resort REST backend client
//!
//! The portal never owns data: resorts, bookings and accounts live in the
//! external backend. Services talk to it through the [`Backend`] trait so the
//! HTTP transport can be swapped for a mock in tests.

pub mod envelope;
pub mod http;

pub use http::HttpBackend;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{
    Authenticated, Booking, BookingDraft, BookingStatus, Credentials, Registration, Resort,
    ResortDraft, User, UserAccount,
};

/// Operations the portal needs from the backend.
///
/// Calls taking a `token` send it as a bearer credential. Mutations return
/// nothing: callers refetch the affected list afterwards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    // Auth
    async fn login(&self, credentials: &Credentials) -> AppResult<Authenticated>;
    async fn register(&self, registration: &Registration) -> AppResult<Authenticated>;
    async fn profile(&self, token: &str) -> AppResult<User>;

    // Resorts
    async fn list_resorts(&self) -> AppResult<Vec<Resort>>;
    async fn get_resort(&self, id: &str) -> AppResult<Resort>;
    async fn create_resort(&self, token: &str, draft: &ResortDraft) -> AppResult<()>;
    async fn update_resort(&self, token: &str, id: &str, draft: &ResortDraft) -> AppResult<()>;
    async fn delete_resort(&self, token: &str, id: &str) -> AppResult<()>;

    // Bookings
    /// Returns the stored booking when the backend echoes it back
    async fn create_booking(&self, token: &str, draft: &BookingDraft)
    -> AppResult<Option<Booking>>;
    async fn list_bookings(&self, token: &str) -> AppResult<Vec<Booking>>;
    async fn get_booking(&self, token: &str, id: &str) -> AppResult<Booking>;
    async fn update_booking_status(
        &self,
        token: &str,
        id: &str,
        status: BookingStatus,
    ) -> AppResult<()>;
    async fn list_all_bookings(&self, token: &str) -> AppResult<Vec<Booking>>;

    // Accounts
    async fn list_users(&self, token: &str) -> AppResult<Vec<User>>;
    async fn create_user(&self, token: &str, account: &UserAccount) -> AppResult<()>;
    async fn update_user(&self, token: &str, id: &str, account: &UserAccount) -> AppResult<()>;
    async fn delete_user(&self, token: &str, id: &str) -> AppResult<()>;
}
