//! Admin service
//!
//! Every mutation is followed by a full refetch of the affected list; the
//! caller always receives the backend's current state, never a local merge.

use tracing::{info, warn};

use crate::{
    access::{self, Action, ResortOp, UserOp},
    backend::Backend,
    error::{AppError, AppResult},
    handlers::admin::response::{DashboardStats, UserStats},
    models::{Booking, BookingStatus, Resort, ResortDraft, Role, User, UserAccount},
    session::Session,
    utils::validation::{validate_coordinates, validate_staff_role},
};

/// Admin service for catalogue, booking and account management
pub struct AdminService;

impl AdminService {
    /// Dashboard statistics; resorts and bookings are fetched concurrently
    pub async fn dashboard(backend: &dyn Backend, session: &Session) -> AppResult<DashboardStats> {
        access::enforce(session.role(), Action::AdminArea)?;
        access::enforce(session.role(), Action::ViewAllBookings)?;

        let (resorts, bookings) = futures::try_join!(
            backend.list_resorts(),
            backend.list_all_bookings(&session.backend_token),
        )?;

        Ok(dashboard_stats(&resorts, &bookings))
    }

    // =========================================================================
    // Resorts
    // =========================================================================

    pub async fn list_resorts(backend: &dyn Backend, session: &Session) -> AppResult<Vec<Resort>> {
        access::enforce(session.role(), Action::AdminArea)?;
        backend.list_resorts().await
    }

    pub async fn create_resort(
        backend: &dyn Backend,
        session: &Session,
        draft: &ResortDraft,
    ) -> AppResult<Vec<Resort>> {
        access::enforce(session.role(), Action::ManageResorts(ResortOp::Create))?;
        validate_resort(draft)?;

        backend.create_resort(&session.backend_token, draft).await?;
        info!(user_id = %session.user.id, name = %draft.name, "Resort created");

        backend.list_resorts().await
    }

    pub async fn update_resort(
        backend: &dyn Backend,
        session: &Session,
        id: &str,
        draft: &ResortDraft,
    ) -> AppResult<Vec<Resort>> {
        access::enforce(session.role(), Action::ManageResorts(ResortOp::Update))?;
        validate_resort(draft)?;

        backend.update_resort(&session.backend_token, id, draft).await?;
        info!(user_id = %session.user.id, resort_id = %id, "Resort updated");

        backend.list_resorts().await
    }

    pub async fn delete_resort(backend: &dyn Backend, session: &Session, id: &str) -> AppResult<Vec<Resort>> {
        access::enforce(session.role(), Action::ManageResorts(ResortOp::Delete))?;

        backend.delete_resort(&session.backend_token, id).await?;
        info!(user_id = %session.user.id, resort_id = %id, "Resort deleted");

        backend.list_resorts().await
    }

    // =========================================================================
    // Bookings
    // =========================================================================

    pub async fn list_bookings(backend: &dyn Backend, session: &Session) -> AppResult<Vec<Booking>> {
        access::enforce(session.role(), Action::ViewAllBookings)?;
        backend.list_all_bookings(&session.backend_token).await
    }

    /// Confirm or cancel a pending booking
    pub async fn transition_booking(
        backend: &dyn Backend,
        session: &Session,
        id: &str,
        next: BookingStatus,
    ) -> AppResult<Vec<Booking>> {
        access::enforce(session.role(), Action::TransitionBooking(next))?;

        let bookings = backend.list_all_bookings(&session.backend_token).await?;
        let current = bookings
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.status)
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if current.is_terminal() {
            return Err(AppError::Conflict(format!("Booking is already {}", current)));
        }
        if !current.can_transition_to(next) {
            return Err(AppError::Conflict(format!(
                "Booking is {} and cannot become {}",
                current, next
            )));
        }

        backend
            .update_booking_status(&session.backend_token, id, next)
            .await?;
        info!(user_id = %session.user.id, booking_id = %id, from = %current, to = %next, "Booking status changed");

        backend.list_all_bookings(&session.backend_token).await
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// All accounts with per-role counts
    pub async fn list_users(backend: &dyn Backend, session: &Session) -> AppResult<(Vec<User>, UserStats)> {
        access::enforce(session.role(), Action::ManageUsers(UserOp::List))?;
        Self::user_directory(backend, session).await
    }

    pub async fn create_user(
        backend: &dyn Backend,
        session: &Session,
        account: &UserAccount,
    ) -> AppResult<(Vec<User>, UserStats)> {
        access::enforce(session.role(), Action::ManageUsers(UserOp::Create))?;
        validate_staff_role(account.role).map_err(|e| AppError::Validation(e.to_string()))?;
        if account.password.is_none() {
            return Err(AppError::Validation(
                "Password is required for new accounts".to_string(),
            ));
        }

        backend.create_user(&session.backend_token, account).await?;
        info!(user_id = %session.user.id, role = %account.role, "Account created");

        Self::user_directory(backend, session).await
    }

    /// Update an account; the password is left unchanged unless supplied
    pub async fn update_user(
        backend: &dyn Backend,
        session: &Session,
        id: &str,
        account: &UserAccount,
    ) -> AppResult<(Vec<User>, UserStats)> {
        access::enforce(session.role(), Action::ManageUsers(UserOp::Update))?;
        validate_staff_role(account.role).map_err(|e| AppError::Validation(e.to_string()))?;

        backend.update_user(&session.backend_token, id, account).await?;
        info!(user_id = %session.user.id, target_id = %id, password_changed = account.password.is_some(), "Account updated");

        Self::user_directory(backend, session).await
    }

    /// Delete an account. Superadmin accounts and the caller's own account
    /// cannot be deleted.
    pub async fn delete_user(
        backend: &dyn Backend,
        session: &Session,
        id: &str,
    ) -> AppResult<(Vec<User>, UserStats)> {
        access::enforce(session.role(), Action::ManageUsers(UserOp::Delete))?;

        if id == session.user.id {
            return Err(AppError::Conflict("You cannot delete your own account".to_string()));
        }

        let users = backend.list_users(&session.backend_token).await?;
        let target = users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        if target.role == Role::Superadmin {
            warn!(user_id = %session.user.id, target_id = %id, "Refused to delete a superadmin account");
            return Err(AppError::Conflict(
                "Superadmin accounts cannot be deleted".to_string(),
            ));
        }

        backend.delete_user(&session.backend_token, id).await?;
        info!(user_id = %session.user.id, target_id = %id, "Account deleted");

        Self::user_directory(backend, session).await
    }

    async fn user_directory(backend: &dyn Backend, session: &Session) -> AppResult<(Vec<User>, UserStats)> {
        let users = backend.list_users(&session.backend_token).await?;
        let stats = user_stats(&users);
        Ok((users, stats))
    }
}

fn validate_resort(draft: &ResortDraft) -> AppResult<()> {
    if !draft.price_per_night.is_positive() {
        return Err(AppError::Validation(
            "Price per night must be greater than zero".to_string(),
        ));
    }
    if draft.max_guests < 1 {
        return Err(AppError::Validation("Max guests must be at least 1".to_string()));
    }
    if draft.rooms < 1 {
        return Err(AppError::Validation("Rooms must be at least 1".to_string()));
    }
    validate_coordinates(draft.latitude, draft.longitude)
        .map_err(|e| AppError::Validation(e.to_string()))
}

fn dashboard_stats(resorts: &[Resort], bookings: &[Booking]) -> DashboardStats {
    let count = |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();
    DashboardStats {
        total_resorts: resorts.len(),
        total_bookings: bookings.len(),
        pending_bookings: count(BookingStatus::Pending),
        confirmed_bookings: count(BookingStatus::Confirmed),
        cancelled_bookings: count(BookingStatus::Cancelled),
    }
}

fn user_stats(users: &[User]) -> UserStats {
    let count = |role: Role| users.iter().filter(|u| u.role == role).count();
    UserStats {
        total_users: users.len(),
        users: count(Role::User),
        admins: count(Role::Admin),
        superadmins: count(Role::Superadmin),
    }
}
