//! Admin response DTOs

use serde::Serialize;

use crate::access::AdminSection;
use crate::models::{Booking, Resort, User};

/// Booking and catalogue counts shown on the dashboard overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_resorts: usize,
    pub total_bookings: usize,
    pub pending_bookings: usize,
    pub confirmed_bookings: usize,
    pub cancelled_bookings: usize,
}

/// Dashboard response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    /// Sections the caller may open
    pub sections: Vec<AdminSection>,
}

/// Resort catalogue after a read or mutation
#[derive(Debug, Serialize)]
pub struct AdminResortsResponse {
    pub resorts: Vec<Resort>,
    pub total: usize,
}

/// All bookings after a read or status change
#[derive(Debug, Serialize)]
pub struct AdminBookingsResponse {
    pub bookings: Vec<Booking>,
    pub total: usize,
}

/// Account counts by role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: usize,
    pub users: usize,
    pub admins: usize,
    pub superadmins: usize,
}

/// Account directory after a read or mutation
#[derive(Debug, Serialize)]
pub struct AdminUsersResponse {
    pub users: Vec<User>,
    pub stats: UserStats,
}
