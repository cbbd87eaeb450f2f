//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// BACKEND DEFAULTS
// =============================================================================

/// Default base URL of the resort REST backend
pub const DEFAULT_BACKEND_API_URL: &str = "http://localhost:5000/api";

/// Default timeout for a single backend request, in seconds
pub const DEFAULT_BACKEND_TIMEOUT_SECONDS: u64 = 30;

/// Message shown when a backend failure carries no readable message
pub const GENERIC_BACKEND_FAILURE: &str = "Request failed. Please try again later.";

// =============================================================================
// SESSION DEFAULTS
// =============================================================================

/// Default session lifetime in hours
pub const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 24;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Maximum display name length
pub const MAX_NAME_LENGTH: u64 = 100;

/// Maximum phone number length
pub const MAX_PHONE_LENGTH: u64 = 32;

// =============================================================================
// PRICING
// =============================================================================

/// Flat surcharge per selected amenity, in cents ($50.00)
pub const AMENITY_SURCHARGE_CENTS: i64 = 50_00;

/// Minor units per major currency unit
pub const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers as they appear on the wire
pub mod roles {
    pub const USER: &str = "user";
    pub const ADMIN: &str = "admin";
    pub const SUPERADMIN: &str = "superadmin";
}

// =============================================================================
// BOOKING STATUSES
// =============================================================================

/// Booking status identifiers
pub mod booking_statuses {
    pub const PENDING: &str = "pending";
    pub const CONFIRMED: &str = "confirmed";
    pub const CANCELLED: &str = "cancelled";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum resort name length
pub const MAX_RESORT_NAME_LENGTH: u64 = 200;

/// Maximum resort description length
pub const MAX_RESORT_DESCRIPTION_LENGTH: u64 = 10_000;

/// Maximum resort location length
pub const MAX_RESORT_LOCATION_LENGTH: u64 = 200;
