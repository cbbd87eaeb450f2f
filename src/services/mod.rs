//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod booking_service;
pub mod resort_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use booking_service::{BookingService, PlacedBooking};
pub use resort_service::{Listing, ResortFilter, ResortService, Stay};
