//! Resort Portal - booking gateway for a resort REST backend
//!
//! This library provides the portal that sits between browsers and the
//! resort backend: it authenticates members and staff, serves the resort
//! catalogue, prices and submits bookings, and hosts the admin area.
//!
//! # Features
//!
//! - Explicit per-login sessions backed by signed session tokens
//! - Role-based access resolver shared by every route
//! - Integer-cent booking price calculator
//! - Admin dashboard with resort, booking and account management
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic, access checks and validation
//! - **Backend**: REST client for the resort backend
//! - **Models**: Domain models shared with the backend

pub mod access;
pub mod backend;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pricing;
pub mod services;
pub mod session;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
