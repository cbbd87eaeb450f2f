//! Domain models
//!
//! This module contains the resort, booking and user models exchanged
//! with the backend, plus the fixed-point [`Money`] type.

pub mod booking;
pub mod money;
pub mod resort;
pub mod user;

pub use booking::*;
pub use money::*;
pub use resort::*;
pub use user::*;
