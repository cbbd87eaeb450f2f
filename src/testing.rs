//! Shared fixtures for unit tests

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::config::{BackendConfig, Config, ServerConfig, SessionConfig};
use crate::models::{Booking, BookingStatus, Money, Resort, Role, User};
use crate::session::Session;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn amenities(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn resort(id: &str, name: &str, nightly: i64, offered: &[&str]) -> Resort {
    Resort {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        location: String::new(),
        latitude: 0.0,
        longitude: 0.0,
        price_per_night: Money::from_major(nightly),
        amenities: amenities(offered),
        max_guests: 4,
        rooms: 10,
        images: Vec::new(),
    }
}

pub fn user(id: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: format!("{} name", id),
        email: format!("{}@example.com", id),
        phone: String::new(),
        role,
    }
}

pub fn session(role: Role) -> Session {
    let now = Utc::now();
    Session {
        id: Uuid::new_v4(),
        backend_token: "backend-token".to_string(),
        user: user("me", role),
        created_at: now,
        expires_at: now + Duration::hours(1),
    }
}

pub fn booking(id: &str, user_id: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_string(),
        user_id: user_id.to_string(),
        resort_id: "r1".to_string(),
        resort: None,
        check_in_date: date(2025, 5, 1),
        check_out_date: date(2025, 5, 7),
        number_of_guests: 2,
        selected_amenities: amenities(&["WiFi", "Pool"]),
        total_price: Money::from_major(2800),
        status,
        created_at: None,
    }
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        },
        backend: BackendConfig {
            api_url: "http://127.0.0.1:9/api".to_string(),
            timeout_seconds: 1,
        },
        session: SessionConfig {
            secret: "test-secret".to_string(),
            expiry_hours: 1,
        },
    }
}
