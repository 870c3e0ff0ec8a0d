//! In-memory backend for view model and controller tests

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use tripdesk_core::{
    Booking, BookingConfirmation, CatalogResponse, Destination, Hotel, LoginResponse,
    NewDestination, NewHotel, RegisterResponse, UserId,
};
use tripdesk_net::{Endpoint, Error, Result, TravelApi};

pub fn sample_destination(id: i64, name: &str, price: f64) -> Destination {
    Destination {
        id,
        name: name.to_string(),
        description: Some(format!("Visit {}", name)),
        image_url: Some(format!("/Images/{}.jpg", name.to_lowercase())),
        price,
    }
}

pub fn sample_hotel(id: i64, name: &str, location: &str, price_per_night: f64) -> Hotel {
    Hotel {
        id,
        name: name.to_string(),
        description: Some(format!("Stay at {}", name)),
        location: location.to_string(),
        image_url: Some("/Images/hotel.jpg".to_string()),
        price_per_night,
    }
}

/// Answers like the real backend for a fixed catalog, or fails every call
pub struct FakeApi {
    fail: bool,
    destinations: Vec<Destination>,
    hotels: Vec<Hotel>,
    calls: Mutex<Vec<String>>,
    bookings: Mutex<Vec<Value>>,
}

impl FakeApi {
    /// Two destinations, two hotels; user `a` with password `pw` is id 7
    pub fn with_catalog() -> Self {
        Self {
            fail: false,
            destinations: vec![
                sample_destination(1, "Paris", 999.99),
                sample_destination(2, "Maldives", 1499.99),
            ],
            hotels: vec![
                sample_hotel(1, "Grand Paris Hotel", "Paris", 299.99),
                sample_hotel(2, "Tokyo Skyline Hotel", "Tokyo", 399.99),
            ],
            calls: Mutex::new(Vec::new()),
            bookings: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with the endpoint's generic message
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_catalog()
        }
    }

    /// Calls other than catalog reads, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_booking(&self) -> Option<Value> {
        self.bookings.lock().unwrap().last().cloned()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, endpoint: Endpoint) -> Result<()> {
        if self.fail {
            return Err(Error::Http {
                status: 500,
                message: endpoint.fallback_message().to_string(),
                body: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TravelApi for FakeApi {
    async fn register(&self, username: &str, _password: &str, email: &str) -> Result<RegisterResponse> {
        self.record(format!("register {} {}", username, email));
        self.check(Endpoint::Register)?;
        Ok(RegisterResponse {
            message: Some("User registered successfully".to_string()),
        })
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        self.record(format!("login {}", username));
        self.check(Endpoint::Login)?;
        if username == "a" && password == "pw" {
            Ok(LoginResponse {
                message: Some("Login successful".to_string()),
                user_id: 7,
                username: username.to_string(),
            })
        } else {
            Err(Error::Http {
                status: 401,
                message: "bad credentials".to_string(),
                body: Some(json!({ "error": "bad credentials" })),
            })
        }
    }

    async fn destinations(&self) -> Result<Vec<Destination>> {
        self.check(Endpoint::Destinations)?;
        Ok(self.destinations.clone())
    }

    async fn hotels(&self) -> Result<Vec<Hotel>> {
        self.check(Endpoint::Hotels)?;
        Ok(self.hotels.clone())
    }

    async fn create_booking(&self, payload: &Value) -> Result<BookingConfirmation> {
        self.record("booking".to_string());
        self.check(Endpoint::CreateBooking)?;
        self.bookings.lock().unwrap().push(payload.clone());
        Ok(BookingConfirmation {
            message: Some("Booking created successfully".to_string()),
            booking_id: Some(12),
        })
    }

    async fn user_bookings(&self, user_id: UserId) -> Result<Vec<Booking>> {
        self.record(format!("bookings {}", user_id));
        self.check(Endpoint::UserBookings(user_id))?;
        let booking = serde_json::from_value(json!({
            "id": 1,
            "user_id": user_id,
            "hotel_id": 1,
            "check_in": "2026-11-01",
            "check_out": "2026-11-03",
            "total_price": 599.98,
            "hotel_name": "Grand Paris Hotel",
            "hotel_location": "Paris"
        }))?;
        Ok(vec![booking])
    }

    async fn add_destination(&self, destination: &NewDestination) -> Result<CatalogResponse> {
        self.record(format!("add destination {}", destination.name));
        self.check(Endpoint::AddDestination)?;
        Ok(CatalogResponse {
            message: Some("Destination added successfully".to_string()),
        })
    }

    async fn add_hotel(&self, hotel: &NewHotel) -> Result<CatalogResponse> {
        self.record(format!("add hotel {}", hotel.name));
        self.check(Endpoint::AddHotel)?;
        Ok(CatalogResponse {
            message: Some("Hotel added successfully".to_string()),
        })
    }
}
