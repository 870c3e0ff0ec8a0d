//! Booking models
//!
//! The booking endpoint accepts any JSON object, so the typed payload here is
//! a convenience for the hotel-booking flow rather than a constraint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{HotelId, UserId};

/// Typed booking payload for `POST /bookings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub user_id: UserId,
    pub hotel_id: HotelId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: f64,
}

impl NewBooking {
    /// Number of nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Response to `POST /bookings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub booking_id: Option<i64>,
}

/// A booking as listed by `GET /bookings/{user_id}`
///
/// Fields the backend is known to send are typed; anything else is kept in
/// `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub hotel_id: Option<HotelId>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub hotel_name: Option<String>,
    #[serde(default)]
    pub hotel_location: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
