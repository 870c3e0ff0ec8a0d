//! Backend endpoint table

use std::fmt;

use reqwest::Method;
use tripdesk_core::UserId;

/// One backend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    Login,
    Destinations,
    Hotels,
    CreateBooking,
    UserBookings(UserId),
    AddDestination,
    AddHotel,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Destinations | Endpoint::Hotels | Endpoint::UserBookings(_) => Method::GET,
            Endpoint::Register
            | Endpoint::Login
            | Endpoint::CreateBooking
            | Endpoint::AddDestination
            | Endpoint::AddHotel => Method::POST,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Register => "/register".to_string(),
            Endpoint::Login => "/login".to_string(),
            Endpoint::Destinations | Endpoint::AddDestination => "/destinations".to_string(),
            Endpoint::Hotels | Endpoint::AddHotel => "/hotels".to_string(),
            Endpoint::CreateBooking => "/bookings".to_string(),
            Endpoint::UserBookings(user_id) => format!("/bookings/{}", user_id),
        }
    }

    /// Message used when a failed response carries no usable `error` field
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Endpoint::Register => "Registration failed",
            Endpoint::Login => "Login failed",
            Endpoint::Destinations => "Failed to fetch destinations",
            Endpoint::Hotels => "Failed to fetch hotels",
            Endpoint::CreateBooking => "Booking failed",
            Endpoint::UserBookings(_) => "Failed to fetch bookings",
            Endpoint::AddDestination => "Failed to add destination",
            Endpoint::AddHotel => "Failed to add hotel",
        }
    }

    /// Whether the server's `error` field is surfaced on failure.
    /// Listing endpoints always report their fallback message.
    pub fn reports_server_error(&self) -> bool {
        self.method() == Method::POST
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
