//! Backend operations as a trait, so callers can run against a fake

use async_trait::async_trait;
use serde_json::Value;
use tripdesk_core::{
    Booking, BookingConfirmation, CatalogResponse, Destination, Hotel, LoginResponse,
    NewDestination, NewHotel, RegisterResponse, UserId,
};

use crate::error::Result;

#[async_trait]
pub trait TravelApi: Send + Sync {
    /// Create an account. No client-side format checks.
    async fn register(&self, username: &str, password: &str, email: &str)
        -> Result<RegisterResponse>;

    /// Check credentials. Does not touch local storage; see [`crate::session::login`].
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse>;

    async fn destinations(&self) -> Result<Vec<Destination>>;

    async fn hotels(&self) -> Result<Vec<Hotel>>;

    /// Submit a booking. The payload is passed through as-is.
    async fn create_booking(&self, payload: &Value) -> Result<BookingConfirmation>;

    async fn user_bookings(&self, user_id: UserId) -> Result<Vec<Booking>>;

    async fn add_destination(&self, destination: &NewDestination) -> Result<CatalogResponse>;

    async fn add_hotel(&self, hotel: &NewHotel) -> Result<CatalogResponse>;
}
