//! View models: backend data mapped to what the page shows

mod auth;
mod bookings;
mod catalog;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::{
    check_auth_status, logout, submit_login, submit_register, AuthStatus, LoginForm,
    RegisterForm,
};
pub use bookings::{book_hotel, my_bookings, BookingRow};
pub use catalog::{load_destination_cards, load_hotel_cards, DestinationCard, HotelCard};
