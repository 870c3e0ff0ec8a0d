//! Data models for Tripdesk

mod booking;
mod catalog;
mod user;

pub use booking::*;
pub use catalog::*;
pub use user::*;
