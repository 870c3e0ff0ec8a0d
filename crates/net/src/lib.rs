//! Tripdesk Network Library
//!
//! HTTP client for the travel-booking backend.
//!
//! # Architecture
//!
//! - **TravelApi**: the backend operations as an async trait
//! - **Client**: reqwest-backed implementation against a base URL
//! - **Endpoint**: method, path and fallback error message per operation
//!
//! # Usage
//!
//! ```ignore
//! let client = Client::new(&ApiConfig::default())?;
//! let hotels = client.hotels().await?;
//!
//! // Log in and remember the session locally
//! let storage = LocalStorage::open(path)?;
//! session::login(&client, &storage, "ana", "secret").await?;
//! ```

pub mod api;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod session;

pub use api::TravelApi;
pub use client::Client;
pub use endpoint::Endpoint;
pub use error::{Error, Result};
