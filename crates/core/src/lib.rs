//! Tripdesk Core Library
//!
//! Data models, configuration, and client-local storage for the Tripdesk
//! travel-booking client.

pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use config::{ApiConfig, Config, StorageConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::*;
pub use storage::{LocalStorage, MemorySessionStore, SessionStore, SESSION_KEY};
