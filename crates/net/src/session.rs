//! Session-aware flows on top of [`TravelApi`]

use tracing::{error, info};
use tripdesk_core::{LoginResponse, SessionStore};

use crate::api::TravelApi;
use crate::error::Result;

/// Log in and persist `{id, username}` from the response.
///
/// Nothing is written when the backend rejects the credentials.
pub async fn login<A, S>(api: &A, store: &S, username: &str, password: &str) -> Result<LoginResponse>
where
    A: TravelApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let response = api.login(username, password).await?;

    let session = response.session();
    if let Err(e) = store.save(&session) {
        error!(error = %e, "Failed to persist session");
        return Err(e.into());
    }

    info!(user_id = session.id, username = %session.username, "Logged in");
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use async_trait::async_trait;
    use serde_json::Value;
    use tripdesk_core::{
        Booking, BookingConfirmation, CatalogResponse, Destination, Hotel, MemorySessionStore,
        NewDestination, NewHotel, RegisterResponse, Session, UserId,
    };

    /// Backend that only knows how to answer `login`
    struct LoginOnly {
        outcome: std::result::Result<(i64, &'static str), &'static str>,
    }

    fn rejected(message: &str) -> Error {
        Error::Http {
            status: 401,
            message: message.to_string(),
            body: None,
        }
    }

    #[async_trait]
    impl TravelApi for LoginOnly {
        async fn register(&self, _: &str, _: &str, _: &str) -> Result<RegisterResponse> {
            unimplemented!()
        }

        async fn login(&self, _: &str, _: &str) -> Result<LoginResponse> {
            match self.outcome {
                Ok((user_id, username)) => Ok(LoginResponse {
                    message: None,
                    user_id,
                    username: username.to_string(),
                }),
                Err(message) => Err(rejected(message)),
            }
        }

        async fn destinations(&self) -> Result<Vec<Destination>> {
            unimplemented!()
        }

        async fn hotels(&self) -> Result<Vec<Hotel>> {
            unimplemented!()
        }

        async fn create_booking(&self, _: &Value) -> Result<BookingConfirmation> {
            unimplemented!()
        }

        async fn user_bookings(&self, _: UserId) -> Result<Vec<Booking>> {
            unimplemented!()
        }

        async fn add_destination(&self, _: &NewDestination) -> Result<CatalogResponse> {
            unimplemented!()
        }

        async fn add_hotel(&self, _: &NewHotel) -> Result<CatalogResponse> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let api = LoginOnly { outcome: Ok((7, "a")) };
        let store = MemorySessionStore::new();

        login(&api, &store, "a", "pw").await.unwrap();

        assert_eq!(store.raw().as_deref(), Some(r#"{"id":7,"username":"a"}"#));
        assert_eq!(store.load().unwrap(), Some(Session::new(7, "a")));
    }

    #[tokio::test]
    async fn test_failed_login_writes_nothing() {
        let api = LoginOnly {
            outcome: Err("bad credentials"),
        };
        let store = MemorySessionStore::new();

        let err = login(&api, &store, "a", "nope").await.unwrap_err();

        assert_eq!(err.to_string(), "bad credentials");
        assert!(store.raw().is_none());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_session() {
        let api = LoginOnly {
            outcome: Err("Invalid credentials"),
        };
        let store = MemorySessionStore::new();
        store.save(&Session::new(1, "old")).unwrap();

        assert!(login(&api, &store, "b", "nope").await.is_err());
        assert_eq!(store.load().unwrap(), Some(Session::new(1, "old")));
    }
}
