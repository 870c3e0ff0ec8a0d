//! HTTP client for the travel backend

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};
use tripdesk_core::{
    ApiConfig, Booking, BookingConfirmation, CatalogResponse, Destination, Hotel, LoginRequest,
    LoginResponse, NewDestination, NewHotel, RegisterRequest, RegisterResponse, UserId,
};

use crate::api::TravelApi;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};

/// Client handle for backend requests
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Build a client for the configured backend
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| Error::Validation(format!("Invalid base URL {}: {}", base_url, e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;

        info!(base_url = %base_url, "API client ready");
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let request = self.http.request(endpoint.method(), self.url(endpoint));
        self.execute(endpoint, request).await
    }

    async fn post<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        let request = self
            .http
            .request(endpoint.method(), self.url(endpoint))
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        self.execute(endpoint, request).await
    }

    /// Send, then log any failure before handing it back
    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T> {
        let result = send_and_decode(endpoint, request).await;
        if let Err(e) = &result {
            error!(endpoint = %endpoint, error = %e, "Request failed");
        }
        result
    }
}

async fn send_and_decode<T: DeserializeOwned>(
    endpoint: Endpoint,
    request: RequestBuilder,
) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    let bytes = response.bytes().await?;
    debug!(
        endpoint = %endpoint,
        status = status.as_u16(),
        len = bytes.len(),
        "Response received"
    );
    decode_response(endpoint, status, &bytes)
}

/// Turn a raw response into the expected body or a tagged error.
///
/// A failed status yields [`Error::Http`]: its message is the body's `error`
/// string when the endpoint surfaces it, otherwise the endpoint's fallback.
/// An empty or non-JSON failure body gets the fallback too.
pub fn decode_response<T: DeserializeOwned>(
    endpoint: Endpoint,
    status: StatusCode,
    bytes: &[u8],
) -> Result<T> {
    if !status.is_success() {
        let body: Option<Value> = serde_json::from_slice(bytes).ok();
        let message = body
            .as_ref()
            .filter(|_| endpoint.reports_server_error())
            .and_then(|b| b.get("error"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(endpoint.fallback_message())
            .to_string();

        return Err(Error::Http {
            status: status.as_u16(),
            message,
            body,
        });
    }

    Ok(serde_json::from_slice(bytes)?)
}

#[async_trait]
impl TravelApi for Client {
    async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<RegisterResponse> {
        let body = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
        };
        self.post(Endpoint::Register, &body).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post(Endpoint::Login, &body).await
    }

    async fn destinations(&self) -> Result<Vec<Destination>> {
        self.get(Endpoint::Destinations).await
    }

    async fn hotels(&self) -> Result<Vec<Hotel>> {
        self.get(Endpoint::Hotels).await
    }

    async fn create_booking(&self, payload: &Value) -> Result<BookingConfirmation> {
        self.post(Endpoint::CreateBooking, payload).await
    }

    async fn user_bookings(&self, user_id: UserId) -> Result<Vec<Booking>> {
        self.get(Endpoint::UserBookings(user_id)).await
    }

    async fn add_destination(&self, destination: &NewDestination) -> Result<CatalogResponse> {
        self.post(Endpoint::AddDestination, destination).await
    }

    async fn add_hotel(&self, hotel: &NewHotel) -> Result<CatalogResponse> {
        self.post(Endpoint::AddHotel, hotel).await
    }
}
