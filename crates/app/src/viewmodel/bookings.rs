//! Booking view model

use chrono::NaiveDate;
use tracing::{info, warn};
use tripdesk_core::{Booking, BookingConfirmation, HotelId, NewBooking, Session, SessionStore};
use tripdesk_net::{Error, TravelApi};

use super::auth::{check_auth_status, AuthStatus};
use super::catalog::price_label;
use crate::page::Outcome;

/// One line of the "my bookings" list
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRow {
    pub id: i64,
    pub hotel: String,
    pub dates: String,
    pub total_label: String,
}

impl From<&Booking> for BookingRow {
    fn from(b: &Booking) -> Self {
        let hotel = match (&b.hotel_name, &b.hotel_location) {
            (Some(name), Some(location)) => format!("{} ({})", name, location),
            (Some(name), None) => name.clone(),
            _ => b
                .hotel_id
                .map(|id| format!("Hotel #{}", id))
                .unwrap_or_else(|| "Unknown hotel".to_string()),
        };

        let dates = format!(
            "{} → {}",
            b.check_in.as_deref().unwrap_or("?"),
            b.check_out.as_deref().unwrap_or("?")
        );

        Self {
            id: b.id,
            hotel,
            dates,
            total_label: b.total_price.map(price_label).unwrap_or_default(),
        }
    }
}

/// Price of a stay, rounded to cents
pub fn quote_total(price_per_night: f64, check_in: NaiveDate, check_out: NaiveDate) -> Result<f64, Error> {
    let nights = (check_out - check_in).num_days();
    if nights <= 0 {
        return Err(Error::Validation(
            "Check-out must be after check-in".to_string(),
        ));
    }
    Ok((price_per_night * nights as f64 * 100.0).round() / 100.0)
}

/// Book a hotel for the signed-in user.
///
/// Without a session the user is sent to log in. The total is computed from
/// the hotel's current nightly price.
pub async fn book_hotel<A, S>(
    api: &A,
    store: &S,
    hotel_id: HotelId,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Outcome
where
    A: TravelApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let session = match check_auth_status(store) {
        AuthStatus::SignedIn(session) => session,
        AuthStatus::Redirect(page) => return Outcome::navigate(page),
    };

    match submit_booking(api, &session, hotel_id, check_in, check_out).await {
        Ok(confirmation) => {
            let message = match confirmation.booking_id {
                Some(id) => format!("Booking confirmed (#{})", id),
                None => confirmation
                    .message
                    .unwrap_or_else(|| "Booking confirmed".to_string()),
            };
            Outcome::info(message)
        }
        Err(e) => {
            warn!(hotel_id, error = %e, "Booking not placed");
            Outcome::alert(e.to_string())
        }
    }
}

async fn submit_booking<A: TravelApi + ?Sized>(
    api: &A,
    session: &Session,
    hotel_id: HotelId,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<BookingConfirmation, Error> {
    // Reject bad dates before touching the network
    if check_out <= check_in {
        return Err(Error::Validation(
            "Check-out must be after check-in".to_string(),
        ));
    }

    let hotel = api
        .hotels()
        .await?
        .into_iter()
        .find(|h| h.id == hotel_id)
        .ok_or_else(|| Error::Validation(format!("Hotel {} not found", hotel_id)))?;

    let booking = NewBooking {
        user_id: session.id,
        hotel_id,
        check_in,
        check_out,
        total_price: quote_total(hotel.price_per_night, check_in, check_out)?,
    };

    let payload = serde_json::to_value(&booking)?;
    let confirmation = api.create_booking(&payload).await?;

    info!(
        user_id = session.id,
        hotel_id,
        nights = booking.nights(),
        total = booking.total_price,
        "Booking created"
    );
    Ok(confirmation)
}

/// The signed-in user's bookings, or the outcome to apply instead
pub async fn my_bookings<A, S>(api: &A, store: &S) -> Result<Vec<BookingRow>, Outcome>
where
    A: TravelApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let session = match check_auth_status(store) {
        AuthStatus::SignedIn(session) => session,
        AuthStatus::Redirect(page) => return Err(Outcome::navigate(page)),
    };

    api.user_bookings(session.id)
        .await
        .map(|bookings| bookings.iter().map(BookingRow::from).collect())
        .map_err(|e| Outcome::alert(e.to_string()))
}
