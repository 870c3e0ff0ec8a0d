//! Destination and hotel cards

use std::fmt;

use serde::Serialize;
use tracing::error;
use tripdesk_core::{Destination, DestinationId, Hotel, HotelId};
use tripdesk_net::TravelApi;

/// Inline trigger attached to a card's "Book Now" button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    BookDestination(DestinationId),
    BookHotel(HotelId),
}

impl fmt::Display for CardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardAction::BookDestination(id) => write!(f, "bookDestination({})", id),
            CardAction::BookHotel(id) => write!(f, "bookHotel({})", id),
        }
    }
}

impl Serialize for CardAction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationCard {
    pub id: DestinationId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price_label: String,
    pub action: CardAction,
}

impl From<&Destination> for DestinationCard {
    fn from(d: &Destination) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            description: d.description.clone().unwrap_or_default(),
            image_url: d.image_url.clone().unwrap_or_default(),
            price_label: price_label(d.price),
            action: CardAction::BookDestination(d.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelCard {
    pub id: HotelId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub image_url: String,
    pub price_label: String,
    pub action: CardAction,
}

impl From<&Hotel> for HotelCard {
    fn from(h: &Hotel) -> Self {
        Self {
            id: h.id,
            name: h.name.clone(),
            description: h.description.clone().unwrap_or_default(),
            location: h.location.clone(),
            image_url: h.image_url.clone().unwrap_or_default(),
            price_label: format!("{} per night", price_label(h.price_per_night)),
            action: CardAction::BookHotel(h.id),
        }
    }
}

/// `$` followed by the shortest form of the amount: `$999.99`, `$1000`
pub fn price_label(amount: f64) -> String {
    format!("${}", amount)
}

/// Fetch destinations as cards. Failures are logged and yield `None`.
pub async fn load_destination_cards<A: TravelApi + ?Sized>(api: &A) -> Option<Vec<DestinationCard>> {
    match api.destinations().await {
        Ok(destinations) => Some(destinations.iter().map(DestinationCard::from).collect()),
        Err(e) => {
            error!(error = %e, "Error loading destinations");
            None
        }
    }
}

/// Fetch hotels as cards. Failures are logged and yield `None`.
pub async fn load_hotel_cards<A: TravelApi + ?Sized>(api: &A) -> Option<Vec<HotelCard>> {
    match api.hotels().await {
        Ok(hotels) => Some(hotels.iter().map(HotelCard::from).collect()),
        Err(e) => {
            error!(error = %e, "Error loading hotels");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodel::testing::{sample_destination, sample_hotel, FakeApi};

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(999.99), "$999.99");
        assert_eq!(price_label(1000.0), "$1000");
        assert_eq!(price_label(0.5), "$0.5");
    }

    #[test]
    fn test_destination_card() {
        let card = DestinationCard::from(&sample_destination(3, "Tokyo", 1299.99));

        assert_eq!(card.name, "Tokyo");
        assert_eq!(card.price_label, "$1299.99");
        assert_eq!(card.action.to_string(), "bookDestination(3)");
    }

    #[test]
    fn test_hotel_card_missing_optional_fields() {
        let mut hotel = sample_hotel(2, "Tokyo Skyline Hotel", "Tokyo", 399.99);
        hotel.description = None;
        hotel.image_url = None;

        let card = HotelCard::from(&hotel);

        assert_eq!(card.description, "");
        assert_eq!(card.image_url, "");
        assert_eq!(card.price_label, "$399.99 per night");
        assert_eq!(card.action, CardAction::BookHotel(2));
    }

    #[test]
    fn test_action_serializes_as_call() {
        let json = serde_json::to_value(CardAction::BookHotel(5)).unwrap();
        assert_eq!(json, serde_json::json!("bookHotel(5)"));
    }

    #[tokio::test]
    async fn test_load_cards_keeps_order() {
        let api = FakeApi::with_catalog();
        let cards = load_destination_cards(&api).await.unwrap();

        let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Paris", "Maldives"]);
    }

    #[tokio::test]
    async fn test_load_cards_failure_is_none() {
        let api = FakeApi::failing();
        assert!(load_hotel_cards(&api).await.is_none());
        assert!(load_destination_cards(&api).await.is_none());
    }
}
