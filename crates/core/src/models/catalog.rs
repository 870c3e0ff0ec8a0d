//! Destination and hotel catalog models

use serde::{Deserialize, Serialize};

pub type DestinationId = i64;
pub type HotelId = i64;

/// A travel destination, read-only on the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: f64,
}

/// A hotel, read-only on the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub image_url: Option<String>,
    pub price_per_night: f64,
}

/// Body of `POST /destinations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDestination {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

/// Body of `POST /hotels`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHotel {
    pub name: String,
    pub location: String,
    pub price_per_night: f64,
    pub description: String,
    pub image_url: String,
}

/// Acknowledgement returned by the catalog write endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// The sample catalog the site ships with
pub fn sample_destinations() -> Vec<NewDestination> {
    [
        ("Paris", "The City of Light with iconic Eiffel Tower", 999.99, "/Images/paris.jpg"),
        ("Maldives", "Paradise islands with crystal clear waters", 1499.99, "/Images/maldives.jpg"),
        ("Tokyo", "Modern city with rich cultural heritage", 1299.99, "/Images/tokyo.jpg"),
    ]
    .into_iter()
    .map(|(name, description, price, image_url)| NewDestination {
        name: name.to_string(),
        description: description.to_string(),
        price,
        image_url: image_url.to_string(),
    })
    .collect()
}

pub fn sample_hotels() -> Vec<NewHotel> {
    [
        ("Grand Paris Hotel", "Paris", 299.99, "Luxury hotel near Eiffel Tower", "/Images/paris-hotel.jpg"),
        ("Maldives Resort & Spa", "Maldives", 599.99, "Overwater villas with ocean view", "/Images/maldives-hotel.jpg"),
        ("Tokyo Skyline Hotel", "Tokyo", 399.99, "Modern hotel in Shinjuku district", "/Images/tokyo-hotel.jpg"),
    ]
    .into_iter()
    .map(|(name, location, price_per_night, description, image_url)| NewHotel {
        name: name.to_string(),
        location: location.to_string(),
        price_per_night,
        description: description.to_string(),
        image_url: image_url.to_string(),
    })
    .collect()
}
