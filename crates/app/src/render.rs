//! HTML fragments for the list containers
//!
//! Every render produces the full container content; output is HTML-escaped.

use tera::{Context, Tera};

use crate::viewmodel::{DestinationCard, HotelCard};

const DESTINATIONS_TEMPLATE: &str = r#"{% for card in cards %}
<div class="destination-card">
    <img src="{{ card.image_url }}" alt="{{ card.name }}">
    <h3>{{ card.name }}</h3>
    <p>{{ card.description }}</p>
    <p class="price">{{ card.price_label }}</p>
    <button onclick="{{ card.action }}">Book Now</button>
</div>
{% endfor %}"#;

const HOTELS_TEMPLATE: &str = r#"{% for card in cards %}
<div class="hotel-card">
    <img src="{{ card.image_url }}" alt="{{ card.name }}">
    <h3>{{ card.name }}</h3>
    <p>{{ card.description }}</p>
    <p>Location: {{ card.location }}</p>
    <p class="price">{{ card.price_label }}</p>
    <button onclick="{{ card.action }}">Book Now</button>
</div>
{% endfor %}"#;

pub fn destinations(cards: &[DestinationCard]) -> tera::Result<String> {
    let mut context = Context::new();
    context.insert("cards", cards);
    Tera::one_off(DESTINATIONS_TEMPLATE, &context, true)
}

pub fn hotels(cards: &[HotelCard]) -> tera::Result<String> {
    let mut context = Context::new();
    context.insert("cards", cards);
    Tera::one_off(HOTELS_TEMPLATE, &context, true)
}
