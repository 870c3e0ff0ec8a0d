//! Page controller
//!
//! Models the page the site script used to drive: a document of named
//! elements, form submits that produce an [`Outcome`] instead of dialogs, and
//! a page-load hook that fills whichever list containers exist.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, error, info};
use tripdesk_core::{HotelId, SessionStore};
use tripdesk_net::TravelApi;

use crate::render;
use crate::viewmodel::{self, AuthStatus, BookingRow, LoginForm, RegisterForm};

/// Element ids the controller reads and writes
pub mod ids {
    pub const LOGIN_FORM: &str = "loginForm";
    pub const REGISTER_FORM: &str = "registerForm";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const REG_USERNAME: &str = "regUsername";
    pub const REG_PASSWORD: &str = "regPassword";
    pub const REG_EMAIL: &str = "regEmail";
    pub const DESTINATIONS_CONTAINER: &str = "destinationsContainer";
    pub const HOTELS_CONTAINER: &str = "hotelsContainer";
}

/// Navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Index,
}

impl Page {
    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Login => "login.html",
            Page::Index => "index.html",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// User-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Informational, e.g. a successful registration
    Info(String),
    /// A failure the user must acknowledge
    Alert(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Info(msg) | Notice::Alert(msg) => f.write_str(msg),
        }
    }
}

/// What the UI should do after an action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Option<Notice>,
    pub navigate: Option<Page>,
}

impl Outcome {
    pub fn navigate(page: Page) -> Self {
        Self {
            notice: None,
            navigate: Some(page),
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            notice: Some(Notice::Alert(message.into())),
            navigate: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            notice: Some(Notice::Info(message.into())),
            navigate: None,
        }
    }

    pub fn then_navigate(mut self, page: Page) -> Self {
        self.navigate = Some(page);
        self
    }
}

/// A page element: an input value and/or replaceable content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub value: String,
    pub inner_html: Option<String>,
}

/// The elements present on the current page, by id
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty element
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.entry(id.to_string()).or_default();
        self
    }

    /// Add an input element holding `value`
    pub fn with_value(mut self, id: &str, value: &str) -> Self {
        self.set_value(id, value);
        self
    }

    /// The login page: form plus its two inputs
    pub fn login_page(username: &str, password: &str) -> Self {
        Self::new()
            .with_element(ids::LOGIN_FORM)
            .with_value(ids::USERNAME, username)
            .with_value(ids::PASSWORD, password)
    }

    /// The registration page
    pub fn register_page(username: &str, password: &str, email: &str) -> Self {
        Self::new()
            .with_element(ids::REGISTER_FORM)
            .with_value(ids::REG_USERNAME, username)
            .with_value(ids::REG_PASSWORD, password)
            .with_value(ids::REG_EMAIL, email)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.value.as_str())
    }

    pub fn set_value(&mut self, id: &str, value: &str) {
        self.elements.entry(id.to_string()).or_default().value = value.to_string();
    }

    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.inner_html.as_deref())
    }

    /// Replace an existing element's content. Returns false if the element
    /// is not on the page.
    pub fn set_inner_html(&mut self, id: &str, html: String) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.inner_html = Some(html);
                true
            }
            None => false,
        }
    }

    fn input(&self, id: &str) -> String {
        self.value(id).unwrap_or_default().to_string()
    }
}

/// What a page load did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLoad {
    /// Forms found and ready for submit
    pub forms: Vec<&'static str>,
    /// Containers whose content was replaced
    pub rendered: Vec<&'static str>,
}

/// Drives a [`Document`] against the backend and the session store
pub struct PageController<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    store: &'a S,
}

impl<'a, A, S> PageController<'a, A, S>
where
    A: TravelApi + ?Sized,
    S: SessionStore + ?Sized,
{
    pub fn new(api: &'a A, store: &'a S) -> Self {
        Self { api, store }
    }

    /// Page-load hook: note the forms, fill the containers that exist.
    ///
    /// A failed load leaves its container untouched.
    pub async fn load(&self, document: &mut Document) -> PageLoad {
        let mut report = PageLoad::default();

        for form in [ids::LOGIN_FORM, ids::REGISTER_FORM] {
            if document.contains(form) {
                report.forms.push(form);
            }
        }

        if document.contains(ids::DESTINATIONS_CONTAINER) && self.load_destinations(document).await
        {
            report.rendered.push(ids::DESTINATIONS_CONTAINER);
        }

        if document.contains(ids::HOTELS_CONTAINER) && self.load_hotels(document).await {
            report.rendered.push(ids::HOTELS_CONTAINER);
        }

        debug!(forms = ?report.forms, rendered = ?report.rendered, "Page loaded");
        report
    }

    async fn load_destinations(&self, document: &mut Document) -> bool {
        let Some(cards) = viewmodel::load_destination_cards(self.api).await else {
            return false;
        };

        match render::destinations(&cards) {
            Ok(html) => document.set_inner_html(ids::DESTINATIONS_CONTAINER, html),
            Err(e) => {
                error!(error = %e, "Error loading destinations");
                false
            }
        }
    }

    async fn load_hotels(&self, document: &mut Document) -> bool {
        let Some(cards) = viewmodel::load_hotel_cards(self.api).await else {
            return false;
        };

        match render::hotels(&cards) {
            Ok(html) => document.set_inner_html(ids::HOTELS_CONTAINER, html),
            Err(e) => {
                error!(error = %e, "Error loading hotels");
                false
            }
        }
    }

    /// Submit whichever form `form_id` names. `None` if it is not on the page.
    pub async fn submit(&self, document: &Document, form_id: &str) -> Option<Outcome> {
        if !document.contains(form_id) {
            return None;
        }

        match form_id {
            ids::LOGIN_FORM => Some(self.submit_login(document).await),
            ids::REGISTER_FORM => Some(self.submit_register(document).await),
            _ => None,
        }
    }

    pub async fn submit_login(&self, document: &Document) -> Outcome {
        let form = LoginForm {
            username: document.input(ids::USERNAME),
            password: document.input(ids::PASSWORD),
        };
        viewmodel::submit_login(self.api, self.store, &form).await
    }

    pub async fn submit_register(&self, document: &Document) -> Outcome {
        let form = RegisterForm {
            username: document.input(ids::REG_USERNAME),
            password: document.input(ids::REG_PASSWORD),
            email: document.input(ids::REG_EMAIL),
        };
        viewmodel::submit_register(self.api, &form).await
    }

    pub fn check_auth_status(&self) -> AuthStatus {
        viewmodel::check_auth_status(self.store)
    }

    pub fn logout(&self) -> Outcome {
        viewmodel::logout(self.store)
    }

    /// The `bookHotel(id)` trigger on a hotel card
    pub async fn book_hotel(
        &self,
        hotel_id: HotelId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Outcome {
        info!(hotel_id, %check_in, %check_out, "Booking hotel");
        viewmodel::book_hotel(self.api, self.store, hotel_id, check_in, check_out).await
    }

    /// The signed-in user's bookings, or the outcome to apply instead
    pub async fn my_bookings(&self) -> Result<Vec<BookingRow>, Outcome> {
        viewmodel::my_bookings(self.api, self.store).await
    }
}
