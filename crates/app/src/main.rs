//! Tripdesk - travel booking client
//!
//! Command-line front end for the travel backend: sign in, browse the
//! catalog, book hotels, and render the site's list containers.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tripdesk_core::{sample_destinations, sample_hotels, Config, NewDestination, NewHotel};
use tripdesk_net::TravelApi;

mod page;
mod render;
mod state;
mod viewmodel;

use page::{ids, Document, Notice, Outcome};
use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "tripdesk", version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to the per-user config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overrides config and environment
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        email: String,
    },

    /// Log in and remember the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// List destinations
    Destinations {
        #[arg(long, help = "Print the rendered container markup")]
        html: bool,
    },

    /// List hotels
    Hotels {
        #[arg(long, help = "Print the rendered container markup")]
        html: bool,
    },

    /// Book a hotel for the signed-in user
    Book {
        #[arg(long)]
        hotel: i64,
        #[arg(long, help = "Check-in date, YYYY-MM-DD")]
        check_in: NaiveDate,
        #[arg(long, help = "Check-out date, YYYY-MM-DD")]
        check_out: NaiveDate,
    },

    /// List the signed-in user's bookings
    Bookings,

    /// Load a page with the given containers and print their content
    Page {
        #[arg(long = "container", default_values_t = vec![
            ids::DESTINATIONS_CONTAINER.to_string(),
            ids::HOTELS_CONTAINER.to_string(),
        ])]
        containers: Vec<String>,
    },

    /// Add a destination to the catalog
    AddDestination {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        price: f64,
        #[arg(long, default_value = "")]
        image_url: String,
    },

    /// Add a hotel to the catalog
    AddHotel {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        price_per_night: f64,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        image_url: String,
    },

    /// Load the sample catalog into the backend
    Seed,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if runtime.block_on(run(&state, cli.command)) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Run one command. Returns false when it ended in an alert.
async fn run(state: &AppState, command: Command) -> bool {
    let controller = state.controller();
    tracing::debug!(base_url = %state.config.api.base_url, ?command, "Running command");

    match command {
        Command::Register {
            username,
            password,
            email,
        } => {
            let document = Document::register_page(&username, &password, &email);
            report(
                controller
                    .submit(&document, ids::REGISTER_FORM)
                    .await
                    .unwrap_or_default(),
            )
        }
        Command::Login { username, password } => {
            let document = Document::login_page(&username, &password);
            report(
                controller
                    .submit(&document, ids::LOGIN_FORM)
                    .await
                    .unwrap_or_default(),
            )
        }
        Command::Logout => report(controller.logout()),
        Command::Whoami => {
            let status = controller.check_auth_status();
            match status.session() {
                Some(session) => {
                    println!("{} (id {})", session.username, session.id);
                    true
                }
                None => report(Outcome {
                    notice: None,
                    navigate: status.redirect(),
                }),
            }
        }
        Command::Destinations { html } => {
            let Some(cards) = viewmodel::load_destination_cards(&state.client).await else {
                return report(Outcome::alert("Failed to fetch destinations"));
            };
            if html {
                return print_markup(render::destinations(&cards));
            }
            for card in &cards {
                println!(
                    "{:>4}  {:<24} {:>10}  {}",
                    card.id, card.name, card.price_label, card.description
                );
            }
            true
        }
        Command::Hotels { html } => {
            let Some(cards) = viewmodel::load_hotel_cards(&state.client).await else {
                return report(Outcome::alert("Failed to fetch hotels"));
            };
            if html {
                return print_markup(render::hotels(&cards));
            }
            for card in &cards {
                println!(
                    "{:>4}  {:<24} {:<12} {:>20}",
                    card.id, card.name, card.location, card.price_label
                );
            }
            true
        }
        Command::Book {
            hotel,
            check_in,
            check_out,
        } => report(controller.book_hotel(hotel, check_in, check_out).await),
        Command::Bookings => match controller.my_bookings().await {
            Ok(rows) if rows.is_empty() => {
                println!("No bookings");
                true
            }
            Ok(rows) => {
                for row in rows {
                    println!(
                        "{:>4}  {:<36} {:<26} {:>10}",
                        row.id, row.hotel, row.dates, row.total_label
                    );
                }
                true
            }
            Err(outcome) => report(outcome),
        },
        Command::Page { containers } => {
            let mut document = containers
                .iter()
                .fold(Document::new(), |doc, id| doc.with_element(id));
            let load = controller.load(&mut document).await;

            for id in &containers {
                match document.inner_html(id) {
                    Some(html) => println!("<!-- {} -->\n{}", id, html.trim()),
                    None => println!("<!-- {} (not rendered) -->", id),
                }
            }
            load.rendered.len() == containers.len()
        }
        Command::AddDestination {
            name,
            description,
            price,
            image_url,
        } => {
            let destination = NewDestination {
                name,
                description,
                price,
                image_url,
            };
            report_catalog(state.client.add_destination(&destination).await)
        }
        Command::AddHotel {
            name,
            location,
            price_per_night,
            description,
            image_url,
        } => {
            let hotel = NewHotel {
                name,
                location,
                price_per_night,
                description,
                image_url,
            };
            report_catalog(state.client.add_hotel(&hotel).await)
        }
        Command::Seed => {
            let mut ok = true;
            for destination in sample_destinations() {
                ok &= report_catalog(state.client.add_destination(&destination).await);
            }
            for hotel in sample_hotels() {
                ok &= report_catalog(state.client.add_hotel(&hotel).await);
            }
            ok
        }
    }
}

/// Print an outcome the way the page would surface it
fn report(outcome: Outcome) -> bool {
    let ok = !matches!(outcome.notice, Some(Notice::Alert(_)));

    match &outcome.notice {
        Some(Notice::Info(msg)) => println!("{}", msg),
        Some(Notice::Alert(msg)) => eprintln!("Error: {}", msg),
        None => {}
    }
    if let Some(page) = outcome.navigate {
        println!("-> {}", page);
    }
    ok
}

fn report_catalog(result: tripdesk_net::Result<tripdesk_core::CatalogResponse>) -> bool {
    match result {
        Ok(response) => report(Outcome::info(
            response.message.unwrap_or_else(|| "Added".to_string()),
        )),
        Err(e) => report(Outcome::alert(e.to_string())),
    }
}

fn print_markup(result: tera::Result<String>) -> bool {
    match result {
        Ok(html) => {
            println!("{}", html.trim());
            true
        }
        Err(e) => report(Outcome::alert(format!("Failed to render: {}", e))),
    }
}
