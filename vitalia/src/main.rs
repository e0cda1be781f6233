use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use uuid::Uuid;

use vitalia::catalog::{Catalog, ProgramFilter};
use vitalia::commands;
use vitalia::logging;
use vitalia::settings::Settings;
use vitalia_api::Client;
use vitalia_auth::{FileTokenStore, TokenStore};

#[derive(Parser)]
#[command(name = "vitalia")]
#[command(about = "Explore and book Vitalia wellness programs from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the program catalog
    Programs {
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        city: Option<String>,
        /// longevity, detox, medical-spa, fitness, mental-wellness, nutrition or recovery
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a single program by id or slug
    Program { program: String },
    /// List destinations with bookable programs
    Destinations,
    /// Sign in with email and password, or --otp for a one-time code
    Login {
        email: String,
        #[arg(long)]
        otp: bool,
    },
    /// Create an account
    Register { name: String, email: String },
    /// Sign out and clear the stored session
    Logout,
    /// Show the signed-in profile
    Whoami,
    /// Role-based overview of your account
    Dashboard,
    /// List your bookings
    Bookings,
    /// Book a program by id or slug
    Book {
        program: String,
        /// Start date, YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,
        #[arg(long, default_value_t = 1)]
        guests: u32,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Cancel a booking
    Cancel { id: Uuid },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging()?;

    let settings = Settings::new()?;
    settings.validate().map_err(anyhow::Error::msg)?;

    let client = match &settings.api.base_url {
        Some(base_url) => {
            let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new()?);
            let client = Client::new(base_url.clone(), tokens).on_session_expired(|| {
                eprintln!("Your session has expired. Run `vitalia login <email>` to sign in again.");
            });
            Some(Arc::new(client))
        }
        None => None,
    };
    let catalog = Catalog::new(client.clone());

    match cli.command {
        Command::Programs {
            country,
            city,
            category,
            search,
        } => {
            let category = category.map(|c| commands::parse_category(&c)).transpose()?;
            let filter = ProgramFilter {
                country,
                city,
                category,
                search,
            };
            commands::programs(&catalog, filter).await
        }
        Command::Program { program } => commands::program(&catalog, &program).await,
        Command::Destinations => commands::destinations(&catalog).await,
        Command::Login { email, otp } => commands::login(backend(&client)?, &email, otp).await,
        Command::Register { name, email } => {
            commands::register(backend(&client)?, &name, &email).await
        }
        Command::Logout => commands::logout(backend(&client)?).await,
        Command::Whoami => commands::whoami(backend(&client)?).await,
        Command::Dashboard => commands::dashboard(backend(&client)?).await,
        Command::Bookings => commands::bookings(backend(&client)?).await,
        Command::Book {
            program,
            start,
            guests,
            notes,
        } => commands::book(backend(&client)?, &program, start, guests, notes).await,
        Command::Cancel { id } => commands::cancel(backend(&client)?, id).await,
    }
}

/// Account commands need a real backend; only the catalog has a sample-data
/// fallback.
fn backend(client: &Option<Arc<Client>>) -> Result<&Client> {
    client.as_deref().ok_or_else(|| {
        anyhow!("no API backend configured; set api.base_url in config.toml or VITALIA__API__BASE_URL")
    })
}
