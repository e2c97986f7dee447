//! IDOS CLI - Drive the cart from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Add two medium shirts
//! idos cart add -p P1 -n Shirt -s M --price "S/ 49.90" -q 2
//!
//! # Change or remove lines
//! idos cart update P1-M 3
//! idos cart remove P1-M
//!
//! # Show the cart, or the rendered fragment
//! idos cart show
//! idos cart show --html
//!
//! # Build the WhatsApp checkout link
//! idos cart checkout
//!
//! # Decode an identity token (unverified, debugging only)
//! idos token decode eyJhbGciOi...
//!
//! # Navbar style for a scroll offset
//! idos navbar 120
//! ```
//!
//! The cart is persisted in the file named by `IDOS_STORAGE_PATH`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use idos_storefront::StorefrontConfig;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "idos")]
#[command(author, version, about = "IDOS cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Identity token debugging
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
    /// Print the navbar style for a scroll offset
    Navbar {
        /// Vertical scroll offset in pixels
        offset: f64,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product variant to the cart
    Add {
        /// Product ID
        #[arg(short, long)]
        product: String,

        /// Product display name
        #[arg(short, long)]
        name: String,

        /// Selected size
        #[arg(short, long)]
        size: Option<String>,

        /// Unit price, e.g. "S/ 49.90" or "49.90"
        #[arg(long)]
        price: Option<String>,

        /// Quantity to add
        #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
        quantity: String,
    },
    /// Set the quantity of a line (0 or less removes it)
    Update {
        /// Line ID, e.g. P1-M
        id: String,

        /// New quantity
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Remove a line
    Remove {
        /// Line ID, e.g. P1-M
        id: String,
    },
    /// Show the cart
    Show {
        /// Print the rendered HTML fragments instead of text
        #[arg(long)]
        html: bool,
    },
    /// Build the checkout hand-off link
    Checkout,
}

#[derive(Subcommand)]
enum TokenAction {
    /// Decode the claims of a compact token without verifying it
    Decode {
        /// The token (header.payload.signature)
        token: String,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR => sentry_tracing::EventFilter::Event,
        tracing::Level::WARN | tracing::Level::INFO => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn main() {
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            commands::output::error(&format!("Configuration error: {e}"));
            std::process::exit(2);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Logs go to stderr so command output stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "idos_storefront=warn,idos=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli, config) {
        commands::output::error(&e.user_message());
        tracing::debug!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: StorefrontConfig) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Cart { action } => {
            let mut storefront = commands::cart::open(config);
            match action {
                CartAction::Add {
                    product,
                    name,
                    size,
                    price,
                    quantity,
                } => commands::cart::add(&mut storefront, product, name, size, price, quantity)?,
                CartAction::Update { id, quantity } => {
                    commands::cart::update(&mut storefront, &id, quantity)?;
                }
                CartAction::Remove { id } => commands::cart::remove(&mut storefront, &id)?,
                CartAction::Show { html } => commands::cart::show(&storefront, html)?,
                CartAction::Checkout => commands::cart::checkout(&mut storefront)?,
            }
        }
        Commands::Token { action } => match action {
            TokenAction::Decode { token } => commands::token::decode(&token)?,
        },
        Commands::Navbar { offset } => {
            commands::navbar::style(offset, config.navbar_scroll_threshold);
        }
    }
    Ok(())
}
