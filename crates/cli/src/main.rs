//! Saranya CLI - browse the catalog, manage theme preferences and place
//! simulated orders.
//!
//! # Usage
//!
//! ```bash
//! # List products, optionally by category
//! saranya products --category fruity
//!
//! # Wholesale quote for 12 tubs of Classic Vanilla
//! saranya quote 1 12
//!
//! # Theme preferences (persisted to SARANYA_STORAGE_PATH)
//! saranya theme show
//! saranya theme toggle
//! saranya theme color accent '#e67e22'
//! saranya theme reset
//!
//! # Sample notifications
//! saranya notifications
//!
//! # Store news, newest first, or one item in full
//! saranya news
//! saranya news --id 2
//!
//! # Place an order
//! saranya checkout -i 1:2 -i 4 --name "Priya" --email priya@example.in \
//!     --address "12 Marina Road" --city Chennai --pincode 600001
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use saranya_core::ThemeMode;
use saranya_storefront::config::{LogFormat, StorefrontConfig};
use saranya_storefront::error::Result;
use saranya_storefront::theme::ColorSlot;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::checkout::{CheckoutArgs, ItemSpec};

#[derive(Parser)]
#[command(name = "saranya")]
#[command(author, version, about = "Saranya Ice Creams storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Products {
        /// Only show this category (classic, fruity, premium, seasonal)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Quote a quantity of one product, including wholesale pricing
    Quote {
        /// Product id
        product: String,
        /// Number of units
        quantity: u32,
    },
    /// Show or change theme preferences
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// List notifications
    Notifications,
    /// Show store news, or one item in full
    News {
        /// News item id
        #[arg(long)]
        id: Option<String>,
    },
    /// Build a cart and place a simulated order
    Checkout {
        /// Cart line as `<product-id>[:<quantity>]`, repeatable
        #[arg(short, long = "item", required = true)]
        items: Vec<ItemSpec>,

        #[command(flatten)]
        details: CheckoutArgs,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the active mode, palette and derived style variables
    Show,
    /// Switch to a mode (`light`, `dark`)
    Set {
        #[arg(value_parser = parse_mode)]
        mode: ThemeMode,
    },
    /// Flip between light and dark
    Toggle,
    /// Overwrite one palette slot (`primary`, `secondary`, `accent`, `background`)
    Color {
        #[arg(value_parser = parse_slot)]
        slot: ColorSlot,
        /// Hex colour, e.g. `#d4a533`
        value: String,
    },
    /// Restore the default palette for the current mode
    Reset,
}

fn parse_mode(s: &str) -> std::result::Result<ThemeMode, String> {
    s.parse()
}

fn parse_slot(s: &str) -> std::result::Result<ColorSlot, String> {
    s.parse()
}

/// Log filter used when `RUST_LOG` is not set. Command output is logged under
/// the binary's own target, so it must be enabled here.
const DEFAULT_LOG_FILTER: &str = "saranya=info,saranya_storefront=info";

fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().without_time())
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Pretty);
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    if let Err(e) = run(cli, &config).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &StorefrontConfig) -> Result<()> {
    match cli.command {
        Commands::Products { category } => commands::products::list(category.as_deref())?,
        Commands::Quote { product, quantity } => commands::products::quote(&product, quantity)?,
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::theme::show(config),
            ThemeAction::Set { mode } => commands::theme::set(config, mode),
            ThemeAction::Toggle => commands::theme::toggle(config),
            ThemeAction::Color { slot, value } => commands::theme::color(config, slot, &value),
            ThemeAction::Reset => commands::theme::reset(config),
        },
        Commands::Notifications => commands::notifications::list(),
        Commands::News { id } => commands::news::show(id.as_deref())?,
        Commands::Checkout { items, details } => {
            commands::checkout::place_order(config, &items, details).await?;
        }
    }
    Ok(())
}
