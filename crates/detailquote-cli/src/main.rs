//! Command-line interface for the DetailQuote price book and quote engine.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Price detailing packages, extras, and add-ons from a price book"
)]
struct Cli {
    /// Path to a price book JSON file (falls back to DETAILQUOTE_PRICEBOOK,
    /// then the builtin standard price book).
    #[arg(long, global = true)]
    pricebook: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a selection and print an itemized quote.
    Quote {
        /// Vehicle type key, e.g. suv, boat, jetski.
        #[arg(long)]
        vehicle: String,

        /// Package path; fixed-price vehicles use "<category>-<package>",
        /// e.g. exterior-basic.
        #[arg(long)]
        package: String,

        /// Vehicle length in feet, used by per-length packages.
        #[arg(long)]
        length_ft: Option<f64>,

        /// Extra-service code, e.g. ceramiccoating. When set, the extra is
        /// priced instead of the vehicle package.
        #[arg(long)]
        extra: Option<String>,

        /// Add-on id to include; repeat the flag for multiple add-ons.
        #[arg(long = "add-on", value_name = "ID")]
        add_ons: Vec<String>,

        /// Promotion code to apply to the subtotal.
        #[arg(long)]
        promo: Option<String>,

        /// Emit the quote as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the vehicles, packages, extra services, and add-ons on offer.
    Packages,

    /// Check a price book file and report the first problem found.
    Validate {
        /// Price book JSON file to check; defaults to the resolved price book.
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Quote {
            vehicle,
            package,
            length_ft,
            extra,
            add_ons,
            promo,
            json,
        } => {
            let args = commands::quote::QuoteCommandArgs {
                vehicle,
                package,
                length_ft,
                extra,
                add_ons,
                promo,
                json,
            };
            commands::quote::handle_quote(cli.pricebook.as_deref(), &args)
        }
        Command::Packages => commands::packages::handle_packages(cli.pricebook.as_deref()),
        Command::Validate { path } => {
            commands::validate::handle_validate(cli.pricebook.as_deref(), path.as_deref())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
