//! Validate subcommand: load a price book and report the first problem.

use std::path::Path;

use anyhow::{Context, Result};

use detailquote_lib::{resolve_price_book, PriceBook};

/// Handle the validate subcommand.
///
/// When `path` is given it is checked directly; otherwise the price book is
/// resolved the same way the other subcommands resolve it.
pub fn handle_validate(pricebook: Option<&Path>, path: Option<&Path>) -> Result<()> {
    let book = match path {
        Some(path) => PriceBook::from_path(path)
            .with_context(|| format!("price book {} failed validation", path.display()))?,
        None => resolve_price_book(pricebook).context("failed to load price book")?,
    };

    let source = book
        .source_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "builtin".to_string());
    println!(
        "price book OK ({}): {} vehicles, {} extra services, {} add-ons",
        source,
        book.vehicle_types().len(),
        book.extra_services().len(),
        book.add_ons().len()
    );

    Ok(())
}
