//! Quote subcommand: price a selection against the resolved price book.

use std::path::Path;

use anyhow::{Context, Result};

use detailquote_lib::{
    build_quote, render_quote_text, resolve_price_book, QuoteRequest, Selection,
};

/// Arguments collected from the command line for the quote subcommand.
#[derive(Debug, Clone)]
pub struct QuoteCommandArgs {
    pub vehicle: String,
    pub package: String,
    pub length_ft: Option<f64>,
    pub extra: Option<String>,
    pub add_ons: Vec<String>,
    pub promo: Option<String>,
    pub json: bool,
}

impl QuoteCommandArgs {
    fn to_request(&self) -> QuoteRequest {
        let mut selection = Selection::new(self.vehicle.clone(), self.package.clone());
        selection.vehicle_length_ft = self.length_ft;
        selection.extra_service = self.extra.clone();

        let mut request = QuoteRequest::new(selection).with_add_ons(self.add_ons.clone());
        if let Some(promo) = &self.promo {
            request = request.with_promo_code(promo.clone());
        }
        request
    }
}

/// Handle the quote subcommand.
pub fn handle_quote(pricebook: Option<&Path>, args: &QuoteCommandArgs) -> Result<()> {
    let book = resolve_price_book(pricebook).context("failed to load price book")?;
    let quote = build_quote(&book, &args.to_request());

    if args.json {
        let json = serde_json::to_string_pretty(&quote).context("failed to serialize quote")?;
        println!("{json}");
    } else {
        print!("{}", render_quote_text(&quote));
    }

    Ok(())
}
