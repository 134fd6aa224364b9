//! DetailQuote library entry points.
//!
//! This crate loads and validates a detailing price book, resolves prices
//! for caller-supplied selections, and composes itemized quotes. Higher
//! level consumers (CLI, booking UI, notification rendering) should only
//! depend on the functions exported here instead of reimplementing
//! behavior.
//!
//! Price resolution is permissive by contract: a selection that does not
//! match the book prices at zero. Price book data, by contrast, is strict:
//! malformed books are rejected at load time.

#![deny(warnings)]

pub mod catalog;
pub mod error;
pub mod output;
pub mod pricing;

pub use catalog::{
    builtin, resolve_price_book, AddOn, ExtraPackage, FixedPackage, LengthPackage, PriceBook,
    Promotion, Rate, VehicleRates, PRICE_BOOK_ENV_VAR, STANDARD_PROMO_CODE, STANDARD_PROMO_RATE,
};
pub use error::{Error, Result};
pub use output::{display_label, format_usd, render_quote_text};
pub use pricing::{
    apply_promotion, apply_promotion_at_rate, build_quote, package_price, selected_add_ons,
    sum_add_ons, Quote, QuoteLine, QuoteLineKind, QuoteRequest, Selection, NO_EXTRA_SENTINEL,
};
