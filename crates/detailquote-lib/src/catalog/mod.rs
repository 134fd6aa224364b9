//! Price book data types, loading, and validation.
//!
//! This module is organized into focused submodules:
//!
//! - [`model`] - Price book data structures (vehicle classes, extras, add-ons)
//! - [`load`] - Loading, normalization, and validation of price book JSON
//! - [`constants`] - Standing promotion and resolution constants
//!
//! # Example
//!
//! ```no_run
//! use detailquote_lib::catalog::{builtin, PriceBook};
//!
//! // Load a custom price book
//! let book = PriceBook::from_path(std::path::Path::new("pricebook.json")).unwrap();
//!
//! // Or use the embedded standard book
//! let standard = builtin();
//! assert!(standard.vehicle("suv").is_some());
//! ```

pub mod constants;
pub mod load;
pub mod model;

pub use constants::{PRICE_BOOK_ENV_VAR, STANDARD_PROMO_CODE, STANDARD_PROMO_RATE};
pub use load::{builtin, resolve_price_book, PriceBook};
pub use model::{
    AddOn, ExtraPackage, FixedPackage, LengthPackage, Promotion, Rate, VehicleRates,
};

/// Normalize a lookup key for case-insensitive matching.
pub(crate) fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}
