//! Catalog-related constants used across loading and quote calculations.

/// Code for the standing first-visit promotion.
pub const STANDARD_PROMO_CODE: &str = "discount15";

/// Discount rate applied when a valid promotion code is supplied.
///
/// Expressed as a fraction of the subtotal. The standing promotion is a
/// flat 15% off the combined package and add-on subtotal.
pub const STANDARD_PROMO_RATE: f64 = 0.15;

/// Environment variable consulted when no explicit price book path is given.
pub const PRICE_BOOK_ENV_VAR: &str = "DETAILQUOTE_PRICEBOOK";
