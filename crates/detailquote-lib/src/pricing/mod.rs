//! Price resolution and quote composition.
//!
//! This module is organized into focused submodules:
//!
//! - [`selection`] - The caller-supplied selection and its lookup grammar
//! - [`engine`] - Pure price resolution operations
//! - [`quote`] - Itemized quote composition over the engine
//!
//! # Example
//!
//! ```
//! use detailquote_lib::catalog::builtin;
//! use detailquote_lib::pricing::{build_quote, QuoteRequest, Selection};
//!
//! let selection = Selection::new("suv", "exterior-basic");
//! let request = QuoteRequest::new(selection).with_promo_code("discount15");
//! let quote = build_quote(builtin(), &request);
//! assert!(quote.promo_applied);
//! assert_eq!(quote.subtotal, 160.0);
//! ```

pub mod engine;
pub mod quote;
pub mod selection;

pub use engine::{
    apply_promotion, apply_promotion_at_rate, package_price, selected_add_ons, sum_add_ons,
};
pub use quote::{build_quote, Quote, QuoteLine, QuoteLineKind, QuoteRequest};
pub use selection::{split_package_path, Selection, NO_EXTRA_SENTINEL};
