//! Quote composition: an itemized, serializable total for a request.
//!
//! A [`Quote`] is what the booking UI and notification emails consume: the
//! resolved base line, one line per selected add-on, and the subtotal,
//! discount, and total. Building a quote never fails; an unresolvable
//! selection simply produces no base line.

use serde::Serialize;

use crate::catalog::{normalize_key, PriceBook, Rate, VehicleRates};
use crate::output::{display_label, format_usd};

use super::engine::{package_price, selected_add_ons};
use super::selection::{split_package_path, Selection};

/// Classifies a line within a quote.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuoteLineKind {
    Package,
    ExtraService,
    AddOn,
}

impl QuoteLineKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            QuoteLineKind::Package => "Package",
            QuoteLineKind::ExtraService => "Extra service",
            QuoteLineKind::AddOn => "Add-on",
        }
    }
}

/// A single priced line within a quote.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuoteLine {
    pub kind: QuoteLineKind,
    pub label: String,
    /// Extra context for the amount, e.g. the per-foot breakdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub amount: f64,
}

/// Everything needed to produce a quote.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub selection: Selection,
    /// Ids of selected add-ons; unknown ids are ignored.
    pub add_on_ids: Vec<String>,
    /// Customer-entered promotion code, if any.
    pub promo_code: Option<String>,
}

impl QuoteRequest {
    /// Create a request for a bare selection with no add-ons or promo code.
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            add_on_ids: Vec::new(),
            promo_code: None,
        }
    }

    /// Attach selected add-on ids.
    pub fn with_add_ons(mut self, add_on_ids: Vec<String>) -> Self {
        self.add_on_ids = add_on_ids;
        self
    }

    /// Attach a customer-entered promotion code.
    pub fn with_promo_code(mut self, code: impl Into<String>) -> Self {
        self.promo_code = Some(code.into());
        self
    }
}

/// Structured representation of a priced request that higher-level
/// consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Quote {
    pub vehicle_type: String,
    pub package_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_length_ft: Option<f64>,
    pub lines: Vec<QuoteLine>,
    pub subtotal: f64,
    pub promo_applied: bool,
    pub discount: f64,
    pub total: f64,
}

/// Build an itemized quote for a request against a price book.
///
/// The base amount comes from [`package_price`], add-on lines follow the
/// catalog's add-on order, and the promotion applies to the combined
/// subtotal when the supplied code matches the book's promotion.
pub fn build_quote(book: &PriceBook, request: &QuoteRequest) -> Quote {
    let selection = &request.selection;
    let mut lines = Vec::new();

    let base = package_price(book, selection);
    if base > 0.0 {
        lines.push(base_line(book, selection, base));
    }

    let mut add_on_total = 0.0;
    for add_on in selected_add_ons(&request.add_on_ids, book.add_ons()) {
        add_on_total += add_on.price;
        lines.push(QuoteLine {
            kind: QuoteLineKind::AddOn,
            label: add_on.name.clone(),
            detail: None,
            amount: add_on.price,
        });
    }

    let subtotal = base + add_on_total;
    let promo_applied = request
        .promo_code
        .as_deref()
        .map(|code| book.promotion().matches(code))
        .unwrap_or(false);
    let total = if promo_applied {
        book.promotion().apply(subtotal)
    } else {
        subtotal
    };

    Quote {
        vehicle_type: normalize_key(&selection.vehicle_type),
        package_path: normalize_key(&selection.package_path),
        vehicle_length_ft: selection.effective_length_ft(),
        lines,
        subtotal,
        promo_applied,
        discount: subtotal - total,
        total,
    }
}

/// Describe the resolved base entry for display.
///
/// Mirrors the lookup order of [`package_price`]; only called for a
/// selection that already resolved to a nonzero amount.
fn base_line(book: &PriceBook, selection: &Selection, amount: f64) -> QuoteLine {
    let length_ft = selection.effective_length_ft();
    let package_key = normalize_key(&selection.package_path);

    if let Some(code) = selection.active_extra_service() {
        if let Some(package) = book.extra_package(&code, &package_key) {
            return QuoteLine {
                kind: QuoteLineKind::ExtraService,
                label: package.name.clone(),
                detail: per_foot_detail(package.rate, length_ft),
                amount,
            };
        }
    }

    if let Some(rates) = book.vehicle(&selection.vehicle_type) {
        match rates {
            VehicleRates::Fixed { categories } => {
                if let Some((category, package)) = split_package_path(&selection.package_path) {
                    if let Some(fixed) =
                        categories.get(&category).and_then(|packages| packages.get(&package))
                    {
                        return QuoteLine {
                            kind: QuoteLineKind::Package,
                            label: fixed.name.clone(),
                            detail: None,
                            amount,
                        };
                    }
                }
            }
            VehicleRates::PerLength { packages } => {
                if let Some(length) = packages.get(&package_key) {
                    return QuoteLine {
                        kind: QuoteLineKind::Package,
                        label: length.name.clone(),
                        detail: per_foot_detail(Rate::PerFoot(length.price_per_ft), length_ft),
                        amount,
                    };
                }
            }
            VehicleRates::Single { packages } => {
                if let Some(fixed) = packages.get(&package_key) {
                    return QuoteLine {
                        kind: QuoteLineKind::Package,
                        label: fixed.name.clone(),
                        detail: None,
                        amount,
                    };
                }
            }
        }
    }

    // Unreachable for a nonzero amount, but degrade to the raw path label
    // rather than panicking.
    QuoteLine {
        kind: QuoteLineKind::Package,
        label: display_label(&selection.package_path),
        detail: None,
        amount,
    }
}

fn per_foot_detail(rate: Rate, length_ft: Option<f64>) -> Option<String> {
    match (rate, length_ft) {
        (Rate::PerFoot(rate), Some(length)) => {
            Some(format!("{}/ft x {} ft", format_usd(rate), length))
        }
        _ => None,
    }
}
