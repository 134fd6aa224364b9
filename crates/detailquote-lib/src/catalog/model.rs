//! Price book data model.
//!
//! These types describe the static pricing reference data: vehicle pricing
//! classes, extra-service overrides, flat-price add-ons, and the standing
//! promotion. A price book is immutable once loaded; every request-time
//! lookup is read-only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::{STANDARD_PROMO_CODE, STANDARD_PROMO_RATE};
use super::normalize_key;

/// A package priced at a fixed dollar amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedPackage {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
}

/// A package priced per foot of vehicle length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthPackage {
    pub name: String,
    pub price_per_ft: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
}

/// Pricing class for a single vehicle type.
///
/// Vehicle classes price in different units (fixed package price, per-foot
/// rate, or a single flat set of packages), so each vehicle entry carries an
/// explicit `pricing` tag rather than leaving callers to infer the shape
/// from nesting depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pricing", rename_all = "snake_case")]
pub enum VehicleRates {
    /// Fixed prices keyed by service category, then package key.
    Fixed {
        categories: BTreeMap<String, BTreeMap<String, FixedPackage>>,
    },
    /// Per-foot rates keyed by package key; the total scales with length.
    PerLength {
        packages: BTreeMap<String, LengthPackage>,
    },
    /// Fixed packages keyed directly by package key, with no category level.
    Single {
        packages: BTreeMap<String, FixedPackage>,
    },
}

impl VehicleRates {
    /// Human-readable label for the pricing class, used in listings.
    pub fn class_label(&self) -> &'static str {
        match self {
            VehicleRates::Fixed { .. } => "fixed",
            VehicleRates::PerLength { .. } => "per-length",
            VehicleRates::Single { .. } => "single",
        }
    }

    /// Total number of packages across all categories.
    pub fn package_count(&self) -> usize {
        match self {
            VehicleRates::Fixed { categories } => categories.values().map(BTreeMap::len).sum(),
            VehicleRates::PerLength { packages } => packages.len(),
            VehicleRates::Single { packages } => packages.len(),
        }
    }
}

/// Billing basis for an extra-service package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rate {
    /// Fixed dollar amount, independent of vehicle length.
    Fixed(f64),
    /// Dollar amount per foot of vehicle length.
    PerFoot(f64),
}

impl Rate {
    /// Resolve the dollar amount for an optional vehicle length.
    ///
    /// Fixed rates ignore length entirely. A per-foot rate with no usable
    /// length resolves to zero (permissive lookup policy, see
    /// `pricing::package_price`).
    pub fn amount_for(&self, length_ft: Option<f64>) -> f64 {
        match *self {
            Rate::Fixed(price) => price,
            Rate::PerFoot(rate) => rate * length_ft.unwrap_or(0.0),
        }
    }
}

/// An extra-service package (e.g. ceramic coating) that replaces standard
/// vehicle pricing when selected.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraPackage {
    pub name: String,
    pub rate: Rate,
    pub includes: Vec<String>,
}

/// A flat-price add-on summed on top of the base package price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// A promotion code and the discount rate it unlocks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Promotion {
    /// Code customers enter; compared case-insensitively after trimming.
    #[serde(default = "default_promo_code")]
    pub code: String,
    /// Discount as a fraction of the subtotal, in `[0, 1)`.
    #[serde(default = "default_promo_rate")]
    pub rate: f64,
}

fn default_promo_code() -> String {
    STANDARD_PROMO_CODE.to_string()
}

fn default_promo_rate() -> f64 {
    STANDARD_PROMO_RATE
}

impl Default for Promotion {
    fn default() -> Self {
        Self {
            code: default_promo_code(),
            rate: default_promo_rate(),
        }
    }
}

impl Promotion {
    /// Validate the promotion configuration.
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(Error::PriceBookValidation {
                message: "promotion code must not be empty".to_string(),
            });
        }

        if !self.rate.is_finite() || !(0.0..1.0).contains(&self.rate) {
            return Err(Error::PriceBookValidation {
                message: format!(
                    "promotion rate must be a finite fraction in [0, 1), got {}",
                    self.rate
                ),
            });
        }

        Ok(())
    }

    /// Check whether a customer-entered code matches this promotion.
    pub fn matches(&self, code: &str) -> bool {
        normalize_key(code) == normalize_key(&self.code)
    }

    /// Apply the discount to a subtotal.
    pub fn apply(&self, subtotal: f64) -> f64 {
        subtotal * (1.0 - self.rate)
    }
}
