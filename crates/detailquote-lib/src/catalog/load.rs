//! Price book loading and management.
//!
//! This module handles loading price book data from JSON files and provides
//! the normalized, validated [`PriceBook`] that every pricing operation
//! consumes. Malformed books fail here, at load time, so that request-time
//! lookups never have to distinguish "bad data" from "no price".

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

use super::constants::PRICE_BOOK_ENV_VAR;
use super::model::{
    AddOn, ExtraPackage, FixedPackage, LengthPackage, Promotion, Rate, VehicleRates,
};
use super::normalize_key;

/// Raw JSON schema for a price book, prior to normalization.
#[derive(Debug, Deserialize)]
struct RawPriceBook {
    #[serde(default)]
    vehicles: BTreeMap<String, VehicleRates>,
    #[serde(default)]
    extras: BTreeMap<String, BTreeMap<String, RawExtraPackage>>,
    #[serde(default)]
    add_ons: Vec<AddOn>,
    #[serde(default)]
    promotion: Option<Promotion>,
}

/// Raw extra-service package; the billing basis is resolved during load.
#[derive(Debug, Deserialize)]
struct RawExtraPackage {
    name: String,
    price: Option<f64>,
    price_per_ft: Option<f64>,
    #[serde(default)]
    includes: Vec<String>,
}

/// Validated pricing reference data for all vehicle types, extra services,
/// add-ons, and the standing promotion.
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    vehicles: BTreeMap<String, VehicleRates>,
    extras: BTreeMap<String, BTreeMap<String, ExtraPackage>>,
    add_ons: Vec<AddOn>,
    promotion: Promotion,
    source: Option<PathBuf>,
}

impl PriceBook {
    /// Load a price book from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading price book");
        let file = fs::File::open(path)?;
        let mut book = Self::from_reader(file)?;
        book.source = Some(path.to_path_buf());
        Ok(book)
    }

    /// Load a price book from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawPriceBook = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Load a price book from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawPriceBook = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawPriceBook) -> Result<Self> {
        let mut vehicles = BTreeMap::new();
        for (vehicle, rates) in raw.vehicles {
            let vehicle_key = require_key(&vehicle, "vehicle type")?;
            let rates = normalize_rates(&vehicle_key, rates)?;
            if vehicles.insert(vehicle_key.clone(), rates).is_some() {
                return Err(duplicate_key(&vehicle_key, "vehicle type"));
            }
        }

        let mut extras = BTreeMap::new();
        for (code, packages) in raw.extras {
            let code_key = require_key(&code, "extra service code")?;
            let mut packages_out = BTreeMap::new();
            for (package, raw_package) in packages {
                let package_key = require_key(&package, "extra service package key")?;
                let context = format!("extra '{}' package '{}'", code_key, package_key);
                let package = convert_extra_package(raw_package, &context)?;
                if packages_out.insert(package_key.clone(), package).is_some() {
                    return Err(duplicate_key(&package_key, "extra service package key"));
                }
            }
            if extras.insert(code_key.clone(), packages_out).is_some() {
                return Err(duplicate_key(&code_key, "extra service code"));
            }
        }

        let mut add_ons = Vec::with_capacity(raw.add_ons.len());
        let mut seen_ids = BTreeSet::new();
        for add_on in raw.add_ons {
            let id = require_key(&add_on.id, "add-on id")?;
            if !seen_ids.insert(id.clone()) {
                return Err(Error::DuplicateAddOnId { id });
            }
            if add_on.name.trim().is_empty() {
                return Err(Error::PriceBookValidation {
                    message: format!("add-on '{}': name must not be empty", id),
                });
            }
            check_amount(add_on.price, &format!("add-on '{}'", id), "price")?;
            add_ons.push(AddOn { id, ..add_on });
        }

        let promotion = raw.promotion.unwrap_or_default();
        promotion.validate()?;

        Ok(Self {
            vehicles,
            extras,
            add_ons,
            promotion,
            source: None,
        })
    }

    /// Get the pricing class for a vehicle type (case-insensitive).
    pub fn vehicle(&self, vehicle_type: &str) -> Option<&VehicleRates> {
        self.vehicles.get(&normalize_key(vehicle_type))
    }

    /// Get a sorted list of all vehicle type keys.
    pub fn vehicle_types(&self) -> Vec<&str> {
        self.vehicles.keys().map(String::as_str).collect()
    }

    /// All vehicle entries in key order.
    pub fn vehicles(&self) -> &BTreeMap<String, VehicleRates> {
        &self.vehicles
    }

    /// Get an extra-service package (case-insensitive on both keys).
    pub fn extra_package(&self, code: &str, package: &str) -> Option<&ExtraPackage> {
        self.extras
            .get(&normalize_key(code))
            .and_then(|packages| packages.get(&normalize_key(package)))
    }

    /// All extra-service entries in code order.
    pub fn extra_services(&self) -> &BTreeMap<String, BTreeMap<String, ExtraPackage>> {
        &self.extras
    }

    /// The add-on list, in catalog order.
    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// The standing promotion for this price book.
    pub fn promotion(&self) -> &Promotion {
        &self.promotion
    }

    /// Get the source path if the book was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn normalize_rates(vehicle: &str, rates: VehicleRates) -> Result<VehicleRates> {
    match rates {
        VehicleRates::Fixed { categories } => {
            let mut categories_out = BTreeMap::new();
            for (category, packages) in categories {
                let category_key = require_key(&category, "service category")?;
                let mut packages_out = BTreeMap::new();
                for (package, fixed) in packages {
                    let package_key = require_key(&package, "package key")?;
                    let context = format!(
                        "vehicle '{}' category '{}' package '{}'",
                        vehicle, category_key, package_key
                    );
                    validate_fixed_package(&fixed, &context)?;
                    if packages_out.insert(package_key.clone(), fixed).is_some() {
                        return Err(duplicate_key(&package_key, "package key"));
                    }
                }
                if categories_out.insert(category_key.clone(), packages_out).is_some() {
                    return Err(duplicate_key(&category_key, "service category"));
                }
            }
            Ok(VehicleRates::Fixed {
                categories: categories_out,
            })
        }
        VehicleRates::PerLength { packages } => {
            let mut packages_out = BTreeMap::new();
            for (package, length) in packages {
                let package_key = require_key(&package, "package key")?;
                let context = format!("vehicle '{}' package '{}'", vehicle, package_key);
                validate_length_package(&length, &context)?;
                if packages_out.insert(package_key.clone(), length).is_some() {
                    return Err(duplicate_key(&package_key, "package key"));
                }
            }
            Ok(VehicleRates::PerLength {
                packages: packages_out,
            })
        }
        VehicleRates::Single { packages } => {
            let mut packages_out = BTreeMap::new();
            for (package, fixed) in packages {
                let package_key = require_key(&package, "package key")?;
                let context = format!("vehicle '{}' package '{}'", vehicle, package_key);
                validate_fixed_package(&fixed, &context)?;
                if packages_out.insert(package_key.clone(), fixed).is_some() {
                    return Err(duplicate_key(&package_key, "package key"));
                }
            }
            Ok(VehicleRates::Single {
                packages: packages_out,
            })
        }
    }
}

fn validate_fixed_package(package: &FixedPackage, context: &str) -> Result<()> {
    if package.name.trim().is_empty() {
        return Err(Error::PriceBookValidation {
            message: format!("{}: name must not be empty", context),
        });
    }
    check_amount(package.price, context, "price")
}

fn validate_length_package(package: &LengthPackage, context: &str) -> Result<()> {
    if package.name.trim().is_empty() {
        return Err(Error::PriceBookValidation {
            message: format!("{}: name must not be empty", context),
        });
    }
    check_amount(package.price_per_ft, context, "price_per_ft")
}

fn convert_extra_package(raw: RawExtraPackage, context: &str) -> Result<ExtraPackage> {
    if raw.name.trim().is_empty() {
        return Err(Error::PriceBookValidation {
            message: format!("{}: name must not be empty", context),
        });
    }

    let rate = match (raw.price, raw.price_per_ft) {
        (Some(price), None) => {
            check_amount(price, context, "price")?;
            Rate::Fixed(price)
        }
        (None, Some(rate)) => {
            check_amount(rate, context, "price_per_ft")?;
            Rate::PerFoot(rate)
        }
        _ => {
            return Err(Error::PriceBookValidation {
                message: format!(
                    "{}: exactly one of price and price_per_ft must be set",
                    context
                ),
            });
        }
    };

    Ok(ExtraPackage {
        name: raw.name,
        rate,
        includes: raw.includes,
    })
}

fn check_amount(value: f64, context: &str, field: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::PriceBookValidation {
            message: format!("{}: {} must be a finite positive number", context, field),
        });
    }
    Ok(())
}

fn require_key(key: &str, kind: &str) -> Result<String> {
    let normalized = normalize_key(key);
    if normalized.is_empty() {
        return Err(Error::PriceBookValidation {
            message: format!("{} must not be empty", kind),
        });
    }
    // Normalization trims the ends, so anything left is interior whitespace.
    if normalized.chars().any(char::is_whitespace) {
        return Err(Error::PriceBookValidation {
            message: format!("{} must not contain whitespace: '{}'", kind, normalized),
        });
    }
    Ok(normalized)
}

fn duplicate_key(key: &str, kind: &str) -> Error {
    Error::PriceBookValidation {
        message: format!("duplicate {} after normalization: '{}'", kind, key),
    }
}

static BUILTIN: Lazy<PriceBook> = Lazy::new(|| {
    PriceBook::from_json_str(include_str!("../../data/standard_pricebook.json"))
        .expect("embedded standard price book is valid")
});

/// The embedded standard price book.
///
/// This is the same catalog the marketing site publishes; it is compiled in
/// so that callers always have a usable book without any file on disk.
pub fn builtin() -> &'static PriceBook {
    &BUILTIN
}

/// Resolve a price book from an explicit path, the `DETAILQUOTE_PRICEBOOK`
/// environment variable, or the builtin standard book, in that order.
///
/// A path set via the environment variable must exist; a dangling override
/// is reported instead of silently falling back to the builtin book.
pub fn resolve_price_book(explicit: Option<&Path>) -> Result<PriceBook> {
    if let Some(path) = explicit {
        return PriceBook::from_path(path);
    }

    if let Some(env_path) = std::env::var_os(PRICE_BOOK_ENV_VAR) {
        let path = PathBuf::from(env_path);
        if !path.exists() {
            return Err(Error::PriceBookNotFound { path });
        }
        return PriceBook::from_path(&path);
    }

    debug!("using builtin standard price book");
    Ok(builtin().clone())
}
