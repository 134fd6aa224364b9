//! Price resolution for selections, add-ons, and promotions.
//!
//! Every operation here is a pure function of its explicit inputs; no state
//! is held between calls. Resolution is deliberately permissive: a selection
//! that does not match the price book yields a zero price instead of an
//! error, because the booking form asks for a running total long before the
//! selection is complete. Malformed book data is rejected earlier, at load
//! time (see `catalog::load`), so a zero here always means "no such entry"
//! rather than "bad entry".

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::{normalize_key, AddOn, PriceBook, VehicleRates, STANDARD_PROMO_RATE};

use super::selection::{split_package_path, Selection};

/// Resolve the base price for a selection against a price book.
///
/// Resolution order:
/// 1. An actively selected extra service replaces vehicle pricing outright.
///    A miss in the extras table is a zero, not a fallback to the vehicle
///    price.
/// 2. Otherwise the vehicle's pricing class decides the lookup: fixed-price
///    vehicles split the package path into category and package keys,
///    per-length vehicles multiply the package rate by the vehicle length,
///    and single-package vehicles use the path as the package key directly.
///
/// Any unresolvable path returns `0.0`.
pub fn package_price(book: &PriceBook, selection: &Selection) -> f64 {
    let length_ft = selection.effective_length_ft();

    if let Some(code) = selection.active_extra_service() {
        let package_key = normalize_key(&selection.package_path);
        return match book.extra_package(&code, &package_key) {
            Some(package) => package.rate.amount_for(length_ft),
            None => {
                debug!(
                    extra = %code,
                    package = %package_key,
                    "extra service not in price book"
                );
                0.0
            }
        };
    }

    let rates = match book.vehicle(&selection.vehicle_type) {
        Some(rates) => rates,
        None => {
            debug!(
                vehicle = %selection.vehicle_type.trim(),
                "vehicle type not in price book"
            );
            return 0.0;
        }
    };

    match rates {
        VehicleRates::Fixed { categories } => match split_package_path(&selection.package_path) {
            Some((category, package)) => {
                let found = categories
                    .get(&category)
                    .and_then(|packages| packages.get(&package));
                match found {
                    Some(fixed) => fixed.price,
                    None => {
                        debug!(
                            vehicle = %selection.vehicle_type.trim(),
                            category = %category,
                            package = %package,
                            "package not in price book"
                        );
                        0.0
                    }
                }
            }
            None => {
                debug!(
                    vehicle = %selection.vehicle_type.trim(),
                    path = %selection.package_path.trim(),
                    "package path has no category separator"
                );
                0.0
            }
        },
        VehicleRates::PerLength { packages } => {
            let package_key = normalize_key(&selection.package_path);
            match packages.get(&package_key) {
                Some(package) => package.price_per_ft * length_ft.unwrap_or(0.0),
                None => {
                    debug!(
                        vehicle = %selection.vehicle_type.trim(),
                        package = %package_key,
                        "package not in price book"
                    );
                    0.0
                }
            }
        }
        VehicleRates::Single { packages } => {
            let package_key = normalize_key(&selection.package_path);
            match packages.get(&package_key) {
                Some(package) => package.price,
                None => {
                    debug!(
                        vehicle = %selection.vehicle_type.trim(),
                        package = %package_key,
                        "package not in price book"
                    );
                    0.0
                }
            }
        }
    }
}

/// The add-on entries whose ids appear in `selected_ids`, in catalog order.
///
/// Membership is checked per catalog entry, so a duplicated id in
/// `selected_ids` cannot double-count and unknown ids select nothing.
pub fn selected_add_ons<'a>(selected_ids: &[String], add_ons: &'a [AddOn]) -> Vec<&'a AddOn> {
    let selected: BTreeSet<String> = selected_ids.iter().map(|id| normalize_key(id)).collect();
    add_ons
        .iter()
        .filter(|add_on| selected.contains(&add_on.id))
        .collect()
}

/// Sum the prices of add-ons whose ids appear in `selected_ids`.
pub fn sum_add_ons(selected_ids: &[String], add_ons: &[AddOn]) -> f64 {
    selected_add_ons(selected_ids, add_ons)
        .iter()
        .map(|add_on| add_on.price)
        .sum()
}

/// Apply the standing 15% promotion to a subtotal when the code was valid.
pub fn apply_promotion(subtotal: f64, promo_valid: bool) -> f64 {
    apply_promotion_at_rate(subtotal, promo_valid, STANDARD_PROMO_RATE)
}

/// Apply a promotion at an explicit discount rate.
///
/// Returns the subtotal unchanged when `promo_valid` is false.
pub fn apply_promotion_at_rate(subtotal: f64, promo_valid: bool, rate: f64) -> f64 {
    if promo_valid {
        subtotal * (1.0 - rate)
    } else {
        subtotal
    }
}
