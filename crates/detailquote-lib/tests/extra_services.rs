use std::path::PathBuf;

use detailquote_lib::catalog::{builtin, PriceBook};
use detailquote_lib::pricing::{package_price, Selection};

fn fixture_book() -> PriceBook {
    let path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/pricebook.json");
    PriceBook::from_path(&path).expect("fixture should load")
}

#[test]
fn fixed_extra_overrides_vehicle_pricing() {
    let book = builtin();

    // Base suv exterior-basic would be 160; the extra replaces it entirely.
    let selection = Selection::new("suv", "basic").with_extra_service("ceramiccoating");
    assert_eq!(package_price(book, &selection), 550.0);

    let selection = Selection::new("suv", "premium").with_extra_service("ceramiccoating");
    assert_eq!(package_price(book, &selection), 850.0);
}

#[test]
fn fixed_extra_ignores_vehicle_type_and_length() {
    let book = builtin();

    // Even an unknown vehicle type prices via the extras table.
    let selection = Selection::new("drone", "basic")
        .with_length_ft(40.0)
        .with_extra_service("ceramiccoating");
    assert_eq!(package_price(book, &selection), 550.0);
}

#[test]
fn per_foot_extra_multiplies_by_length() {
    let book = fixture_book();

    let selection = Selection::new("boat", "premium")
        .with_length_ft(16.0)
        .with_extra_service("ceramiccoating");
    assert_eq!(package_price(&book, &selection), 160.0);
}

#[test]
fn per_foot_extra_without_length_prices_at_zero() {
    let book = fixture_book();

    let selection = Selection::new("boat", "premium").with_extra_service("ceramiccoating");
    assert_eq!(package_price(&book, &selection), 0.0);
}

#[test]
fn unknown_extra_package_prices_at_zero_without_fallback() {
    let book = builtin();

    // "exterior-basic" would resolve as a suv package, but with an extra
    // selected the extras table is the only lookup target.
    let selection = Selection::new("suv", "exterior-basic").with_extra_service("ceramiccoating");
    assert_eq!(package_price(book, &selection), 0.0);
}

#[test]
fn unknown_extra_code_prices_at_zero() {
    let book = builtin();

    let selection = Selection::new("suv", "basic").with_extra_service("undercoating");
    assert_eq!(package_price(book, &selection), 0.0);
}

#[test]
fn sentinel_extra_falls_through_to_vehicle_pricing() {
    let book = builtin();

    let selection = Selection::new("suv", "exterior-basic").with_extra_service("none");
    assert_eq!(package_price(book, &selection), 160.0);

    let selection = Selection::new("suv", "exterior-basic").with_extra_service("  None ");
    assert_eq!(package_price(book, &selection), 160.0);

    let selection = Selection::new("suv", "exterior-basic").with_extra_service("");
    assert_eq!(package_price(book, &selection), 160.0);
}

#[test]
fn extra_lookup_is_case_insensitive() {
    let book = builtin();

    let selection = Selection::new("suv", " Basic ").with_extra_service("CeramicCoating");
    assert_eq!(package_price(book, &selection), 550.0);
}

#[test]
fn marine_coating_scales_with_hull_length() {
    let book = builtin();

    let selection = Selection::new("boat", "marine")
        .with_length_ft(22.0)
        .with_extra_service("ceramiccoating");
    assert_eq!(package_price(book, &selection), 660.0);
}
