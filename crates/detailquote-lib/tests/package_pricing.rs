use detailquote_lib::catalog::builtin;
use detailquote_lib::pricing::{package_price, Selection};

#[test]
fn flat_rate_path_resolves_category_and_package() {
    let book = builtin();

    let selection = Selection::new("suv", "exterior-basic");
    assert_eq!(package_price(book, &selection), 160.0);

    let selection = Selection::new("suv", "interior-premium");
    assert_eq!(package_price(book, &selection), 220.0);

    let selection = Selection::new("sedan", "full-premium");
    assert_eq!(package_price(book, &selection), 340.0);
}

#[test]
fn flat_rate_lookups_are_case_insensitive() {
    let book = builtin();

    let selection = Selection::new("  SUV ", "Exterior-Basic");
    assert_eq!(package_price(book, &selection), 160.0);
}

#[test]
fn path_without_separator_prices_at_zero() {
    let book = builtin();

    let selection = Selection::new("suv", "exterior");
    assert_eq!(package_price(book, &selection), 0.0);
}

#[test]
fn unknown_category_or_package_prices_at_zero() {
    let book = builtin();

    let selection = Selection::new("suv", "engine-basic");
    assert_eq!(package_price(book, &selection), 0.0);

    let selection = Selection::new("suv", "exterior-deluxe");
    assert_eq!(package_price(book, &selection), 0.0);
}

#[test]
fn unknown_vehicle_type_prices_at_zero() {
    let book = builtin();

    let selection = Selection::new("drone", "exterior-basic");
    assert_eq!(package_price(book, &selection), 0.0);

    let selection = Selection::new("drone", "full");
    assert_eq!(package_price(book, &selection), 0.0);
}

#[test]
fn single_package_vehicle_ignores_length() {
    let book = builtin();

    let selection = Selection::new("jetski", "full");
    assert_eq!(package_price(book, &selection), 220.0);

    let selection = Selection::new("jetski", "full").with_length_ft(12.0);
    assert_eq!(package_price(book, &selection), 220.0);
}

#[test]
fn unknown_single_class_package_prices_at_zero() {
    let book = builtin();

    let selection = Selection::new("jetski", "deluxe");
    assert_eq!(package_price(book, &selection), 0.0);
}

#[test]
fn fixed_price_ignores_supplied_length() {
    let book = builtin();

    let selection = Selection::new("suv", "exterior-basic").with_length_ft(40.0);
    assert_eq!(package_price(book, &selection), 160.0);
}

#[test]
fn service_category_field_does_not_affect_resolution() {
    // The category that matters is the one encoded in the package path;
    // the display category is carried for callers only.
    let book = builtin();

    let selection = Selection::new("suv", "exterior-basic").with_service_category("interior");
    assert_eq!(package_price(book, &selection), 160.0);

    let selection = Selection::new("suv", "nonsense").with_service_category("exterior");
    assert_eq!(package_price(book, &selection), 0.0);
}

#[test]
fn multi_dash_path_splits_on_first_separator() {
    // Category "full" with package "basic-plus" does not exist, so the
    // price is zero; the point is that the category is "full", not an
    // unsplit "full-basic-plus" key.
    let book = builtin();

    let selection = Selection::new("suv", "full-basic-plus");
    assert_eq!(package_price(book, &selection), 0.0);

    let selection = Selection::new("suv", "full-basic");
    assert_eq!(package_price(book, &selection), 320.0);
}

#[test]
fn empty_book_prices_everything_at_zero() {
    let book = detailquote_lib::PriceBook::default();

    let selection = Selection::new("suv", "exterior-basic");
    assert_eq!(package_price(&book, &selection), 0.0);

    let selection = Selection::new("boat", "full").with_length_ft(20.0);
    assert_eq!(package_price(&book, &selection), 0.0);
}
