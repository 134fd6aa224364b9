use detailquote_lib::catalog::{builtin, VehicleRates};

#[test]
fn builtin_book_has_all_vehicle_classes() {
    let book = builtin();

    assert_eq!(
        book.vehicle_types(),
        vec!["bike", "boat", "jetski", "rv", "sedan", "suv", "truck", "van"]
    );
    assert!(book.source_path().is_none());
}

#[test]
fn builtin_vehicles_use_expected_pricing_classes() {
    let book = builtin();

    for vehicle in ["sedan", "suv", "truck", "van", "bike"] {
        let rates = book.vehicle(vehicle).expect("vehicle present");
        assert!(
            matches!(rates, VehicleRates::Fixed { .. }),
            "{vehicle} should be fixed-price"
        );
    }
    for vehicle in ["boat", "rv"] {
        let rates = book.vehicle(vehicle).expect("vehicle present");
        assert!(
            matches!(rates, VehicleRates::PerLength { .. }),
            "{vehicle} should be per-length"
        );
    }
    assert!(matches!(
        book.vehicle("jetski").expect("jetski present"),
        VehicleRates::Single { .. }
    ));
}

#[test]
fn builtin_spot_prices_match_published_catalog() {
    let book = builtin();

    let suv = book.vehicle("suv").expect("suv present");
    if let VehicleRates::Fixed { categories } = suv {
        assert_eq!(categories["exterior"]["basic"].price, 160.0);
        assert_eq!(categories["exterior"]["premium"].price, 190.0);
        assert_eq!(categories["interior"]["basic"].price, 180.0);
        assert_eq!(categories["interior"]["premium"].price, 220.0);
    } else {
        panic!("suv should be fixed-price");
    }

    let boat = book.vehicle("boat").expect("boat present");
    if let VehicleRates::PerLength { packages } = boat {
        assert_eq!(packages["exterior"].price_per_ft, 23.0);
        assert_eq!(packages["interior"].price_per_ft, 19.0);
        assert_eq!(packages["full"].price_per_ft, 35.0);
    } else {
        panic!("boat should be per-length");
    }
}

#[test]
fn builtin_packages_list_what_they_include() {
    let book = builtin();

    let sedan = book.vehicle("sedan").expect("sedan present");
    if let VehicleRates::Fixed { categories } = sedan {
        let basic = &categories["exterior"]["basic"];
        assert!(basic.includes.iter().any(|item| item.contains("wash")));
    } else {
        panic!("sedan should be fixed-price");
    }

    let coating = book
        .extra_package("ceramiccoating", "premium")
        .expect("premium coating present");
    assert!(!coating.includes.is_empty());
}

#[test]
fn builtin_extras_cover_coating_and_tinting() {
    let book = builtin();

    let basic = book
        .extra_package("ceramiccoating", "basic")
        .expect("basic coating present");
    assert_eq!(basic.name, "Standard Ceramic Coating");

    assert!(book.extra_package("windowtinting", "premium").is_some());
    assert!(book.extra_package("ceramiccoating", "marine").is_some());
    assert!(book.extra_package("undercoating", "basic").is_none());
}

#[test]
fn builtin_add_ons_keep_catalog_order() {
    let book = builtin();

    let ids: Vec<&str> = book.add_ons().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["wax", "vacuum", "pethair", "odor", "engine", "headlight"]
    );
}

#[test]
fn builtin_promotion_is_the_standing_discount() {
    let book = builtin();

    assert_eq!(book.promotion().code, "discount15");
    assert_eq!(book.promotion().rate, 0.15);
    assert!(book.promotion().validate().is_ok());
}

#[test]
fn package_counts_reflect_catalog_size() {
    let book = builtin();

    assert_eq!(book.vehicle("suv").expect("suv").package_count(), 6);
    assert_eq!(book.vehicle("boat").expect("boat").package_count(), 3);
    assert_eq!(book.vehicle("jetski").expect("jetski").package_count(), 1);
    assert_eq!(book.vehicle("suv").expect("suv").class_label(), "fixed");
}
