//! Packages subcommand: list everything the resolved price book offers.

use std::path::Path;

use anyhow::{Context, Result};

use detailquote_lib::{format_usd, resolve_price_book, PriceBook, Rate, VehicleRates};

/// Handle the packages subcommand.
pub fn handle_packages(pricebook: Option<&Path>) -> Result<()> {
    let book = resolve_price_book(pricebook).context("failed to load price book")?;
    print_price_book(&book);
    Ok(())
}

fn print_price_book(book: &PriceBook) {
    let vehicles = book.vehicles();
    if vehicles.is_empty() {
        println!("No vehicles in price book.");
    } else {
        println!("Vehicles ({}):", vehicles.len());
        for (vehicle, rates) in vehicles {
            println!("  {} [{}]", vehicle, rates.class_label());
            match rates {
                VehicleRates::Fixed { categories } => {
                    for (category, packages) in categories {
                        for (package, fixed) in packages {
                            println!(
                                "    {:<24} {:>10}  {}",
                                format!("{category}-{package}"),
                                format_usd(fixed.price),
                                fixed.name
                            );
                            print_includes(&fixed.includes);
                        }
                    }
                }
                VehicleRates::PerLength { packages } => {
                    for (package, entry) in packages {
                        println!(
                            "    {:<24} {:>10}  {}",
                            package,
                            format!("{}/ft", format_usd(entry.price_per_ft)),
                            entry.name
                        );
                        print_includes(&entry.includes);
                    }
                }
                VehicleRates::Single { packages } => {
                    for (package, fixed) in packages {
                        println!(
                            "    {:<24} {:>10}  {}",
                            package,
                            format_usd(fixed.price),
                            fixed.name
                        );
                        print_includes(&fixed.includes);
                    }
                }
            }
        }
    }

    let extras = book.extra_services();
    if !extras.is_empty() {
        println!();
        println!("Extra services ({}):", extras.len());
        for (code, packages) in extras {
            println!("  {code}");
            for (package, extra) in packages {
                let amount = match extra.rate {
                    Rate::Fixed(price) => format_usd(price),
                    Rate::PerFoot(rate) => format!("{}/ft", format_usd(rate)),
                };
                println!("    {:<24} {:>10}  {}", package, amount, extra.name);
                print_includes(&extra.includes);
            }
        }
    }

    let add_ons = book.add_ons();
    if !add_ons.is_empty() {
        println!();
        println!("Add-ons ({}):", add_ons.len());
        for add_on in add_ons {
            println!(
                "    {:<24} {:>10}  {}",
                add_on.id,
                format_usd(add_on.price),
                add_on.name
            );
        }
    }

    let promotion = book.promotion();
    println!();
    println!(
        "Promotion: {} ({:.0}% off the subtotal)",
        promotion.code,
        promotion.rate * 100.0
    );
}

fn print_includes(includes: &[String]) {
    if !includes.is_empty() {
        println!("      includes: {}", includes.join(", "));
    }
}
