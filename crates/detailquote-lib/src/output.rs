//! Display helpers for quotes and catalog keys.

use std::fmt::Write;

use crate::pricing::{Quote, QuoteLineKind};

/// Format a dollar amount for display, always with two decimals.
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Convert a catalog key into a display label.
///
/// Inserts a space at each lower-to-upper camelCase boundary, turns
/// underscores into spaces, and capitalizes the first letter of every word.
/// Hyphens are kept but start a new word, so `"full-basic"` becomes
/// `"Full-Basic"` and `"ceramicCoating"` becomes `"Ceramic Coating"`.
pub fn display_label(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for ch in key.chars() {
        if ch == '_' {
            spaced.push(' ');
            prev_lower = false;
            continue;
        }
        if prev_lower && ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        prev_lower = ch.is_ascii_lowercase();
        spaced.push(ch);
    }

    let mut label = String::with_capacity(spaced.len());
    let mut word_start = true;
    for ch in spaced.chars() {
        if word_start {
            label.extend(ch.to_uppercase());
        } else {
            label.push(ch);
        }
        word_start = !ch.is_alphanumeric();
    }
    label
}

/// Render a quote as plain text for terminal or email display.
pub fn render_quote_text(quote: &Quote) -> String {
    let mut buffer = String::new();

    let heading = match quote.vehicle_length_ft {
        Some(length) => format!(
            "Quote for {} ({}, {} ft):",
            quote.vehicle_type, quote.package_path, length
        ),
        None => format!("Quote for {} ({}):", quote.vehicle_type, quote.package_path),
    };
    let _ = writeln!(buffer, "{heading}");

    for line in &quote.lines {
        let mut label = match line.kind {
            QuoteLineKind::Package => line.label.clone(),
            kind => format!("{}: {}", kind.label(), line.label),
        };
        if let Some(detail) = line.detail.as_deref() {
            let _ = write!(label, " ({detail})");
        }
        let _ = writeln!(buffer, " - {:<42} {:>10}", label, format_usd(line.amount));
    }

    let _ = writeln!(buffer, "Subtotal: {}", format_usd(quote.subtotal));
    if quote.promo_applied {
        let _ = writeln!(buffer, "Discount (promo applied): -{}", format_usd(quote.discount));
    }
    let _ = writeln!(buffer, "Total: {}", format_usd(quote.total));

    buffer
}
