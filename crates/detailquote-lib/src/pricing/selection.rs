//! Caller-supplied selection describing what should be priced.

use crate::catalog::normalize_key;

/// Sentinel value callers use for "no extra service selected".
///
/// The booking form submits `"none"` rather than omitting the field, so the
/// sentinel is treated the same as an absent extra service.
pub const NO_EXTRA_SENTINEL: &str = "none";

/// A pricing selection as captured by the booking form.
///
/// Every field is free-form caller input; nothing here is validated against
/// the price book. A selection that does not resolve to a book entry prices
/// at zero rather than failing, so a half-completed form can still show a
/// running total.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Vehicle type key, e.g. `"suv"` or `"boat"`.
    pub vehicle_type: String,
    /// Package path. Fixed-price vehicles encode this as
    /// `"<category>-<package>"`; other classes use the bare package key.
    pub package_path: String,
    /// Service category as displayed by the form. Carried for callers but
    /// never consulted during resolution; the category that matters is the
    /// one encoded in `package_path`.
    pub service_category: Option<String>,
    /// Vehicle length in feet, for per-length pricing.
    pub vehicle_length_ft: Option<f64>,
    /// Extra-service code, e.g. `"ceramiccoating"`. `"none"` and empty
    /// values mean no extra service.
    pub extra_service: Option<String>,
}

impl Selection {
    /// Create a selection for a vehicle type and package path.
    pub fn new(vehicle_type: impl Into<String>, package_path: impl Into<String>) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            package_path: package_path.into(),
            service_category: None,
            vehicle_length_ft: None,
            extra_service: None,
        }
    }

    /// Attach a vehicle length in feet.
    pub fn with_length_ft(mut self, length_ft: f64) -> Self {
        self.vehicle_length_ft = Some(length_ft);
        self
    }

    /// Attach an extra-service code.
    pub fn with_extra_service(mut self, code: impl Into<String>) -> Self {
        self.extra_service = Some(code.into());
        self
    }

    /// Attach the display category (informational only).
    pub fn with_service_category(mut self, category: impl Into<String>) -> Self {
        self.service_category = Some(category.into());
        self
    }

    /// The vehicle length usable for per-length pricing.
    ///
    /// Only a finite, strictly positive length counts; anything else is
    /// treated as "no length supplied".
    pub(crate) fn effective_length_ft(&self) -> Option<f64> {
        self.vehicle_length_ft
            .filter(|length| length.is_finite() && *length > 0.0)
    }

    /// The selected extra service, if one is actively selected.
    ///
    /// Returns `None` for an absent field, an empty value, or the `"none"`
    /// sentinel, all of which mean standard vehicle pricing applies.
    pub(crate) fn active_extra_service(&self) -> Option<String> {
        let code = normalize_key(self.extra_service.as_deref()?);
        if code.is_empty() || code == NO_EXTRA_SENTINEL {
            return None;
        }
        Some(code)
    }
}

/// Split a fixed-price package path into `(category, package)` keys.
///
/// The split happens on the first `-`, so `"full-basic-plus"` resolves to
/// category `"full"` and package `"basic-plus"`. A path without a separator
/// has no package key and cannot resolve.
pub fn split_package_path(path: &str) -> Option<(String, String)> {
    let normalized = normalize_key(path);
    let (category, package) = normalized.split_once('-')?;
    Some((category.trim().to_string(), package.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_separator_only() {
        assert_eq!(
            split_package_path("full-basic-plus"),
            Some(("full".to_string(), "basic-plus".to_string()))
        );
    }

    #[test]
    fn path_without_separator_does_not_split() {
        assert_eq!(split_package_path("premium"), None);
    }

    #[test]
    fn split_normalizes_case_and_whitespace() {
        assert_eq!(
            split_package_path("  Exterior - Basic "),
            Some(("exterior".to_string(), "basic".to_string()))
        );
    }

    #[test]
    fn sentinel_and_empty_extras_are_inactive() {
        let none = Selection::new("suv", "exterior-basic").with_extra_service("none");
        assert_eq!(none.active_extra_service(), None);

        let shouting = Selection::new("suv", "exterior-basic").with_extra_service("  NONE ");
        assert_eq!(shouting.active_extra_service(), None);

        let empty = Selection::new("suv", "exterior-basic").with_extra_service("");
        assert_eq!(empty.active_extra_service(), None);

        let absent = Selection::new("suv", "exterior-basic");
        assert_eq!(absent.active_extra_service(), None);
    }

    #[test]
    fn non_positive_lengths_are_unusable() {
        assert_eq!(
            Selection::new("boat", "full")
                .with_length_ft(0.0)
                .effective_length_ft(),
            None
        );
        assert_eq!(
            Selection::new("boat", "full")
                .with_length_ft(-4.0)
                .effective_length_ft(),
            None
        );
        assert_eq!(
            Selection::new("boat", "full")
                .with_length_ft(f64::NAN)
                .effective_length_ft(),
            None
        );
        assert_eq!(
            Selection::new("boat", "full")
                .with_length_ft(18.0)
                .effective_length_ft(),
            Some(18.0)
        );
    }
}
