//! Per-series attribute resolution with defaults and auto-population.

use crate::style::table::AttributeTable;

/// Resolves a per-series attribute value through the fixed fallback chain:
/// explicit per-series override, then (optionally) a value pulled from a
/// supplier and cached, then the process-wide default.
///
/// The default is non-optional by construction — there is no representable
/// "no default" state for an attribute kind. The resolver itself never fires
/// change notifications; the owning aggregate decides when a mutation is a
/// semantic change worth broadcasting. In particular an auto-populate fill is
/// memoization, not a semantic change, and stays silent.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeResolver<T> {
    overrides: AttributeTable<T>,
    default_value: T,
    auto_populate: bool,
}

impl<T: Clone> AttributeResolver<T> {
    /// Create a resolver with the given default and auto-population policy.
    #[must_use]
    pub fn new(default_value: T, auto_populate: bool) -> Self {
        Self {
            overrides: AttributeTable::new(),
            default_value,
            auto_populate,
        }
    }

    /// Resolve the value for a series.
    ///
    /// If the series has no override and auto-population is on, `supplier`
    /// (when present) is invoked exactly once and the produced value is
    /// stored as that series' override before being returned; once filled,
    /// the cached value behaves identically to an explicit override. With
    /// auto-population off (or no supplier available) the default is
    /// returned.
    pub fn lookup(&mut self, series: usize, supplier: Option<&mut dyn FnMut() -> T>) -> T {
        if let Some(value) = self.overrides.get(series) {
            return value.clone();
        }
        if self.auto_populate {
            if let Some(next) = supplier {
                let value = next();
                self.overrides.set(series, Some(value.clone()));
                return value;
            }
        }
        self.default_value.clone()
    }

    /// Resolve the value for a series without any auto-populate side effect.
    ///
    /// Used by attribute kinds that have no supplier step (the tri-state
    /// boolean kinds, fonts, label positions).
    #[must_use]
    pub fn lookup_no_populate(&self, series: usize) -> T {
        self.overrides
            .get(series)
            .cloned()
            .unwrap_or_else(|| self.default_value.clone())
    }

    /// The raw per-series override, with no fallback and no side effect.
    ///
    /// Distinguishes "explicitly set" from "defaulted"; used by equality,
    /// serialization, and editor UIs.
    #[must_use]
    pub fn series_override(&self, series: usize) -> Option<&T> {
        self.overrides.get(series)
    }

    /// Set (or unset, with `None`) the override for a series.
    pub fn set_series(&mut self, series: usize, value: Option<T>) {
        self.overrides.set(series, value);
    }

    /// Remove every per-series override.
    pub fn clear_series(&mut self) {
        self.overrides.clear();
    }

    /// The process-wide default.
    #[must_use]
    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Replace the process-wide default.
    pub fn set_default(&mut self, value: T) {
        self.default_value = value;
    }

    /// Whether lookups may fill missing overrides from a supplier.
    #[must_use]
    pub fn auto_populate(&self) -> bool {
        self.auto_populate
    }

    /// Set the auto-population policy.
    pub fn set_auto_populate(&mut self, auto: bool) {
        self.auto_populate = auto;
    }
}
