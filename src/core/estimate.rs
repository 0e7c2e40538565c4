use serde::Serialize;

use crate::{
    core::module::ModuleCount,
    quantity::{money::Dollars, percent::Percent},
};

/// Priced configuration, decomposed into tariff and non-tariff components.
#[derive(Clone, Debug, Serialize)]
pub struct PriceEstimate {
    pub price_without_tariff: Dollars,
    pub price_with_tariff: Dollars,
    pub tariff_amount: Dollars,
    /// The percentage actually applied: zero when the tariff was excluded.
    pub tariff_percent: Percent,
    pub modules_needed: ModuleCount,
    /// Per-module share of the base price.
    pub price_per_module: Dollars,
    pub extrapolation: Extrapolation,
}

impl PriceEstimate {
    /// Per-module share of the tariff-inclusive price.
    #[must_use]
    pub fn price_per_module_with_tariff(&self) -> Dollars {
        self.price_with_tariff / self.modules_needed
    }
}

/// Query dimensions that fall outside the voltage class's reference ranges.
///
/// Extrapolated estimates are still estimates – the flags drive warnings,
/// not the math.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Extrapolation {
    pub power: bool,
    pub energy: bool,
    pub hours: bool,
}

impl Extrapolation {
    #[must_use]
    pub const fn any(self) -> bool {
        self.power || self.energy || self.hours
    }
}
