use std::cmp::Reverse;

use crate::{
    core::{
        catalog::{Catalog, VoltageClass},
        error::PricingError,
        estimate::{Extrapolation, PriceEstimate},
        model::ReferenceModel,
        module::{ModuleCount, ModuleSpec},
        query::Query,
    },
    prelude::*,
    quantity::{money::Dollars, percent::Percent, power::Kilowatts},
};

/// Price a cabinet configuration against the catalog.
///
/// The base price is interpolated over whole-module counts between the two
/// reference models that bracket the needed count within the closest power
/// band, and extrapolated per module where the bracket is one-sided. The
/// tariff is applied on top as requested by the query – the reference
/// tariff ratios never override it.
#[instrument(
    skip_all,
    fields(voltage = %query.voltage, power = %query.power, energy = %query.energy),
)]
pub fn estimate(
    catalog: &Catalog,
    query: &Query,
    module: &ModuleSpec,
) -> Result<PriceEstimate, PricingError> {
    validate(query, module)?;

    let class = catalog.class(query.voltage);
    if class.is_empty() {
        return Err(PricingError::NoReferenceData(class.voltage()));
    }

    let modules_needed = module.count_for(query.energy);
    let candidates = annotate(&class, module);
    let band = power_band(&candidates, query.power);
    let price_without_tariff = banded_price(&band, &candidates, modules_needed)?;

    let tariff_percent = if query.include_tariff {
        query.tariff_percent
    } else {
        Percent::ZERO
    };
    let tariff_amount = price_without_tariff * tariff_percent;

    let estimate = PriceEstimate {
        price_without_tariff,
        price_with_tariff: price_without_tariff + tariff_amount,
        tariff_amount,
        tariff_percent,
        modules_needed,
        price_per_module: price_without_tariff / modules_needed,
        extrapolation: extrapolation(&class, query),
    };
    debug!(
        base = %estimate.price_without_tariff,
        total = %estimate.price_with_tariff,
        modules = %estimate.modules_needed,
        "estimated",
    );
    Ok(estimate)
}

fn validate(query: &Query, module: &ModuleSpec) -> Result<(), PricingError> {
    ensure_positive("power", query.power.0)?;
    ensure_positive("energy", query.energy.0)?;
    ensure_positive("backup hours", query.backup_hours.0)?;
    ensure_positive("module size", module.size.0)?;
    let percent = query.tariff_percent.0;
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(PricingError::InvalidInput(format!(
            "tariff percent must be between 0 and 100, got {percent}",
        )));
    }
    Ok(())
}

fn ensure_positive(what: &str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidInput(format!(
            "{what} must be positive, got {value}",
        )))
    }
}

/// Reference model annotated with its module count and catalog position.
/// The position breaks ties deterministically.
#[derive(Copy, Clone)]
struct Candidate<'a> {
    index: usize,
    module_count: ModuleCount,
    model: &'a ReferenceModel,
}

fn annotate<'a>(class: &VoltageClass<'a>, module: &ModuleSpec) -> Vec<Candidate<'a>> {
    class
        .models()
        .iter()
        .enumerate()
        .map(|(index, &model)| Candidate {
            index,
            module_count: module.count_for(model.energy),
            model,
        })
        .collect()
}

/// Candidates whose rated power matches the query: the exact matches when
/// any exist, otherwise the nearest model strictly above plus the nearest
/// strictly below (either side may be absent).
fn power_band<'a>(candidates: &[Candidate<'a>], power: Kilowatts) -> Vec<Candidate<'a>> {
    let exact: Vec<Candidate<'a>> = candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.model.power == power)
        .collect();
    if !exact.is_empty() {
        return exact;
    }
    let above = candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.model.power > power)
        .min_by_key(|candidate| (candidate.model.power - power, candidate.index));
    let below = candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.model.power < power)
        .min_by_key(|candidate| (power - candidate.model.power, candidate.index));
    above.into_iter().chain(below).collect()
}

/// Base price at `needed` modules, interpolated within the band. An empty
/// band falls back to the class-wide mean per-module price.
fn banded_price(
    band: &[Candidate<'_>],
    class: &[Candidate<'_>],
    needed: ModuleCount,
) -> Result<Dollars, PricingError> {
    let upper = band
        .iter()
        .copied()
        .filter(|candidate| candidate.module_count >= needed)
        .min_by_key(|candidate| (candidate.module_count, candidate.index));
    let lower = band
        .iter()
        .copied()
        .filter(|candidate| candidate.module_count < needed)
        .max_by_key(|candidate| (candidate.module_count, Reverse(candidate.index)));

    match (lower, upper) {
        (Some(lower), Some(upper)) => Ok(interpolate(&lower, &upper, needed)),
        (Some(single), None) | (None, Some(single)) => Ok(per_module_price(&single)? * needed),
        (None, None) => {
            let mut total = Dollars::ZERO;
            for candidate in class {
                total += per_module_price(candidate)?;
            }
            #[expect(clippy::cast_precision_loss)]
            let mean = total / (class.len() as f64);
            Ok(mean * needed)
        }
    }
}

/// Linear interpolation of the base price over the module count.
/// `lower.module_count < needed <= upper.module_count` holds by construction,
/// and a needed count sitting on a bracket endpoint reproduces that
/// reference price exactly.
fn interpolate(lower: &Candidate<'_>, upper: &Candidate<'_>, needed: ModuleCount) -> Dollars {
    if needed == upper.module_count {
        return upper.model.price_without_tariff;
    }
    let position = f64::from(needed.0 - lower.module_count.0)
        / f64::from(upper.module_count.0 - lower.module_count.0);
    lower.model.price_without_tariff
        + (upper.model.price_without_tariff - lower.model.price_without_tariff) * position
}

fn per_module_price(candidate: &Candidate<'_>) -> Result<Dollars, PricingError> {
    if candidate.module_count.0 == 0 {
        return Err(PricingError::DegenerateCatalogEntry {
            model: candidate.model.name.clone(),
        });
    }
    Ok(candidate.model.price_without_tariff / candidate.module_count)
}

fn extrapolation(class: &VoltageClass<'_>, query: &Query) -> Extrapolation {
    Extrapolation {
        power: outside(class.power_range(), query.power),
        energy: outside(class.energy_range(), query.energy),
        hours: outside(class.backup_range(), query.backup_hours),
    }
}

fn outside<Q: PartialOrd>(range: Option<(Q, Q)>, value: Q) -> bool {
    range.is_some_and(|(min, max)| value < min || value > max)
}
