use std::collections::BTreeSet;

use itertools::Itertools;
use serde::Deserialize;

use crate::{
    core::model::{ReferenceModel, Voltage},
    prelude::*,
    quantity::{energy::KilowattHours, money::Dollars, power::Kilowatts, time::Hours},
};

/// Immutable catalog of reference models, loaded once at startup.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    models: Vec<ReferenceModel>,
}

impl Catalog {
    /// Parse and validate the catalog bundled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_toml(include_str!("../../catalog.toml"))
            .context("failed to load the bundled catalog")
    }

    /// Parse and validate a TOML catalog document.
    pub fn from_toml(document: &str) -> Result<Self> {
        toml::from_str::<Self>(document)
            .context("failed to parse the catalog")?
            .validated()
    }

    /// TOML accepts `nan` and `inf` float literals, and the quantity ordering
    /// ranks `NaN` above every number, so finiteness is checked explicitly.
    fn validated(self) -> Result<Self> {
        ensure!(!self.is_empty(), "the catalog contains no models");
        ensure!(
            self.models.iter().map(|model| &model.name).all_unique(),
            "model names are not unique",
        );
        for model in &self.models {
            let name = &model.name;
            ensure!(
                model.power.0.is_finite() && model.power > Kilowatts::ZERO,
                "`{name}`: power must be positive",
            );
            ensure!(
                model.energy.0.is_finite() && model.energy > KilowattHours::ZERO,
                "`{name}`: energy must be positive",
            );
            ensure!(
                model.backup_hours.0.is_finite() && model.backup_hours > Hours::ZERO,
                "`{name}`: backup hours must be positive",
            );
            ensure!(
                model.price_without_tariff.0.is_finite()
                    && model.price_without_tariff > Dollars::ZERO,
                "`{name}`: the base price must be positive",
            );
            ensure!(
                model.price_with_tariff.0.is_finite(),
                "`{name}`: the with-tariff price must be finite",
            );
            ensure!(
                model.price_with_tariff >= model.price_without_tariff,
                "`{name}`: the with-tariff price is below the base price",
            );
        }
        Ok(self)
    }

    #[must_use]
    pub fn models(&self) -> &[ReferenceModel] {
        &self.models
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Distinct voltage classes, sorted.
    #[must_use]
    pub fn voltages(&self) -> BTreeSet<Voltage> {
        self.models.iter().map(|model| model.voltage).collect()
    }

    /// Narrow the catalog down to one voltage class. An unknown voltage
    /// yields an empty class, not an error.
    #[must_use]
    pub fn class(&self, voltage: Voltage) -> VoltageClass<'_> {
        VoltageClass {
            voltage,
            models: self
                .models
                .iter()
                .filter(|model| model.voltage == voltage)
                .collect(),
        }
    }
}

/// View of the catalog narrowed to one voltage class, in catalog order.
#[derive(Debug)]
pub struct VoltageClass<'a> {
    voltage: Voltage,
    models: Vec<&'a ReferenceModel>,
}

impl<'a> VoltageClass<'a> {
    #[must_use]
    pub fn voltage(&self) -> Voltage {
        self.voltage
    }

    #[must_use]
    pub fn models(&self) -> &[&'a ReferenceModel] {
        &self.models
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Smallest and largest rated power among the reference models.
    #[must_use]
    pub fn power_range(&self) -> Option<(Kilowatts, Kilowatts)> {
        self.models
            .iter()
            .map(|model| model.power)
            .minmax()
            .into_option()
    }

    /// Smallest and largest energy capacity among the reference models.
    #[must_use]
    pub fn energy_range(&self) -> Option<(KilowattHours, KilowattHours)> {
        self.models
            .iter()
            .map(|model| model.energy)
            .minmax()
            .into_option()
    }

    /// Smallest and largest nameplate backup duration among the reference models.
    #[must_use]
    pub fn backup_range(&self) -> Option<(Hours, Hours)> {
        self.models
            .iter()
            .map(|model| model.backup_hours)
            .minmax()
            .into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::percent::Percent;

    /// Well-formed single-row document the broken variants are derived from.
    const VALID_DOCUMENT: &str = r#"
        [[models]]
        name = "X"
        voltage = 208
        power = 10.0
        energy = 20.0
        backup-hours = 2.0
        price-without-tariff = 15000.0
        price-with-tariff = 24720.0
    "#;

    #[test]
    fn bundled_catalog_is_valid() -> Result {
        let catalog = Catalog::bundled()?;
        assert_eq!(catalog.len(), 25);
        assert_eq!(
            catalog.voltages(),
            BTreeSet::from([Voltage(208), Voltage(480)]),
        );
        Ok(())
    }

    #[test]
    fn class_filters_by_voltage() -> Result {
        let catalog = Catalog::bundled()?;
        assert_eq!(catalog.class(Voltage(208)).len(), 15);
        assert_eq!(catalog.class(Voltage(480)).len(), 10);
        assert!(catalog.class(Voltage(600)).is_empty());
        Ok(())
    }

    #[test]
    fn class_ranges() -> Result {
        let catalog = Catalog::bundled()?;
        let class = catalog.class(Voltage(480));
        assert_eq!(class.power_range(), Some((Kilowatts(30.0), Kilowatts(90.0))));
        assert_eq!(
            class.energy_range(),
            Some((KilowattHours(50.0), KilowattHours(368.0))),
        );
        assert_eq!(class.backup_range(), Some((Hours(1.7), Hours(5.1))));
        Ok(())
    }

    #[test]
    fn empty_class_has_no_ranges() -> Result {
        let catalog = Catalog::bundled()?;
        let class = catalog.class(Voltage(600));
        assert_eq!(class.power_range(), None);
        Ok(())
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(Catalog::from_toml("models = []").is_err());
    }

    #[test]
    fn rejects_missing_field() {
        // No `price-with-tariff`.
        let document = r#"
            [[models]]
            name = "X"
            voltage = 208
            power = 10.0
            energy = 20.0
            backup-hours = 2.0
            price-without-tariff = 15000.0
        "#;
        assert!(Catalog::from_toml(document).is_err());
    }

    #[test]
    fn accepts_single_row() {
        assert!(Catalog::from_toml(VALID_DOCUMENT).is_ok());
    }

    #[test]
    fn rejects_non_positive_values() {
        for document in [
            VALID_DOCUMENT.replace("power = 10.0", "power = 0.0"),
            VALID_DOCUMENT.replace("energy = 20.0", "energy = -20.0"),
            VALID_DOCUMENT.replace("backup-hours = 2.0", "backup-hours = 0.0"),
            VALID_DOCUMENT.replace(
                "price-without-tariff = 15000.0",
                "price-without-tariff = -1.0",
            ),
        ] {
            assert!(Catalog::from_toml(&document).is_err(), "{document}");
        }
    }

    #[test]
    fn rejects_non_finite_numbers() {
        for document in [
            VALID_DOCUMENT.replace("power = 10.0", "power = nan"),
            VALID_DOCUMENT.replace("energy = 20.0", "energy = inf"),
            VALID_DOCUMENT.replace("backup-hours = 2.0", "backup-hours = nan"),
            VALID_DOCUMENT.replace(
                "price-without-tariff = 15000.0",
                "price-without-tariff = nan",
            ),
            VALID_DOCUMENT.replace("price-with-tariff = 24720.0", "price-with-tariff = inf"),
        ] {
            assert!(Catalog::from_toml(&document).is_err(), "{document}");
        }
    }

    #[test]
    fn rejects_inverted_tariff_prices() {
        let document = r#"
            [[models]]
            name = "X"
            voltage = 208
            power = 10.0
            energy = 20.0
            backup-hours = 2.0
            price-without-tariff = 24720.0
            price-with-tariff = 15000.0
        "#;
        assert!(Catalog::from_toml(document).is_err());
    }

    #[test]
    fn rejects_duplicate_names() {
        let document = r#"
            [[models]]
            name = "X"
            voltage = 208
            power = 10.0
            energy = 20.0
            backup-hours = 2.0
            price-without-tariff = 15000.0
            price-with-tariff = 24720.0

            [[models]]
            name = "X"
            voltage = 480
            power = 30.0
            energy = 92.0
            backup-hours = 3.0
            price-without-tariff = 54700.0
            price-with-tariff = 95069.0
        "#;
        assert!(Catalog::from_toml(document).is_err());
    }

    #[test]
    fn bundled_rows_satisfy_tariff_invariant() -> Result {
        for model in Catalog::bundled()?.models() {
            assert!(model.tariff() >= Dollars::ZERO, "{}", model.name);
            assert!(model.tariff_percent() >= Percent::ZERO, "{}", model.name);
        }
        Ok(())
    }
}
