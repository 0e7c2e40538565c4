mod catalog;
mod quote;

use clap::{Parser, Subcommand};

pub use self::{catalog::catalog, quote::quote};
use crate::{
    core::{model::Voltage, module::ModuleSpec},
    quantity::{energy::KilowattHours, percent::Percent, power::Kilowatts, time::Hours},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Price a cabinet configuration against the reference catalog.
    #[clap(name = "quote")]
    Quote(Box<QuoteArgs>),

    /// Print the reference catalog with derived module counts and ranges.
    #[clap(name = "catalog")]
    Catalog(Box<CatalogArgs>),
}

#[must_use]
#[derive(Parser)]
pub struct QuoteArgs {
    /// Voltage class of the cabinet, for example `208` or `480`.
    #[clap(long = "voltage")]
    pub voltage: Voltage,

    /// Continuous power rating in kilowatts.
    #[clap(long = "power-kilowatts")]
    pub power: Kilowatts,

    /// Energy capacity in kilowatt-hours.
    #[clap(long = "energy-kilowatt-hours")]
    pub energy: KilowattHours,

    /// Backup duration in hours. Defaults to the energy over the power.
    #[clap(long = "backup-hours")]
    pub backup_hours: Option<Hours>,

    /// Quote the base price only, without the tariff component.
    #[clap(long = "without-tariff")]
    pub without_tariff: bool,

    /// Tariff percentage applied on top of the base price.
    #[clap(long = "tariff-percent", default_value = "64.5", env = "TARIFF_PERCENT")]
    pub tariff_percent: Percent,

    #[clap(flatten)]
    pub module: ModuleArgs,

    /// Print the estimate as JSON instead of tables.
    #[clap(long = "json")]
    pub json: bool,
}

/// Battery module parameters shared by the commands.
#[must_use]
#[derive(Parser)]
pub struct ModuleArgs {
    /// Energy capacity of a single battery module in kilowatt-hours.
    #[clap(
        long = "module-size-kilowatt-hours",
        default_value = "10.24",
        env = "MODULE_SIZE_KILOWATT_HOURS"
    )]
    pub size: KilowattHours,

    /// Power a single battery module can support, in kilowatts.
    #[clap(
        long = "module-power-kilowatts",
        default_value = "90",
        env = "MODULE_POWER_KILOWATTS"
    )]
    pub power_ceiling: Kilowatts,
}

impl ModuleArgs {
    pub fn spec(&self) -> ModuleSpec {
        ModuleSpec {
            size: self.size,
            power_ceiling: self.power_ceiling,
        }
    }
}

#[must_use]
#[derive(Parser)]
pub struct CatalogArgs {
    /// Only print the models of this voltage class.
    #[clap(long = "voltage")]
    pub voltage: Option<Voltage>,

    #[clap(flatten)]
    pub module: ModuleArgs,
}
