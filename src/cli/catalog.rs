use crate::{
    cli::CatalogArgs,
    core::catalog::Catalog,
    prelude::*,
    quantity::energy::KilowattHours,
    tables::{build_catalog_table, build_ranges_table},
};

/// Print the reference models the estimator interpolates between.
#[instrument(skip_all)]
pub fn catalog(args: &CatalogArgs) -> Result {
    let catalog = Catalog::bundled()?;
    info!(n_models = catalog.len(), "loaded the catalog");

    let module = args.module.spec();
    ensure!(
        module.size.0.is_finite() && module.size > KilowattHours::ZERO,
        "the module size must be positive",
    );
    let ranges = match args.voltage {
        Some(voltage) => {
            let class = catalog.class(voltage);
            ensure!(!class.is_empty(), "no reference models for {voltage}");
            println!("{}", build_catalog_table(class.models().iter().copied(), &module));
            build_ranges_table(&catalog, [voltage])
        }
        None => {
            println!("{}", build_catalog_table(catalog.models(), &module));
            build_ranges_table(&catalog, catalog.voltages())
        }
    };
    println!(
        "Each module stores {} and supports up to {}.",
        module.size, module.power_ceiling,
    );
    println!("{ranges}");
    Ok(())
}
