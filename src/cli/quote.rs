use crate::{
    cli::QuoteArgs,
    core::{catalog::Catalog, pricing, query::Query},
    prelude::*,
    tables::{build_estimate_table, build_query_table},
};

/// Price one cabinet configuration and render the breakdown.
#[instrument(skip_all)]
pub fn quote(args: &QuoteArgs) -> Result {
    let catalog = Catalog::bundled()?;
    let module = args.module.spec();
    let query = Query::builder()
        .voltage(args.voltage)
        .power(args.power)
        .energy(args.energy)
        .backup_hours(args.backup_hours.unwrap_or_else(|| args.energy / args.power))
        .include_tariff(!args.without_tariff)
        .tariff_percent(args.tariff_percent)
        .build();
    let estimate = pricing::estimate(&catalog, &query, &module)?;

    let class = catalog.class(query.voltage);
    if estimate.extrapolation.power
        && let Some((min, max)) = class.power_range()
    {
        warn!(%min, %max, "the requested power is outside the reference range");
    }
    if estimate.extrapolation.energy
        && let Some((min, max)) = class.energy_range()
    {
        warn!(%min, %max, "the requested energy is outside the reference range");
    }
    if estimate.extrapolation.hours
        && let Some((min, max)) = class.backup_range()
    {
        warn!(%min, %max, "the backup duration is outside the reference range");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        println!("{}", build_query_table(&query, &module));
        println!("{}", build_estimate_table(&estimate));
    }
    Ok(())
}
