use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::core::{
    catalog::Catalog,
    estimate::PriceEstimate,
    model::{ReferenceModel, Voltage},
    module::ModuleSpec,
    query::Query,
};

pub fn build_catalog_table<'a>(
    models: impl IntoIterator<Item = &'a ReferenceModel>,
    module: &ModuleSpec,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec![
        "Model",
        "Voltage",
        "Power",
        "Energy",
        "Backup",
        "Modules",
        "Base price",
        "With tariff",
        "Tariff",
    ]);
    for model in models {
        table.add_row(vec![
            Cell::new(&model.name),
            Cell::new(model.voltage).add_attribute(Attribute::Dim),
            Cell::new(model.power).set_alignment(CellAlignment::Right),
            Cell::new(model.energy).set_alignment(CellAlignment::Right),
            Cell::new(model.backup_hours)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(module.count_for(model.energy))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(model.price_without_tariff).set_alignment(CellAlignment::Right),
            Cell::new(model.price_with_tariff).set_alignment(CellAlignment::Right),
            Cell::new(model.tariff_percent())
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_ranges_table(catalog: &Catalog, voltages: impl IntoIterator<Item = Voltage>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Voltage", "Models", "Power", "Energy", "Backup"]);
    for voltage in voltages {
        let class = catalog.class(voltage);
        let (Some(power), Some(energy), Some(backup)) =
            (class.power_range(), class.energy_range(), class.backup_range())
        else {
            continue;
        };
        table.add_row(vec![
            Cell::new(voltage),
            Cell::new(class.len())
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(format!("{} – {}", power.0, power.1)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{} – {}", energy.0, energy.1)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{} – {}", backup.0, backup.1)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_query_table(query: &Query, module: &ModuleSpec) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.add_row(vec![Cell::new("Voltage"), Cell::new(query.voltage)]);
    table.add_row(vec![
        Cell::new("Power"),
        Cell::new(query.power).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Energy"),
        Cell::new(query.energy).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Backup duration"),
        Cell::new(query.backup_hours).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Tariff"),
        if query.include_tariff {
            Cell::new(query.tariff_percent).set_alignment(CellAlignment::Right)
        } else {
            Cell::new("excluded").fg(Color::DarkYellow)
        },
    ]);
    table.add_row(vec![
        Cell::new("Module size"),
        Cell::new(module.size)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Module power ceiling"),
        Cell::new(module.power_ceiling)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
    ]);
    table
}

pub fn build_estimate_table(estimate: &PriceEstimate) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.add_row(vec![
        Cell::new("Modules needed"),
        Cell::new(estimate.modules_needed).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Base price"),
        Cell::new(estimate.price_without_tariff).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(format!("Tariff ({})", estimate.tariff_percent)),
        Cell::new(estimate.tariff_amount).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(estimate.price_with_tariff)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Per module"),
        Cell::new(estimate.price_per_module)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Per module with tariff"),
        Cell::new(estimate.price_per_module_with_tariff())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
    ]);
    if estimate.extrapolation.any() {
        table.add_row(vec![
            Cell::new("Note").add_attribute(Attribute::Dim),
            Cell::new("extrapolated beyond the reference range").fg(Color::DarkYellow),
        ]);
    }
    table
}
