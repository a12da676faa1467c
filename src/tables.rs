use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    estimate::{
        electricity::ElectricitySavingEstimate,
        recycling::{NATIONAL_AVERAGE_RATE, RecyclingAssessment},
        transport::TransportEstimate,
        waste::WasteMethod,
        water::WaterEstimate,
    },
    fmt::FormattedPercentage,
    footprint::AggregateFootprint,
    quantity::mass::KilogramsCo2,
    tariff::BillBreakdown,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn value_cell(value: impl ToString) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

#[must_use]
pub fn build_bill_table(bill: &BillBreakdown) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Component", "Amount"]);
    table.add_row(vec![Cell::new("Energy charge"), value_cell(bill.energy_charge)]);
    table.add_row(vec![Cell::new("Electricity fund"), value_cell(bill.fund)]);
    table.add_row(vec![Cell::new("VAT"), value_cell(bill.vat)]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        value_cell(bill.total).add_attribute(Attribute::Bold),
    ]);
    table
}

#[must_use]
pub fn build_saving_table(estimate: &ElectricitySavingEstimate) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Billing period"), value_cell(estimate.months)]);
    table.add_row(vec![
        Cell::new("Saved energy"),
        value_cell(estimate.saved_energy).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Monthly saving rate"),
        value_cell(FormattedPercentage(estimate.saved_percent)),
    ]);
    table.add_row(vec![Cell::new("Bill before"), value_cell(estimate.bill_before.total)]);
    table.add_row(vec![Cell::new("Bill after"), value_cell(estimate.bill_after.total)]);
    table.add_row(vec![
        Cell::new("Saved money"),
        value_cell(estimate.saved_money).fg(Color::Green),
    ]);
    table.add_row(vec![Cell::new("CO₂ before"), value_cell(estimate.co2_before)]);
    table.add_row(vec![Cell::new("CO₂ after"), value_cell(estimate.co2_after)]);
    table.add_row(vec![
        Cell::new("CO₂ avoided").add_attribute(Attribute::Bold),
        value_cell(estimate.co2_saved).add_attribute(Attribute::Bold).fg(Color::Green),
    ]);
    table
}

#[must_use]
pub fn build_water_table(estimate: &WaterEstimate) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Daily saving"), value_cell(estimate.daily_saving)]);
    table.add_row(vec![Cell::new("Annual saving"), value_cell(estimate.annual_saving)]);
    table.add_row(vec![Cell::new("Energy saved"), value_cell(estimate.energy_saved)]);
    table.add_row(vec![
        Cell::new("CO₂ avoided"),
        value_cell(estimate.co2_avoided).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Equivalent trees"),
        value_cell(format!("{:.1} trees", estimate.equivalent_trees)),
    ]);
    table
}

#[must_use]
pub fn build_transport_table(estimate: &TransportEstimate) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Mode"), value_cell(estimate.mode)]);
    table.add_row(vec![Cell::new("Emission factor"), value_cell(estimate.mode.emission_factor())]);
    // The daily figure is conventionally quoted in grams.
    table.add_row(vec![
        Cell::new("Daily CO₂"),
        value_cell(format!("{:.1} g CO₂e", estimate.daily_co2.0)),
    ]);
    table.add_row(vec![
        Cell::new("Annual CO₂").add_attribute(Attribute::Bold),
        value_cell(estimate.annual_co2).add_attribute(Attribute::Bold),
    ]);
    table
}

#[must_use]
pub fn build_waste_table(method: WasteMethod) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Method"), value_cell(method)]);
    table.add_row(vec![Cell::new("Annual CO₂"), value_cell(method.annual_co2())]);
    table
}

#[must_use]
pub fn build_recycling_table(assessment: &RecyclingAssessment) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Recycling rate"),
        value_cell(FormattedPercentage(assessment.rate)),
    ]);
    table.add_row(vec![
        Cell::new("National average"),
        value_cell(FormattedPercentage(NATIONAL_AVERAGE_RATE)),
    ]);
    table.add_row(vec![
        Cell::new("Relative to the average"),
        value_cell(FormattedPercentage(assessment.relative_rate)),
    ]);
    table.add_row(vec![
        Cell::new("Grade").add_attribute(Attribute::Bold),
        value_cell(assessment.grade).add_attribute(Attribute::Bold).fg(assessment.grade.color()),
    ]);
    table
}

#[must_use]
pub fn build_footprint_table(footprint: &AggregateFootprint) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Domain", "Energy", "CO₂"]);
    for domain in &footprint.domains {
        table.add_row(vec![
            Cell::new(domain.label),
            domain.energy.map_or_else(|| Cell::new(""), |energy| value_cell(energy)),
            value_cell(domain.co2),
        ]);
    }
    if footprint.fixed_emission_included {
        table.add_row(vec![
            Cell::new("fixed baseline").add_attribute(Attribute::Dim),
            Cell::new(""),
            value_cell(crate::footprint::FIXED_ANNUAL_EMISSION).add_attribute(Attribute::Dim),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        value_cell(footprint.total_co2).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("World average"),
        Cell::new(""),
        value_cell(footprint.world_average_co2),
    ]);
    table.add_row(vec![
        Cell::new("Delta").add_attribute(Attribute::Bold),
        Cell::new(""),
        value_cell(footprint.delta).add_attribute(Attribute::Bold).fg(
            if footprint.delta > KilogramsCo2::ZERO { Color::Green } else { Color::Red },
        ),
    ]);
    table.add_row(vec![
        Cell::new("Penguins saved"),
        Cell::new(""),
        value_cell(format!("{:.1}", footprint.penguins_saved())),
    ]);
    table
}

/// The visual reward: one bird per whole reward penguin, plus the exact
/// figure.
#[must_use]
pub fn render_penguin_reward(footprint: &AggregateFootprint) -> String {
    let reward = footprint.reward_penguins();
    if reward <= 0.0 {
        return "No penguins saved yet. Cut some more carbon!".to_string();
    }
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = reward.floor() as usize;
    format!("{} ≈ {reward:.1} penguins", "🐧".repeat(whole.max(1)))
}
