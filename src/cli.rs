use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::{
    estimate::{transport::TransportMode, waste::WasteMethod},
    prelude::*,
    quantity::{distance::Kilometers, energy::KilowattHours, mass::Tonnes, volume::Liters},
    tariff::TariffSchedule,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute a single month's electricity bill.
    Bill(BillArgs),

    /// Analyse electricity savings over an inclusive month range.
    Saving(SavingArgs),

    /// Estimate the annual effect of reduced daily water usage.
    Water(WaterArgs),

    /// Estimate the carbon footprint of a daily commute.
    Transport(TransportArgs),

    /// Annual footprint of a waste-handling method.
    Waste(WasteArgs),

    /// Grade a recycling rate against the national average.
    Recycling(RecyclingArgs),

    /// Combine the domain estimates into one annual footprint.
    Tally(Box<TallyArgs>),
}

#[derive(Copy, Clone, Parser)]
pub struct OutputArgs {
    /// Print the result as JSON instead of a table.
    #[clap(long, env = "WADDLE_JSON")]
    pub json: bool,
}

#[derive(Clone, Parser)]
pub struct TariffArgs {
    /// Tariff schedule in TOML format; defaults to the built-in low-voltage
    /// residential schedule.
    #[clap(long = "tariff-file", env = "TARIFF_FILE")]
    pub tariff_file: Option<PathBuf>,
}

impl TariffArgs {
    pub fn schedule(&self) -> Result<TariffSchedule> {
        match &self.tariff_file {
            Some(path) => TariffSchedule::from_toml_file(path),
            None => Ok(TariffSchedule::default()),
        }
    }
}

#[derive(Parser)]
pub struct BillArgs {
    /// Monthly usage in kilowatt-hours.
    #[clap(long = "usage-kwh", env = "USAGE_KWH")]
    pub usage: KilowattHours,

    #[clap(flatten)]
    pub tariff: TariffArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct SavingArgs {
    /// Monthly usage before saving, in kilowatt-hours.
    #[clap(long, default_value = "400", env = "USAGE_BEFORE_KWH")]
    pub before: KilowattHours,

    /// Monthly usage after saving, in kilowatt-hours.
    #[clap(long, default_value = "300", env = "USAGE_AFTER_KWH")]
    pub after: KilowattHours,

    /// First day of the billing period, for example `2024-01-01`.
    #[clap(long, env = "PERIOD_START")]
    pub start: NaiveDate,

    /// Last day of the billing period.
    #[clap(long, env = "PERIOD_END")]
    pub end: NaiveDate,

    #[clap(flatten)]
    pub tariff: TariffArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct WaterArgs {
    /// Daily water usage in liters.
    #[clap(long = "daily-liters", env = "DAILY_WATER_LITERS")]
    pub daily_usage: Liters,

    /// Per-capita daily baseline the usage is compared against.
    #[clap(long = "baseline-liters", default_value = "305", env = "BASELINE_WATER_LITERS")]
    pub baseline: Liters,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct TransportArgs {
    #[clap(long, value_enum, env = "TRANSPORT_MODE")]
    pub mode: TransportMode,

    /// Daily round-trip distance in kilometers.
    #[clap(long = "round-trip-km", default_value = "10", env = "ROUND_TRIP_KM")]
    pub round_trip: Kilometers,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct WasteArgs {
    #[clap(long, value_enum, env = "WASTE_METHOD")]
    pub method: WasteMethod,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct RecyclingArgs {
    /// Total waste in tonnes.
    #[clap(long = "waste-tonnes", env = "WASTE_TONNES")]
    pub waste: Tonnes,

    /// Recycled amount in tonnes.
    #[clap(long = "recycled-tonnes", env = "RECYCLED_TONNES")]
    pub recycled: Tonnes,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Every domain is optional: the tally combines whichever estimates have
/// inputs. The electricity arguments must be given all together or not at
/// all, and so must the transport ones.
#[derive(Parser)]
pub struct TallyArgs {
    /// Monthly usage before saving, in kilowatt-hours.
    #[clap(long, env = "USAGE_BEFORE_KWH", requires = "after")]
    pub before: Option<KilowattHours>,

    /// Monthly usage after saving, in kilowatt-hours.
    #[clap(long, env = "USAGE_AFTER_KWH", requires = "start")]
    pub after: Option<KilowattHours>,

    /// First day of the billing period.
    #[clap(long, env = "PERIOD_START", requires = "end")]
    pub start: Option<NaiveDate>,

    /// Last day of the billing period.
    #[clap(long, env = "PERIOD_END", requires = "before")]
    pub end: Option<NaiveDate>,

    /// Daily water usage in liters.
    #[clap(long = "daily-liters", env = "DAILY_WATER_LITERS")]
    pub daily_water_usage: Option<Liters>,

    #[clap(long = "transport-mode", value_enum, env = "TRANSPORT_MODE", requires = "round_trip")]
    pub transport_mode: Option<TransportMode>,

    /// Daily round-trip distance in kilometers.
    #[clap(long = "round-trip-km", env = "ROUND_TRIP_KM", requires = "transport_mode")]
    pub round_trip: Option<Kilometers>,

    #[clap(long = "waste-method", value_enum, env = "WASTE_METHOD")]
    pub waste_method: Option<WasteMethod>,

    /// Exclude the fixed 1300 kg CO₂e annual baseline from the total.
    #[clap(long = "no-fixed-baseline", env = "NO_FIXED_BASELINE")]
    pub no_fixed_baseline: bool,

    #[clap(flatten)]
    pub tariff: TariffArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}
