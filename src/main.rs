#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod calendar;
mod cli;
#[macro_use]
mod error;
mod estimate;
mod fmt;
mod footprint;
mod prelude;
mod quantity;
mod tables;
mod tariff;

use clap::{Parser, crate_version};
use comfy_table::Table;
use serde::Serialize;

use crate::{
    calendar::count_months,
    cli::{Args, Command},
    estimate::{electricity, recycling, transport, waste, water},
    footprint::AggregateFootprint,
    prelude::*,
    tables::{
        build_bill_table,
        build_footprint_table,
        build_recycling_table,
        build_saving_table,
        build_transport_table,
        build_waste_table,
        build_water_table,
        render_penguin_reward,
    },
};

#[allow(clippy::too_many_lines)]
fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Bill(args) => {
            let schedule = args.tariff.schedule()?;
            let bill = schedule.bill(args.usage)?;
            info!(total = ?bill.total, "computed the bill");
            emit(args.output.json, &bill, build_bill_table(&bill))?;
        }

        Command::Saving(args) => {
            let schedule = args.tariff.schedule()?;
            let months = count_months(args.start, args.end)?;
            let saving = electricity::estimate(args.before, args.after, months, &schedule)?;
            info!(
                months = months.0,
                saved_energy = ?saving.saved_energy,
                saved_money = ?saving.saved_money,
                "analysed the saving",
            );
            emit(args.output.json, &saving, build_saving_table(&saving))?;
        }

        Command::Water(args) => {
            let estimate = water::estimate(args.daily_usage, args.baseline)?;
            info!(co2_avoided = ?estimate.co2_avoided, "estimated the water saving");
            emit(args.output.json, &estimate, build_water_table(&estimate))?;
        }

        Command::Transport(args) => {
            let estimate = transport::estimate(args.mode, args.round_trip)?;
            info!(annual_co2 = ?estimate.annual_co2, "estimated the commute footprint");
            emit(args.output.json, &estimate, build_transport_table(&estimate))?;
        }

        Command::Waste(args) => {
            let estimate = waste::estimate(args.method);
            emit(args.output.json, &estimate, build_waste_table(args.method))?;
        }

        Command::Recycling(args) => {
            let assessment = recycling::grade(args.waste, args.recycled)?;
            info!(grade = %assessment.grade, "graded the recycling rate");
            emit(args.output.json, &assessment, build_recycling_table(&assessment))?;
        }

        Command::Tally(args) => {
            let electricity_estimate =
                match (args.before, args.after, args.start, args.end) {
                    (Some(before), Some(after), Some(start), Some(end)) => {
                        let schedule = args.tariff.schedule()?;
                        let months = count_months(start, end)?;
                        let saving = electricity::estimate(before, after, months, &schedule)?;
                        Some(saving.into_domain())
                    }
                    (None, None, None, None) => None,
                    _ => {
                        bail!("the electricity tally needs --before, --after, --start, and --end")
                    }
                };
            let water_estimate = args.daily_water_usage.map(water::footprint).transpose()?;
            let transport_estimate = match (args.transport_mode, args.round_trip) {
                (Some(mode), Some(round_trip)) => {
                    Some(transport::estimate(mode, round_trip)?.into_domain())
                }
                (None, None) => None,
                _ => bail!("the transport tally needs both --transport-mode and --round-trip-km"),
            };
            let waste_estimate = args.waste_method.map(waste::estimate);

            let footprint = AggregateFootprint::builder()
                .maybe_electricity(electricity_estimate)
                .maybe_water(water_estimate)
                .maybe_transport(transport_estimate)
                .maybe_waste(waste_estimate)
                .include_fixed_baseline(!args.no_fixed_baseline)
                .build();
            info!(
                n_domains = footprint.domains.len(),
                total_co2 = ?footprint.total_co2,
                delta = ?footprint.delta,
                "tallied the footprint",
            );
            emit(args.output.json, &footprint, build_footprint_table(&footprint))?;
            if !args.output.json {
                println!("{}", render_penguin_reward(&footprint));
            }
        }
    }

    info!("done!");
    Ok(())
}

fn emit<T: Serialize>(json: bool, value: &T, table: Table) -> Result {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{table}");
    }
    Ok(())
}
