//! The `calculate` subcommand.

use crate::OutputFormat;
use clap::Args;
use kmc_mix::{
    CalculatorConfig, Component, DisplayResult, Field, MixCalculator, MixDisplay, MixRequest,
    MixResult,
};
use kmc_utils::numbers::format_fixed;
use log::info;
use serde::Serialize;
use std::io::Write;

/// Inputs for one calculation. Costs and percentages that are left out
/// take the default recipe's values.
#[derive(Debug, Args)]
pub struct CalculateArgs {
    /// Total batch weight in pounds
    #[arg(short = 't', long)]
    pub total_weight: Option<String>,

    /// Known water weight in pounds
    #[arg(long)]
    pub water_weight: Option<String>,

    /// Known boric acid weight in pounds
    #[arg(long)]
    pub boric_acid_weight: Option<String>,

    /// Known Tru-Core Concentrate weight in pounds
    #[arg(long)]
    pub tru_core_weight: Option<String>,

    /// Known Chromostop weight in pounds
    #[arg(long)]
    pub chromostop_weight: Option<String>,

    /// Water cost in $/lb [default: 0.0000]
    #[arg(long)]
    pub water_cost: Option<String>,

    /// Boric acid cost in $/lb [default: 0.8586]
    #[arg(long)]
    pub boric_acid_cost: Option<String>,

    /// Tru-Core Concentrate cost in $/lb [default: 13.0857]
    #[arg(long)]
    pub tru_core_cost: Option<String>,

    /// Chromostop cost in $/lb [default: 5.1237]
    #[arg(long)]
    pub chromostop_cost: Option<String>,

    /// Water share of the mix in percent [default: 73.5]
    #[arg(long)]
    pub water_percentage: Option<String>,

    /// Boric acid share of the mix in percent [default: 3.5]
    #[arg(long)]
    pub boric_acid_percentage: Option<String>,

    /// Tru-Core Concentrate share of the mix in percent [default: 21]
    #[arg(long)]
    pub tru_core_percentage: Option<String>,

    /// Chromostop share of the mix in percent [default: 2]
    #[arg(long)]
    pub chromostop_percentage: Option<String>,

    /// Set any input by name, e.g. `--field boric_acid_weight=35`.
    /// Applied after the other flags.
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub fields: Vec<(String, String)>,

    /// Accept percentages that add up to within this much of 100
    #[arg(long, env = "KMC_PERCENT_TOLERANCE", default_value_t = 0.0)]
    pub percent_tolerance: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {:?}", s))?;
    Ok((name.trim().to_string(), value.to_string()))
}

impl CalculateArgs {
    fn flags(&self) -> [(Field, &Option<String>); 13] {
        use Component::{BoricAcid, Chromostop, TruCore, Water};
        [
            (Field::TotalWeight, &self.total_weight),
            (Field::Weight(Water), &self.water_weight),
            (Field::Weight(BoricAcid), &self.boric_acid_weight),
            (Field::Weight(TruCore), &self.tru_core_weight),
            (Field::Weight(Chromostop), &self.chromostop_weight),
            (Field::UnitCost(Water), &self.water_cost),
            (Field::UnitCost(BoricAcid), &self.boric_acid_cost),
            (Field::UnitCost(TruCore), &self.tru_core_cost),
            (Field::UnitCost(Chromostop), &self.chromostop_cost),
            (Field::Percentage(Water), &self.water_percentage),
            (Field::Percentage(BoricAcid), &self.boric_acid_percentage),
            (Field::Percentage(TruCore), &self.tru_core_percentage),
            (Field::Percentage(Chromostop), &self.chromostop_percentage),
        ]
    }

    /// The seeded form with every given flag and `--field` applied.
    pub fn to_request(&self) -> anyhow::Result<MixRequest> {
        let mut request = MixRequest::seeded();
        for (field, value) in self.flags() {
            if let Some(text) = value {
                request.set(field, text.as_str());
            }
        }
        request.apply_fields(self.fields.iter().map(|(name, text)| (name, text.as_str())))?;
        Ok(request)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    display: &'a DisplayResult,
    /// Full-precision values; absent when the calculation failed.
    result: Option<&'a MixResult>,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    item: &'a str,
    weight_lbs: String,
    cost_per_lb: Option<String>,
}

fn write_csv(result: &MixResult, out: &mut impl Write) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for (component, weight) in result.weights.iter() {
        wtr.serialize(CsvRow {
            item: component.label(),
            weight_lbs: format_fixed(*weight, 2),
            cost_per_lb: None,
        })?;
    }
    wtr.serialize(CsvRow {
        item: "Total",
        weight_lbs: format_fixed(result.total_weight, 2),
        cost_per_lb: Some(format_fixed(result.blended_cost, 2)),
    })?;
    wtr.flush()?;
    Ok(())
}

/// Run one calculation and write the outcome in the requested format.
///
/// A failed calculation is returned as the error, carrying the message
/// meant for the user. JSON output still prints the error payload first.
pub fn run_calculate(args: &CalculateArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let calculator = MixCalculator::new(CalculatorConfig::with_percent_tolerance(
        args.percent_tolerance,
    )?);
    let request = args.to_request()?;

    info!(
        "Calculating mix (percentage tolerance {})",
        calculator.config().percent_tolerance()
    );
    let outcome = calculator.calculate_mix(&request);

    match (&outcome, args.format) {
        (Ok(result), OutputFormat::Text) => {
            writeln!(out, "{}", MixDisplay::from(result))?;
        }
        (Ok(result), OutputFormat::Csv) => write_csv(result, out)?,
        (_, OutputFormat::Json) => {
            let display = DisplayResult::from(outcome.clone());
            let report = JsonReport {
                display: &display,
                result: outcome.as_ref().ok(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        (Err(_), _) => {}
    }

    match outcome {
        Ok(result) => {
            info!("Mix derived via {:?}", result.mode);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
