//! The `defaults` subcommand: the recipe the mix form starts with.

use crate::OutputFormat;
use kmc_mix::{
    defaults::{DEFAULT_PERCENTAGES, DEFAULT_PERCENTAGE_TEXT, DEFAULT_UNIT_COSTS, UNIT_COST_PLACES},
    Component,
};
use kmc_utils::numbers::format_fixed;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct SeedRow {
    component: Component,
    percentage: f64,
    unit_cost: f64,
}

fn seed_rows() -> Vec<SeedRow> {
    Component::ALL
        .into_iter()
        .map(|component| SeedRow {
            component,
            percentage: DEFAULT_PERCENTAGES[component],
            unit_cost: DEFAULT_UNIT_COSTS[component],
        })
        .collect()
}

pub fn run_defaults(format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for component in Component::ALL {
                writeln!(
                    out,
                    "{:<22}{:>6}%  ${}/lb",
                    component.label(),
                    DEFAULT_PERCENTAGE_TEXT[component],
                    format_fixed(DEFAULT_UNIT_COSTS[component], UNIT_COST_PLACES)
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &seed_rows())?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for row in seed_rows() {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        run_defaults(format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_defaults() {
        assert_eq!(
            render(OutputFormat::Text),
            "Water                   73.5%  $0.0000/lb\n\
             Boric Acid               3.5%  $0.8586/lb\n\
             Tru-Core Concentrate      21%  $13.0857/lb\n\
             Chromostop                 2%  $5.1237/lb\n"
        );
    }

    #[test]
    fn test_csv_defaults() {
        assert_eq!(
            render(OutputFormat::Csv),
            "component,percentage,unit_cost\n\
             water,73.5,0.0\n\
             boric_acid,3.5,0.8586\n\
             tru_core,21.0,13.0857\n\
             chromostop,2.0,5.1237\n"
        );
    }

    #[test]
    fn test_json_defaults() {
        let json: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["component"], "water");
        assert!((rows[2]["unit_cost"].as_f64().unwrap() - 13.0857).abs() < 1e-12);
        let sum: f64 = rows.iter().map(|r| r["percentage"].as_f64().unwrap()).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }
}
