//! # Report Module
//!
//! Terminal tables (prettytable) for the current conditions, the three
//! series and the Arrhenius fit, plus a JSON dump of everything a plotting
//! front end needs.
use crate::Kinetics::arrhenius::{EA_BASE, EA_CATALYST, ReactionParameters};
use crate::Kinetics::arrhenius_fit::ArrheniusFit;
use crate::Kinetics::explorer::ConditionsSummary;
use crate::Kinetics::kinetics_errors::KineticsError;
use crate::Kinetics::series::{SeriesSet, SeriesTable};
use log::info;
use prettytable::{Cell, Row, Table, row};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn conditions_table(params: &ReactionParameters, summary: &ConditionsSummary) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Parameter", "Value"]);
    table.add_row(row!["Temperature", summary.temperature_display()]);
    table.add_row(row![
        "[A] Concentration",
        format!("{:.2} M", params.concentration_a)
    ]);
    table.add_row(row![
        "[B] Concentration",
        format!("{:.2} M", params.concentration_b)
    ]);
    table.add_row(row!["Reaction Order", params.order.to_string()]);
    table.add_row(row![
        "Catalyst",
        if params.catalyst {
            format!("yes (Ea = {} kJ/mol)", EA_CATALYST / 1000.0)
        } else {
            format!("no (Ea = {} kJ/mol)", EA_BASE / 1000.0)
        }
    ]);
    table.add_row(row!["Rate Constant (k)", summary.rate_constant_display()]);
    table.add_row(row!["Reaction Rate", summary.rate_display()]);
    table.add_row(row!["Half-life", summary.half_life_display()]);
    table
}

/// Any series as a table: header row first, one row per point.
pub fn series_table(series: &impl SeriesTable) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(
        series.headers().into_iter().map(Cell::new).collect(),
    ));
    for row in series.rows() {
        table.add_row(Row::new(row.iter().map(|s| Cell::new(s)).collect()));
    }
    table
}

pub fn fit_table(no_catalyst: &ArrheniusFit, with_catalyst: &ArrheniusFit) -> Table {
    let mut table = Table::new();
    table.add_row(row!["", "No Catalyst", "With Catalyst"]);
    table.add_row(row![
        "Slope, K",
        format!("{:.1}", no_catalyst.slope),
        format!("{:.1}", with_catalyst.slope)
    ]);
    table.add_row(row![
        "Ea from slope, kJ/mol",
        format!("{:.2}", no_catalyst.activation_energy / 1000.0),
        format!("{:.2}", with_catalyst.activation_energy / 1000.0)
    ]);
    table.add_row(row![
        "A from intercept",
        format!("{:.3e}", no_catalyst.pre_exponential),
        format!("{:.3e}", with_catalyst.pre_exponential)
    ]);
    table.add_row(row![
        "R²",
        format!("{:.6}", no_catalyst.r_squared),
        format!("{:.6}", with_catalyst.r_squared)
    ]);
    table
}

#[derive(Debug, Serialize)]
struct SeriesExport<'a> {
    parameters: &'a ReactionParameters,
    rate_constant: f64,
    rate: f64,
    half_life: Option<f64>,
    series: &'a SeriesSet,
}

/// Writes parameters, derived values and all three series as pretty JSON.
pub fn export_series_json(
    params: &ReactionParameters,
    series: &SeriesSet,
    path: impl AsRef<Path>,
) -> Result<(), KineticsError> {
    let summary = ConditionsSummary::from_params(params);
    let export = SeriesExport {
        parameters: params,
        rate_constant: summary.rate_constant,
        rate: summary.rate,
        half_life: summary.half_life,
        series,
    };
    let json = serde_json::to_string_pretty(&export)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json.as_bytes())?;
    info!("series exported to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kinetics::arrhenius::ReactionOrder;
    use crate::Kinetics::series::{ARRHENIUS_SWEEP, arrhenius_series};
    use serde_json::Value;
    use tempfile::NamedTempFile;

    #[test]
    fn test_conditions_table() {
        let params = ReactionParameters::default();
        let summary = ConditionsSummary::from_params(&params);
        let text = conditions_table(&params, &summary).to_string();
        assert!(text.contains("298 K (25°C)"));
        assert!(text.contains("Depends on [A]₀"));
        assert!(text.contains("Second Order"));
        assert!(text.contains("no (Ea = 50 kJ/mol)"));
    }

    #[test]
    fn test_series_table_rows() {
        let set = SeriesSet::generate(&ReactionParameters::default());
        let table = series_table(&set.concentration);
        // header + 30 points
        assert_eq!(table.len(), 31);
        let text = table.to_string();
        assert!(text.contains("[A], M"));
        assert!(text.contains("3.0"));
        for any in set.tables() {
            assert_eq!(series_table(&any).len(), any.len() + 1);
        }
    }

    #[test]
    fn test_fit_table() {
        let series = arrhenius_series(ARRHENIUS_SWEEP);
        let table = fit_table(&series.fit(false).unwrap(), &series.fit(true).unwrap());
        let text = table.to_string();
        assert!(text.contains("50.00"));
        assert!(text.contains("30.00"));
    }

    #[test]
    fn test_export_json() {
        let params = ReactionParameters::new(300.0, 1.2, 0.8, true, ReactionOrder::First);
        let set = SeriesSet::generate(&params);
        let file = NamedTempFile::new().unwrap();
        export_series_json(&params, &set, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let json: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["parameters"]["order"], "First");
        assert_eq!(json["series"]["temperature"].as_array().unwrap().len(), 21);
        assert_eq!(json["series"]["concentration"].as_array().unwrap().len(), 30);
        assert_eq!(json["series"]["arrhenius"].as_array().unwrap().len(), 11);
        assert_eq!(json["series"]["concentration"][0]["label"], "0.1");
        assert!(json["half_life"].as_f64().unwrap() > 0.0);

        let back: SeriesSet = serde_json::from_value(json["series"].clone()).unwrap();
        assert_eq!(back.concentration.0.len(), 30);
    }
}
