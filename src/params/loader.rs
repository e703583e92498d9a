//! Load named scenarios from CSV

use super::InvestmentParams;
use crate::error::PlannerError;
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    initial_capital: f64,
    monthly_contribution: f64,
    annual_interest_rate: f64,
    years: u32,
    inflation_rate: f64,
    apply_tax: bool,
    tax_rate: Option<f64>,
}

impl CsvRow {
    fn into_scenario(self) -> Result<NamedScenario, PlannerError> {
        let numbers = [
            ("initial_capital", self.initial_capital),
            ("monthly_contribution", self.monthly_contribution),
            ("annual_interest_rate", self.annual_interest_rate),
            ("inflation_rate", self.inflation_rate),
            ("tax_rate", self.tax_rate.unwrap_or(0.0)),
        ];
        if let Some((field, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PlannerError::InvalidScenario {
                name: self.name,
                reason: format!("{} is not a finite number ({})", field, value),
            });
        }

        Ok(NamedScenario {
            name: self.name,
            params: InvestmentParams {
                initial_capital: self.initial_capital,
                monthly_contribution: self.monthly_contribution,
                annual_interest_rate: self.annual_interest_rate,
                years: self.years,
                inflation_rate: self.inflation_rate,
                apply_tax: self.apply_tax,
                tax_rate: self.tax_rate,
            },
        })
    }
}

/// A parameter set with a display name
#[derive(Debug, Clone, PartialEq)]
pub struct NamedScenario {
    pub name: String,
    pub params: InvestmentParams,
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>, PlannerError> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedScenario>, PlannerError> {
    collect_scenarios(Reader::from_reader(reader))
}

fn collect_scenarios<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<NamedScenario>, PlannerError> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario()?);
    }

    log::debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "name,initial_capital,monthly_contribution,annual_interest_rate,years,inflation_rate,apply_tax,tax_rate\n";

    #[test]
    fn test_load_scenarios_from_reader() {
        let data = format!(
            "{}{}{}",
            HEADER,
            "baseline,0,100,7,10,0,false,\n",
            "taxed,5000,250,5.5,20,2,true,12.5\n",
        );

        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].name, "baseline");
        assert_eq!(scenarios[0].params, InvestmentParams::default());

        let taxed = &scenarios[1].params;
        assert_eq!(taxed.years, 20);
        assert!(taxed.apply_tax);
        assert_eq!(taxed.tax_rate, Some(12.5));
    }

    #[test]
    fn test_negative_years_rejected_by_parser() {
        let data = format!("{}{}", HEADER, "bad,0,100,7,-3,0,false,\n");
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::Csv(_)));
    }

    #[test]
    fn test_non_finite_rate_rejected() {
        let data = format!("{}{}", HEADER, "wild,0,100,NaN,10,0,false,\n");
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        match err {
            PlannerError::InvalidScenario { name, reason } => {
                assert_eq!(name, "wild");
                assert!(reason.contains("annual_interest_rate"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_scenarios("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, PlannerError::Csv(_)));
    }
}
