//! Load calculator scenarios from CSV
//!
//! Columns: ScenarioID, Calculator, Amount, Rate, Years, StepUp, Withdrawal,
//! Basic, DA, HRA, Rent, Metro. Columns a calculator does not use may be empty.

use super::{Calculation, HraInput, Scenario, SipInput, StepUpSipInput, SwpInput};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioID")]
    scenario_id: u32,
    #[serde(rename = "Calculator")]
    calculator: String,
    #[serde(rename = "Amount")]
    amount: Option<f64>,
    #[serde(rename = "Rate")]
    rate: Option<f64>,
    #[serde(rename = "Years")]
    years: Option<u32>,
    #[serde(rename = "StepUp")]
    step_up: Option<f64>,
    #[serde(rename = "Withdrawal")]
    withdrawal: Option<f64>,
    #[serde(rename = "Basic")]
    basic: Option<f64>,
    #[serde(rename = "DA")]
    da: Option<f64>,
    #[serde(rename = "HRA")]
    hra: Option<f64>,
    #[serde(rename = "Rent")]
    rent: Option<f64>,
    #[serde(rename = "Metro")]
    metro: Option<String>,
}

impl CsvRow {
    fn required<T>(&self, value: Option<T>, column: &str) -> Result<T, Box<dyn Error>> {
        value.ok_or_else(|| {
            format!(
                "Scenario {}: missing {} for calculator {}",
                self.scenario_id, column, self.calculator
            )
            .into()
        })
    }

    fn metro_flag(&self) -> Result<bool, Box<dyn Error>> {
        let raw = self.metro.as_deref().unwrap_or("").trim().to_ascii_lowercase();
        match raw.as_str() {
            "" | "no" | "n" | "false" => Ok(false),
            "yes" | "y" | "true" => Ok(true),
            other => Err(format!("Scenario {}: unknown Metro flag: {}", self.scenario_id, other).into()),
        }
    }

    fn to_scenario(self) -> Result<Scenario, Box<dyn Error>> {
        let calculation = match self.calculator.trim().to_ascii_lowercase().as_str() {
            "sip" => Calculation::Sip(SipInput::periodic(
                self.required(self.amount, "Amount")?,
                self.required(self.rate, "Rate")?,
                self.required(self.years, "Years")?,
            )),
            "lumpsum" => Calculation::Sip(SipInput::lumpsum(
                self.required(self.amount, "Amount")?,
                self.required(self.rate, "Rate")?,
                self.required(self.years, "Years")?,
            )),
            "stepup" | "step-up" => Calculation::StepUp(StepUpSipInput::new(
                self.required(self.amount, "Amount")?,
                self.step_up.unwrap_or(0.0),
                self.required(self.rate, "Rate")?,
                self.required(self.years, "Years")?,
            )),
            "swp" => Calculation::Swp(SwpInput::new(
                self.required(self.amount, "Amount")?,
                self.withdrawal.unwrap_or(0.0),
                self.required(self.rate, "Rate")?,
                self.required(self.years, "Years")?,
            )),
            "hra" => Calculation::Hra(HraInput::from_salary(
                self.required(self.basic, "Basic")?,
                self.da.unwrap_or(0.0),
                self.required(self.hra, "HRA")?,
                self.required(self.rent, "Rent")?,
                self.metro_flag()?,
            )),
            other => return Err(format!("Unknown Calculator: {}", other).into()),
        };

        Ok(Scenario {
            scenario_id: self.scenario_id,
            calculation,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let reader = std::fs::File::open(path)?;
    load_scenarios_from_reader(reader)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    log::debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::SipMode;

    const HEADER: &str = "ScenarioID,Calculator,Amount,Rate,Years,StepUp,Withdrawal,Basic,DA,HRA,Rent,Metro\n";

    fn load(rows: &str) -> Result<Vec<Scenario>, Box<dyn Error>> {
        load_scenarios_from_reader(format!("{}{}", HEADER, rows).as_bytes())
    }

    #[test]
    fn test_load_each_calculator() {
        let scenarios = load(
            "1,sip,5000,12,10,,,,,,,\n\
             2,lumpsum,100000,12,10,,,,,,,\n\
             3,stepup,5000,12,40,10,,,,,,\n\
             4,swp,1000000,12,10,,10000,,,,,\n\
             5,hra,,,,,,40000,10000,20000,15000,yes\n",
        )
        .expect("Failed to load scenarios");

        assert_eq!(scenarios.len(), 5);
        assert_eq!(scenarios[0].calculation, Calculation::Sip(SipInput::periodic(5000.0, 12.0, 10)));
        match scenarios[1].calculation {
            Calculation::Sip(input) => assert_eq!(input.mode, SipMode::Lumpsum),
            other => panic!("unexpected calculation {:?}", other),
        }
        assert_eq!(
            scenarios[2].calculation,
            Calculation::StepUp(StepUpSipInput::new(5000.0, 10.0, 12.0, 40))
        );
        assert_eq!(
            scenarios[3].calculation,
            Calculation::Swp(SwpInput::new(1_000_000.0, 10_000.0, 12.0, 10))
        );
        assert_eq!(
            scenarios[4].calculation,
            Calculation::Hra(HraInput::new(50_000.0, 20_000.0, 15_000.0, true))
        );
        assert_eq!(scenarios[4].scenario_id, 5);
    }

    #[test]
    fn test_missing_required_column() {
        let err = load("7,swp,1000000,,10,,10000,,,,,\n").unwrap_err();
        assert_eq!(err.to_string(), "Scenario 7: missing Rate for calculator swp");
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert!(load("1,fd,5000,7,5,,,,,,,\n").is_err());
        assert!(load("2,hra,,,,,,40000,0,20000,15000,maybe\n").is_err());
    }
}
