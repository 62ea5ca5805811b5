use std::str::FromStr;

use rust_decimal::Decimal;

use crate::app::calculator::Params;
use crate::app::error::{AppError, Result};

/// Raw text of the three input fields, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inputs {
    pub rate: String,
    pub principal: String,
    pub years: String,
}

impl Inputs {
    pub fn parse(&self) -> Result<Params> {
        let rate = parse_decimal("rate", &self.rate)?;
        let principal = parse_decimal("principal", &self.principal)?;
        let years = self
            .years
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid("years", &self.years))?;

        Ok(Params {
            rate: rate / Decimal::ONE_HUNDRED,
            principal,
            years,
        })
    }

    pub fn clear(&mut self) {
        self.rate.clear();
        self.principal.clear();
        self.years.clear();
    }
}

/// Numbers that parse as floats but do not fit a `Decimal`, or lose every
/// significant digit in it, are out of range rather than invalid.
fn parse_decimal(field: &'static str, text: &str) -> Result<Decimal> {
    let s = text.trim();
    let float = s.parse::<f64>().ok().filter(|v| !v.is_nan());
    let nonzero = float.is_some_and(|f| f != 0.0);
    match Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)) {
        Ok(v) if v.is_zero() && nonzero => Err(out_of_range(field, text)),
        Ok(v) => Ok(v),
        Err(_) if float.is_some() => Err(out_of_range(field, text)),
        Err(_) => Err(invalid(field, text)),
    }
}

fn out_of_range(field: &'static str, value: &str) -> AppError {
    AppError::OutOfRange {
        field,
        value: value.to_owned(),
    }
}

fn invalid(field: &'static str, value: &str) -> AppError {
    AppError::InvalidInput {
        field,
        value: value.to_owned(),
    }
}
