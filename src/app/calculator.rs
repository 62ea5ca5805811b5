use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy::MidpointAwayFromZero;

use crate::app::error::{AppError, Result};

/// Projection parameters. `rate` is a fraction, not a percentage.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Params {
    pub rate: Decimal,
    pub principal: Decimal,
    pub years: i64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub year: i64,
    pub balance: Decimal,
}

impl Entry {
    /// Balance rounded half away from zero, always with two decimals.
    pub fn total(&self) -> Decimal {
        let mut total = self.balance.round_dp_with_strategy(2, MidpointAwayFromZero);
        total.rescale(2);
        total
    }

    pub fn point(&self) -> [f64; 2] {
        [self.year as f64, self.balance.to_f64().unwrap_or(f64::NAN)]
    }
}

pub type Series = Vec<Entry>;

/// Longest projection the table and chart are asked to hold.
pub const MAX_YEARS: i64 = 10_000;

/// Annual compounding, one entry per year starting at year 1.
pub fn project(params: &Params) -> Result<Series> {
    if params.years > MAX_YEARS {
        return Err(AppError::OutOfRange {
            field: "years",
            value: params.years.to_string(),
        });
    }
    let growth = Decimal::ONE
        .checked_add(params.rate)
        .ok_or(AppError::Overflow { year: 1 })?;

    let mut balance = params.principal;
    let mut series = Vec::with_capacity(params.years.max(0) as usize);
    for year in 1..=params.years {
        balance = balance
            .checked_mul(growth)
            .ok_or(AppError::Overflow { year })?;
        series.push(Entry { year, balance });
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(rate: i64, principal: i64, years: i64) -> Params {
        Params {
            rate: Decimal::new(rate, 2),
            principal: Decimal::new(principal, 0),
            years,
        }
    }

    fn totals(series: &Series) -> Vec<String> {
        series.iter().map(|e| e.total().to_string()).collect()
    }

    #[test]
    fn ten_percent_on_a_thousand() {
        let series = project(&params(10, 1000, 3)).unwrap();
        let years: Vec<i64> = series.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![1, 2, 3]);
        assert_eq!(totals(&series), vec!["1100.00", "1210.00", "1331.00"]);
    }

    #[test]
    fn zero_rate_keeps_the_principal() {
        let series = project(&params(0, 500, 5)).unwrap();
        assert_eq!(series.len(), 5);
        assert!(totals(&series).iter().all(|t| t == "500.00"));
    }

    #[test]
    fn one_entry_per_year() {
        for years in [1, 2, 10, 40] {
            assert_eq!(project(&params(7, 250, years)).unwrap().len(), years as usize);
        }
    }

    #[test]
    fn positive_rate_strictly_increases() {
        let p = Params {
            rate: Decimal::new(35, 4),
            principal: Decimal::new(123456, 2),
            years: 30,
        };
        let series = project(&p).unwrap();
        assert_eq!(series[0].balance, p.principal * (Decimal::ONE + p.rate));
        for pair in series.windows(2) {
            assert!(pair[1].balance > pair[0].balance);
        }
    }

    #[test]
    fn negative_principal_grows_in_magnitude() {
        let series = project(&params(5, -2000, 20)).unwrap();
        assert_eq!(series[0].total().to_string(), "-2100.00");
        for pair in series.windows(2) {
            assert!(pair[1].balance.abs() > pair[0].balance.abs());
        }
    }

    #[test]
    fn years_are_capped() {
        let at_cap = project(&params(0, 1, MAX_YEARS)).unwrap();
        assert_eq!(at_cap.len(), MAX_YEARS as usize);

        for years in [MAX_YEARS + 1, 10_000_000_000] {
            match project(&params(0, 1, years)) {
                Err(AppError::OutOfRange { field, value }) => {
                    assert_eq!(field, "years");
                    assert_eq!(value, years.to_string());
                }
                other => panic!("expected {years} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn negative_rate_shrinks() {
        let series = project(&params(-50, 1000, 2)).unwrap();
        assert_eq!(totals(&series), vec!["500.00", "250.00"]);
    }

    #[test]
    fn non_positive_years_give_an_empty_series() {
        assert!(project(&params(10, 1000, 0)).unwrap().is_empty());
        assert!(project(&params(10, 1000, -4)).unwrap().is_empty());
    }

    #[test]
    fn totals_round_half_away_from_zero() {
        let e = Entry {
            year: 1,
            balance: Decimal::new(10005, 3),
        };
        assert_eq!(e.total().to_string(), "10.01");
        let e = Entry {
            year: 1,
            balance: Decimal::new(-10005, 3),
        };
        assert_eq!(e.total().to_string(), "-10.01");
    }

    #[test]
    fn overflow_is_reported_with_its_year() {
        let p = Params {
            rate: Decimal::new(100_000, 0),
            principal: Decimal::new(1_000_000, 0),
            years: 50,
        };
        match project(&p) {
            Err(AppError::Overflow { year }) => assert!(year > 1 && year <= 50),
            other => panic!("expected overflow, got {other:?}"),
        }
    }

    #[test]
    fn chart_points_follow_the_table() {
        let series = project(&params(10, 1000, 2)).unwrap();
        let points: Vec<[f64; 2]> = series.iter().map(Entry::point).collect();
        assert_eq!(points, vec![[1.0, 1100.0], [2.0, 1210.0]]);
    }
}
