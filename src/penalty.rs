//! Statutory late-payment interest, accrued daily on a simple-interest basis.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{AiolosError, Result};

/// ECB main refinancing rate + 8 points, by the half-year it applies from.
const BUILTIN_RATES: &[(i32, u32, f64)] = &[
    (2023, 1, 10.50),
    (2023, 7, 12.00),
    (2024, 1, 12.50),
    (2024, 7, 12.25),
    (2025, 1, 11.15),
    (2025, 7, 10.15),
];

const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RateSchedule {
    /// Month start and annual rate in percent, ascending.
    entries: Vec<(NaiveDate, f64)>,
}

impl RateSchedule {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_RATES
                .iter()
                .filter_map(|(y, m, rate)| NaiveDate::from_ymd_opt(*y, *m, 1).map(|d| (d, *rate)))
                .collect(),
        }
    }

    /// Parse `YYYY-MM` keys. An empty map gives the built-in schedule.
    pub fn from_months(months: &BTreeMap<String, f64>) -> Result<Self> {
        if months.is_empty() {
            return Ok(Self::builtin());
        }
        let mut entries = months
            .iter()
            .map(|(key, rate)| {
                let start = NaiveDate::parse_from_str(&format!("{}-01", key.trim()), "%Y-%m-%d")
                    .map_err(|_| AiolosError::Settings(format!("bad penalty month '{key}', expected YYYY-MM")))?;
                if !rate.is_finite() || *rate < 0.0 {
                    return Err(AiolosError::Settings(format!("bad penalty rate {rate} for {key}")));
                }
                Ok((start, *rate))
            })
            .collect::<Result<Vec<_>>>()?;
        entries.sort_by_key(|(d, _)| *d);
        Ok(Self { entries })
    }

    /// The latest entry starting on or before `day`.
    pub fn rate_on(&self, day: NaiveDate) -> Option<f64> {
        self.entries
            .iter()
            .rev()
            .find(|(from, _)| *from <= day)
            .map(|(_, rate)| *rate)
    }

    pub fn entries(&self) -> &[(NaiveDate, f64)] {
        &self.entries
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthPenalty {
    /// `YYYY-MM`
    pub month: String,
    pub days: u32,
    pub rate: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Penalty {
    pub principal: f64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: u32,
    pub total: f64,
    pub months: Vec<MonthPenalty>,
}

/// Interest on `principal` for every day after `start` up to and including `end`.
pub fn compute(principal: f64, start: NaiveDate, end: NaiveDate, schedule: &RateSchedule) -> Result<Penalty> {
    if end < start {
        return Err(AiolosError::InvalidRange(format!("{end} is before {start}")));
    }
    if !principal.is_finite() || principal < 0.0 {
        return Err(AiolosError::Other(format!("Principal must be zero or more, got {principal}")));
    }

    let mut months: Vec<MonthPenalty> = Vec::new();
    for day in start.iter_days().skip(1).take_while(|d| *d <= end) {
        let rate = schedule
            .rate_on(day)
            .ok_or_else(|| AiolosError::Other(format!("No penalty rate known for {day}")))?;
        let accrued = principal * rate / 100.0 / DAYS_PER_YEAR;
        let month = format!("{:04}-{:02}", day.year(), day.month());
        match months.last_mut() {
            Some(m) if m.month == month && m.rate == rate => {
                m.days += 1;
                m.amount += accrued;
            }
            _ => months.push(MonthPenalty {
                month,
                days: 1,
                rate,
                amount: accrued,
            }),
        }
    }

    Ok(Penalty {
        principal,
        start,
        end,
        days: months.iter().map(|m| m.days).sum(),
        total: months.iter().map(|m| m.amount).sum(),
        months,
    })
}
