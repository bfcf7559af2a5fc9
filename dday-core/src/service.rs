//! Service period countdown
//!
//! A service period runs from an entry date to a discharge date. From it we
//! derive the signed D-day count, elapsed and remaining days, and progress.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Error, Result};

/// A validated entry/discharge date pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePeriod {
    entry: NaiveDate,
    discharge: NaiveDate,
}

impl ServicePeriod {
    /// Create a period; discharge must come strictly after entry.
    pub fn new(entry: NaiveDate, discharge: NaiveDate) -> Result<Self> {
        if entry >= discharge {
            return Err(Error::InvalidServicePeriod(format!(
                "discharge date {} must be after entry date {}",
                discharge, entry
            )));
        }
        Ok(Self { entry, discharge })
    }

    /// Create a period for someone still serving: discharge may not be in the past.
    pub fn for_enlistment(entry: NaiveDate, discharge: NaiveDate, today: NaiveDate) -> Result<Self> {
        let period = Self::new(entry, discharge)?;
        if discharge < today {
            return Err(Error::InvalidServicePeriod(format!(
                "discharge date {} is before today ({})",
                discharge, today
            )));
        }
        Ok(period)
    }

    /// Build from optional configured dates.
    pub fn from_dates(entry: Option<NaiveDate>, discharge: Option<NaiveDate>) -> Result<Self> {
        match (entry, discharge) {
            (Some(entry), Some(discharge)) => Self::new(entry, discharge),
            _ => Err(Error::InvalidServicePeriod(
                "both entry and discharge dates are required".to_string(),
            )),
        }
    }

    pub fn entry(&self) -> NaiveDate {
        self.entry
    }

    pub fn discharge(&self) -> NaiveDate {
        self.discharge
    }

    /// Length of the period in days.
    pub fn total_days(&self) -> i64 {
        (self.discharge - self.entry).num_days()
    }

    /// Countdown snapshot as of `today`.
    pub fn dday(&self, today: NaiveDate) -> DDayInfo {
        let total_service_days = self.total_days();
        let service_days = (today - self.entry)
            .num_days()
            .clamp(0, total_service_days);

        DDayInfo {
            dday_count: (self.discharge - today).num_days(),
            service_days,
            total_service_days,
            remaining_days: total_service_days - service_days,
            entry_date: self.entry,
            discharge_date: self.discharge,
            progress_percentage: service_days as f64 / total_service_days as f64 * 100.0,
        }
    }
}

/// D-day snapshot for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DDayInfo {
    /// Days until discharge; zero on the day, negative afterwards
    pub dday_count: i64,
    /// Days served so far, within `0..=total_service_days`
    pub service_days: i64,
    pub total_service_days: i64,
    pub remaining_days: i64,
    pub entry_date: NaiveDate,
    pub discharge_date: NaiveDate,
    /// Share of the period served, 0.0 to 100.0
    pub progress_percentage: f64,
}

impl DDayInfo {
    /// Countdown label: `D-12`, `D-Day`, or `D+3`.
    pub fn label(&self) -> String {
        match self.dday_count {
            n if n > 0 => format!("D-{}", n),
            0 => "D-Day".to_string(),
            n => format!("D+{}", n.abs()),
        }
    }

    pub fn urgency(&self) -> Urgency {
        Urgency::from_dday(self.dday_count)
    }

    pub fn is_discharged(&self) -> bool {
        self.dday_count < 0
    }
}

/// How close discharge is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// More than 30 days left
    Relaxed,
    /// 8 to 30 days left
    Approaching,
    /// 1 to 7 days left
    Imminent,
    /// Discharge day
    Today,
    /// Already discharged
    Completed,
}

impl Urgency {
    pub fn from_dday(dday: i64) -> Self {
        match dday {
            n if n > 30 => Urgency::Relaxed,
            n if n > 7 => Urgency::Approaching,
            n if n > 0 => Urgency::Imminent,
            0 => Urgency::Today,
            _ => Urgency::Completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Relaxed => "relaxed",
            Urgency::Approaching => "approaching",
            Urgency::Imminent => "imminent",
            Urgency::Today => "today",
            Urgency::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period() -> ServicePeriod {
        ServicePeriod::new(date(2025, 3, 4), date(2026, 9, 3)).unwrap()
    }

    #[test]
    fn test_period_validation() {
        assert!(ServicePeriod::new(date(2026, 1, 1), date(2026, 1, 1)).is_err());
        assert!(ServicePeriod::new(date(2026, 1, 2), date(2026, 1, 1)).is_err());
        assert!(ServicePeriod::from_dates(Some(date(2026, 1, 1)), None).is_err());

        let today = date(2026, 10, 19);
        let err = ServicePeriod::for_enlistment(date(2025, 3, 4), date(2026, 9, 3), today);
        assert!(matches!(err, Err(Error::InvalidServicePeriod(_))));
        assert!(ServicePeriod::for_enlistment(date(2025, 3, 4), today, today).is_ok());
    }

    #[test]
    fn test_dday_midway() {
        let info = period().dday(date(2025, 12, 3));
        assert_eq!(info.total_service_days, 548);
        assert_eq!(info.service_days, 274);
        assert_eq!(info.remaining_days, 274);
        assert_eq!(info.dday_count, 274);
        assert_eq!(info.progress_percentage, 50.0);
        assert_eq!(info.label(), "D-274");
        assert_eq!(info.urgency(), Urgency::Relaxed);
    }

    #[test]
    fn test_dday_boundaries() {
        let p = period();

        let before = p.dday(date(2025, 3, 1));
        assert_eq!(before.service_days, 0);
        assert_eq!(before.progress_percentage, 0.0);

        let on_day = p.dday(date(2026, 9, 3));
        assert_eq!(on_day.dday_count, 0);
        assert_eq!(on_day.label(), "D-Day");
        assert_eq!(on_day.urgency(), Urgency::Today);
        assert_eq!(on_day.progress_percentage, 100.0);

        let after = p.dday(date(2026, 10, 19));
        assert_eq!(after.dday_count, -46);
        assert_eq!(after.label(), "D+46");
        assert_eq!(after.service_days, after.total_service_days);
        assert_eq!(after.remaining_days, 0);
        assert_eq!(after.progress_percentage, 100.0);
        assert!(after.is_discharged());
    }

    #[test]
    fn test_urgency_tiers() {
        assert_eq!(Urgency::from_dday(31), Urgency::Relaxed);
        assert_eq!(Urgency::from_dday(30), Urgency::Approaching);
        assert_eq!(Urgency::from_dday(8), Urgency::Approaching);
        assert_eq!(Urgency::from_dday(7), Urgency::Imminent);
        assert_eq!(Urgency::from_dday(1), Urgency::Imminent);
        assert_eq!(Urgency::from_dday(0), Urgency::Today);
        assert_eq!(Urgency::from_dday(-1), Urgency::Completed);
    }
}
