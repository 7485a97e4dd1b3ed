use crate::shared::date_utils::{month_end, month_start, year_end, year_start};
use chrono::{Days, NaiveDate, Utc};

/// Source of "today" for resolving relative date presets
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, UTC calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Frozen clock for tests and reproducible presets
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Named, time-relative shortcuts for the date range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePreset {
    Last7Days,
    Last30Days,
    ThisMonth,
    LastMonth,
    YearToDate,
    FullYear,
}

impl DatePreset {
    /// Catalog in display order
    pub const ALL: [DatePreset; 6] = [
        DatePreset::Last7Days,
        DatePreset::Last30Days,
        DatePreset::ThisMonth,
        DatePreset::LastMonth,
        DatePreset::YearToDate,
        DatePreset::FullYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DatePreset::Last7Days => "Last 7 Days",
            DatePreset::Last30Days => "Last 30 Days",
            DatePreset::ThisMonth => "This Month",
            DatePreset::LastMonth => "Last Month",
            DatePreset::YearToDate => "Year to Date",
            DatePreset::FullYear => "Full Year",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Inclusive `(start, end)` range relative to `today`
    pub fn resolve(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            DatePreset::Last7Days => (days_before(today, 7), today),
            DatePreset::Last30Days => (days_before(today, 30), today),
            DatePreset::ThisMonth => (month_start(today), month_end(today)),
            // "Last month" is the month containing today - 30d, which near the
            // end of a 31-day month can still be the current month.
            DatePreset::LastMonth => {
                let anchor = days_before(today, 30);
                (month_start(anchor), month_end(anchor))
            }
            DatePreset::YearToDate => (year_start(today), today),
            DatePreset::FullYear => (year_start(today), year_end(today)),
        }
    }
}

fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_resolve_against_fixed_clock() {
        let today = FixedClock(d(2024, 3, 15)).today();

        assert_eq!(DatePreset::Last7Days.resolve(today), (d(2024, 3, 8), today));
        assert_eq!(DatePreset::Last30Days.resolve(today), (d(2024, 2, 14), today));
        assert_eq!(
            DatePreset::ThisMonth.resolve(today),
            (d(2024, 3, 1), d(2024, 3, 31))
        );
        assert_eq!(
            DatePreset::LastMonth.resolve(today),
            (d(2024, 2, 1), d(2024, 2, 29))
        );
        assert_eq!(DatePreset::YearToDate.resolve(today), (d(2024, 1, 1), today));
        assert_eq!(
            DatePreset::FullYear.resolve(today),
            (d(2024, 1, 1), d(2024, 12, 31))
        );
    }

    #[test]
    fn test_last_month_uses_thirty_day_anchor() {
        // 2024-01-31 - 30d = 2024-01-01, still January
        assert_eq!(
            DatePreset::LastMonth.resolve(d(2024, 1, 31)),
            (d(2024, 1, 1), d(2024, 1, 31))
        );
        // crosses the year boundary
        assert_eq!(
            DatePreset::LastMonth.resolve(d(2024, 1, 10)),
            (d(2023, 12, 1), d(2023, 12, 31))
        );
    }

    #[test]
    fn test_labels_round_trip() {
        for preset in DatePreset::ALL {
            assert_eq!(DatePreset::from_label(preset.label()), Some(preset));
        }
        assert_eq!(DatePreset::from_label("Next Week"), None);
    }
}
