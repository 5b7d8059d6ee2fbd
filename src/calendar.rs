use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::errors::{PlanError, Result};
use crate::holidays::NATIONAL_HOLIDAYS;

/// weekend- and holiday-aware calendar used for due-date adjustment and
/// business-day counting
#[derive(Debug, Clone)]
pub struct BusinessCalendar {
    /// sorted ascending for binary search
    holidays: Vec<NaiveDate>,
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self::brazilian()
    }
}

impl BusinessCalendar {
    /// calendar backed by the built-in brazilian national holiday table
    pub fn brazilian() -> Self {
        let holidays = NATIONAL_HOLIDAYS
            .iter()
            .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
            .collect();
        Self { holidays }
    }

    /// calendar backed by a caller-provided holiday table
    pub fn with_holidays(mut holidays: Vec<NaiveDate>) -> Self {
        holidays.sort_unstable();
        holidays.dedup();
        Self { holidays }
    }

    /// monday through friday and not in the holiday table
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
            && self.holidays.binary_search(&date).is_err()
    }

    /// smallest business day at or after `date`; unchanged when `date`
    /// already is one
    pub fn next_business_day(&self, mut date: NaiveDate) -> NaiveDate {
        while !self.is_business_day(date) {
            date += Duration::days(1);
        }
        date
    }

    /// business days in the half-open interval (start, end]
    pub fn business_days_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let mut count = 0;
        let mut day = start;
        while day < end {
            day += Duration::days(1);
            if self.is_business_day(day) {
                count += 1;
            }
        }
        count
    }

    /// next day a disbursement can settle: the first business day at or
    /// after `base`
    pub fn next_disbursement_date(&self, base: NaiveDate) -> NaiveDate {
        self.next_business_day(base)
    }

    /// window of `days` business days; start is the first business day at or
    /// after `base` and counts as the first of the window
    pub fn disbursement_date_range(
        &self,
        base: NaiveDate,
        days: u32,
    ) -> Result<(NaiveDate, NaiveDate)> {
        if days == 0 {
            return Err(PlanError::InvalidDate {
                message: "disbursement range needs at least one business day".to_string(),
            });
        }
        let start = self.next_business_day(base);
        let mut end = start;
        for _ in 1..days {
            end = self.next_business_day(end + Duration::days(1));
        }
        Ok((start, end))
    }

    /// non-business days in the inclusive interval [start, end]
    pub fn non_business_days_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut day = start;
        while day <= end {
            if !self.is_business_day(day) {
                days.push(day);
            }
            day += Duration::days(1);
        }
        days
    }
}

/// month addition with end-of-month clamping; repeated addition compounds
/// the clamp (jan 31 -> feb 28 -> mar 28)
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let mut current = date;
    for _ in 0..months {
        let (year, month) = if current.month() == 12 {
            (current.year() + 1, 1)
        } else {
            (current.year(), current.month() + 1)
        };
        let mut day = current.day();
        current = loop {
            if let Some(next) = NaiveDate::from_ymd_opt(year, month, day) {
                break next;
            }
            day -= 1;
        };
    }
    current
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekends_are_not_business_days() {
        let cal = BusinessCalendar::brazilian();
        assert!(!cal.is_business_day(date(2025, 8, 23))); // saturday
        assert!(!cal.is_business_day(date(2025, 8, 24))); // sunday
        assert!(cal.is_business_day(date(2025, 8, 25)));
    }

    #[test]
    fn test_holiday_table_window() {
        let cal = BusinessCalendar::brazilian();
        assert!(!cal.is_business_day(date(2025, 12, 25)));
        assert!(!cal.is_business_day(date(2078, 11, 15)));
        // table starts after new year 2025
        assert!(cal.is_business_day(date(2025, 1, 1)));
        assert!(cal.is_business_day(date(2024, 12, 25)));
    }

    #[test]
    fn test_next_business_day_is_idempotent() {
        let cal = BusinessCalendar::brazilian();
        let monday = date(2025, 8, 25);
        assert_eq!(cal.next_business_day(monday), monday);
        assert_eq!(cal.next_business_day(date(2025, 8, 23)), monday);
        assert_eq!(
            cal.next_business_day(cal.next_business_day(date(2025, 8, 23))),
            monday
        );
    }

    #[test]
    fn test_business_days_between_is_half_open() {
        let cal = BusinessCalendar::brazilian();
        let friday = date(2025, 8, 22);
        assert_eq!(cal.business_days_between(friday, friday), 0);
        assert_eq!(cal.business_days_between(friday, date(2025, 8, 25)), 1);
        // full week
        assert_eq!(cal.business_days_between(friday, date(2025, 8, 29)), 5);
    }

    #[test]
    fn test_disbursement_date_range() {
        let cal = BusinessCalendar::brazilian();
        let (start, end) = cal.disbursement_date_range(date(2078, 2, 12), 5).unwrap();
        assert_eq!(start, date(2078, 2, 16));
        assert_eq!(end, date(2078, 2, 22));
        assert!(cal.is_business_day(start));
        assert!(cal.is_business_day(end));
    }

    #[test]
    fn test_disbursement_date_range_rejects_zero_days() {
        let cal = BusinessCalendar::brazilian();
        let result = cal.disbursement_date_range(date(2078, 2, 12), 0);
        assert!(matches!(result, Err(PlanError::InvalidDate { .. })));
    }

    #[test]
    fn test_non_business_days_between() {
        let cal = BusinessCalendar::brazilian();
        let days = cal.non_business_days_between(date(2078, 11, 12), date(2078, 11, 22));
        assert_eq!(
            days,
            vec![
                date(2078, 11, 12),
                date(2078, 11, 13),
                date(2078, 11, 15),
                date(2078, 11, 19),
                date(2078, 11, 20),
            ]
        );
    }

    #[test]
    fn test_injected_holiday_table() {
        let cal = BusinessCalendar::with_holidays(vec![date(2025, 8, 25)]);
        assert!(!cal.is_business_day(date(2025, 8, 25)));
        assert_eq!(cal.next_business_day(date(2025, 8, 23)), date(2025, 8, 26));
    }

    #[test]
    fn test_add_months_clamps_and_compounds() {
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(add_months(date(2025, 1, 31), 2), date(2025, 3, 28));
        assert_eq!(add_months(date(2025, 12, 15), 1), date(2026, 1, 15));
    }
}
