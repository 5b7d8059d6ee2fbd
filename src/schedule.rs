use chrono::NaiveDate;

use crate::calendar::{add_months, BusinessCalendar};
use crate::decimal::round_places;

/// daily rate over the 252 business-day year implied by a monthly rate,
/// rounded to 10 decimal places
pub(crate) fn daily_rate(monthly_rate: f64) -> f64 {
    let annual = (1.0 + monthly_rate).powf(12.0) - 1.0;
    round_places((1.0 + annual).powf(1.0 / 252.0) - 1.0, 10)
}

/// amortization scaffold for one candidate installment count and one
/// financed amount
#[derive(Debug, Clone)]
pub(crate) struct Schedule {
    pub due_dates: Vec<NaiveDate>,
    /// calendar days from disbursement, cumulative per row
    pub accumulated_days: Vec<i64>,
    /// accrual days from disbursement, cumulative per row (business days
    /// when the business-day flag is set)
    pub accumulated_business_days: Vec<i64>,
    /// accrual days between consecutive due dates
    pub business_day_diffs: Vec<i64>,
    pub factors: Vec<f64>,
    pub accumulated_factors: Vec<f64>,
    /// round-2 installment for the financed amount
    pub installment_amount: f64,
}

impl Schedule {
    pub fn accumulated_factor(&self) -> f64 {
        *self.accumulated_factors.last().unwrap_or(&0.0)
    }

    pub fn last_factor(&self) -> f64 {
        *self.factors.last().unwrap_or(&0.0)
    }

    pub fn last_accumulated_days(&self) -> i64 {
        *self.accumulated_days.last().unwrap_or(&0)
    }
}

/// build the scaffold: monthly due dates from `first_payment_date` with
/// end-of-month clamping, independently shifted to business days when the
/// flag is set (the raw monthly sequence itself keeps advancing unshifted)
pub(crate) fn build(
    calendar: &BusinessCalendar,
    disbursement_date: NaiveDate,
    first_payment_date: NaiveDate,
    count: u32,
    daily_rate: f64,
    financed_amount: f64,
    business_days_only: bool,
) -> Schedule {
    let mut due_dates = Vec::with_capacity(count as usize);
    let mut accumulated_days = Vec::with_capacity(count as usize);
    let mut accumulated_business_days = Vec::with_capacity(count as usize);
    let mut business_day_diffs = Vec::with_capacity(count as usize);
    let mut factors = Vec::with_capacity(count as usize);
    let mut accumulated_factors = Vec::with_capacity(count as usize);

    let mut previous = if business_days_only {
        calendar.next_business_day(disbursement_date)
    } else {
        disbursement_date
    };
    let mut raw = first_payment_date;
    let mut days_total = 0;
    let mut accrual_total = 0;
    let mut factor_sum = 0.0;

    for index in 0..count {
        if index > 0 {
            raw = add_months(raw, 1);
        }
        let due = if business_days_only {
            calendar.next_business_day(raw)
        } else {
            raw
        };
        let day_diff = (due - previous).num_days();
        let accrual_diff = if business_days_only {
            calendar.business_days_between(previous, due)
        } else {
            day_diff
        };

        days_total += day_diff;
        accrual_total += accrual_diff;
        let factor = 1.0 / (1.0 + daily_rate).powf(accrual_total as f64);
        factor_sum += factor;

        due_dates.push(due);
        accumulated_days.push(days_total);
        accumulated_business_days.push(accrual_total);
        business_day_diffs.push(accrual_diff);
        factors.push(factor);
        accumulated_factors.push(factor_sum);
        previous = due;
    }

    let installment_amount = round_places(financed_amount / factor_sum, 2);

    Schedule {
        due_dates,
        accumulated_days,
        accumulated_business_days,
        business_day_diffs,
        factors,
        accumulated_factors,
        installment_amount,
    }
}
