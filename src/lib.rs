//! installment payment plan engine with business-day aware schedules
//!
//! prices brazilian-credit financing: iof taxes, tac, mdr, customer/merchant
//! debit-service split, effective interest rate and total effective cost,
//! plus a down payment splitter, invoice repurchase valuation, and
//! business-day calendar utilities.

pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod holidays;
pub mod plan;
pub mod reimbursement;
pub mod types;

mod charges;
mod schedule;
mod solver;

// re-export key types
pub use calendar::{add_days, add_months, BusinessCalendar};
pub use config::{EngineConfig, SolverConfig};
pub use errors::{PlanError, Result};
pub use plan::PlanCalculator;
pub use reimbursement::{
    InvoiceParam, InvoiceStatus, InvoiceValuation, ReimbursementRequest, ReimbursementResponse,
};
pub use types::{
    DownPaymentRequest, DownPaymentResponse, PlanRequest, PlanResponse, ScheduleEntry,
};

// re-export external dependencies that users will need
pub use chrono;

use chrono::{DateTime, Utc};

/// compute one candidate plan per installment count with the default engine
/// and the built-in brazilian calendar
pub fn calculate_payment_plan(request: &PlanRequest) -> Result<Vec<PlanResponse>> {
    PlanCalculator::default().calculate_payment_plan(request)
}

/// split a down payment and price the financing behind each candidate split
pub fn calculate_down_payment_plan(
    request: &DownPaymentRequest,
) -> Result<Vec<DownPaymentResponse>> {
    PlanCalculator::default().calculate_down_payment_plan(request)
}

/// value an invoice repurchase
pub fn calculate_reimbursement(request: &ReimbursementRequest) -> Result<ReimbursementResponse> {
    reimbursement::calculate(request)
}

/// first business day at or after `base`, at midnight utc
pub fn next_disbursement_date(base: DateTime<Utc>) -> DateTime<Utc> {
    let calendar = BusinessCalendar::brazilian();
    types::midnight_utc(calendar.next_disbursement_date(base.date_naive()))
}

/// business-day window of `days` days for a disbursement starting at or
/// after `base`
pub fn disbursement_date_range(
    base: DateTime<Utc>,
    days: u32,
) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let calendar = BusinessCalendar::brazilian();
    let (start, end) = calendar.disbursement_date_range(base.date_naive(), days)?;
    Ok((types::midnight_utc(start), types::midnight_utc(end)))
}

/// non-business days in the inclusive interval [start, end], at midnight utc
pub fn non_business_days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let calendar = BusinessCalendar::brazilian();
    calendar
        .non_business_days_between(start.date_naive(), end.date_naive())
        .into_iter()
        .map(types::midnight_utc)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        types::midnight_utc(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_calendar_surface_uses_utc_days() {
        // a mid-afternoon timestamp still resolves to its calendar day
        let base = day(2078, 2, 12) + chrono::Duration::hours(15);
        assert_eq!(next_disbursement_date(base), day(2078, 2, 16));

        let (start, end) = disbursement_date_range(base, 5).unwrap();
        assert_eq!(start, day(2078, 2, 16));
        assert_eq!(end, day(2078, 2, 22));

        let days = non_business_days_between(day(2078, 11, 12), day(2078, 11, 22));
        assert_eq!(days.len(), 5);
        assert_eq!(days[0], day(2078, 11, 12));
        assert_eq!(days[2], day(2078, 11, 15));
    }
}
