//! business-day calendar utilities

use installment_plan_rs::chrono::{TimeZone, Utc};
use installment_plan_rs::{
    disbursement_date_range, next_disbursement_date, non_business_days_between,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base = Utc.with_ymd_and_hms(2078, 2, 12, 15, 30, 0).unwrap();

    println!("base date:            {}", base.date_naive());
    println!(
        "next disbursement:    {}",
        next_disbursement_date(base).date_naive()
    );

    let (start, end) = disbursement_date_range(base, 5)?;
    println!(
        "5-business-day range: {} .. {}",
        start.date_naive(),
        end.date_naive()
    );

    let from = Utc.with_ymd_and_hms(2078, 11, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2078, 11, 30, 0, 0, 0).unwrap();
    println!("non-business days in november 2078:");
    for day in non_business_days_between(from, to) {
        println!("  {}", day.date_naive());
    }
    Ok(())
}
