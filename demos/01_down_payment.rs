//! split a down payment and compare the financing behind each split

use installment_plan_rs::chrono::{TimeZone, Utc};
use installment_plan_rs::{calculate_down_payment_plan, DownPaymentRequest, PlanRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let financing = PlanRequest {
        requested_amount: 5000.0,
        installments: 12,
        interest_rate: 0.035,
        // dates are re-anchored per candidate split
        requested_date: Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap(),
        first_payment_date: Utc.with_ymd_and_hms(2025, 4, 10, 0, 0, 0).unwrap(),
        debit_service_percentage: 0,
        mdr: 0.05,
        tac_percentage: 0.0,
        iof_overall: 0.0038,
        iof_percentage: 0.000082,
        min_installment_amount: None,
        max_total_amount: None,
        disbursement_only_on_business_days: true,
    };
    let request = DownPaymentRequest {
        plan: financing,
        requested_amount: 1500.0,
        installments: 4,
        first_payment_date: Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap(),
        min_installment_amount: 100.0,
    };

    for split in calculate_down_payment_plan(&request)? {
        let longest = split.plans.last().expect("at least one plan");
        println!(
            "down payment {}x {:>7.2} -> financing starts {}, {}x {:.2}",
            split.installment_quantity,
            split.installment_amount,
            longest.disbursement_date.date_naive(),
            longest.installment,
            longest.installment_amount,
        );
    }
    Ok(())
}
