//! price a financing across every candidate installment count and print the
//! longest plan in full

use installment_plan_rs::chrono::{TimeZone, Utc};
use installment_plan_rs::{calculate_payment_plan, PlanRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = PlanRequest {
        requested_amount: 8800.0,
        installments: 24,
        interest_rate: 0.0235,
        requested_date: Utc.with_ymd_and_hms(2022, 3, 18, 0, 0, 0).unwrap(),
        first_payment_date: Utc.with_ymd_and_hms(2022, 4, 18, 0, 0, 0).unwrap(),
        debit_service_percentage: 0,
        mdr: 0.05,
        tac_percentage: 0.0,
        iof_overall: 0.0038,
        iof_percentage: 0.000082,
        min_installment_amount: None,
        max_total_amount: None,
        disbursement_only_on_business_days: true,
    };

    let responses = calculate_payment_plan(&request)?;

    println!("candidate plans for {:.2}:", request.requested_amount);
    for plan in &responses {
        println!(
            "  {:>2}x {:>8.2}  total {:>9.2}  iof {:>7.2}  eir {:.4}/mo  tec {:.4}/mo",
            plan.installment,
            plan.installment_amount,
            plan.total_amount,
            plan.total_iof,
            plan.eir_monthly,
            plan.tec_monthly,
        );
    }

    let longest = responses.last().expect("at least one plan");
    println!("\nlongest plan as json:");
    println!("{}", serde_json::to_string_pretty(longest)?);
    Ok(())
}
