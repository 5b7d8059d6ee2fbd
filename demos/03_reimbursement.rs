//! value the repurchase of open receivables

use installment_plan_rs::chrono::{TimeZone, Utc};
use installment_plan_rs::{
    calculate_reimbursement, InvoiceParam, InvoiceStatus, ReimbursementRequest,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = ReimbursementRequest {
        fee: 0.02,
        mdr: 0.05,
        invoice_cost: 3.0,
        interest_rate: 0.03,
        base_date: Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap(),
        max_repurchase_payment_days: 3,
        max_reimbursement_payment_days: 10,
        invoices: vec![
            InvoiceParam {
                id: 1,
                status: InvoiceStatus::Created,
                original_amount: 275.5,
                due_date: Utc.with_ymd_and_hms(2025, 7, 10, 0, 0, 0).unwrap(),
                principal_portion: 0.0,
            },
            InvoiceParam {
                id: 2,
                status: InvoiceStatus::Paid,
                original_amount: 275.5,
                due_date: Utc.with_ymd_and_hms(2025, 5, 10, 0, 0, 0).unwrap(),
                principal_portion: 231.12,
            },
            InvoiceParam {
                id: 3,
                status: InvoiceStatus::Overdue,
                original_amount: 275.5,
                due_date: Utc.with_ymd_and_hms(2025, 4, 10, 0, 0, 0).unwrap(),
                principal_portion: 0.0,
            },
        ],
    };

    let response = calculate_reimbursement(&request)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
