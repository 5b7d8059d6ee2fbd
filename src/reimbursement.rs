//! invoice repurchase valuation
//!
//! prices the buy-back of open receivables: discounted face value for open
//! invoices, face value for overdue ones, and a customer charge-back for the
//! already-paid share.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::add_days;
use crate::decimal::round_places;
use crate::errors::Result;
use crate::types::midnight_utc;

/// lifecycle status of a receivable at repurchase time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Overdue,
    #[default]
    Created,
    Readjusted,
    Paid,
    Irrelevant,
}

/// repurchase request over a set of receivables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReimbursementRequest {
    /// cancellation fee, fraction
    pub fee: f64,
    /// merchant discount rate, fraction
    pub mdr: f64,
    /// flat cost per reimbursement invoice
    pub invoice_cost: f64,
    /// nominal monthly interest rate used for discounting
    pub interest_rate: f64,
    pub base_date: DateTime<Utc>,
    /// days from base date to the repurchase settlement
    pub max_repurchase_payment_days: i64,
    /// days from base date to the reimbursement invoice due date
    pub max_reimbursement_payment_days: i64,
    pub invoices: Vec<InvoiceParam>,
}

/// one receivable under valuation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvoiceParam {
    pub id: u32,
    pub status: InvoiceStatus,
    pub original_amount: f64,
    pub due_date: DateTime<Utc>,
    /// amortized share charged back to the customer when the invoice is paid
    pub principal_portion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReimbursementResponse {
    pub total_present_value_repurchase: f64,
    pub reimbursement_value: f64,
    pub reference_date_for_repurchase: DateTime<Utc>,
    /// daily rate over a 30-day month, rounded to 7 places
    pub interest_rate_daily: f64,
    pub subsidy_for_cancellation: f64,
    pub customer_charge_back_amount: f64,
    pub invoices: Vec<InvoiceValuation>,
    pub reimbursement_invoice_due_date: DateTime<Utc>,
}

/// valuation of one receivable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvoiceValuation {
    pub id: u32,
    /// days from the repurchase reference date to the due date
    pub days_to_due: i64,
    pub present_value: f64,
}

/// value the repurchase of `request.invoices` as of the reference date
pub fn calculate(request: &ReimbursementRequest) -> Result<ReimbursementResponse> {
    let base = request.base_date.date_naive();
    let reference = add_days(base, request.max_repurchase_payment_days);
    let reimbursement_due = add_days(base, request.max_reimbursement_payment_days);

    let daily_rate = round_places((1.0 + request.interest_rate).powf(1.0 / 30.0) - 1.0, 7);

    let mut valuations = Vec::with_capacity(request.invoices.len());
    let mut total_present_value = 0.0;
    let mut charge_back = 0.0;

    for invoice in &request.invoices {
        let due = invoice.due_date.date_naive();
        let days_to_due = (due - reference).num_days();
        let present_value = match invoice.status {
            InvoiceStatus::Created | InvoiceStatus::Readjusted => {
                invoice.original_amount / (1.0 + daily_rate).powf(days_to_due as f64)
            }
            InvoiceStatus::Overdue => invoice.original_amount,
            InvoiceStatus::Paid => {
                charge_back += invoice.principal_portion;
                0.0
            }
            InvoiceStatus::Irrelevant => 0.0,
        };
        total_present_value += present_value;
        valuations.push(InvoiceValuation {
            id: invoice.id,
            days_to_due,
            present_value,
        });
    }

    let subsidy = (1.0 - request.fee) * request.mdr;
    let reimbursement_value = total_present_value - subsidy + request.invoice_cost;

    Ok(ReimbursementResponse {
        total_present_value_repurchase: total_present_value,
        reimbursement_value,
        reference_date_for_repurchase: midnight_utc(reference),
        interest_rate_daily: daily_rate,
        subsidy_for_cancellation: subsidy,
        customer_charge_back_amount: round_places(charge_back, 2),
        invoices: valuations,
        reimbursement_invoice_due_date: midnight_utc(reimbursement_due),
    })
}
