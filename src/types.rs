use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// financing request; one response is produced per candidate installment
/// count from 1 up to `installments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// principal handed to the customer
    pub requested_amount: f64,
    /// largest candidate installment count
    pub installments: u32,
    /// nominal monthly interest rate (0.0235 reads 2.35% a month)
    pub interest_rate: f64,
    /// instant the financing is requested; its utc calendar day seeds the
    /// disbursement date
    pub requested_date: DateTime<Utc>,
    /// due date of the first installment
    pub first_payment_date: DateTime<Utc>,
    /// share of the debit service carried by the merchant, integer percent
    /// 0..=100
    pub debit_service_percentage: u16,
    /// merchant discount rate, fraction of principal
    pub mdr: f64,
    /// contract opening fee, fraction of principal added to the financed
    /// amount
    pub tac_percentage: f64,
    /// fixed iof component, fraction of each amortization
    pub iof_overall: f64,
    /// daily iof component, fraction per accrual day
    pub iof_percentage: f64,
    /// fail with a bound violation when any candidate installment falls
    /// below this amount
    pub min_installment_amount: Option<f64>,
    /// fail with a bound violation when any candidate financed total
    /// exceeds this amount
    pub max_total_amount: Option<f64>,
    /// shift disbursement and due dates to business days and accrue
    /// interest over business days only
    pub disbursement_only_on_business_days: bool,
}

/// one row of the per-installment breakdown (price-table split)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based installment index
    pub installment: u32,
    pub due_date: DateTime<Utc>,
    /// calendar days from disbursement to this due date
    pub accumulated_days: i64,
    /// business days from disbursement when the business-day flag is set,
    /// calendar days otherwise
    pub accumulated_business_days: i64,
    /// discount factor for this due date
    pub factor: f64,
    /// running sum of factors up to this row
    pub accumulated_factor: f64,
    /// share of the installment covering interest on the open balance
    pub interest_portion: f64,
    /// share covering amortization, iof and tac
    pub principal_portion: f64,
}

/// plan computed for one candidate installment count; carries the final
/// schedule entry's fields plus whole-plan aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    /// installment count of this candidate plan
    pub installment: u32,
    /// due date of the last installment
    pub due_date: DateTime<Utc>,
    /// disbursement date after business-day adjustment
    pub disbursement_date: DateTime<Utc>,
    /// calendar days from disbursement to the last due date
    pub accumulated_days: i64,
    /// discount factor of the last installment
    pub factor: f64,
    /// sum of all discount factors
    pub accumulated_factor: f64,
    /// monthly interest rate echoed from the request
    pub interest_rate: f64,
    pub installment_amount: f64,
    pub installment_amount_without_tac: f64,
    /// installment amount times installment count
    pub total_amount: f64,
    /// interest charged over the whole plan
    pub debit_service: f64,
    /// debit service share left with the customer
    pub customer_debit_service_amount: f64,
    /// per-installment amount the customer effectively owes
    pub customer_amount: f64,
    /// per-installment flow used to solve the effective interest rate
    pub calculation_basis_for_effective_interest_rate: f64,
    /// debit service share absorbed by the merchant
    pub merchant_debit_service_amount: f64,
    /// merchant debit service plus mdr
    pub merchant_total_amount: f64,
    /// principal minus everything withheld from the merchant
    pub settled_to_merchant: f64,
    pub mdr_amount: f64,
    /// effective interest rate, monthly and yearly
    pub eir_monthly: f64,
    pub eir_yearly: f64,
    /// total effective cost, monthly and yearly
    pub tec_monthly: f64,
    pub tec_yearly: f64,
    pub total_iof: f64,
    /// financed amount signed by the customer (principal + tac + iof)
    pub contract_amount: f64,
    pub contract_amount_without_tac: f64,
    pub tac_amount: f64,
    /// iof parameter echoes
    pub iof_percentage: f64,
    pub overall_iof: f64,
    /// present value of the installments minus iof
    pub pre_disbursement_amount: f64,
    /// iof implied by the pre-disbursement amount
    pub paid_total_iof: f64,
    pub paid_contract_amount: f64,
    /// per-installment breakdown
    pub schedule: Vec<ScheduleEntry>,
}

/// request to split a down payment and price the financing that follows it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownPaymentRequest {
    /// financing parameters; dates are re-anchored per candidate split
    pub plan: PlanRequest,
    /// down payment amount to split
    pub requested_amount: f64,
    /// largest candidate split count
    pub installments: u32,
    /// due date of the first down payment installment
    pub first_payment_date: DateTime<Utc>,
    /// smallest acceptable down payment installment
    pub min_installment_amount: f64,
}

/// one candidate down payment split with its embedded financing plans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownPaymentResponse {
    pub first_payment_date: DateTime<Utc>,
    pub installment_amount: f64,
    pub installment_quantity: u32,
    /// financing plans priced as if the financing starts after this split
    pub plans: Vec<PlanResponse>,
    pub total_amount: f64,
}

/// render a calendar day at midnight utc
pub(crate) fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
