use crate::decimal::round_places;
use crate::schedule::Schedule;

/// iof tax parameters for one accrual run
#[derive(Debug, Clone, Copy)]
pub(crate) struct IofParams {
    /// fixed component, fraction of each amortization
    pub overall: f64,
    /// daily component, fraction per accrual day
    pub daily_fraction: f64,
    /// daily accrual stops at this many days
    pub day_cap: i64,
}

/// total iof for one schedule, rounded to 2 decimal places
///
/// walks the schedule like an amortization table: each installment carries an
/// interest fee on the open working value, the rest amortizes, and both iof
/// components accrue on the amortized share. the last installment amortizes
/// whatever is left so the working value closes at zero.
pub(crate) fn total_iof(
    schedule: &Schedule,
    financed_amount: f64,
    daily_rate: f64,
    params: &IofParams,
) -> f64 {
    let count = schedule.due_dates.len();
    let amount = schedule.installment_amount;
    let mut working_value = round_places(financed_amount, 8);
    let mut amortized_total = 0.0;
    let mut total = 0.0;

    for index in 0..count {
        let accrual_diff = schedule.business_day_diffs[index];
        let fee = round_places(
            working_value * ((1.0 + daily_rate).powf(accrual_diff as f64) - 1.0),
            7,
        );
        let amortized = if index == count - 1 {
            financed_amount - amortized_total
        } else {
            amount - fee
        };
        let amortized = round_places(amortized, 8);

        let fixed_iof = round_places(amortized * params.overall, 2);
        let accrual_days = schedule.accumulated_days[index].min(params.day_cap);
        let daily_iof = round_places(amortized * accrual_days as f64 * params.daily_fraction, 8);

        total += fixed_iof + daily_iof;
        working_value = round_places(working_value + fee - amount, 8);
        amortized_total += amortized;
    }

    round_places(total, 2)
}

/// whole-plan amounts split between customer and merchant
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Amounts {
    /// interest charged over the whole plan
    pub debit_service: f64,
    /// debit service share left with the customer
    pub customer_debit_service: f64,
    /// per-installment amount the customer effectively owes
    pub customer_amount: f64,
    /// per-installment flow used to solve the effective interest rate
    pub calculation_basis: f64,
    /// debit service share absorbed by the merchant
    pub merchant_debit_service: f64,
    /// merchant debit service plus mdr
    pub merchant_total: f64,
    /// principal minus everything withheld from the merchant
    pub settled_to_merchant: f64,
    pub mdr_amount: f64,
}

/// apportion the debit service between customer and merchant and derive the
/// merchant settlement
pub(crate) fn allocate(
    requested_amount: f64,
    total_amount: f64,
    tac_amount: f64,
    iof_amount: f64,
    debit_service_percentage: u16,
    mdr: f64,
    count: u32,
) -> Amounts {
    let merchant_share = f64::from(debit_service_percentage) / 100.0;
    let customer_share = 1.0 - merchant_share;

    let debit_service = total_amount - requested_amount - tac_amount - iof_amount;
    let customer_debit_service = debit_service * customer_share;
    let customer_amount = (requested_amount
        + (debit_service + tac_amount) * customer_share
        + iof_amount)
        / f64::from(count);
    let calculation_basis =
        (requested_amount + debit_service * customer_share) / f64::from(count);

    let mdr_amount = requested_amount * mdr;
    let merchant_debit_service = (debit_service + tac_amount) * merchant_share;
    let merchant_total = merchant_debit_service + mdr_amount;
    let settled_to_merchant = requested_amount - merchant_total;

    Amounts {
        debit_service,
        customer_debit_service,
        customer_amount,
        calculation_basis,
        merchant_debit_service,
        merchant_total,
        settled_to_merchant,
        mdr_amount,
    }
}
