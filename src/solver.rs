use chrono::NaiveDate;

use crate::config::SolverConfig;
use crate::errors::{PlanError, Result};

/// dated cash flow: positive receives, negative pays
#[derive(Debug, Clone, Copy)]
pub(crate) struct CashFlow {
    pub amount: f64,
    pub date: NaiveDate,
}

/// annual internal rate of a dated flow set, act/365 exponents anchored on
/// the earliest date
///
/// bracketing bisection with newton refinement: the newton step is taken
/// whenever it lands strictly inside the bracket, otherwise the midpoint is.
pub(crate) fn internal_rate(flows: &[CashFlow], config: &SolverConfig) -> Result<f64> {
    let anchor = flows
        .iter()
        .map(|flow| flow.date)
        .min()
        .ok_or_else(|| PlanError::ConvergenceFailure {
            message: "no cash flows to solve".to_string(),
        })?;
    let dated: Vec<(f64, f64)> = flows
        .iter()
        .map(|flow| (flow.amount, (flow.date - anchor).num_days() as f64 / 365.0))
        .collect();

    let value = |rate: f64| -> f64 {
        dated
            .iter()
            .map(|&(amount, time)| amount / (1.0 + rate).powf(time))
            .sum()
    };
    let derivative = |rate: f64| -> f64 {
        dated
            .iter()
            .map(|&(amount, time)| -time * amount / (1.0 + rate).powf(time + 1.0))
            .sum()
    };

    let mut low = config.bracket_low;
    let mut high = config.bracket_high;
    let mut value_low = value(low);
    if value_low * value(high) > 0.0 {
        high = 10.0 * high;
        if value_low * value(high) > 0.0 {
            return Err(PlanError::ConvergenceFailure {
                message: "no sign change inside the rate bracket".to_string(),
            });
        }
    }

    let mut rate = config.initial_guess;
    for _ in 0..config.max_iterations {
        let current = value(rate);
        if value_low * current <= 0.0 {
            high = rate;
        } else {
            low = rate;
            value_low = current;
        }

        let slope = derivative(rate);
        let mut next = if slope != 0.0 { rate - current / slope } else { f64::NAN };
        if !next.is_finite() || next <= low || next >= high {
            next = (low + high) / 2.0;
        }
        if (next - rate).abs() < config.tolerance {
            return Ok(next);
        }
        rate = next;
    }

    Err(PlanError::ConvergenceFailure {
        message: "iteration budget exhausted".to_string(),
    })
}

/// monthly rate implied by an annual internal rate
pub(crate) fn monthly_from_annual(annual: f64) -> f64 {
    (1.0 + annual).powf(1.0 / 12.0) - 1.0
}

/// monthly effective interest rate: principal in at disbursement, the eir
/// calculation basis out at every due date
///
/// zero when the customer carries none of the debit service or the first due
/// date does not fall after the disbursement.
pub(crate) fn effective_interest_rate(
    requested_amount: f64,
    basis_amount: f64,
    disbursement_date: NaiveDate,
    first_payment_date: NaiveDate,
    due_dates: &[NaiveDate],
    customer_share: f64,
    config: &SolverConfig,
) -> Result<f64> {
    if !(customer_share > 0.0 && customer_share <= 1.0)
        || (first_payment_date - disbursement_date).num_days() <= 0
    {
        return Ok(0.0);
    }
    let flows = outflow_series(requested_amount, basis_amount, disbursement_date, due_dates);
    let annual = internal_rate(&flows, config)?;
    finite_monthly(monthly_from_annual(annual))
}

/// monthly total effective cost: principal in at disbursement, the full
/// installment out at every due date
///
/// zero for degenerate flow sets where the single due date coincides with
/// the disbursement.
pub(crate) fn total_effective_cost(
    requested_amount: f64,
    installment_amount: f64,
    disbursement_date: NaiveDate,
    first_payment_date: NaiveDate,
    due_dates: &[NaiveDate],
    config: &SolverConfig,
) -> Result<f64> {
    if due_dates.len() <= 1 && (first_payment_date - disbursement_date).num_days() == 0 {
        return Ok(0.0);
    }
    let flows = outflow_series(
        requested_amount,
        installment_amount,
        disbursement_date,
        due_dates,
    );
    let annual = internal_rate(&flows, config)?;
    finite_monthly(monthly_from_annual(annual))
}

fn outflow_series(
    received: f64,
    paid_per_installment: f64,
    disbursement_date: NaiveDate,
    due_dates: &[NaiveDate],
) -> Vec<CashFlow> {
    let mut flows = Vec::with_capacity(due_dates.len() + 1);
    flows.push(CashFlow {
        amount: received,
        date: disbursement_date,
    });
    flows.extend(due_dates.iter().map(|&date| CashFlow {
        amount: -paid_per_installment,
        date,
    }));
    flows
}

fn finite_monthly(monthly: f64) -> Result<f64> {
    if monthly.is_finite() {
        Ok(monthly)
    } else {
        Err(PlanError::ConvergenceFailure {
            message: "monthly rate is not finite".to_string(),
        })
    }
}
