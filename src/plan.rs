use crate::calendar::{add_days, add_months, BusinessCalendar};
use crate::charges::{self, IofParams};
use crate::config::EngineConfig;
use crate::decimal::round_places;
use crate::errors::{PlanError, Result};
use crate::schedule::{self, Schedule};
use crate::solver;
use crate::types::{
    midnight_utc, DownPaymentRequest, DownPaymentResponse, PlanRequest, PlanResponse,
    ScheduleEntry,
};

/// payment plan engine: a business calendar plus calculation settings
#[derive(Debug, Clone, Default)]
pub struct PlanCalculator {
    calendar: BusinessCalendar,
    config: EngineConfig,
}

impl PlanCalculator {
    pub fn new(calendar: BusinessCalendar, config: EngineConfig) -> Self {
        Self { calendar, config }
    }

    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    /// one candidate plan per installment count from 1 up to
    /// `request.installments`, ascending
    ///
    /// fails with a bound violation as soon as any candidate breaks the
    /// optional installment or total bounds.
    pub fn calculate_payment_plan(&self, request: &PlanRequest) -> Result<Vec<PlanResponse>> {
        validate(request.requested_amount, request.installments)?;

        let mut responses = Vec::with_capacity(request.installments as usize);
        for count in 1..=request.installments {
            let response = self.single_plan(request, count)?;

            if let Some(minimum) = request.min_installment_amount {
                if response.installment_amount < minimum {
                    return Err(PlanError::BoundViolation {
                        bound: "minimum installment".to_string(),
                        count,
                        limit: minimum,
                        actual: response.installment_amount,
                    });
                }
            }
            if let Some(maximum) = request.max_total_amount {
                if response.total_amount > maximum {
                    return Err(PlanError::BoundViolation {
                        bound: "maximum total".to_string(),
                        count,
                        limit: maximum,
                        actual: response.total_amount,
                    });
                }
            }

            responses.push(response);
        }
        Ok(responses)
    }

    /// one candidate split per down payment count, each pricing the
    /// financing that would start a month after that split begins
    pub fn calculate_down_payment_plan(
        &self,
        request: &DownPaymentRequest,
    ) -> Result<Vec<DownPaymentResponse>> {
        validate(request.requested_amount, request.installments)?;

        let first_down_payment = request.first_payment_date.date_naive();
        let mut financing_start = add_days(first_down_payment, 1);
        let mut financing_first_payment = add_months(first_down_payment, 1);

        let mut responses = Vec::with_capacity(request.installments as usize);
        for quantity in 1..=request.installments {
            let installment_amount = request.requested_amount / f64::from(quantity);
            if installment_amount < request.min_installment_amount {
                if quantity == 1 {
                    return Err(PlanError::BoundViolation {
                        bound: "minimum down payment installment".to_string(),
                        count: quantity,
                        limit: request.min_installment_amount,
                        actual: installment_amount,
                    });
                }
                return Err(PlanError::UnsupportedConfiguration {
                    message: format!(
                        "down payment of {} cannot be split {} times above the {} minimum",
                        request.requested_amount,
                        request.installments,
                        request.min_installment_amount
                    ),
                });
            }

            let mut financing = request.plan.clone();
            financing.requested_date = midnight_utc(financing_start);
            financing.first_payment_date = midnight_utc(financing_first_payment);
            let plans = self.calculate_payment_plan(&financing)?;

            responses.push(DownPaymentResponse {
                first_payment_date: request.first_payment_date,
                installment_amount: round_places(installment_amount, 2),
                installment_quantity: quantity,
                plans,
                total_amount: round_places(request.requested_amount, 2),
            });

            financing_start = add_months(financing_start, 1);
            financing_first_payment = add_months(financing_first_payment, 1);
        }
        Ok(responses)
    }

    /// full plan for one installment count
    fn single_plan(&self, request: &PlanRequest, count: u32) -> Result<PlanResponse> {
        let monthly_rate = request.interest_rate;
        let daily = schedule::daily_rate(monthly_rate);
        let business_only = request.disbursement_only_on_business_days;

        let disbursement_raw = request.requested_date.date_naive();
        let first_payment_raw = request.first_payment_date.date_naive();
        let disbursement = if business_only {
            self.calendar.next_business_day(disbursement_raw)
        } else {
            disbursement_raw
        };
        let first_payment = if business_only {
            self.calendar.next_business_day(first_payment_raw)
        } else {
            first_payment_raw
        };

        let requested = request.requested_amount;
        let tac_amount = round_places(requested * request.tac_percentage, 2);
        let iof_params = IofParams {
            overall: request.iof_overall,
            daily_fraction: request.iof_percentage,
            day_cap: self.config.iof_day_cap,
        };
        let build = |financed: f64| {
            schedule::build(
                &self.calendar,
                disbursement_raw,
                first_payment_raw,
                count,
                daily,
                financed,
                business_only,
            )
        };

        // first pass without iof pins the eir basis; the remaining passes
        // let the financed amount and the iof settle on each other
        let mut financed = requested + tac_amount;
        let mut current = build(financed);
        let basis_installment = current.installment_amount;
        let mut iof = charges::total_iof(&current, financed, daily, &iof_params);
        for _ in 1..self.config.iof_refinement_passes {
            financed = requested + tac_amount + iof;
            current = build(financed);
            iof = charges::total_iof(&current, financed, daily, &iof_params);
        }
        financed = requested + tac_amount + iof;
        let final_schedule = build(financed);

        let iof_rounded = round_places(iof, 2);
        let installment_amount = final_schedule.installment_amount;
        let total_amount = round_places(installment_amount * f64::from(count), 2);
        let contract_amount = requested + tac_amount + iof_rounded;
        let contract_amount_without_tac = requested + iof_rounded;
        let installment_amount_without_tac =
            round_places((requested + iof) / final_schedule.accumulated_factor(), 2);

        let amounts = charges::allocate(
            requested,
            total_amount,
            tac_amount,
            iof_rounded,
            request.debit_service_percentage,
            request.mdr,
            count,
        );

        let customer_share = 1.0 - f64::from(request.debit_service_percentage) / 100.0;
        let eir_monthly_raw = solver::effective_interest_rate(
            requested,
            basis_installment,
            disbursement,
            first_payment,
            &final_schedule.due_dates,
            customer_share,
            &self.config.solver,
        )?;
        let tec_monthly_raw = solver::total_effective_cost(
            requested,
            installment_amount,
            disbursement,
            first_payment,
            &final_schedule.due_dates,
            &self.config.solver,
        )?;
        let eir_yearly = round_places((1.0 + eir_monthly_raw).powf(12.0) - 1.0, 6);
        let tec_yearly = round_places((1.0 + tec_monthly_raw).powf(12.0) - 1.0, 6);

        // discount the installments back at the nominal rate over the
        // accrual-day exponents
        let annual_factor = (1.0 + monthly_rate).powf(12.0);
        let present_value: f64 = final_schedule
            .accumulated_business_days
            .iter()
            .map(|&days| installment_amount / annual_factor.powf(days as f64 / 252.0))
            .sum();
        let present_value = round_places(present_value, 2);
        let pre_disbursement_amount = round_places(present_value - iof_rounded, 2);
        let paid_total_iof = round_places(
            iof_rounded + round_places(pre_disbursement_amount - requested, 2),
            2,
        );
        let paid_contract_amount = requested + paid_total_iof;

        let entries = price_table(&final_schedule, contract_amount, monthly_rate);

        Ok(PlanResponse {
            installment: count,
            due_date: midnight_utc(*final_schedule.due_dates.last().unwrap_or(&first_payment)),
            disbursement_date: midnight_utc(disbursement),
            accumulated_days: final_schedule.last_accumulated_days(),
            factor: final_schedule.last_factor(),
            accumulated_factor: final_schedule.accumulated_factor(),
            interest_rate: monthly_rate,
            installment_amount,
            installment_amount_without_tac,
            total_amount,
            debit_service: round_places(amounts.debit_service, 2),
            customer_debit_service_amount: round_places(amounts.customer_debit_service, 2),
            customer_amount: round_places(amounts.customer_amount, 2),
            calculation_basis_for_effective_interest_rate: amounts.calculation_basis,
            merchant_debit_service_amount: round_places(amounts.merchant_debit_service, 2),
            merchant_total_amount: round_places(amounts.merchant_total, 2),
            settled_to_merchant: round_places(amounts.settled_to_merchant, 2),
            mdr_amount: round_places(amounts.mdr_amount, 2),
            eir_monthly: round_places(eir_monthly_raw, 4),
            eir_yearly,
            tec_monthly: round_places(tec_monthly_raw, 4),
            tec_yearly,
            total_iof: iof_rounded,
            contract_amount,
            contract_amount_without_tac,
            tac_amount,
            iof_percentage: request.iof_percentage,
            overall_iof: request.iof_overall,
            pre_disbursement_amount,
            paid_total_iof,
            paid_contract_amount,
            schedule: entries,
        })
    }
}

fn validate(amount: f64, count: u32) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(PlanError::InvalidAmount { amount });
    }
    if count == 0 {
        return Err(PlanError::InvalidInstallmentCount { count });
    }
    Ok(())
}

/// split every installment into interest on the open balance and the
/// amortizing remainder
fn price_table(schedule: &Schedule, contract_amount: f64, monthly_rate: f64) -> Vec<ScheduleEntry> {
    let amount = schedule.installment_amount;
    let mut balance = contract_amount;
    schedule
        .due_dates
        .iter()
        .enumerate()
        .map(|(index, &due)| {
            let interest = balance * monthly_rate;
            let principal = amount - interest;
            balance -= principal;
            ScheduleEntry {
                installment: index as u32 + 1,
                due_date: midnight_utc(due),
                accumulated_days: schedule.accumulated_days[index],
                accumulated_business_days: schedule.accumulated_business_days[index],
                factor: schedule.factors[index],
                accumulated_factor: schedule.accumulated_factors[index],
                interest_portion: round_places(interest, 2),
                principal_portion: round_places(principal, 2),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{DateTime, NaiveDate, Utc};
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        midnight_utc(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn financing_request() -> PlanRequest {
        PlanRequest {
            requested_amount: 8800.0,
            installments: 24,
            interest_rate: 0.0235,
            requested_date: day(2022, 3, 18),
            first_payment_date: day(2022, 4, 18),
            debit_service_percentage: 0,
            mdr: 0.05,
            tac_percentage: 0.0,
            iof_overall: 0.0038,
            iof_percentage: 0.000082,
            min_installment_amount: None,
            max_total_amount: None,
            disbursement_only_on_business_days: false,
        }
    }

    #[test]
    fn test_calendar_day_plan() {
        let responses = PlanCalculator::default()
            .calculate_payment_plan(&financing_request())
            .unwrap();
        assert_eq!(responses.len(), 24);
        for (index, response) in responses.iter().enumerate() {
            assert_eq!(response.installment, index as u32 + 1);
            assert_eq!(response.schedule.len(), index + 1);
        }

        let plan = &responses[23];
        assert_eq!(plan.installment_amount, 560.19);
        assert_eq!(plan.installment_amount_without_tac, 560.19);
        assert_eq!(plan.total_amount, 13444.56);
        assert_eq!(plan.total_iof, 259.96);
        assert_eq!(plan.contract_amount, 9059.96);
        assert_eq!(plan.contract_amount_without_tac, 9059.96);
        assert_eq!(plan.tac_amount, 0.0);
        assert_eq!(plan.accumulated_days, 731);
        assert_eq!(plan.due_date, day(2024, 3, 18));
        assert_eq!(plan.disbursement_date, day(2022, 3, 18));
        assert_relative_eq!(plan.factor, 0.445499118983074, max_relative = 1e-9);
        assert_relative_eq!(
            plan.accumulated_factor,
            16.17294462287348,
            max_relative = 1e-9
        );

        assert_eq!(plan.eir_monthly, 0.0342);
        assert_eq!(plan.eir_yearly, 0.497399);
        assert_eq!(plan.tec_monthly, 0.037);
        assert_eq!(plan.tec_yearly, 0.546272);
        assert_relative_eq!(
            plan.calculation_basis_for_effective_interest_rate,
            549.3583333333332,
            max_relative = 1e-9
        );

        assert_eq!(plan.debit_service, 4384.6);
        assert_eq!(plan.customer_debit_service_amount, 4384.6);
        assert_eq!(plan.customer_amount, 560.19);
        assert_eq!(plan.mdr_amount, 440.0);
        assert_eq!(plan.merchant_debit_service_amount, 0.0);
        assert_eq!(plan.merchant_total_amount, 440.0);
        assert_eq!(plan.settled_to_merchant, 8360.0);

        assert_eq!(plan.pre_disbursement_amount, 8799.96);
        assert_eq!(plan.paid_total_iof, 259.92);
        assert_eq!(plan.paid_contract_amount, 9059.92);
    }

    #[test]
    fn test_price_table_breakdown() {
        let responses = PlanCalculator::default()
            .calculate_payment_plan(&financing_request())
            .unwrap();
        let plan = &responses[23];

        let first = &plan.schedule[0];
        assert_eq!(first.installment, 1);
        assert_eq!(first.due_date, day(2022, 4, 18));
        assert_eq!(first.interest_portion, 212.91);
        assert_eq!(first.principal_portion, 347.28);

        let mut previous = plan.disbursement_date;
        for entry in &plan.schedule {
            assert!(entry.due_date > previous);
            previous = entry.due_date;
        }
        // interest falls as the balance amortizes
        assert!(plan.schedule[23].interest_portion < plan.schedule[0].interest_portion);
    }

    #[test]
    fn test_business_day_plan() {
        let mut request = financing_request();
        request.disbursement_only_on_business_days = true;
        let responses = PlanCalculator::default()
            .calculate_payment_plan(&request)
            .unwrap();
        let plan = &responses[23];

        assert_eq!(plan.installment_amount, 502.69);
        assert_eq!(plan.total_amount, 12064.56);
        assert_eq!(plan.total_iof, 255.51);
        assert_eq!(plan.contract_amount, 9055.51);
        assert_eq!(plan.accumulated_days, 731);
        assert_eq!(plan.disbursement_date, day(2022, 3, 18));
        assert_relative_eq!(plan.factor, 0.561985770761778, max_relative = 1e-9);
        assert_relative_eq!(
            plan.accumulated_factor,
            18.014166849381613,
            max_relative = 1e-9
        );

        assert_eq!(plan.eir_monthly, 0.0242);
        assert_eq!(plan.eir_yearly, 0.332954);
        assert_eq!(plan.tec_monthly, 0.0268);
        assert_eq!(plan.tec_yearly, 0.373929);
        assert_relative_eq!(
            plan.calculation_basis_for_effective_interest_rate,
            492.04375,
            max_relative = 1e-9
        );

        assert_eq!(plan.pre_disbursement_amount, 8800.03);
        assert_eq!(plan.paid_total_iof, 255.54);
        assert_eq!(plan.paid_contract_amount, 9055.54);

        let due_dates: Vec<DateTime<Utc>> =
            plan.schedule.iter().map(|entry| entry.due_date).collect();
        assert_eq!(
            due_dates,
            vec![
                day(2022, 4, 18),
                day(2022, 5, 18),
                day(2022, 6, 20),
                day(2022, 7, 18),
                day(2022, 8, 18),
                day(2022, 9, 19),
                day(2022, 10, 18),
                day(2022, 11, 18),
                day(2022, 12, 19),
                day(2023, 1, 18),
                day(2023, 2, 20),
                day(2023, 3, 20),
                day(2023, 4, 18),
                day(2023, 5, 18),
                day(2023, 6, 19),
                day(2023, 7, 18),
                day(2023, 8, 18),
                day(2023, 9, 18),
                day(2023, 10, 18),
                day(2023, 11, 20),
                day(2023, 12, 18),
                day(2024, 1, 18),
                day(2024, 2, 19),
                day(2024, 3, 18),
            ]
        );
    }

    #[test]
    fn test_long_plan_with_holiday_table() {
        let request = PlanRequest {
            requested_amount: 12853.43,
            installments: 48,
            interest_rate: 0.035,
            requested_date: day(2024, 10, 23),
            first_payment_date: day(2024, 11, 23),
            disbursement_only_on_business_days: true,
            ..financing_request()
        };
        let responses = PlanCalculator::default()
            .calculate_payment_plan(&request)
            .unwrap();
        assert_eq!(responses.len(), 48);
        let plan = &responses[47];

        assert_eq!(plan.installment_amount, 575.5);
        assert_eq!(plan.total_amount, 27624.0);
        assert_eq!(plan.total_iof, 428.55);
        assert_eq!(plan.contract_amount, 13281.98);
        assert_eq!(plan.accumulated_days, 1461);
        assert_eq!(plan.due_date, day(2028, 10, 23));
        assert_relative_eq!(plan.factor, 0.19275140186402, max_relative = 1e-9);
        assert_relative_eq!(
            plan.accumulated_factor,
            23.079195526791356,
            max_relative = 1e-9
        );

        assert_eq!(plan.eir_monthly, 0.035);
        assert_eq!(plan.eir_yearly, 0.511034);
        assert_eq!(plan.tec_monthly, 0.0369);
        assert_eq!(plan.tec_yearly, 0.544357);
        assert_relative_eq!(
            plan.calculation_basis_for_effective_interest_rate,
            566.571875,
            max_relative = 1e-9
        );

        assert_eq!(plan.pre_disbursement_amount, 12853.53);
        assert_eq!(plan.paid_total_iof, 428.65);
        assert_eq!(plan.paid_contract_amount, 13282.08);
    }

    #[test]
    fn test_higher_rate_plan() {
        let request = PlanRequest {
            requested_amount: 3883.48,
            installments: 24,
            interest_rate: 0.0449,
            requested_date: day(2025, 8, 21),
            first_payment_date: day(2025, 9, 18),
            disbursement_only_on_business_days: true,
            ..financing_request()
        };
        let responses = PlanCalculator::default()
            .calculate_payment_plan(&request)
            .unwrap();
        let plan = &responses[23];

        assert_eq!(plan.installment_amount, 274.01);
        assert_eq!(plan.total_amount, 6576.24);
        assert_eq!(plan.total_iof, 116.04);
        assert_eq!(plan.contract_amount, 3999.52);
        assert_eq!(plan.accumulated_days, 727);
        assert_relative_eq!(plan.factor, 0.352166545526241, max_relative = 1e-9);
        assert_relative_eq!(
            plan.accumulated_factor,
            14.596086465727566,
            max_relative = 1e-9
        );
        assert_eq!(plan.eir_monthly, 0.0446);
        assert_eq!(plan.eir_yearly, 0.689008);
        assert_eq!(plan.tec_monthly, 0.0476);
        assert_eq!(plan.tec_yearly, 0.74792);
        assert_eq!(plan.pre_disbursement_amount, 3883.43);
        assert_eq!(plan.paid_total_iof, 115.99);
        assert_eq!(plan.paid_contract_amount, 3999.47);
    }

    #[test]
    fn test_merchant_carries_the_debit_service() {
        let mut request = financing_request();
        request.debit_service_percentage = 100;
        let responses = PlanCalculator::default()
            .calculate_payment_plan(&request)
            .unwrap();
        let plan = &responses[23];

        assert_eq!(plan.eir_monthly, 0.0);
        assert_eq!(plan.eir_yearly, 0.0);
        assert_eq!(plan.tec_monthly, 0.037);
        assert_eq!(plan.tec_yearly, 0.546272);
        assert_eq!(plan.customer_debit_service_amount, 0.0);
        assert_eq!(plan.customer_amount, 377.5);
        assert_eq!(plan.merchant_debit_service_amount, 4384.6);
    }

    #[test]
    fn test_minimum_installment_bound() {
        let mut request = financing_request();
        request.min_installment_amount = Some(600.0);
        let result = PlanCalculator::default().calculate_payment_plan(&request);
        match result {
            Err(PlanError::BoundViolation { bound, limit, .. }) => {
                assert_eq!(bound, "minimum installment");
                assert_eq!(limit, 600.0);
            }
            other => panic!("expected a bound violation, got {other:?}"),
        }
    }

    #[test]
    fn test_maximum_total_bound() {
        let mut request = financing_request();
        request.max_total_amount = Some(13000.0);
        let result = PlanCalculator::default().calculate_payment_plan(&request);
        assert!(matches!(
            result,
            Err(PlanError::BoundViolation { count, .. }) if count > 1
        ));
    }

    #[test]
    fn test_bounds_that_hold_keep_every_candidate() {
        let mut request = financing_request();
        request.min_installment_amount = Some(500.0);
        request.max_total_amount = Some(14000.0);
        let responses = PlanCalculator::default()
            .calculate_payment_plan(&request)
            .unwrap();
        assert_eq!(responses.len(), 24);
    }

    #[test]
    fn test_input_validation() {
        let mut request = financing_request();
        request.requested_amount = 0.0;
        assert!(matches!(
            PlanCalculator::default().calculate_payment_plan(&request),
            Err(PlanError::InvalidAmount { .. })
        ));

        let mut request = financing_request();
        request.installments = 0;
        assert!(matches!(
            PlanCalculator::default().calculate_payment_plan(&request),
            Err(PlanError::InvalidInstallmentCount { .. })
        ));
    }

    #[test]
    fn test_same_request_same_response() {
        let calculator = PlanCalculator::default();
        let request = financing_request();
        let first = calculator.calculate_payment_plan(&request).unwrap();
        let second = calculator.calculate_payment_plan(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_down_payment_split() {
        let request = DownPaymentRequest {
            plan: financing_request(),
            requested_amount: 1000.0,
            installments: 3,
            first_payment_date: day(2025, 3, 10),
            min_installment_amount: 100.0,
        };
        let responses = PlanCalculator::default()
            .calculate_down_payment_plan(&request)
            .unwrap();
        assert_eq!(responses.len(), 3);

        let amounts: Vec<f64> = responses.iter().map(|r| r.installment_amount).collect();
        assert_eq!(amounts, vec![1000.0, 500.0, 333.33]);
        for (index, response) in responses.iter().enumerate() {
            assert_eq!(response.installment_quantity, index as u32 + 1);
            assert_eq!(response.first_payment_date, day(2025, 3, 10));
            assert_eq!(response.total_amount, 1000.0);
            assert_eq!(response.plans.len(), 24);
        }

        // financing starts the day after the down payment begins and slides
        // a month per extra split
        assert_eq!(responses[0].plans[0].disbursement_date, day(2025, 3, 11));
        assert_eq!(responses[1].plans[0].disbursement_date, day(2025, 4, 11));
        assert_eq!(responses[0].plans[0].due_date, day(2025, 4, 10));
        assert_eq!(responses[1].plans[0].due_date, day(2025, 5, 10));
    }

    #[test]
    fn test_down_payment_below_minimum_on_first_split() {
        let request = DownPaymentRequest {
            plan: financing_request(),
            requested_amount: 50.0,
            installments: 1,
            first_payment_date: day(2025, 3, 10),
            min_installment_amount: 100.0,
        };
        assert!(matches!(
            PlanCalculator::default().calculate_down_payment_plan(&request),
            Err(PlanError::BoundViolation { .. })
        ));
    }

    #[test]
    fn test_down_payment_target_count_out_of_reach() {
        let request = DownPaymentRequest {
            plan: financing_request(),
            requested_amount: 1000.0,
            installments: 3,
            first_payment_date: day(2025, 3, 10),
            min_installment_amount: 400.0,
        };
        assert!(matches!(
            PlanCalculator::default().calculate_down_payment_plan(&request),
            Err(PlanError::UnsupportedConfiguration { .. })
        ));
    }
}
