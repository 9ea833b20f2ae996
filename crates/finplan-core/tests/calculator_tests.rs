use finplan_core::calculator::{corpus, household, investment, loans};
use finplan_core::calculator::{calculate_tax_savings, TaxSavingsInput};
use finplan_core::tax::slabs;
use finplan_core::time_value;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// SIP / goal-based investment
// ===========================================================================

#[test]
fn test_sip_golden_values() {
    let result = investment::calculate_sip(&investment::SipInput {
        monthly_amount: dec!(1000),
        annual_return: dec!(12),
        years: 10,
    })
    .unwrap();
    let out = &result.result;

    assert_eq!(out.total_investment, dec!(120_000));
    assert!(
        (out.total_returns - dec!(232_339)).abs() <= dec!(1),
        "total_returns = {}",
        out.total_returns
    );
    assert!((out.wealth_gained - dec!(112_339)).abs() <= dec!(1));
    assert!(result.warnings.is_empty());
    assert_eq!(result.metadata.precision, "rust_decimal_128bit");
}

#[test]
fn test_goal_investment_feeds_back_into_sip() {
    // Required SIP for a target, projected forward, lands on the target
    for (target, years, rate) in [
        (dec!(2_500_000), 15, dec!(11)),
        (dec!(300_000), 3, dec!(7.5)),
        (dec!(80_000), 1, Decimal::ZERO),
    ] {
        let goal = investment::calculate_goal_based_investment(&investment::GoalInvestmentInput {
            target_amount: target,
            years,
            expected_return: rate,
        })
        .unwrap();
        let sip = investment::calculate_sip(&investment::SipInput {
            monthly_amount: goal.result.required_monthly,
            annual_return: rate,
            years,
        })
        .unwrap();
        assert!(
            (sip.result.total_returns - target).abs() < dec!(0.001),
            "target {} years {} rate {}: projected {}",
            target,
            years,
            rate,
            sip.result.total_returns
        );
    }
}

#[test]
fn test_outputs_are_deterministic() {
    let input = investment::SipInput {
        monthly_amount: dec!(3333.33),
        annual_return: dec!(13.7),
        years: 27,
    };
    let a = investment::calculate_sip(&input).unwrap().result;
    let b = investment::calculate_sip(&input).unwrap().result;
    assert_eq!(a.total_returns, b.total_returns);
    assert_eq!(a.total_returns.to_string(), b.total_returns.to_string());
}

// ===========================================================================
// EMI
// ===========================================================================

#[test]
fn test_emi_golden_value() {
    let result = loans::calculate_emi(&loans::EmiInput {
        principal: dec!(500_000),
        annual_rate: dec!(8),
        years: 5,
    })
    .unwrap();
    assert!((result.result.emi - dec!(10_139)).abs() <= dec!(1));
}

#[test]
fn test_emi_matches_time_value_primitive() {
    let result = loans::calculate_emi(&loans::EmiInput {
        principal: dec!(2_000_000),
        annual_rate: dec!(9),
        years: 20,
    })
    .unwrap();
    let direct =
        time_value::amortized_payment(dec!(2_000_000), time_value::monthly_rate(dec!(9)), 240)
            .unwrap();
    assert_eq!(result.result.emi, direct);
}

// ===========================================================================
// Corpus sizing
// ===========================================================================

#[test]
fn test_retirement_corpus_grows_with_inflation() {
    let low = corpus::calculate_retirement_corpus(&corpus::RetirementCorpusInput {
        current_age: 35,
        retirement_age: 60,
        current_monthly_expenses: dec!(40_000),
        inflation_rate: dec!(4),
    })
    .unwrap();
    let high = corpus::calculate_retirement_corpus(&corpus::RetirementCorpusInput {
        current_age: 35,
        retirement_age: 60,
        current_monthly_expenses: dec!(40_000),
        inflation_rate: dec!(7),
    })
    .unwrap();
    assert!(high.result.total_corpus_needed > low.result.total_corpus_needed);
    assert_eq!(low.result.yearly_needs.len(), corpus::RETIREMENT_YEARS as usize);
}

#[test]
fn test_retirement_corpus_at_four_percent_inflation_is_flat_sum() {
    // Inflation equal to the discount rate: every year is worth the first year
    let result = corpus::calculate_retirement_corpus(&corpus::RetirementCorpusInput {
        current_age: 60,
        retirement_age: 60,
        current_monthly_expenses: dec!(10_000),
        inflation_rate: dec!(4),
    })
    .unwrap();
    assert!((result.result.total_corpus_needed - dec!(3_000_000)).abs() < dec!(0.01));
}

#[test]
fn test_insurance_floor_never_breached() {
    for age in [25u32, 40, 55, 59] {
        for savings in [Decimal::ZERO, dec!(5_000_000), dec!(50_000_000)] {
            let out = corpus::calculate_insurance_need(&corpus::InsuranceNeedInput {
                age,
                annual_income: dec!(800_000),
                dependents: 1,
                existing_savings: savings,
            })
            .unwrap()
            .result;
            assert!(out.total_insurance_need >= dec!(8_000_000));
        }
    }
}

#[test]
fn test_education_corpus_default_inflation() {
    let input: corpus::EducationCorpusInput = serde_json::from_str(
        r#"{"child_current_age":5,"target_age":6,"current_education_cost":"100000"}"#,
    )
    .unwrap();
    let out = corpus::calculate_education_corpus(&input).unwrap().result;
    assert_eq!(out.future_cost, dec!(108_000));
    assert_eq!(out.total_corpus_needed, dec!(129_600));
}

#[test]
fn test_emergency_fund_and_helpers() {
    let out = household::calculate_emergency_fund(&household::EmergencyFundInput {
        monthly_expenses: dec!(20_000),
        months: 9,
    })
    .unwrap()
    .result;
    assert_eq!(out.emergency_fund_needed, dec!(180_000));
    assert_eq!(household::savings_rate(dec!(40_000), dec!(30_000)), dec!(25));
    assert_eq!(
        out.recommendation,
        "Keep ₹180,000 as emergency fund to cover 9 months of expenses"
    );
}

#[test]
fn test_hundred_percent_for_a_century_fails_cleanly() {
    let result = investment::calculate_compound_interest(&investment::CompoundInterestInput {
        principal: dec!(1000),
        annual_rate: dec!(100),
        years: 100,
        compounding_frequency: 1,
    });
    match result {
        Err(finplan_core::PlannerError::Overflow(msg)) => assert!(msg.contains("^100"), "{}", msg),
        Err(e) => panic!("expected overflow, got {}", e),
        Ok(out) => panic!("expected overflow, got {}", out.result.final_amount),
    }
}

#[test]
fn test_education_corpus_deflates_when_target_age_passed() {
    let out = corpus::calculate_education_corpus(&corpus::EducationCorpusInput {
        child_current_age: 20,
        target_age: 18,
        current_education_cost: dec!(100_000),
        inflation_rate: dec!(8),
    })
    .unwrap()
    .result;
    assert!(out.future_cost < dec!(100_000));
    assert_eq!(out.years_to_save, -2);
}

// ===========================================================================
// Tax
// ===========================================================================

#[test]
fn test_tax_golden_value() {
    assert_eq!(slabs::compute_tax(dec!(1_000_000)), dec!(60_000));
}

#[test]
fn test_tax_savings_through_calculator() {
    let out = calculate_tax_savings(&TaxSavingsInput {
        annual_income: dec!(1_800_000),
        investments_80c: dec!(150_000),
        health_insurance: dec!(20_000),
        home_loan_interest: dec!(200_000),
    })
    .unwrap()
    .result;

    // Gross: 15k + 30k + 45k + 60k + 30% of 300k
    assert_eq!(out.tax_without_deductions, dec!(240_000));
    assert_eq!(out.taxable_income, dec!(1_430_000));
    // 15k + 30k + 45k + 20% of 230k
    assert_eq!(out.tax_with_deductions, dec!(136_000));
    assert_eq!(out.tax_saved, dec!(104_000));
    assert!(out.tax_with_deductions <= out.tax_without_deductions);
}
