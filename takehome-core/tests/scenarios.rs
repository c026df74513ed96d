//! End-to-end take-home pay scenarios against the built-in 2025 tables.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use takehome_core::calculations::{
    calculate_health_insurance_premium, calculate_national_income_tax, calculate_pension_premium,
    calculate_residence_tax, employment_income_deduction,
};
use takehome_core::{
    HealthInsuranceProvider, Prefecture, TakeHomeError, TaxInput, calculate_taxes,
};

fn tokyo_salary(annual_income: Decimal) -> TaxInput {
    TaxInput {
        annual_income,
        is_employment_income: true,
        is_subject_to_long_term_care_premium: false,
        prefecture: Prefecture::Tokyo,
        health_insurance_provider: HealthInsuranceProvider::KyokaiKenpo,
        number_of_dependents: 0,
        dc_plan_contributions: dec!(0),
    }
}

// =============================================================================
// Furusato Nozei scenarios
// =============================================================================

#[test]
fn test_furusato_five_million_salary() {
    let result = calculate_taxes(&tokyo_salary(dec!(5_000_000))).expect("calculation failed");

    let furusato = &result.furusato_nozei;
    assert_eq!(furusato.limit, dec!(61_000));
    assert_eq!(furusato.income_tax_reduction, dec!(6_000));
    assert_eq!(furusato.residence_tax_reduction, dec!(53_000));
    assert_eq!(furusato.out_of_pocket_cost, dec!(2_000));
}

#[test]
fn test_furusato_thirteen_million_salary() {
    let result = calculate_taxes(&tokyo_salary(dec!(13_000_000))).expect("calculation failed");

    assert_eq!(result.health_insurance, dec!(648_120));
    assert_eq!(result.pension_payments, dec!(713_700));
    assert_eq!(result.employment_insurance, dec!(71_500));
    assert_eq!(result.national_income_tax, dec!(1_476_400));
    assert_eq!(result.residence_tax.total_residence_tax, dec!(921_000));

    let furusato = &result.furusato_nozei;
    assert_eq!(furusato.limit, dec!(327_000));
    assert_eq!(furusato.income_tax_reduction, dec!(80_000));
    assert_eq!(furusato.residence_tax_reduction, dec!(215_500));
    assert_eq!(furusato.out_of_pocket_cost, dec!(31_500));
}

#[test]
fn test_furusato_with_dc_contributions() {
    let without_dc = calculate_taxes(&tokyo_salary(dec!(5_000_000))).expect("calculation failed");
    let with_dc = calculate_taxes(&TaxInput {
        dc_plan_contributions: dec!(240_000),
        ..tokyo_salary(dec!(5_000_000))
    })
    .expect("calculation failed");

    assert_eq!(with_dc.furusato_nozei.limit, dec!(55_000));
    assert_eq!(with_dc.furusato_nozei.income_tax_reduction, dec!(2_700));
    assert_eq!(with_dc.furusato_nozei.residence_tax_reduction, dec!(47_600));
    assert_eq!(with_dc.furusato_nozei.out_of_pocket_cost, dec!(4_700));
    assert!(with_dc.furusato_nozei.limit < without_dc.furusato_nozei.limit);
}

#[test]
fn test_furusato_with_dependents() {
    let result = calculate_taxes(&TaxInput {
        number_of_dependents: 2,
        ..tokyo_salary(dec!(5_000_000))
    })
    .expect("calculation failed");

    assert_eq!(result.national_income_tax, dec!(71_300));
    assert_eq!(result.residence_tax.total_residence_tax, dec!(177_200));
    assert_eq!(result.furusato_nozei.limit, dec!(42_000));
}

#[test]
fn test_furusato_zero_for_low_income() {
    let result = calculate_taxes(&tokyo_salary(dec!(1_000_000))).expect("calculation failed");

    assert_eq!(result.residence_tax.total_residence_tax, dec!(0));
    assert_eq!(result.furusato_nozei.limit, dec!(0));
    assert_eq!(result.furusato_nozei.out_of_pocket_cost, dec!(0));
}

// =============================================================================
// Take-home identity and monotonicity
// =============================================================================

#[test]
fn test_take_home_identity_across_profiles() {
    let profiles = [
        tokyo_salary(dec!(3_000_000)),
        tokyo_salary(dec!(8_000_000)),
        TaxInput {
            is_subject_to_long_term_care_premium: true,
            prefecture: Prefecture::Osaka,
            ..tokyo_salary(dec!(6_500_000))
        },
        TaxInput {
            is_employment_income: false,
            health_insurance_provider: HealthInsuranceProvider::NationalHealthInsurance,
            ..tokyo_salary(dec!(4_000_000))
        },
        TaxInput {
            number_of_dependents: 3,
            dc_plan_contributions: dec!(276_000),
            ..tokyo_salary(dec!(25_000_000))
        },
    ];

    for input in profiles {
        let result = calculate_taxes(&input).expect("calculation failed");

        assert_eq!(
            result.take_home_income
                + result.national_income_tax
                + result.residence_tax.total_residence_tax
                + result.health_insurance
                + result.pension_payments
                + result.employment_insurance,
            input.annual_income,
            "identity broken for {input:?}"
        );
    }
}

#[test]
fn test_eight_million_take_home() {
    let result = calculate_taxes(&tokyo_salary(dec!(8_000_000))).expect("calculation failed");

    assert_eq!(result.national_income_tax, dec!(443_200));
    assert_eq!(result.residence_tax.total_residence_tax, dec!(453_100));
    assert_eq!(result.take_home_income, dec!(5_941_672));
    assert_eq!(result.furusato_nozei.limit, dec!(130_000));
}

#[test]
fn test_taxes_are_monotonic_in_income() {
    let mut previous_income_tax = Decimal::ZERO;
    let mut previous_residence_tax = Decimal::ZERO;
    let mut income = dec!(500_000);

    while income <= dec!(30_000_000) {
        let result = calculate_taxes(&tokyo_salary(income)).expect("calculation failed");

        assert!(result.national_income_tax >= previous_income_tax, "income tax fell at {income}");
        assert!(
            result.residence_tax.total_residence_tax >= previous_residence_tax,
            "residence tax fell at {income}"
        );

        previous_income_tax = result.national_income_tax;
        previous_residence_tax = result.residence_tax.total_residence_tax;
        income += dec!(100_000);
    }
}

// =============================================================================
// Component properties
// =============================================================================

#[test]
fn test_component_boundaries() {
    assert_eq!(employment_income_deduction(dec!(1_625_000)), dec!(550_000));
    assert_eq!(employment_income_deduction(dec!(1_800_000)), dec!(620_000));

    assert_eq!(calculate_national_income_tax(dec!(0)), dec!(0));
    assert_eq!(calculate_national_income_tax(dec!(-1_000_000)), dec!(0));

    assert_eq!(calculate_residence_tax(dec!(0), dec!(0), None).total_residence_tax, dec!(0));
    assert_eq!(calculate_residence_tax(dec!(450_000), dec!(0), None).total_residence_tax, dec!(0));
    assert_eq!(
        calculate_residence_tax(dec!(450_001), dec!(20_001), None).total_residence_tax,
        dec!(5_000)
    );
}

#[test]
fn test_premium_caps_and_errors() {
    let health = calculate_health_insurance_premium(
        dec!(20_000_000),
        false,
        HealthInsuranceProvider::KyokaiKenpo,
        Prefecture::Tokyo,
    );
    assert_eq!(health, Ok(dec!(826_500)));

    let negative = calculate_health_insurance_premium(
        dec!(-1_000_000),
        false,
        HealthInsuranceProvider::KyokaiKenpo,
        Prefecture::Tokyo,
    )
    .unwrap_err();
    assert_eq!(negative.to_string(), "Income cannot be negative.");

    assert_eq!(calculate_pension_premium(true, dec!(2_000_000)), Ok(dec!(713_700)));
    assert!(calculate_pension_premium(true, dec!(-1_000_000)).is_err());
    assert_eq!(calculate_pension_premium(false, dec!(-1_000_000)), Ok(dec!(210_120)));
}

#[test]
fn test_negative_income_surfaces_error() {
    let result = calculate_taxes(&tokyo_salary(dec!(-1_000_000)));

    assert!(matches!(result, Err(TakeHomeError::HealthInsurance(_))));
}
