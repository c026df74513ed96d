//! Integration tests for reference table loading from the CSV fixtures.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use takehome_core::{
    HealthInsuranceProvider, Prefecture, PremiumTableRepository, RepositoryError,
    TakeHomeCalculator, TaxInput, builtin_tables, calculate_taxes,
};
use takehome_data::{
    CsvTables, NhiParamsLoader, PremiumBracketLoader, TableLoadError, TablesConfig,
};

const PREMIUM_CSV_2025: &str = include_str!("../test-data/premium_brackets_2025.csv");
const NHI_CSV_2025: &str = include_str!("../test-data/nhi_params_2025.csv");

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data").join(name)
}

fn load_fixture_tables() -> CsvTables {
    TablesConfig {
        brackets: Some(fixture("premium_brackets_2025.csv")),
        nhi: Some(fixture("nhi_params_2025.csv")),
    }
    .open()
    .expect("Failed to load fixture tables")
}

#[test]
fn test_parse_all_2025_brackets() {
    let records = PremiumBracketLoader::parse(PREMIUM_CSV_2025.as_bytes()).expect("Failed to parse CSV");
    let tables = PremiumBracketLoader::into_tables(&records).expect("Failed to build tables");

    assert_eq!(records.len(), 100);
    assert_eq!(tables.len(), 2);
    for brackets in tables.values() {
        assert_eq!(brackets.len(), 50);
    }
}

#[test]
fn test_parse_all_2025_nhi_params() {
    let records = NhiParamsLoader::parse(NHI_CSV_2025.as_bytes()).expect("Failed to parse CSV");
    let table = NhiParamsLoader::into_table(&records).expect("Failed to build table");

    assert_eq!(table.len(), 2);
    assert!(table.contains_key(&Prefecture::Tokyo));
    assert!(table.contains_key(&Prefecture::Osaka));
}

#[test]
fn test_csv_tokyo_matches_builtin() {
    let tables = load_fixture_tables();

    let from_csv = tables
        .premium_brackets(HealthInsuranceProvider::KyokaiKenpo, Prefecture::Tokyo)
        .expect("Tokyo table");
    let builtin = builtin_tables()
        .premium_brackets(HealthInsuranceProvider::KyokaiKenpo, Prefecture::Tokyo)
        .expect("Tokyo table");

    assert_eq!(from_csv, builtin);
}

#[test]
fn test_csv_osaka_matches_builtin() {
    let tables = load_fixture_tables();

    let from_csv = tables
        .premium_brackets(HealthInsuranceProvider::KyokaiKenpo, Prefecture::Osaka)
        .expect("Osaka table");
    let builtin = builtin_tables()
        .premium_brackets(HealthInsuranceProvider::KyokaiKenpo, Prefecture::Osaka)
        .expect("Osaka table");

    assert_eq!(from_csv, builtin);
}

#[test]
fn test_csv_tables_reproduce_builtin_calculation() {
    let tables = load_fixture_tables();
    let input = TaxInput {
        annual_income: dec!(5_000_000),
        ..TaxInput::default()
    };

    let from_csv = TakeHomeCalculator::new(&tables)
        .calculate(&input)
        .expect("calculation failed");
    let builtin = calculate_taxes(&input).expect("calculation failed");

    assert_eq!(from_csv, builtin);
    assert_eq!(from_csv.furusato_nozei.limit, dec!(61_000));
}

#[test]
fn test_csv_only_prefectures_are_available() {
    let tables = load_fixture_tables();

    // Hokkaido has a built-in table but is not in the fixture
    let result = tables.premium_brackets(HealthInsuranceProvider::KyokaiKenpo, Prefecture::Hokkaido);
    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));

    // Osaka NHI is only in the fixture
    let osaka = tables.nhi_params(Prefecture::Osaka).expect("Osaka NHI");
    assert_eq!(osaka.medical.rate, dec!(0.0878));
}

#[test]
fn test_osaka_nhi_premium_from_csv() {
    let tables = load_fixture_tables();
    let input = TaxInput {
        annual_income: dec!(3_000_000),
        is_employment_income: false,
        prefecture: Prefecture::Osaka,
        health_insurance_provider: HealthInsuranceProvider::NationalHealthInsurance,
        ..TaxInput::default()
    };

    let result = TakeHomeCalculator::new(&tables)
        .calculate(&input)
        .expect("calculation failed");

    // taxable 2,570,000
    // medical 225,646 + 33,910 = 259,556
    // support  83,525 + 11,980 =  95,505
    assert_eq!(result.health_insurance, dec!(355_061));
}

#[test]
fn test_gap_fixture_is_rejected() {
    let config = TablesConfig {
        brackets: Some(fixture("premium_brackets_gap.csv")),
        nhi: None,
    };

    let err = config.open().expect_err("Should reject table with a gap");

    assert_eq!(
        err,
        TableLoadError::Repository(RepositoryError::InvalidData(
            "Kyokai Kenpo table for Tokyo: grade 1 ends at 63000 but grade 2 starts at 64000"
                .to_string()
        ))
    );
}
