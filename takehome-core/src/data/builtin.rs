//! Built-in 2025 reference tables.
//!
//! Health insurance brackets are derived from the 50 standard monthly
//! remuneration grades and the Kyokai Kenpo prefectural rates for FY2025
//! (effective March 2025). Each share is rounded half-up to the yen.
//!
//! | Prefecture | Health rate |
//! |------------|-------------|
//! | Hokkaido | 10.31% |
//! | Saitama | 9.78% |
//! | Chiba | 9.79% |
//! | Tokyo | 9.91% |
//! | Kanagawa | 9.92% |
//! | Aichi | 10.03% |
//! | Kyoto | 10.03% |
//! | Osaka | 10.24% |
//! | Hyogo | 10.16% |
//! | Fukuoka | 10.31% |
//!
//! The long-term care premium adds 1.59% nationwide. National Health
//! Insurance parameters are published per municipality; Tokyo carries the
//! 23-ward figures.

use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::repository::{PremiumTableRepository, RepositoryError};
use crate::calculations::common::round_half_up;
use crate::models::{
    HealthInsuranceProvider, NationalHealthInsuranceParams, NhiPortion, Prefecture,
    PremiumBracket,
};

/// Nationwide long-term care insurance rate for FY2025.
pub const LONG_TERM_CARE_RATE: Decimal = dec!(0.0159);

/// Standard monthly remuneration for each health insurance grade.
const HEALTH_GRADES: [Decimal; 50] = [
    dec!(58_000),
    dec!(68_000),
    dec!(78_000),
    dec!(88_000),
    dec!(98_000),
    dec!(104_000),
    dec!(110_000),
    dec!(118_000),
    dec!(126_000),
    dec!(134_000),
    dec!(142_000),
    dec!(150_000),
    dec!(160_000),
    dec!(170_000),
    dec!(180_000),
    dec!(190_000),
    dec!(200_000),
    dec!(220_000),
    dec!(240_000),
    dec!(260_000),
    dec!(280_000),
    dec!(300_000),
    dec!(320_000),
    dec!(340_000),
    dec!(360_000),
    dec!(380_000),
    dec!(410_000),
    dec!(440_000),
    dec!(470_000),
    dec!(500_000),
    dec!(530_000),
    dec!(560_000),
    dec!(590_000),
    dec!(620_000),
    dec!(650_000),
    dec!(680_000),
    dec!(710_000),
    dec!(750_000),
    dec!(790_000),
    dec!(830_000),
    dec!(880_000),
    dec!(930_000),
    dec!(980_000),
    dec!(1_030_000),
    dec!(1_090_000),
    dec!(1_150_000),
    dec!(1_210_000),
    dec!(1_270_000),
    dec!(1_330_000),
    dec!(1_390_000),
];

/// Exclusive upper bound of monthly income for every grade but the last.
const HEALTH_GRADE_UPPER_BOUNDS: [Decimal; 49] = [
    dec!(63_000),
    dec!(73_000),
    dec!(83_000),
    dec!(93_000),
    dec!(101_000),
    dec!(107_000),
    dec!(114_000),
    dec!(122_000),
    dec!(130_000),
    dec!(138_000),
    dec!(146_000),
    dec!(155_000),
    dec!(165_000),
    dec!(175_000),
    dec!(185_000),
    dec!(195_000),
    dec!(210_000),
    dec!(230_000),
    dec!(250_000),
    dec!(270_000),
    dec!(290_000),
    dec!(310_000),
    dec!(330_000),
    dec!(350_000),
    dec!(370_000),
    dec!(395_000),
    dec!(425_000),
    dec!(455_000),
    dec!(485_000),
    dec!(515_000),
    dec!(545_000),
    dec!(575_000),
    dec!(605_000),
    dec!(635_000),
    dec!(665_000),
    dec!(695_000),
    dec!(730_000),
    dec!(770_000),
    dec!(810_000),
    dec!(855_000),
    dec!(905_000),
    dec!(955_000),
    dec!(1_005_000),
    dec!(1_055_000),
    dec!(1_115_000),
    dec!(1_175_000),
    dec!(1_235_000),
    dec!(1_295_000),
    dec!(1_355_000),
];

const KYOKAI_KENPO_RATES: [(Prefecture, Decimal); 10] = [
    (Prefecture::Hokkaido, dec!(0.1031)),
    (Prefecture::Saitama, dec!(0.0978)),
    (Prefecture::Chiba, dec!(0.0979)),
    (Prefecture::Tokyo, dec!(0.0991)),
    (Prefecture::Kanagawa, dec!(0.0992)),
    (Prefecture::Aichi, dec!(0.1003)),
    (Prefecture::Kyoto, dec!(0.1003)),
    (Prefecture::Osaka, dec!(0.1024)),
    (Prefecture::Hyogo, dec!(0.1016)),
    (Prefecture::Fukuoka, dec!(0.1031)),
];

static BUILTIN: LazyLock<BuiltinTables> = LazyLock::new(BuiltinTables::new);

/// Returns the process-wide built-in tables.
pub fn builtin_tables() -> &'static BuiltinTables {
    &BUILTIN
}

/// In-memory reference data compiled into the crate.
#[derive(Debug, Clone)]
pub struct BuiltinTables {
    premium_tables: HashMap<(HealthInsuranceProvider, Prefecture), Vec<PremiumBracket>>,
    nhi_params: HashMap<Prefecture, NationalHealthInsuranceParams>,
}

impl BuiltinTables {
    pub fn new() -> Self {
        let premium_tables = KYOKAI_KENPO_RATES
            .iter()
            .map(|&(prefecture, rate)| {
                (
                    (HealthInsuranceProvider::KyokaiKenpo, prefecture),
                    health_brackets(rate, LONG_TERM_CARE_RATE),
                )
            })
            .collect();

        let nhi_params = HashMap::from([(Prefecture::Tokyo, tokyo_nhi_params())]);

        Self {
            premium_tables,
            nhi_params,
        }
    }

    /// Prefectures with an employee premium table for `provider`.
    pub fn prefectures_with_premium_table(
        &self,
        provider: HealthInsuranceProvider,
    ) -> Vec<Prefecture> {
        let mut prefectures: Vec<Prefecture> = self
            .premium_tables
            .keys()
            .filter(|(p, _)| *p == provider)
            .map(|(_, prefecture)| *prefecture)
            .collect();
        prefectures.sort();
        prefectures
    }
}

impl Default for BuiltinTables {
    fn default() -> Self {
        Self::new()
    }
}

impl PremiumTableRepository for BuiltinTables {
    fn premium_brackets(
        &self,
        provider: HealthInsuranceProvider,
        prefecture: Prefecture,
    ) -> Result<&[PremiumBracket], RepositoryError> {
        self.premium_tables
            .get(&(provider, prefecture))
            .map(Vec::as_slice)
            .ok_or_else(|| RepositoryError::premium_table_not_found(provider, prefecture))
    }

    fn nhi_params(
        &self,
        prefecture: Prefecture,
    ) -> Result<&NationalHealthInsuranceParams, RepositoryError> {
        self.nhi_params
            .get(&prefecture)
            .ok_or_else(|| RepositoryError::nhi_params_not_found(prefecture))
    }
}

/// Builds the 50-grade health insurance table for a prefectural rate.
pub fn health_brackets(
    health_rate: Decimal,
    long_term_care_rate: Decimal,
) -> Vec<PremiumBracket> {
    let with_ltc_rate = health_rate + long_term_care_rate;

    HEALTH_GRADES
        .iter()
        .enumerate()
        .map(|(index, &smr)| {
            let min_income_inclusive = match index {
                0 => Decimal::ZERO,
                _ => HEALTH_GRADE_UPPER_BOUNDS[index - 1],
            };
            let max_income_exclusive = HEALTH_GRADE_UPPER_BOUNDS.get(index).copied();

            PremiumBracket {
                grade: index as u32 + 1,
                standard_monthly_remuneration: smr,
                min_income_inclusive,
                max_income_exclusive,
                employee_share: round_half_up(smr * health_rate / Decimal::TWO),
                full_share: round_half_up(smr * health_rate),
                employee_share_with_ltc: round_half_up(smr * with_ltc_rate / Decimal::TWO),
                full_share_with_ltc: round_half_up(smr * with_ltc_rate),
            }
        })
        .collect()
}

fn tokyo_nhi_params() -> NationalHealthInsuranceParams {
    NationalHealthInsuranceParams {
        medical: NhiPortion {
            rate: dec!(0.0771),
            per_capita: dec!(47_300),
            annual_cap: dec!(660_000),
        },
        elderly_support: NhiPortion {
            rate: dec!(0.0269),
            per_capita: dec!(16_800),
            annual_cap: dec!(260_000),
        },
        long_term_care: Some(NhiPortion {
            rate: dec!(0.0225),
            per_capita: dec!(16_600),
            annual_cap: dec!(170_000),
        }),
        standard_deduction: dec!(430_000),
    }
}
