//! Configuration types for statutory contributions.
//!
//! This module contains the strongly-typed contribution schedule that is
//! either built from the statutory defaults or deserialized from a YAML
//! configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One tier of the social insurance step table.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialInsuranceBracket {
    /// The highest monthly salary this tier covers (inclusive).
    pub ceiling: Decimal,
    /// The fixed contribution for salaries at or below the ceiling.
    pub contribution: Decimal,
}

/// The social insurance step table.
///
/// Brackets are ordered by ascending ceiling; a salary above the last
/// ceiling pays the maximum contribution.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialInsuranceTable {
    /// The tiers in ascending ceiling order.
    pub brackets: Vec<SocialInsuranceBracket>,
    /// The contribution for salaries above the last ceiling.
    pub maximum: Decimal,
}

impl Default for SocialInsuranceTable {
    fn default() -> Self {
        let bracket = |ceiling: i64, contribution: i64| SocialInsuranceBracket {
            ceiling: Decimal::new(ceiling, 0),
            contribution: Decimal::new(contribution, 2),
        };
        Self {
            brackets: vec![
                bracket(4_000, 18_000),
                bracket(4_750, 20_250),
                bracket(5_500, 22_500),
                bracket(6_250, 24_750),
                bracket(7_000, 27_000),
                bracket(7_750, 29_250),
                bracket(8_500, 31_500),
                bracket(9_250, 33_750),
                bracket(10_000, 36_000),
                bracket(15_000, 54_000),
                bracket(20_000, 72_000),
                bracket(25_000, 90_000),
            ],
            maximum: Decimal::new(112_500, 2),
        }
    }
}

/// The health insurance half-premium rule.
///
/// The employee pays half of a percentage premium on monthly salary,
/// clamped to a floor and a ceiling.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthInsuranceRule {
    /// The full premium rate applied to monthly salary (e.g. 0.05).
    pub premium_rate: Decimal,
    /// The lowest employee contribution regardless of salary.
    pub min_contribution: Decimal,
    /// The highest employee contribution regardless of salary.
    pub max_contribution: Decimal,
}

impl Default for HealthInsuranceRule {
    fn default() -> Self {
        Self {
            premium_rate: Decimal::new(5, 2),
            min_contribution: Decimal::new(500, 0),
            max_contribution: Decimal::new(5_000, 0),
        }
    }
}

/// The housing fund rule.
///
/// Salaries at or below the threshold contribute at the lower rate with
/// no cap; above it the higher rate applies, capped at a fixed amount.
#[derive(Debug, Clone, Deserialize)]
pub struct HousingFundRule {
    /// The salary threshold separating the two rates (inclusive below).
    pub threshold: Decimal,
    /// The rate for salaries at or below the threshold.
    pub lower_rate: Decimal,
    /// The rate for salaries above the threshold.
    pub upper_rate: Decimal,
    /// The contribution cap applied above the threshold.
    pub cap: Decimal,
}

impl Default for HousingFundRule {
    fn default() -> Self {
        Self {
            threshold: Decimal::new(1_500, 0),
            lower_rate: Decimal::new(1, 2),
            upper_rate: Decimal::new(2, 2),
            cap: Decimal::new(200, 0),
        }
    }
}

/// One bracket of the progressive annual income tax table.
///
/// The annual tax is `base_tax + rate x (annual_salary - excess_over)`
/// for the first bracket whose ceiling covers the annual salary.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxBracket {
    /// The highest annual salary this bracket covers (inclusive); the top
    /// bracket has no ceiling.
    #[serde(default)]
    pub ceiling: Option<Decimal>,
    /// The fixed tax owed at the bracket floor.
    pub base_tax: Decimal,
    /// The marginal rate applied to the excess.
    pub rate: Decimal,
    /// The annual amount the marginal rate applies above.
    pub excess_over: Decimal,
}

/// The progressive annual income tax table.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxTable {
    /// The brackets in ascending ceiling order, top bracket last.
    pub brackets: Vec<IncomeTaxBracket>,
}

impl Default for IncomeTaxTable {
    fn default() -> Self {
        let bracket = |ceiling: Option<i64>, base_tax: i64, rate: i64, excess_over: i64| {
            IncomeTaxBracket {
                ceiling: ceiling.map(|c| Decimal::new(c, 0)),
                base_tax: Decimal::new(base_tax, 0),
                rate: Decimal::new(rate, 2),
                excess_over: Decimal::new(excess_over, 0),
            }
        };
        Self {
            brackets: vec![
                bracket(Some(250_000), 0, 0, 0),
                bracket(Some(400_000), 0, 15, 250_000),
                bracket(Some(800_000), 22_500, 20, 400_000),
                bracket(Some(2_000_000), 102_500, 25, 800_000),
                bracket(Some(8_000_000), 402_500, 30, 2_000_000),
                bracket(None, 2_202_500, 35, 8_000_000),
            ],
        }
    }
}

/// The complete contribution schedule in force for a calculation.
///
/// The default schedule carries the statutory tables; a YAML file can
/// override any of them (see the loader in this module's parent).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContributionSchedule {
    /// The social insurance step table.
    #[serde(default)]
    pub social_insurance: SocialInsuranceTable,
    /// The health insurance half-premium rule.
    #[serde(default)]
    pub health_insurance: HealthInsuranceRule,
    /// The housing fund rule.
    #[serde(default)]
    pub housing_fund: HousingFundRule,
    /// The progressive income tax table.
    #[serde(default)]
    pub income_tax: IncomeTaxTable,
}
