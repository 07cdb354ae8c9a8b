//! Statutory contribution calculation functionality.
//!
//! All four contributions key off the monthly basic salary alone, never
//! the attendance-adjusted earnings. Social insurance uses a step table,
//! health insurance is a clamped half premium, the housing fund is a
//! two-rate capped percentage, and income tax annualizes the salary
//! before walking the progressive brackets.

use rust_decimal::Decimal;

use crate::config::{
    ContributionSchedule, HealthInsuranceRule, HousingFundRule, IncomeTaxTable,
    SocialInsuranceTable,
};

/// Months in a year, used to annualize salary for income tax.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The four statutory contributions for one employee and month.
#[derive(Debug, Clone, PartialEq)]
pub struct StatutoryContributions {
    /// Social insurance contribution from the step table.
    pub social_insurance: Decimal,
    /// Health insurance half-premium contribution.
    pub health_insurance: Decimal,
    /// Housing fund contribution.
    pub housing_fund: Decimal,
    /// Monthly withheld income tax.
    pub income_tax: Decimal,
}

impl StatutoryContributions {
    /// Sums the four contributions.
    pub fn total(&self) -> Decimal {
        self.social_insurance + self.health_insurance + self.housing_fund + self.income_tax
    }
}

/// Looks up the social insurance contribution for a monthly salary.
///
/// The first bracket whose ceiling covers the salary wins; a salary above
/// every ceiling pays the table maximum.
pub fn social_insurance_contribution(monthly_salary: Decimal, table: &SocialInsuranceTable) -> Decimal {
    table
        .brackets
        .iter()
        .find(|bracket| monthly_salary <= bracket.ceiling)
        .map(|bracket| bracket.contribution)
        .unwrap_or(table.maximum)
}

/// Calculates the employee's health insurance contribution.
///
/// The employee pays half of the full premium on monthly salary, clamped
/// to the rule's floor and ceiling.
pub fn health_insurance_contribution(monthly_salary: Decimal, rule: &HealthInsuranceRule) -> Decimal {
    (monthly_salary * rule.premium_rate / Decimal::TWO)
        .clamp(rule.min_contribution, rule.max_contribution)
}

/// Calculates the housing fund contribution.
///
/// Salaries at or below the threshold pay the lower rate uncapped; above
/// it the upper rate applies, capped at the rule's fixed amount.
pub fn housing_fund_contribution(monthly_salary: Decimal, rule: &HousingFundRule) -> Decimal {
    if monthly_salary <= rule.threshold {
        monthly_salary * rule.lower_rate
    } else {
        (monthly_salary * rule.upper_rate).min(rule.cap)
    }
}

/// Calculates the monthly withheld income tax for a monthly salary.
///
/// The salary is annualized, the annual tax read off the progressive
/// bracket table, and the result divided back into a monthly amount.
pub fn monthly_income_tax(monthly_salary: Decimal, table: &IncomeTaxTable) -> Decimal {
    let annual_salary = monthly_salary * MONTHS_PER_YEAR;
    let annual_tax = table
        .brackets
        .iter()
        .find(|bracket| bracket.ceiling.is_none_or(|ceiling| annual_salary <= ceiling))
        .map(|bracket| bracket.base_tax + (annual_salary - bracket.excess_over) * bracket.rate)
        .unwrap_or(Decimal::ZERO);
    annual_tax / MONTHS_PER_YEAR
}

/// Calculates all four statutory contributions for a monthly salary.
pub fn calculate_contributions(
    monthly_salary: Decimal,
    schedule: &ContributionSchedule,
) -> StatutoryContributions {
    StatutoryContributions {
        social_insurance: social_insurance_contribution(monthly_salary, &schedule.social_insurance),
        health_insurance: health_insurance_contribution(monthly_salary, &schedule.health_insurance),
        housing_fund: housing_fund_contribution(monthly_salary, &schedule.housing_fund),
        income_tax: monthly_income_tax(monthly_salary, &schedule.income_tax),
    }
}
