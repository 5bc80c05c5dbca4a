//! Bracket and rate tables for the three statutory schemes.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::money::{Money, Rate};

/// How the SSS mutual provident fund add-on enters the scheme total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MpfAccounting {
    /// MPF counted once, inside the employer share.
    #[default]
    Corrected,
    /// MPF counted inside the employer share and again on top of the total,
    /// reproducing figures produced by the historical payslip calculator.
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SssRules {
    pub min_msc: Money,
    pub max_msc: Money,
    /// Salary credits move in whole steps of this size.
    pub msc_step: Decimal,
    pub employee_rate: Rate,
    pub employer_rate: Rate,
    /// Credits strictly below this pay the low MPF amount.
    pub mpf_threshold: Money,
    pub mpf_low: Money,
    pub mpf_high: Money,
    pub mpf_accounting: MpfAccounting,
}

impl Default for SssRules {
    fn default() -> Self {
        Self {
            min_msc: Money::from_const(dec!(5000)),
            max_msc: Money::from_const(dec!(35000)),
            msc_step: dec!(500),
            employee_rate: Rate::from_const(dec!(0.05)),
            employer_rate: Rate::from_const(dec!(0.10)),
            mpf_threshold: Money::from_const(dec!(15000)),
            mpf_low: Money::from_const(dec!(10.00)),
            mpf_high: Money::from_const(dec!(30.00)),
            mpf_accounting: MpfAccounting::Corrected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhilHealthRules {
    /// Salaries up to and including this amount pay `floor_premium`.
    pub floor_ceiling: Money,
    /// Salaries above `floor_ceiling` up to and including this amount pay
    /// `premium_rate` of salary; anything higher pays `ceiling_premium`.
    pub rated_ceiling: Money,
    pub premium_rate: Rate,
    pub floor_premium: Money,
    pub ceiling_premium: Money,
}

impl Default for PhilHealthRules {
    fn default() -> Self {
        Self {
            floor_ceiling: Money::from_const(dec!(10000.00)),
            rated_ceiling: Money::from_const(dec!(99999.99)),
            premium_rate: Rate::from_const(dec!(0.05)),
            floor_premium: Money::from_const(dec!(500.00)),
            ceiling_premium: Money::from_const(dec!(5000.00)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagIbigRules {
    /// Salaries up to and including this amount use `low_employee_rate`.
    pub breakpoint: Money,
    pub low_employee_rate: Rate,
    pub high_employee_rate: Rate,
    pub employer_rate: Rate,
}

impl Default for PagIbigRules {
    fn default() -> Self {
        Self {
            breakpoint: Money::from_const(dec!(1500)),
            low_employee_rate: Rate::from_const(dec!(0.01)),
            high_employee_rate: Rate::from_const(dec!(0.02)),
            employer_rate: Rate::from_const(dec!(0.02)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContributionRules {
    pub sss: SssRules,
    pub philhealth: PhilHealthRules,
    pub pagibig: PagIbigRules,
}

impl ContributionRules {
    pub fn with_mpf_accounting(mut self, accounting: MpfAccounting) -> Self {
        self.sss.mpf_accounting = accounting;
        self
    }
}

/// Current statutory tables.
pub static STATUTORY_RULES: Lazy<ContributionRules> = Lazy::new(ContributionRules::default);
