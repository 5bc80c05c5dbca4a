//! Social Security System contributions.
//!
//! Contributions are taken from the monthly salary credit (MSC), a coarse
//! step function of salary: floored to the step size and clamped into the
//! credit range, so even a zero salary contributes on the minimum credit.

use rust_decimal::Decimal;

use super::rules::{MpfAccounting, STATUTORY_RULES, SssRules};
use super::{ContributionBreakdown, ContributionCalculator, Scheme};
use crate::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SssCalculator {
    rules: SssRules,
}

impl Default for SssCalculator {
    fn default() -> Self {
        Self::new(STATUTORY_RULES.sss)
    }
}

impl SssCalculator {
    pub fn new(rules: SssRules) -> Self {
        Self { rules }
    }

    /// Maps a raw salary figure to its monthly salary credit.
    ///
    /// Negative figures are treated as zero.
    pub fn salary_to_msc(&self, gross_monthly_salary: Decimal) -> Money {
        let salary = gross_monthly_salary.max(Decimal::ZERO);
        let step = self.rules.msc_step;
        let floored = (salary / step).floor() * step;
        let msc = floored.clamp(self.rules.min_msc.amount(), self.rules.max_msc.amount());
        Money::from_const(msc)
    }

    fn mpf_for(&self, msc: Money) -> Money {
        if msc < self.rules.mpf_threshold {
            self.rules.mpf_low
        } else {
            self.rules.mpf_high
        }
    }
}

impl ContributionCalculator for SssCalculator {
    fn scheme(&self) -> Scheme {
        Scheme::Sss
    }

    fn compute_contribution(&self, gross_monthly_salary: Money) -> ContributionBreakdown {
        let msc = self.salary_to_msc(gross_monthly_salary.amount());
        let mpf = self.mpf_for(msc);

        let employee_share = msc * self.rules.employee_rate;
        let employer_share = msc * self.rules.employer_rate + mpf;
        let total = match self.rules.mpf_accounting {
            MpfAccounting::Corrected => employee_share + employer_share,
            MpfAccounting::Legacy => employee_share + employer_share + mpf,
        };

        ContributionBreakdown {
            scheme: self.scheme(),
            base: msc,
            employee_share,
            employer_share,
            total,
            employee_rate: Some(self.rules.employee_rate),
            mpf: Some(mpf),
        }
    }
}
