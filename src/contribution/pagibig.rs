//! Pag-IBIG fund contributions: straight percentages of salary with a single
//! employee rate breakpoint.

use super::rules::{PagIbigRules, STATUTORY_RULES};
use super::{ContributionBreakdown, ContributionCalculator, Scheme};
use crate::money::{Money, Rate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagIbigCalculator {
    rules: PagIbigRules,
}

impl Default for PagIbigCalculator {
    fn default() -> Self {
        Self::new(STATUTORY_RULES.pagibig)
    }
}

impl PagIbigCalculator {
    pub fn new(rules: PagIbigRules) -> Self {
        Self { rules }
    }

    pub fn employee_rate(&self, salary: Money) -> Rate {
        if salary <= self.rules.breakpoint {
            self.rules.low_employee_rate
        } else {
            self.rules.high_employee_rate
        }
    }
}

impl ContributionCalculator for PagIbigCalculator {
    fn scheme(&self) -> Scheme {
        Scheme::PagIbig
    }

    fn compute_contribution(&self, gross_monthly_salary: Money) -> ContributionBreakdown {
        let employee_rate = self.employee_rate(gross_monthly_salary);
        let employee_share = gross_monthly_salary * employee_rate;
        let employer_share = gross_monthly_salary * self.rules.employer_rate;

        ContributionBreakdown {
            scheme: self.scheme(),
            base: gross_monthly_salary,
            employee_share,
            employer_share,
            total: employee_share + employer_share,
            employee_rate: Some(employee_rate),
            mpf: None,
        }
    }
}
