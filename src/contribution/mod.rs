//! Statutory contribution schemes.

pub mod pagibig;
pub mod philhealth;
pub mod rules;
pub mod sss;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::money::{Money, Rate};

pub use pagibig::PagIbigCalculator;
pub use philhealth::PhilHealthCalculator;
pub use rules::{ContributionRules, MpfAccounting, STATUTORY_RULES};
pub use sss::SssCalculator;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Scheme {
    #[strum(to_string = "SSS", serialize = "sss")]
    Sss,
    #[strum(to_string = "PhilHealth", serialize = "philhealth")]
    PhilHealth,
    #[strum(to_string = "Pag-IBIG", serialize = "pagibig")]
    PagIbig,
}

/// One scheme's contribution on a given salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContributionBreakdown {
    pub scheme: Scheme,
    /// Contribution base: the monthly salary credit for SSS, the gross
    /// salary for the other schemes.
    #[schema(value_type = String, example = "20000")]
    pub base: Money,
    #[schema(value_type = String, example = "1000.00")]
    pub employee_share: Money,
    #[schema(value_type = String, example = "2030.00")]
    pub employer_share: Money,
    #[schema(value_type = String, example = "3030.00")]
    pub total: Money,
    /// Present only where the employee pays a percentage of `base`.
    #[schema(value_type = Option<String>, example = "0.05")]
    pub employee_rate: Option<Rate>,
    /// SSS mutual provident fund add-on, already included in `employer_share`.
    #[schema(value_type = Option<String>, example = "30.00")]
    pub mpf: Option<Money>,
}

pub trait ContributionCalculator {
    fn scheme(&self) -> Scheme;

    fn compute_contribution(&self, gross_monthly_salary: Money) -> ContributionBreakdown;
}

/// All three breakdowns computed on the same base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContributionSet {
    pub sss: ContributionBreakdown,
    pub philhealth: ContributionBreakdown,
    pub pagibig: ContributionBreakdown,
}

impl ContributionSet {
    pub fn get(&self, scheme: Scheme) -> &ContributionBreakdown {
        match scheme {
            Scheme::Sss => &self.sss,
            Scheme::PhilHealth => &self.philhealth,
            Scheme::PagIbig => &self.pagibig,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContributionBreakdown> {
        [&self.sss, &self.philhealth, &self.pagibig].into_iter()
    }

    /// Sum of the employee shares.
    pub fn mandatory_deductions(&self) -> Money {
        self.iter().map(|b| b.employee_share).sum()
    }
}
