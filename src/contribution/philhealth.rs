//! PhilHealth premiums: a fixed floor, a percentage band, a fixed ceiling.
//! The premium is split evenly between employee and employer.

use rust_decimal::Decimal;

use super::rules::{PhilHealthRules, STATUTORY_RULES};
use super::{ContributionBreakdown, ContributionCalculator, Scheme};
use crate::money::{Money, Rate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiumTier {
    Floor,
    Rated,
    Ceiling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhilHealthCalculator {
    rules: PhilHealthRules,
}

impl Default for PhilHealthCalculator {
    fn default() -> Self {
        Self::new(STATUTORY_RULES.philhealth)
    }
}

impl PhilHealthCalculator {
    pub fn new(rules: PhilHealthRules) -> Self {
        Self { rules }
    }

    /// Tier for a salary. Each tier includes its upper bound.
    pub fn tier(&self, salary: Money) -> PremiumTier {
        if salary <= self.rules.floor_ceiling {
            PremiumTier::Floor
        } else if salary <= self.rules.rated_ceiling {
            PremiumTier::Rated
        } else {
            PremiumTier::Ceiling
        }
    }

    pub fn premium(&self, salary: Money) -> Money {
        match self.tier(salary) {
            PremiumTier::Floor => self.rules.floor_premium,
            PremiumTier::Rated => salary * self.rules.premium_rate,
            PremiumTier::Ceiling => self.rules.ceiling_premium,
        }
    }
}

impl ContributionCalculator for PhilHealthCalculator {
    fn scheme(&self) -> Scheme {
        Scheme::PhilHealth
    }

    fn compute_contribution(&self, gross_monthly_salary: Money) -> ContributionBreakdown {
        let premium = self.premium(gross_monthly_salary);
        let employee_share = premium.half();
        let employer_share = premium.half();

        let employee_rate = match self.tier(gross_monthly_salary) {
            PremiumTier::Rated => Some(Rate::from_const(
                self.rules.premium_rate.fraction() / Decimal::TWO,
            )),
            PremiumTier::Floor | PremiumTier::Ceiling => None,
        };

        ContributionBreakdown {
            scheme: self.scheme(),
            base: gross_monthly_salary,
            employee_share,
            employer_share,
            total: employee_share + employer_share,
            employee_rate,
            mpf: None,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    /// Salaries in centavos up to ten million pesos.
    fn salary() -> impl Strategy<Value = Money> {
        (0i64..1_000_000_000).prop_map(|c| Money::new(Decimal::new(c, 2)).unwrap())
    }

    proptest! {
        #[test]
        fn total_is_sum_of_shares(s in salary()) {
            let b = PhilHealthCalculator::default().compute_contribution(s);
            prop_assert_eq!(b.total, b.employee_share + b.employer_share);
        }

        #[test]
        fn shares_are_non_negative(s in salary()) {
            let b = PhilHealthCalculator::default().compute_contribution(s);
            prop_assert!(!b.employee_share.amount().is_sign_negative());
            prop_assert!(!b.employer_share.amount().is_sign_negative());
        }

        #[test]
        fn premium_within_floor_and_ceiling(s in salary()) {
            let premium = PhilHealthCalculator::default().premium(s).amount();
            prop_assert!(premium >= dec!(500) && premium <= dec!(5000));
        }

        #[test]
        fn repeated_calls_agree(s in salary()) {
            let calc = PhilHealthCalculator::default();
            prop_assert_eq!(calc.compute_contribution(s), calc.compute_contribution(s));
        }
    }
}
