use moka::future::Cache;
use rust_decimal::Decimal;
use std::time::Duration;

use crate::contribution::ContributionSet;
use crate::error::PayrollError;
use crate::money::Money;
use crate::payslip::{Earnings, PayslipAggregator, PayslipBreakdown, PayslipRecord};

/// Memoizes contribution sets per contribution base.
///
/// The calculators are pure, so a cached set is always identical to a fresh
/// one; the cache only saves recomputation for repeated salary figures.
#[derive(Clone)]
pub struct ContributionCache {
    aggregator: PayslipAggregator,
    cache: Cache<Decimal, ContributionSet>,
}

impl ContributionCache {
    pub fn new(aggregator: PayslipAggregator, max_capacity: u64, ttl: Duration) -> Self {
        Self {
            aggregator,
            cache: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn aggregator(&self) -> &PayslipAggregator {
        &self.aggregator
    }

    /// Contributions on `base`, computed at most once per distinct amount.
    pub async fn contributions(&self, base: Money) -> ContributionSet {
        // 20000 and 20000.00 share an entry
        let key = base.amount().normalize();
        self.cache
            .get_with(key, async { self.aggregator.contributions(base) })
            .await
    }

    pub async fn breakdown(
        &self,
        record: &PayslipRecord,
    ) -> Result<PayslipBreakdown, PayrollError> {
        let earnings = record.earnings()?;
        self.breakdown_with(record, &earnings).await
    }

    /// Breakdown for a record whose earnings were already validated.
    pub async fn breakdown_with(
        &self,
        record: &PayslipRecord,
        earnings: &Earnings,
    ) -> Result<PayslipBreakdown, PayrollError> {
        let contributions = self.contributions(earnings.total()).await;
        self.aggregator.assemble(record, earnings, contributions)
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Pre-computes every monthly salary credit bracket floor, which covers
    /// the round salary figures most payslips carry.
    pub async fn warmup_salary_credits(&self) -> usize {
        let rules = self.aggregator.rules().sss;
        let mut bases = Vec::new();
        let mut credit = rules.min_msc.amount();
        while credit <= rules.max_msc.amount() {
            bases.push(Money::from_const(credit));
            credit += rules.msc_step;
        }

        let futures: Vec<_> = bases.iter().map(|b| self.contributions(*b)).collect();
        futures::future::join_all(futures).await;

        log::info!(
            "Contribution cache warmup complete: {} salary credits, {} entries cached",
            bases.len(),
            self.entry_count()
        );

        bases.len()
    }
}
