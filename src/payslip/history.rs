//! Views across one or many payslips: 13th-month estimate, net pay trend and
//! the composition of earnings and deductions.

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::{Earnings, PayPeriod, PayslipBreakdown, PayslipRecord};
use crate::error::PayrollError;
use crate::money::Money;

/// Mean total earnings across `records`, the usual basis for projecting
/// 13th-month pay. `None` when there is nothing to average.
pub fn thirteenth_month_estimate(records: &[PayslipRecord]) -> Result<Option<Money>, PayrollError> {
    if records.is_empty() {
        return Ok(None);
    }

    let mut total = Money::ZERO;
    for record in records {
        total = total.checked_add(record.earnings()?.total(), "total_earnings")?;
    }
    let mean = total.amount() / Decimal::from(records.len());
    Money::new(mean).map(Some)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NetPayPoint {
    pub period: PayPeriod,
    #[schema(example = "November, 2025")]
    pub label: String,
    #[schema(value_type = String, example = "18100.00")]
    pub net_pay: Decimal,
}

/// Net pay per period, oldest first.
pub fn net_pay_history<'a, I>(entries: I) -> Vec<NetPayPoint>
where
    I: IntoIterator<Item = (&'a PayslipRecord, &'a PayslipBreakdown)>,
{
    let mut points: Vec<NetPayPoint> = entries
        .into_iter()
        .map(|(record, breakdown)| NetPayPoint {
            period: record.period,
            label: record.period.label(),
            net_pay: breakdown.net_pay,
        })
        .collect();
    points.sort_by_key(|p| (p.period.start, p.period.end));
    points
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CompositionShare {
    #[schema(example = "Basic Pay")]
    pub label: String,
    #[schema(value_type = String, example = "20000.00")]
    pub amount: Money,
    /// Fraction of the composition total; zero when the total is zero.
    #[schema(value_type = String, example = "0.85")]
    pub share: Decimal,
}

fn composition(components: &[(&'static str, Money)]) -> Vec<CompositionShare> {
    let total: Money = components.iter().map(|(_, amount)| *amount).sum();
    components
        .iter()
        .map(|(label, amount)| CompositionShare {
            label: (*label).to_string(),
            amount: *amount,
            share: if total.is_zero() {
                Decimal::ZERO
            } else {
                amount.amount() / total.amount()
            },
        })
        .collect()
}

pub fn earnings_composition(earnings: &Earnings) -> Vec<CompositionShare> {
    composition(&earnings.components())
}

pub fn deductions_composition(breakdown: &PayslipBreakdown) -> Vec<CompositionShare> {
    composition(&breakdown.deduction_components())
}
