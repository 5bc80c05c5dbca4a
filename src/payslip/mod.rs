//! Payslip records and the aggregator that turns raw earnings into a full
//! deduction and net pay breakdown.

pub mod history;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::contribution::{
    ContributionCalculator, ContributionRules, ContributionSet, PagIbigCalculator,
    PhilHealthCalculator, STATUTORY_RULES, SssCalculator,
};
use crate::error::PayrollError;
use crate::format::format_pay_period;
use crate::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PayPeriod {
    #[schema(example = "2025-11-01", value_type = String, format = "date")]
    pub start: NaiveDate,
    #[schema(example = "2025-11-30", value_type = String, format = "date")]
    pub end: NaiveDate,
}

impl PayPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PayrollError> {
        let period = PayPeriod { start, end };
        period.validate()?;
        Ok(period)
    }

    pub fn validate(&self) -> Result<(), PayrollError> {
        if self.start > self.end {
            return Err(PayrollError::InvalidPeriod {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn label(&self) -> String {
        format_pay_period(self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeRef {
    #[schema(example = "201")]
    pub employee_id: String,
    #[schema(example = "Ben Santos", nullable = true)]
    pub name: Option<String>,
    #[schema(example = "Engineering", nullable = true)]
    pub department: Option<String>,
    #[schema(example = "Android Developer", nullable = true)]
    pub position: Option<String>,
}

/// One pay period's raw figures as supplied by the payroll data source.
///
/// Amounts are taken as-is and validated when the record is aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PayslipRecord {
    #[serde(default = "Uuid::new_v4")]
    #[schema(value_type = String, example = "6f1c2b7e-8a39-4a53-9d3c-1d2f0e9b6a41")]
    pub id: Uuid,
    pub period: PayPeriod,
    #[schema(example = "2025-12-05", value_type = String, format = "date")]
    pub pay_date: NaiveDate,
    #[serde(default)]
    #[schema(value_type = f64, example = 20000.0)]
    pub basic_pay: Decimal,
    #[serde(default)]
    #[schema(value_type = f64, example = 1500.0)]
    pub overtime_pay: Decimal,
    #[serde(default)]
    #[schema(value_type = f64, example = 0.0)]
    pub holiday_pay: Decimal,
    #[serde(default)]
    #[schema(value_type = f64, example = 2000.0)]
    pub allowances: Decimal,
    #[serde(default)]
    #[schema(value_type = f64, example = 0.0)]
    pub bonuses: Decimal,
    #[serde(default)]
    #[schema(value_type = f64, example = 500.0)]
    pub other_deductions: Decimal,
    #[schema(nullable = true)]
    pub remarks: Option<String>,
    #[schema(nullable = true)]
    pub employee: Option<EmployeeRef>,
}

/// Validated earnings components of a payslip. Only built by
/// [`PayslipRecord::earnings`], which also checks that the total fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Earnings {
    basic_pay: Money,
    overtime_pay: Money,
    holiday_pay: Money,
    allowances: Money,
    bonuses: Money,
    total: Money,
}

impl Earnings {
    pub fn total(&self) -> Money {
        self.total
    }

    /// Labelled components in payslip order.
    pub fn components(&self) -> [(&'static str, Money); 5] {
        [
            ("Basic Pay", self.basic_pay),
            ("Overtime Pay", self.overtime_pay),
            ("Holiday Pay", self.holiday_pay),
            ("Allowances", self.allowances),
            ("Bonuses", self.bonuses),
        ]
    }
}

impl PayslipRecord {
    /// Validates the period, every earnings field and their total.
    pub fn earnings(&self) -> Result<Earnings, PayrollError> {
        self.period.validate()?;
        let mut earnings = Earnings {
            basic_pay: Money::validated("basic_pay", self.basic_pay)?,
            overtime_pay: Money::validated("overtime_pay", self.overtime_pay)?,
            holiday_pay: Money::validated("holiday_pay", self.holiday_pay)?,
            allowances: Money::validated("allowances", self.allowances)?,
            bonuses: Money::validated("bonuses", self.bonuses)?,
            total: Money::ZERO,
        };
        earnings.total = earnings
            .components()
            .iter()
            .try_fold(Money::ZERO, |acc, (_, amount)| {
                acc.checked_add(*amount, "total_earnings")
            })?;
        Ok(earnings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PayslipBreakdown {
    #[schema(value_type = String, example = "23500.00")]
    pub total_earnings: Money,
    pub contributions: ContributionSet,
    /// Employee shares of the three statutory schemes.
    #[schema(value_type = String, example = "2132.50")]
    pub mandatory_deductions: Money,
    #[schema(value_type = String, example = "500.00")]
    pub other_deductions: Money,
    #[schema(value_type = String, example = "2632.50")]
    pub total_deductions: Money,
    /// Negative when statutory floors exceed very low earnings.
    #[schema(value_type = String, example = "20867.50")]
    pub net_pay: Decimal,
    /// Net pay as a fraction of total earnings; absent when nothing was earned.
    #[schema(value_type = Option<String>, example = "0.8880")]
    pub net_salary_percentage: Option<Decimal>,
}

/// Composes the three scheme calculators with a payslip's own figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayslipAggregator {
    rules: ContributionRules,
    sss: SssCalculator,
    philhealth: PhilHealthCalculator,
    pagibig: PagIbigCalculator,
}

impl Default for PayslipAggregator {
    fn default() -> Self {
        Self::new(*STATUTORY_RULES)
    }
}

impl PayslipAggregator {
    pub fn new(rules: ContributionRules) -> Self {
        Self {
            rules,
            sss: SssCalculator::new(rules.sss),
            philhealth: PhilHealthCalculator::new(rules.philhealth),
            pagibig: PagIbigCalculator::new(rules.pagibig),
        }
    }

    pub fn rules(&self) -> &ContributionRules {
        &self.rules
    }

    pub fn contributions(&self, base: Money) -> ContributionSet {
        ContributionSet {
            sss: self.sss.compute_contribution(base),
            philhealth: self.philhealth.compute_contribution(base),
            pagibig: self.pagibig.compute_contribution(base),
        }
    }

    pub fn breakdown(&self, record: &PayslipRecord) -> Result<PayslipBreakdown, PayrollError> {
        let earnings = record.earnings()?;
        let contributions = self.contributions(earnings.total());
        self.assemble(record, &earnings, contributions)
    }

    /// Builds the breakdown from contributions already computed on
    /// `earnings.total()`.
    pub fn assemble(
        &self,
        record: &PayslipRecord,
        earnings: &Earnings,
        contributions: ContributionSet,
    ) -> Result<PayslipBreakdown, PayrollError> {
        let total_earnings = earnings.total();
        let other_deductions = Money::validated("other_deductions", record.other_deductions)?;
        let mandatory_deductions = contributions.mandatory_deductions();
        let total_deductions =
            mandatory_deductions.checked_add(other_deductions, "total_deductions")?;
        let net_pay = total_earnings.amount() - total_deductions.amount();

        let net_salary_percentage = if total_earnings.is_zero() {
            None
        } else {
            Some(net_pay / total_earnings.amount())
        };

        debug!(
            payslip_id = %record.id,
            total_earnings = %total_earnings,
            total_deductions = %total_deductions,
            net_pay = %net_pay,
            "payslip aggregated"
        );

        Ok(PayslipBreakdown {
            total_earnings,
            contributions,
            mandatory_deductions,
            other_deductions,
            total_deductions,
            net_pay,
            net_salary_percentage,
        })
    }
}

impl PayslipBreakdown {
    /// Employee-side deductions in payslip order.
    pub fn deduction_components(&self) -> [(&'static str, Money); 4] {
        [
            ("SSS", self.contributions.sss.employee_share),
            ("PhilHealth", self.contributions.philhealth.employee_share),
            ("Pag-IBIG", self.contributions.pagibig.employee_share),
            ("Others", self.other_deductions),
        ]
    }
}
