//! Statutory payroll contributions (SSS, PhilHealth, Pag-IBIG) and payslip
//! aggregation for the employee self-service app, plus the HTTP service that
//! exposes them.

pub mod api;
pub mod cache;
pub mod config;
pub mod contribution;
pub mod docs;
pub mod error;
pub mod format;
pub mod money;
pub mod payslip;
pub mod routes;

pub use contribution::{
    ContributionBreakdown, ContributionCalculator, ContributionRules, ContributionSet,
    MpfAccounting, PagIbigCalculator, PhilHealthCalculator, Scheme, SssCalculator,
};
pub use error::PayrollError;
pub use money::{Money, Rate};
pub use payslip::{PayslipAggregator, PayslipBreakdown, PayslipRecord};
