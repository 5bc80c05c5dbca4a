use crate::api::contribution::{ContributionRequest, ContributionSetResponse, ContributionView};
use crate::api::payslip::{
    PaySummary, PayslipBreakdownResponse, PayslipSummaryRequest, PayslipSummaryResponse,
};
use crate::contribution::{ContributionBreakdown, ContributionSet, Scheme};
use crate::payslip::history::{CompositionShare, NetPayPoint};
use crate::payslip::{EmployeeRef, PayPeriod, PayslipBreakdown, PayslipRecord};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payslip Engine API",
        version = "0.1.0",
        description = r#"
## Payslip Engine

Statutory contribution and payslip calculations for the employee self-service app.

### 🔹 Key Features
- **Contributions**
  - SSS (monthly salary credit brackets, MPF add-on)
  - PhilHealth (floor, percentage band, ceiling)
  - Pag-IBIG (two-tier employee rate)
- **Payslips**
  - Gross pay, mandatory and other deductions, net pay, net salary percentage
  - Earnings and deductions composition for charts
  - 13th-month pay estimate and net pay history

### 📦 Response Format
- Amounts are decimal strings at full precision; `*_display` fields are rounded to centavos
- Validation failures return `422` with `error` and `message`

---
Built with **Rust**, **Actix Web**, **rust_decimal**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::contribution::compute_all,
        crate::api::contribution::compute_one,

        crate::api::payslip::breakdown,
        crate::api::payslip::summary
    ),
    components(
        schemas(
            Scheme,
            ContributionBreakdown,
            ContributionSet,
            ContributionRequest,
            ContributionView,
            ContributionSetResponse,
            PayPeriod,
            EmployeeRef,
            PayslipRecord,
            PayslipBreakdown,
            PaySummary,
            CompositionShare,
            NetPayPoint,
            PayslipBreakdownResponse,
            PayslipSummaryRequest,
            PayslipSummaryResponse
        )
    ),
    tags(
        (name = "Contribution", description = "Statutory contribution APIs"),
        (name = "Payslip", description = "Payslip breakdown APIs"),
    )
)]
pub struct ApiDoc;
