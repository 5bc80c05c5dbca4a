use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chrono::NaiveDate;
use derive_more::{Display, Error};
use serde_json::json;

/// Validation failures raised by the payroll core.
///
/// Every variant is local to the call that produced it; nothing here is
/// fatal to the process.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum PayrollError {
    /// A monetary or rate field is negative, non-finite or out of range.
    #[display(fmt = "invalid {}: {}", field, reason)]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// Pay period ends before it starts.
    #[display(fmt = "invalid pay period: {} is after {}", start, end)]
    InvalidPeriod {
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl PayrollError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        PayrollError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Stable machine-readable kind, used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            PayrollError::InvalidInput { .. } => "invalid_input",
            PayrollError::InvalidPeriod { .. } => "invalid_period",
        }
    }
}

impl ResponseError for PayrollError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }))
    }
}
