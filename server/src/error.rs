use application::schema::ValidationErrors;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub enum ErrorStatus {
    /// Rejected request body, answered with every message.
    Invalid(Vec<String>),
    Kernel(Report<KernelError>),
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus::Kernel(e)
    }
}

impl From<ValidationErrors> for ErrorStatus {
    fn from(e: ValidationErrors) -> Self {
        ErrorStatus::Invalid(e.into())
    }
}

impl From<JsonRejection> for ErrorStatus {
    fn from(e: JsonRejection) -> Self {
        ErrorStatus::Invalid(vec![e.body_text()])
    }
}

#[derive(Debug, Serialize)]
struct InvalidBody {
    errors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    message: String,
    status: u16,
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let report = match self {
            ErrorStatus::Invalid(errors) => {
                tracing::debug!(?errors, "Rejected request body");
                return (StatusCode::BAD_REQUEST, Json(InvalidBody { errors })).into_response();
            }
            ErrorStatus::Kernel(report) => report,
        };

        let status = match report.current_context() {
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::Conflict => StatusCode::INTERNAL_SERVER_ERROR,
            KernelError::Timeout => StatusCode::SERVICE_UNAVAILABLE,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match report.current_context() {
            KernelError::NotFound => report
                .downcast_ref::<String>()
                .cloned()
                .unwrap_or_else(|| KernelError::NotFound.to_string()),
            context => context.to_string(),
        };
        if status.is_server_error() {
            tracing::error!("{report:?}");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                message,
                status: status.as_u16(),
            },
        };
        (status, Json(body)).into_response()
    }
}
