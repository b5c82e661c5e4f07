use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_stack::Report;
use kernel::KernelError;

pub const NO_BOOK_EXISTS: &str = "no book exists";

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

/// Business failures render as 200 with a text body; only infrastructure
/// failures change the status code.
#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        match self.0.current_context() {
            KernelError::Validation(message) => (StatusCode::OK, *message).into_response(),
            KernelError::NotFound => (StatusCode::OK, NO_BOOK_EXISTS).into_response(),
            KernelError::Timeout => {
                tracing::warn!("{:?}", self.0);
                StatusCode::SERVICE_UNAVAILABLE.into_response()
            }
            KernelError::Internal => {
                tracing::error!("{:?}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
