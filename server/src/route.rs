use axum::http::StatusCode;
use axum::response::IntoResponse;

pub use self::book::*;

mod book;

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
