use crate::controller::Exhaust;
use application::transfer::{BookDto, BookSummaryDto, DeletedAllBooksDto, DeletedBookDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    #[serde(rename = "_id")]
    id: Uuid,
    title: String,
    comments: Vec<String>,
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookSummaryResponse {
    #[serde(rename = "_id")]
    id: Uuid,
    title: String,
    commentcount: i64,
}

pub struct DeletedBookResponse;

impl IntoResponse for DeletedBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, "delete successful").into_response()
    }
}

pub struct DeletedAllBooksResponse;

impl IntoResponse for DeletedAllBooksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, "complete delete successful").into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        let BookDto {
            id,
            title,
            comments,
        } = input;
        BookResponse {
            id,
            title,
            comments,
        }
    }
}

impl Exhaust<Vec<BookSummaryDto>> for BookPresenter {
    type To = axum::Json<Vec<BookSummaryResponse>>;
    fn emit(&self, input: Vec<BookSummaryDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(|book| BookSummaryResponse {
                id: book.id,
                title: book.title,
                commentcount: book.comment_count,
            })
            .collect::<Vec<_>>();

        axum::Json::from(result)
    }
}

impl Exhaust<DeletedBookDto> for BookPresenter {
    type To = DeletedBookResponse;
    fn emit(&self, _: DeletedBookDto) -> Self::To {
        DeletedBookResponse
    }
}

impl Exhaust<DeletedAllBooksDto> for BookPresenter {
    type To = DeletedAllBooksResponse;
    fn emit(&self, _: DeletedAllBooksDto) -> Self::To {
        DeletedAllBooksResponse
    }
}
