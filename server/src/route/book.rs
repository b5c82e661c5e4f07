use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::Payload;
use crate::handler::AppModule;
use crate::request::{
    AddCommentRequest, BookTransformer, CreateBookRequest, DeleteBookRequest, GetBookRequest,
};
use crate::response::BookPresenter;
use crate::route::not_found;
use application::service::{
    CommentBookService, CreateBookService, DeleteBookService, GetBookService,
};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async move { module.catalog().get_all_books().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>, Payload(req): Payload<CreateBookRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.catalog().create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(|State(module): State<AppModule>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async move { module.catalog().delete_all_books().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .fallback(not_found),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(id))
                        .handle(|dto| async move { module.catalog().get_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 Path(id): Path<String>,
                 Payload(req): Payload<AddCommentRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.catalog().add_comment(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(DeleteBookRequest::new(id))
                        .handle(|dto| async move { module.catalog().delete_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .fallback(not_found),
        )
    }
}
