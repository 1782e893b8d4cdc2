use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::Modules;
use crate::request::{
    BookTransformer, CreateBookRequest, DeleteBookRequest, GetBookRequest, UpdateBookRequest,
};
use crate::response::{BookPresenter, CreatedBookPresenter};
use application::schema::DependOnBookSchema;
use application::service::{
    CreateBookService, DeleteBookService, GetBookService, UpdateBookService,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;


pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl<M: Modules> BookRouter for Router<M> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(|State(module): State<M>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async move { module.get_all_books().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<M>, body: Result<Json<Value>, JsonRejection>| async move {
                    let Json(body) = body?;
                    let transformer = BookTransformer::new(module.book_schema().clone());
                    Controller::new(transformer, CreatedBookPresenter)
                        .try_intake(CreateBookRequest::new(body))?
                        .handle(|dto| async move { module.create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:isbn",
            get(
                |State(module): State<M>, Path(isbn): Path<String>| async move {
                    let transformer = BookTransformer::new(module.book_schema().clone());
                    Controller::new(transformer, BookPresenter)
                        .intake(GetBookRequest::new(isbn))
                        .handle(|dto| async move { module.get_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<M>,
                 Path(isbn): Path<String>,
                 body: Result<Json<Value>, JsonRejection>| async move {
                    let Json(body) = body?;
                    let transformer = BookTransformer::new(module.book_schema().clone());
                    Controller::new(transformer, BookPresenter)
                        .try_intake((isbn, UpdateBookRequest::new(body)))?
                        .handle(|dto| async move { module.update_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<M>, Path(isbn): Path<String>| async move {
                    let transformer = BookTransformer::new(module.book_schema().clone());
                    Controller::new(transformer, BookPresenter)
                        .intake(DeleteBookRequest::new(isbn))
                        .handle(|dto| async move { module.delete_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
