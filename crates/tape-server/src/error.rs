//! HTTP error mapping

use crate::response::{IndentedJson, MessageResponse};
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tape_core::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("error binding object")]
    Binding(#[source] serde_json::Error),

    #[error("error binding object")]
    Body(#[source] BytesRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Catalog(_) => StatusCode::NOT_FOUND,
            // Clients have always received 200 for unparseable bodies.
            ApiError::Binding(_) | ApiError::Body(_) => StatusCode::OK,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            IndentedJson(MessageResponse::new(self.to_string())),
        )
            .into_response()
    }
}
