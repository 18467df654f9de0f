//! Query string extractor with JSON error responses.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Like [`Query`], but a query string that does not deserialize into `T`
/// is answered with a 400 `BAD_REQUEST` [`ErrorResponse`](crate::ErrorResponse).
///
/// ```ignore
/// use axum_helpers::extractors::QueryParams;
///
/// async fn list(QueryParams(filter): QueryParams<ProductFilter>) -> String {
///     format!("{:?}", filter)
/// }
/// ```
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| QueryParams(value))
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())
    }
}
