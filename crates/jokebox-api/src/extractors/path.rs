//! Path and query extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use jokebox_core::JokeId;
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// `:id` segment parsed as a joke id
#[derive(Debug, Clone, Copy)]
pub struct JokeIdPath(pub JokeId);

#[async_trait]
impl<S> FromRequestParts<S> for JokeIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        JokeId::parse(&raw)
            .map(JokeIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid joke id"))
    }
}

/// Query string extractor reporting failures as `ApiError`
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(inner) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(QueryParams(inner))
    }
}
