use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

const INVALID_PAYLOAD_MESSAGE: &str = "Invalid payload";
const INVALID_PATH_MESSAGE: &str = "Invalid path";

/// `Path` whose rejection is rendered as a 400 `AppError`.
#[derive(Debug, Clone, Copy)]
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| {
                AppError::bad_request(format!("{INVALID_PATH_MESSAGE}: {}", err.body_text()))
            })?;
        Ok(Self(value))
    }
}

/// `Json` body whose content rejections (bad syntax, wrong content type,
/// missing or mistyped field) are rendered as a 400 `AppError`. Body read
/// failures such as an oversized payload keep their own status.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| match err {
                JsonRejection::JsonDataError(_)
                | JsonRejection::JsonSyntaxError(_)
                | JsonRejection::MissingJsonContentType(_) => {
                    AppError::bad_request(format!("{INVALID_PAYLOAD_MESSAGE}: {}", err.body_text()))
                }
                other => AppError::rejected(other.status(), other.body_text()),
            })?;
        Ok(Self(value))
    }
}
