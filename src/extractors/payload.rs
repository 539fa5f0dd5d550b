//! JSON body decoded into a contract type and checked with [`Validate`].

use crate::error::AppError;
use crate::validation::Validate;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

/// Shape/type/enum errors are validation failures (422). Other rejections keep the status axum
/// gives them: 413 over the body limit, 415 without a JSON content type, 400 otherwise.
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(reject)?;
        value.validate()?;
        Ok(Payload(value))
    }
}

fn reject(rejection: JsonRejection) -> AppError {
    if let JsonRejection::JsonDataError(e) = rejection {
        return AppError::Validation(e.body_text());
    }
    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::UnsupportedMediaType(rejection.body_text()),
        _ => AppError::BadRequest(rejection.body_text()),
    }
}
