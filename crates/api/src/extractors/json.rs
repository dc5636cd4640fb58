//! JSON body extractor that validates the payload.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// Like `Json<T>`, but malformed bodies and failed `Validate` rules both
/// come back as `400 validation_error`.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header};
    use domain::models::auction_timer::SetBidTimerRequest;

    fn request(body: &str) -> Request {
        Request::builder()
            .method("PUT")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        let ValidJson(payload) =
            ValidJson::<SetBidTimerRequest>::from_request(request(r#"{"bidTime": "30"}"#), &())
                .await
                .unwrap();
        assert_eq!(payload.bid_time, 30);
    }

    #[tokio::test]
    async fn test_rejects_out_of_range() {
        let result =
            ValidJson::<SetBidTimerRequest>::from_request(request(r#"{"bidTime": 121}"#), &()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_rejects_non_numeric_text() {
        let result =
            ValidJson::<SetBidTimerRequest>::from_request(request(r#"{"bidTime": "abc"}"#), &())
                .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_rejects_missing_content_type() {
        let req = Request::builder()
            .method("PUT")
            .body(Body::from(r#"{"bidTime": 30}"#))
            .unwrap();
        let result = ValidJson::<SetBidTimerRequest>::from_request(req, &()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
