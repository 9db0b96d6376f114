use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constants::ERR_INVALID_REQUEST;
use crate::error::AppError;

/// JSON body extractor whose rejections use the `{message}` error shape
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(AppError::InvalidInput(ERR_INVALID_REQUEST))
            }
        }
    }
}

/// String value of an optional field; any other JSON type counts as absent
pub fn text(value: &Option<Value>) -> Option<&str> {
    value.as_ref().and_then(Value::as_str)
}

/// Integer value of a loosely typed field
///
/// Accepts JSON integers, floats (truncated toward zero) and strings holding
/// an integer, surrounding whitespace allowed.
pub fn loose_int(value: &Option<Value>) -> Option<i64> {
    match value.as_ref()? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loose_int() {
        assert_eq!(loose_int(&Some(json!(12))), Some(12));
        assert_eq!(loose_int(&Some(json!("15"))), Some(15));
        assert_eq!(loose_int(&Some(json!(" 20 "))), Some(20));
        assert_eq!(loose_int(&Some(json!(12.9))), Some(12));
        assert_eq!(loose_int(&Some(json!(-3))), Some(-3));

        assert_eq!(loose_int(&Some(json!("abc"))), None);
        assert_eq!(loose_int(&Some(json!("1.5"))), None);
        assert_eq!(loose_int(&Some(json!(true))), None);
        assert_eq!(loose_int(&Some(json!([1]))), None);
        assert_eq!(loose_int(&Some(Value::Null)), None);
        assert_eq!(loose_int(&None), None);
    }

    #[test]
    fn test_text() {
        assert_eq!(text(&Some(json!("alice"))), Some("alice"));
        assert_eq!(text(&Some(json!(42))), None);
        assert_eq!(text(&None), None);
    }
}
