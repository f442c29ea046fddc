//! Shared response envelope for API handlers.
//!
//! Every successful response is `{ "data": <payload or null>, "message": "SUCCESS" }`.
//! Use [`DataResponse`] instead of ad-hoc `serde_json::json!` bodies.

use serde::Serialize;

/// Message carried by every successful response.
pub const SUCCESS: &str = "SUCCESS";

/// Standard `{ "data": T, "message": "SUCCESS" }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::ok(video)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: Option<T>,
    pub message: &'static str,
}

impl<T: Serialize> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            message: SUCCESS,
        }
    }
}

impl DataResponse<()> {
    /// Envelope for mutations that return no payload (`"data": null`).
    pub fn empty() -> Self {
        Self {
            data: None,
            message: SUCCESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn payload_is_wrapped() {
        let value = serde_json::to_value(DataResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(value, json!({ "data": [1, 2], "message": "SUCCESS" }));
    }

    #[test]
    fn empty_envelope_has_null_data() {
        let value = serde_json::to_value(DataResponse::empty()).unwrap();
        assert_eq!(value, json!({ "data": null, "message": "SUCCESS" }));
    }
}
