//! JSON endpoints exposing the value utilities.
//!
//! ```text
//! POST /api/v1/input-type    "  456  "   -> {"kind":"number"}
//! POST /api/v1/only-numbers  242         -> 242
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{Error, InputKind, input_type, only_numbers};
use crate::inbound::http::ApiResult;

/// Response body for `POST /api/v1/input-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InputTypeResponse {
    /// Classification of the submitted value.
    pub kind: InputKind,
}

/// Classify any JSON value.
#[utoipa::path(
    post,
    path = "/api/v1/input-type",
    request_body(content = serde_json::Value, description = "Any JSON value"),
    responses(
        (status = 200, description = "Classification", body = InputTypeResponse),
        (status = 400, description = "Body is not JSON")
    ),
    tags = ["utilities"],
    operation_id = "inputType"
)]
#[post("/input-type")]
pub async fn classify_input(payload: web::Json<Value>) -> web::Json<InputTypeResponse> {
    web::Json(InputTypeResponse {
        kind: input_type(&payload),
    })
}

/// Echo the body back when it is a JSON number.
#[utoipa::path(
    post,
    path = "/api/v1/only-numbers",
    request_body(content = serde_json::Value, description = "Any JSON value"),
    responses(
        (status = 200, description = "The submitted number, unchanged", body = f64),
        (status = 400, description = "Input must be a number", body = Error)
    ),
    tags = ["utilities"],
    operation_id = "onlyNumbers"
)]
#[post("/only-numbers")]
pub async fn guard_number(payload: web::Json<Value>) -> ApiResult<web::Json<Value>> {
    let number = only_numbers(payload.into_inner()).map_err(Error::from)?;
    Ok(web::Json(Value::Number(number)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::json;

    async fn post_json(uri: &str, body: &Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .service(classify_input)
                    .service(guard_number),
            ),
        )
        .await;
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(body)
            .to_request();
        let res = test::call_service(&app, req).await;
        let status = res.status();
        let body: Value = test::read_body_json(res).await;
        (status, body)
    }

    #[rstest]
    #[case::text(json!("just a regular string"), "string")]
    #[case::mixed(json!("abc123"), "string")]
    #[case::number(json!(42), "number")]
    #[case::numeric_text(json!("  456  "), "number")]
    #[case::null(Value::Null, "unknown")]
    #[case::array(json!([]), "unknown")]
    #[case::object(json!({}), "unknown")]
    #[actix_web::test]
    async fn classifies_posted_values(#[case] body: Value, #[case] expected: &str) {
        let (status, response) = post_json("/api/v1/input-type", &body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, json!({ "kind": expected }));
    }

    #[rstest]
    #[actix_web::test]
    async fn echoes_numbers() {
        let (status, response) = post_json("/api/v1/only-numbers", &json!(242)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, json!(242));
    }

    #[rstest]
    #[case(json!("not a number"))]
    #[case(json!("242"))]
    #[case(json!({ "n": 1 }))]
    #[actix_web::test]
    async fn rejects_non_numbers(#[case] body: Value) {
        let (status, response) = post_json("/api/v1/only-numbers", &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["code"], "invalid_request");
        assert_eq!(response["message"], "Input must be a number");
    }
}
