//! Wiring tests: every endpoint is reachable through the assembled app.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use hello_kit::domain::TRACE_ID_HEADER;
use hello_kit::domain::ports::FixtureUserSource;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;

#[fixture]
fn deps() -> AppDependencies {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    AppDependencies {
        health_state,
        http_state: web::Data::new(HttpState::new(Arc::new(FixtureUserSource))),
    }
}

#[rstest]
#[actix_web::test]
async fn root_serves_the_shell_with_a_trace_header(deps: AppDependencies) {
    let app = actix_test::init_service(build_app(deps)).await;
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body = actix_test::read_body(res).await;
    let html = std::str::from_utf8(&body).expect("UTF-8 body");
    assert!(html.contains("<h1>Hello, Vitest!</h1>"));
}

#[rstest]
#[case("/api/v1/input-type", json!("  456  "), StatusCode::OK, json!({ "kind": "number" }))]
#[case("/api/v1/input-type", json!(null), StatusCode::OK, json!({ "kind": "unknown" }))]
#[case("/api/v1/only-numbers", json!(242), StatusCode::OK, json!(242))]
#[actix_web::test]
async fn utilities_are_mounted_under_api_v1(
    deps: AppDependencies,
    #[case] uri: &str,
    #[case] body: Value,
    #[case] expected_status: StatusCode,
    #[case] expected_body: Value,
) {
    let app = actix_test::init_service(build_app(deps)).await;
    let req = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(&body)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), expected_status);
    let actual: Value = actix_test::read_body_json(res).await;
    assert_eq!(actual, expected_body);
}

#[rstest]
#[actix_web::test]
async fn number_guard_failures_carry_the_trace_id(deps: AppDependencies) {
    let app = actix_test::init_service(build_app(deps)).await;
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/only-numbers")
        .set_json(json!("242"))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header")
        .to_str()
        .expect("header is ASCII")
        .to_owned();
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "Input must be a number");
    assert_eq!(body["traceId"], header);
}

#[rstest]
#[actix_web::test]
async fn users_route_uses_the_configured_source(deps: AppDependencies) {
    let app = actix_test::init_service(build_app(deps)).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/users/3").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({ "id": 3 }));
}

#[rstest]
#[case("/health/ready")]
#[case("/health/live")]
#[actix_web::test]
async fn health_probes_are_mounted(deps: AppDependencies, #[case] uri: &str) {
    let app = actix_test::init_service(build_app(deps)).await;
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[rstest]
fn config_reports_its_bind_address() {
    let addr: SocketAddr = "127.0.0.1:0".parse().expect("valid address");
    let config = ServerConfig::new(addr).with_user_source(Arc::new(FixtureUserSource));
    assert_eq!(config.bind_addr(), addr);
}
