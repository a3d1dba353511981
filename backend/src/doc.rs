//! OpenAPI documentation for the HTTP surface.
//!
//! Registers every inbound endpoint plus the payload schemas. Swagger UI
//! serves the document in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, InputKind, UserRecord};
use crate::inbound::http::utilities::InputTypeResponse;

/// OpenAPI document for the service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello-kit API",
        description = "Application shell, value utilities and remote user lookups."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::shell::app_shell,
        crate::inbound::http::utilities::classify_input,
        crate::inbound::http::utilities::guard_number,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Error, ErrorCode, InputKind, InputTypeResponse, UserRecord)),
    tags(
        (name = "shell", description = "Static application shell"),
        (name = "utilities", description = "Value classification and guards"),
        (name = "users", description = "Remote user directory lookups"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
