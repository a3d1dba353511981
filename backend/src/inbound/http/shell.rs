//! Static application shell served at the site root.
//!
//! ```text
//! GET /
//! ```

use actix_web::http::header::{CACHE_CONTROL, ContentType};
use actix_web::{HttpResponse, get};

/// Text of the shell's only heading.
pub const HEADING_TEXT: &str = "Hello, Vitest!";

const APP_SHELL_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>hello-kit</title>
  </head>
  <body>
    <div id="root">
      <h1>Hello, Vitest!</h1>
    </div>
  </body>
</html>
"#;

/// Render the shell document.
///
/// The body holds exactly one `h1` whose text is [`HEADING_TEXT`].
#[must_use]
pub const fn render_app_shell() -> &'static str {
    APP_SHELL_HTML
}

/// Serve the shell.
#[utoipa::path(
    get,
    path = "/",
    tags = ["shell"],
    responses(
        (status = 200, description = "Application shell", content_type = "text/html", body = String)
    )
)]
#[get("/")]
pub async fn app_shell() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header((CACHE_CONTROL, "no-cache"))
        .body(render_app_shell())
}
