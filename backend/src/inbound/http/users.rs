//! Users API handlers.
//!
//! ```text
//! GET /api/v1/users/1
//! ```

use actix_web::{get, web};
use serde_json::json;

use crate::domain::{Error, UserId, UserIdValidationError, UserRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Fetch one user from the remote directory.
///
/// The record is returned exactly as the directory sent it.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use hello_kit::inbound::http::users::get_user;
///
/// let app = App::new().service(get_user);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "Directory user identifier")),
    responses(
        (status = 200, description = "User record", body = UserRecord),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 500, description = "Directory body was not JSON", body = Error),
        (status = 503, description = "Network response was no gud owo", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserRecord>> {
    let id = UserId::new(path.into_inner()).map_err(map_user_id_error)?;
    let record = state.users.fetch_user_data(&id).await?;
    Ok(web::Json(record))
}

fn map_user_id_error(err: UserIdValidationError) -> Error {
    let code = match err {
        UserIdValidationError::Empty => "empty_user_id",
        UserIdValidationError::SurroundingWhitespace => "padded_user_id",
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": "id", "code": code }))
}
