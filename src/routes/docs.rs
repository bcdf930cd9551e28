use crate::app::ApiContext;
use crate::routes::avatar;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

pub const AVATAR_TAG: &str = "avatar";

pub fn router() -> Router<ApiContext> {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}

#[derive(OpenApi)]
#[openapi(
    paths(avatar::render_avatar),
    tags(
        (name = "avatar", description = "Deterministic gradient avatars")
    )
)]
struct Api;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(Api::openapi())
}
