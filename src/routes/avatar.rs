use anyhow::Context;
use axum::{
    body::Body,
    extract::{Path, State},
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::{
    app::{
        avatar::{rasterize_png, AvatarFormat, AvatarName, AvatarQuery, SvgAvatar},
        error::AppError,
        extrator::ValidatedQuery,
        gradient::GradientSpec,
        ApiContext,
    },
    telemetry::spawn_blocking_with_tracing,
};

use super::docs::AVATAR_TAG;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/api/avatar/:name", get(render_avatar))
}

#[utoipa::path(
    get,
    path = "/api/avatar/{name}",
    tag = AVATAR_TAG,
    params(
        ("name" = String, Path, description = "Identifier, `.svg` suffix selects svg output"),
        AvatarQuery
    ),
    responses(
        (status = 200, description = "Rendered svg or png avatar"),
        (status = 400, description = "Malformed query"),
        (status = 422, description = "Invalid size or radius"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(name = "Render avatar", skip_all, fields(name = %name))]
pub async fn render_avatar(
    ctx: State<ApiContext>,
    Path(name): Path<String>,
    ValidatedQuery(query): ValidatedQuery<AvatarQuery>,
) -> Result<Response, AppError> {
    let avatar = AvatarName::parse(&name);
    let size = query.size.unwrap_or(ctx.config.app_avatar_default_size);
    let rounded = query.rounded.unwrap_or_default();

    let spec = GradientSpec::generate(&avatar.identifier);
    tracing::debug!(hue = spec.hue, format = %avatar.format, "Derived gradient");

    // Labels only make it into svg output
    let text = match avatar.format {
        AvatarFormat::Svg => query.text.as_deref(),
        AvatarFormat::Png => None,
    };

    let svg = SvgAvatar {
        spec: &spec,
        size,
        rounded,
        text,
    }
    .render();

    let body = match avatar.format {
        AvatarFormat::Svg => Body::from(svg),
        AvatarFormat::Png => {
            let png = spawn_blocking_with_tracing(move || rasterize_png(&svg, size))
                .await
                .context("failed to spawn blocking task.")??;

            Body::from(png)
        }
    };

    Ok((
        [
            (CONTENT_TYPE, avatar.format.content_type().to_string()),
            (CACHE_CONTROL, ctx.config.cache_control()),
        ],
        body,
    )
        .into_response())
}
