use crate::state::AppState;

use pelt_core::prelude::*;

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::error;

pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Maps each pipeline error to its fixed status/body pair. Anything that
/// doesn't downcast to a pipeline error becomes the generic 400.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = &self.0;

        let (status, message) = if let Some(query_err) = err.downcast_ref::<QueryError>() {
            (StatusCode::BAD_REQUEST, query_err.to_string())
        } else if let Some(resolve_err) = err.downcast_ref::<ResolveError>() {
            match resolve_err {
                ResolveError::NotFound => {
                    (StatusCode::NOT_FOUND, "Player not found".to_string())
                }
                ResolveError::Lookup(_) => {
                    error!("Error fetching UUID: {err:#}");
                    (
                        StatusCode::BAD_REQUEST,
                        "An error occurred while fetching UUID".to_string(),
                    )
                }
            }
        } else if err.downcast_ref::<ImageError>().is_some()
            || err.downcast_ref::<AssetError>().is_some()
        {
            error!("Error fetching skin image: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch skin image".to_string(),
            )
        } else {
            error!("Error processing request: {err:#}");
            (
                StatusCode::BAD_REQUEST,
                "An error occurred while processing the request".to_string(),
            )
        };

        (status, message).into_response()
    }
}

#[derive(Deserialize)]
pub struct SkinParams {
    player: Option<String>,
}

/// GET /skin?player={username|uuid}
///
/// Runs the whole pipeline: classify, resolve the identity if given a
/// name, locate the skin (custom URL or default model), and proxy the
/// image bytes with the upstream content type.
pub async fn get_skin<P: ProfileService, S: SkinStore>(
    State(state): State<AppState<P, S>>,
    Query(params): Query<SkinParams>,
) -> Result<Response, ApiError> {
    let raw = params.player.as_deref().unwrap_or_default();
    if raw.is_empty() {
        return Err(QueryError::Missing.into());
    }

    let identity = match PlayerQuery::classify(raw) {
        PlayerQuery::Username(name) => state.profiles.resolve(&name).await?,
        PlayerQuery::Uuid(identity) => identity,
        PlayerQuery::Invalid => return Err(QueryError::Invalid.into()),
    };

    let image = match state.profiles.skin_reference(&identity).await {
        SkinReference::Url(url) => state.profiles.fetch_image(&url).await?,
        SkinReference::Default(skin) => state.skins.read_default(skin).await?,
    };

    Ok(([(header::CONTENT_TYPE, image.content_type)], image.bytes).into_response())
}
