use super::types::{
    DebugResponse, LookupParams, MissingParamResponse, ServerErrorResponse, UpstreamErrorResponse,
};
use crate::browser::CharacterFetcher;
use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info};

/// How much of a non-JSON upstream body is echoed back in diagnostics.
const BODY_HEAD_CHARS: usize = 300;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn CharacterFetcher>,
    pub default_server: String,
}

pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Response {
    // `image` with `charId` as the alias; first non-blank value wins
    let character_id = [params.image.as_deref(), params.char_id.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or_default()
        .to_string();

    let server = params
        .server
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(&state.default_server)
        .to_string();

    let debug = params.debug.is_some();

    if character_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(MissingParamResponse::missing_character_id()),
        )
            .into_response();
    }

    info!(
        "Received lookup request for character {} on server {}",
        character_id, server
    );

    match state.fetcher.fetch(&server, &character_id).await {
        Ok(outcome) => {
            if debug {
                return (
                    StatusCode::OK,
                    Json(DebugResponse {
                        char_url: outcome.character_url,
                        api_path: outcome.api_path,
                        result_head: outcome.page.head(BODY_HEAD_CHARS),
                        content_type: outcome.page.content_type.clone(),
                        is_json: outcome.page.is_json(),
                    }),
                )
                    .into_response();
            }

            let page = &outcome.page;
            if !page.is_json() {
                return (
                    StatusCode::BAD_GATEWAY,
                    Json(UpstreamErrorResponse {
                        error: "NOT_JSON".to_string(),
                        status: page.status,
                        content_type: page.content_type.clone(),
                        head: page.head(BODY_HEAD_CHARS),
                    }),
                )
                    .into_response();
            }

            info!(
                "Successfully relayed character data for {} on server {}",
                character_id, server
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
                page.body().to_string(),
            )
                .into_response()
        }
        Err(e) => {
            error!(
                "Failed to fetch character {} on server {}: {}",
                character_id, server, e
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ServerErrorResponse {
                    error: "SERVER_ERROR".to_string(),
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Plain OPTIONS gets an unconditional 200; real preflights are answered by
/// the CORS layer before reaching this handler.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
