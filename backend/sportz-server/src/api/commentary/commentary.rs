//! Commentary REST API handlers

use crate::{ApiResult, AppState, DataResponse, ListQuery, parse_match_id};

use sportz_core::{Commentary, NewCommentary};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

/// GET /matches/{id}/commentary
pub async fn list_commentary(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<DataResponse<Vec<Commentary>>>> {
    let match_id = parse_match_id(&id)?;
    let Query(query) = query?;
    let limit = query.resolve_clamped(&state.api_config)?;

    // An unknown match simply has no commentary
    let entries = state.store.list_commentary(match_id, limit).await?;
    Ok(Json(DataResponse::new(entries)))
}

/// POST /matches/{id}/commentary
pub async fn create_commentary(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewCommentary>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DataResponse<Commentary>>)> {
    let match_id = parse_match_id(&id)?;
    let Json(new_commentary) = payload?;
    new_commentary.validate()?;

    // Unknown match surfaces as MatchNotFound -> 404
    let entry = state
        .store
        .insert_commentary(match_id, new_commentary)
        .await?;

    let delivered = state.events.broadcast_commentary(match_id, &entry).await;
    log::info!(
        "Added commentary {} to match {match_id} at minute {}, notified {delivered} subscribers",
        entry.id,
        entry.minute
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(entry))))
}
