//! Match REST API handlers

use crate::{ApiError, ApiResult, AppState, DataResponse, ListQuery, parse_match_id};

use sportz_core::{Match, NewMatch, ScoreUpdate};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::Utc;

/// GET /matches
pub async fn list_matches(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<DataResponse<Vec<Match>>>> {
    let Query(query) = query?;
    let limit = query.resolve_bounded(&state.api_config)?;

    let now = Utc::now();
    let mut matches = state.store.list_matches(limit).await?;
    for record in &mut matches {
        record.refresh_status(now);
    }

    Ok(Json(DataResponse::new(matches)))
}

/// POST /matches
pub async fn create_match(
    State(state): State<AppState>,
    payload: Result<Json<NewMatch>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DataResponse<Match>>)> {
    let Json(new_match) = payload?;
    new_match.validate()?;

    let created = state.store.insert_match(new_match).await?;

    // Persisted first; delivery never changes the response
    let delivered = state.events.broadcast_match_created(&created).await;
    log::info!(
        "Created match {} ({} vs {}), notified {delivered} subscribers",
        created.id,
        created.home_team,
        created.away_team
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}

/// GET /matches/{id}
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DataResponse<Match>>> {
    let match_id = parse_match_id(&id)?;

    let mut record = state
        .store
        .find_match(match_id)
        .await?
        .ok_or_else(|| ApiError::match_not_found(match_id))?;
    record.refresh_status(Utc::now());

    Ok(Json(DataResponse::new(record)))
}

/// PATCH /matches/{id}/score
pub async fn update_score(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ScoreUpdate>, JsonRejection>,
) -> ApiResult<Json<DataResponse<Match>>> {
    let match_id = parse_match_id(&id)?;
    let Json(score) = payload?;
    score.validate()?;

    let mut record = state
        .store
        .update_score(match_id, score)
        .await?
        .ok_or_else(|| ApiError::match_not_found(match_id))?;
    record.refresh_status(Utc::now());

    log::info!(
        "Match {match_id} score is now {}-{}",
        record.home_score,
        record.away_score
    );

    Ok(Json(DataResponse::new(record)))
}
