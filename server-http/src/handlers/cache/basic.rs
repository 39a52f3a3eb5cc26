use crate::api::{CacheResponse, DeleteRequest, GetQuery, SetRequest};
use crate::state::AppState;
use crate::validation::{ValidSet, ValidationError, parse_body, validate_key, validate_set};
use axum::{
    Json,
    body::Bytes,
    extract::{
        Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
    http::StatusCode,
};
use tracing::debug;

type ApiResult = Result<Json<CacheResponse>, (StatusCode, Json<CacheResponse>)>;

fn bad_request(err: ValidationError) -> (StatusCode, Json<CacheResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(CacheResponse::error(err.to_string())),
    )
}

fn malformed(reason: String) -> (StatusCode, Json<CacheResponse>) {
    bad_request(ValidationError::MalformedBody(reason))
}

/// GET /cache?key=:key
pub async fn get_value(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult {
    let Query(pairs) = query.map_err(|e| malformed(e.body_text()))?;
    let key = validate_key(GetQuery::from_pairs(pairs).key).map_err(bad_request)?;

    debug!("GET: key={}", key);

    let response = state.engine.get(&key);
    if !response.found {
        return Ok(Json(CacheResponse::error(format!(
            "The key '{}' could not be found.",
            key
        ))));
    }

    Ok(Json(CacheResponse::value(response.value)))
}

/// POST /cache
pub async fn set_value(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult {
    let body = body.map_err(|e| malformed(e.body_text()))?;
    let req: SetRequest = parse_body(&body).map_err(bad_request)?;
    let ValidSet { key, value } = validate_set(req).map_err(bad_request)?;

    debug!("SET: key={}", key);

    state.engine.set(key, value);
    Ok(Json(CacheResponse::ok()))
}

/// DELETE /cache
pub async fn delete_value(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult {
    let body = body.map_err(|e| malformed(e.body_text()))?;
    let req: DeleteRequest = parse_body(&body).map_err(bad_request)?;
    let key = validate_key(req.key).map_err(bad_request)?;

    debug!("DELETE: key={}", key);

    // Prior existence is not reported
    state.engine.delete(&key);
    Ok(Json(CacheResponse::ok()))
}
