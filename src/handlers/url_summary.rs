use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
// Aliased so utoipa's axum_extras doesn't try to infer a `Bytes` request-body schema.
use bytes::Bytes as RawBody;

use crate::auth::FunctionKey;
use crate::error::{AppError, AppResult};
use crate::models::{OgRecord, UrlSummaryBody, UrlSummaryQuery};
use crate::state::AppState;
use crate::summary::get_og_metadata;

/// Pick the target URL: the query parameter wins whenever it is present,
/// otherwise fall back to the body's `BaseURL`.
pub fn resolve_base_url(query: UrlSummaryQuery, body: &[u8]) -> Option<String> {
    query
        .base_url
        .or_else(|| UrlSummaryBody::from_bytes(body).base_url)
        .filter(|url| !url.is_empty())
}

/// GET|POST /api/URLSummary?BaseURL=<encoded-url>
///
/// Returns OpenGraph details for the given URL. 404 when no URL was supplied,
/// 400 (no body) for any failure fetching it.
#[utoipa::path(
    get,
    path = "/api/URLSummary",
    operation_id = "GetURLSummary",
    tag = "BaseURL",
    params(UrlSummaryQuery),
    responses(
        (status = 200, description = "OpenGraph details for this URL", body = OgRecord),
        (status = 400, description = "The URL was invalid or could not be fetched"),
        (status = 401, description = "Missing or invalid function key"),
        (status = 404, description = "No URL was supplied"),
    ),
    security(("function_key" = []))
)]
pub async fn get_url_summary(
    State(state): State<AppState>,
    _key: FunctionKey,
    query: Result<Query<UrlSummaryQuery>, QueryRejection>,
    body: RawBody,
) -> AppResult<Json<OgRecord>> {
    tracing::info!("Processing URL summary request");

    let Query(query) = query.map_err(|e| {
        tracing::debug!(error = %e, "Rejected unparseable query string");
        AppError::BadRequest
    })?;

    let Some(base_url) = resolve_base_url(query, &body) else {
        return Err(AppError::NotFound);
    };

    let record = get_og_metadata(&state.fetcher, &base_url).await?;
    Ok(Json(record))
}
