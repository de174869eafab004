//! CRUD endpoints shared by every record collection.
//!
//! Each handler is generic over the store and the record type; `create_app`
//! instantiates them once per collection.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain::Validate;
use model::Entity;
use store::{Repository, Store};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{AppJson, AppPath};

/// GET /api/{collection}: all records ordered by id.
#[tracing::instrument(skip(state), fields(entity = E::NAME))]
pub async fn list<S, E>(State(state): State<Arc<AppState<S>>>) -> Result<Json<Vec<E>>, ApiError>
where
    S: Store + Repository<E>,
    E: Entity + Validate,
{
    let records = state.service::<E>().list().await?;
    Ok(Json(records))
}

/// GET /api/{collection}/{id}: one record.
#[tracing::instrument(skip(state), fields(entity = E::NAME))]
pub async fn get<S, E>(
    State(state): State<Arc<AppState<S>>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<E>, ApiError>
where
    S: Store + Repository<E>,
    E: Entity + Validate,
{
    let record = state.service::<E>().get(E::Id::from(id)).await?;
    Ok(Json(record))
}

/// POST /api/{collection}: create a record; any id in the body is ignored.
#[tracing::instrument(skip(state, payload), fields(entity = E::NAME))]
pub async fn create<S, E>(
    State(state): State<Arc<AppState<S>>>,
    AppJson(payload): AppJson<E>,
) -> Result<(StatusCode, Json<E>), ApiError>
where
    S: Store + Repository<E>,
    E: Entity + Validate,
{
    let created = state.service::<E>().create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/{collection}/{id}: replace a record; the path id wins.
#[tracing::instrument(skip(state, payload), fields(entity = E::NAME))]
pub async fn update<S, E>(
    State(state): State<Arc<AppState<S>>>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<E>,
) -> Result<Json<E>, ApiError>
where
    S: Store + Repository<E>,
    E: Entity + Validate,
{
    let updated = state
        .service::<E>()
        .update(E::Id::from(id), payload)
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/{collection}/{id}: delete a record and what it owns.
#[tracing::instrument(skip(state), fields(entity = E::NAME))]
pub async fn delete<S, E>(
    State(state): State<Arc<AppState<S>>>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError>
where
    S: Store + Repository<E>,
    E: Entity + Validate,
{
    state.service::<E>().delete(E::Id::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
