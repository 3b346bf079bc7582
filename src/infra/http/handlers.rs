use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use time::OffsetDateTime;

use crate::application::error::ErrorReport;
use crate::domain::assets::NewAsset;

use super::HttpState;
use super::error::{ApiError, catalog_error_to_api};
use super::models::{
    AssetCreateRequest, AssetCreatedResponse, HealthResponse, MetricsResponse, ServiceStatus,
    ServicesHealth,
};

pub async fn health(State(state): State<HttpState>) -> Response {
    let health = state.catalog.dependency_health().await;
    let body = HealthResponse {
        status: if health.all_up() { "ok" } else { "degraded" },
        services: ServicesHealth {
            database: ServiceStatus::from_up(health.database),
            cache: ServiceStatus::from_up(health.cache),
        },
    };

    if health.all_up() {
        (StatusCode::OK, Json(body)).into_response()
    } else {
        let mut response = (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response();
        ErrorReport::from_message(
            "infra::http::health",
            StatusCode::SERVICE_UNAVAILABLE,
            "one or more service dependencies unreachable",
        )
        .attach(&mut response);
        response
    }
}

pub async fn list_assets(State(state): State<HttpState>) -> Result<impl IntoResponse, ApiError> {
    let sourced = state
        .catalog
        .list_all()
        .await
        .map_err(|err| catalog_error_to_api("infra::http::list_assets", err))?;

    Ok(Json(sourced))
}

pub async fn get_asset(
    State(state): State<HttpState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let sourced = state
        .catalog
        .get_by_id(id)
        .await
        .map_err(|err| catalog_error_to_api("infra::http::get_asset", err))?;

    Ok(Json(sourced))
}

pub async fn create_asset(
    State(state): State<HttpState>,
    Json(payload): Json<AssetCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = NewAsset {
        asset_name: payload.asset_name.unwrap_or_default(),
        asset_type: payload.asset_type.unwrap_or_default(),
        owner: payload.owner,
        sensitivity_level: payload.sensitivity_level,
    };

    let created = state
        .catalog
        .create(draft)
        .await
        .map_err(|err| catalog_error_to_api("infra::http::create_asset", err))?;

    Ok((
        StatusCode::CREATED,
        Json(AssetCreatedResponse {
            message: "Asset created successfully",
            data: created,
        }),
    ))
}

pub async fn metrics(State(state): State<HttpState>) -> Result<impl IntoResponse, ApiError> {
    let metrics = state
        .catalog
        .metrics()
        .await
        .map_err(|err| catalog_error_to_api("infra::http::metrics", err))?;

    Ok(Json(MetricsResponse {
        metrics,
        timestamp: OffsetDateTime::now_utc(),
    }))
}
