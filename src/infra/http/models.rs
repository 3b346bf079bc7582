use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::application::repos::AssetMetrics;

/// Create payload. Required fields deserialize as `Option` so an absent
/// field reaches validation and reports the same failure as an empty one.
#[derive(Debug, Deserialize, Serialize)]
pub struct AssetCreateRequest {
    pub asset_name: Option<String>,
    pub asset_type: Option<String>,
    pub owner: Option<String>,
    pub sensitivity_level: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AssetCreatedResponse<T> {
    pub message: &'static str,
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub metrics: AssetMetrics,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Up,
    Down,
}

impl ServiceStatus {
    pub fn from_up(up: bool) -> Self {
        if up { Self::Up } else { Self::Down }
    }
}

#[derive(Debug, Serialize)]
pub struct ServicesHealth {
    pub database: ServiceStatus,
    pub cache: ServiceStatus,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub services: ServicesHealth,
}
