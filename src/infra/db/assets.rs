use async_trait::async_trait;
use time::OffsetDateTime;

use crate::application::repos::{
    AssetMetrics, AssetsRepo, CreateAssetParams, RepoError,
};
use crate::domain::assets::{AssetRecord, SENSITIVITY_HIGH};

use super::{PostgresRepositories, map_sqlx_error};

const ASSET_COLUMNS: &str =
    "id, asset_name, asset_type, owner, sensitivity_level, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct AssetRow {
    id: i64,
    asset_name: String,
    asset_type: String,
    owner: Option<String>,
    sensitivity_level: Option<String>,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<AssetRow> for AssetRecord {
    fn from(row: AssetRow) -> Self {
        Self {
            id: row.id,
            asset_name: row.asset_name,
            asset_type: row.asset_type,
            owner: row.owner,
            sensitivity_level: row.sensitivity_level,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MetricsRow {
    total_assets: i64,
    asset_types: i64,
    high_sensitivity_assets: i64,
}

fn convert_count(value: i64) -> Result<u64, RepoError> {
    value
        .try_into()
        .map_err(|_| RepoError::from_persistence("count exceeds supported range"))
}

#[async_trait]
impl AssetsRepo for PostgresRepositories {
    async fn list_assets(&self) -> Result<Vec<AssetRecord>, RepoError> {
        let rows = sqlx::query_as::<_, AssetRow>(&format!(
            "SELECT {ASSET_COLUMNS} FROM assets ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(AssetRecord::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<AssetRecord>, RepoError> {
        let row = sqlx::query_as::<_, AssetRow>(&format!(
            "SELECT {ASSET_COLUMNS} FROM assets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(AssetRecord::from))
    }

    async fn create_asset(&self, params: CreateAssetParams) -> Result<AssetRecord, RepoError> {
        let row = sqlx::query_as::<_, AssetRow>(&format!(
            "INSERT INTO assets (asset_name, asset_type, owner, sensitivity_level) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {ASSET_COLUMNS}"
        ))
        .bind(&params.asset_name)
        .bind(&params.asset_type)
        .bind(&params.owner)
        .bind(&params.sensitivity_level)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(AssetRecord::from(row))
    }

    async fn metrics(&self) -> Result<AssetMetrics, RepoError> {
        let row = sqlx::query_as::<_, MetricsRow>(
            "SELECT COUNT(*) AS total_assets, \
                    COUNT(DISTINCT asset_type) AS asset_types, \
                    COUNT(*) FILTER (WHERE sensitivity_level = $1) AS high_sensitivity_assets \
             FROM assets",
        )
        .bind(SENSITIVITY_HIGH)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(AssetMetrics {
            total_assets: convert_count(row.total_assets)?,
            asset_types: convert_count(row.asset_types)?,
            high_sensitivity_assets: convert_count(row.high_sensitivity_assets)?,
        })
    }

    async fn health_check(&self) -> Result<(), RepoError> {
        self.ping().await.map_err(map_sqlx_error)
    }
}
