use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmploiDto {
    pub id: i32,
    pub user_id: i32,
    pub entreprise_id: i32,
    pub position: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmploiDto {
    pub user_id: i32,
    pub entreprise_id: i32,
    pub position: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEmploiDto {
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct EmploiListQuery {
    /// With `entrepriseId`, selects the single active link instead of a page.
    pub user_id: Option<i32>,
    pub entreprise_id: Option<i32>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}
