use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Draft,
    Published,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Closed => "closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub contract_type: String,
    pub remote: bool,
    pub salary_range: Option<String>,
    pub entreprise_id: i32,
    pub created_by: i32,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDto {
    pub title: String,
    pub description: String,
    pub location: String,
    pub contract_type: String,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub salary_range: Option<String>,
    pub entreprise_id: i32,
    pub created_by: i32,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateJobDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub contract_type: Option<String>,
    pub remote: Option<bool>,
    pub salary_range: Option<String>,
    pub entreprise_id: Option<i32>,
    pub status: Option<JobStatus>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct JobListQuery {
    pub status: Option<JobStatus>,
    pub entreprise_id: Option<i32>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}
