//! Job offer domain models and parameters.
//!
//! Jobs are hard-deleted and carry no uniqueness invariant.

use chrono::{DateTime, Utc};
use sea_orm::Value;
use serde::Serialize;

use crate::{
    model::job::{CreateJobDto, JobDto, JobStatus, UpdateJobDto},
    server::{
        error::{internal::InternalError, AppError},
        patch::{PatchField, PatchSchema},
        util::validate::require_text,
    },
};

use entity::job::Column;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
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

impl Job {
    pub fn into_dto(self) -> JobDto {
        JobDto {
            id: self.id,
            title: self.title,
            description: self.description,
            location: self.location,
            contract_type: self.contract_type,
            remote: self.remote,
            salary_range: self.salary_range,
            entreprise_id: self.entreprise_id,
            created_by: self.created_by,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            expires_at: self.expires_at,
        }
    }

    /// # Returns
    /// - `Err(AppError::Internal(UnknownEnumValue))` - Stored status is not recognized
    pub fn from_entity(entity: entity::job::Model) -> Result<Self, AppError> {
        let status = JobStatus::parse(&entity.status).ok_or(InternalError::UnknownEnumValue {
            kind: "job status",
            value: entity.status.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            location: entity.location,
            contract_type: entity.contract_type,
            remote: entity.remote,
            salary_range: entity.salary_range,
            entreprise_id: entity.entreprise_id,
            created_by: entity.created_by,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            expires_at: entity.expires_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateJobParams {
    pub title: String,
    pub description: String,
    pub location: String,
    pub contract_type: String,
    pub remote: bool,
    pub salary_range: Option<String>,
    pub entreprise_id: i32,
    pub created_by: i32,
    pub status: JobStatus,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreateJobParams {
    pub fn from_dto(dto: CreateJobDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            location: dto.location,
            contract_type: dto.contract_type,
            remote: dto.remote,
            salary_range: dto.salary_range,
            entreprise_id: dto.entreprise_id,
            created_by: dto.created_by,
            status: dto.status.unwrap_or_default(),
            expires_at: dto.expires_at,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        require_text("title", &self.title)?;
        require_text("contractType", &self.contract_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entreprise_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl JobPatch {
    pub fn from_dto(dto: UpdateJobDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            location: dto.location,
            contract_type: dto.contract_type,
            remote: dto.remote,
            salary_range: dto.salary_range,
            entreprise_id: dto.entreprise_id,
            status: dto.status,
            expires_at: dto.expires_at,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(contract_type) = &self.contract_type {
            require_text("contractType", contract_type)?;
        }
        Ok(())
    }
}

impl PatchSchema for JobPatch {
    type Entity = entity::job::Entity;

    const FIELDS: &'static [PatchField<Self, Column>] = &[
        PatchField {
            name: "title",
            column: Column::Title,
            value: |p| p.title.clone().map(Value::from),
        },
        PatchField {
            name: "description",
            column: Column::Description,
            value: |p| p.description.clone().map(Value::from),
        },
        PatchField {
            name: "location",
            column: Column::Location,
            value: |p| p.location.clone().map(Value::from),
        },
        PatchField {
            name: "contractType",
            column: Column::ContractType,
            value: |p| p.contract_type.clone().map(Value::from),
        },
        PatchField {
            name: "remote",
            column: Column::Remote,
            value: |p| p.remote.map(Value::from),
        },
        PatchField {
            name: "salaryRange",
            column: Column::SalaryRange,
            value: |p| p.salary_range.clone().map(Value::from),
        },
        PatchField {
            name: "entrepriseId",
            column: Column::EntrepriseId,
            value: |p| p.entreprise_id.map(Value::from),
        },
        PatchField {
            name: "status",
            column: Column::Status,
            value: |p| p.status.map(|status| Value::from(status.as_str())),
        },
        PatchField {
            name: "expiresAt",
            column: Column::ExpiresAt,
            value: |p| p.expires_at.map(Value::from),
        },
    ];
}
