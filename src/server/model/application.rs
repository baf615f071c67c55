//! Job application domain models and parameters.
//!
//! An application links a candidate to a job. At most one active application may
//! exist per (job, candidate) pair; applications are soft-deleted.

use chrono::{DateTime, Utc};
use sea_orm::Value;
use serde::Serialize;

use crate::{
    model::application::{
        ApplicationDto, ApplicationStatus, CreateApplicationDto, UpdateApplicationDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        patch::{PatchField, PatchSchema},
    },
};

use entity::application::Column;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i32,
    pub job_id: i32,
    pub candidat_id: i32,
    pub cv_url: Option<String>,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Application {
    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.id,
            job_id: self.job_id,
            candidat_id: self.candidat_id,
            cv_url: self.cv_url,
            cover_letter: self.cover_letter,
            status: self.status,
            applied_at: self.applied_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// # Returns
    /// - `Err(AppError::Internal(UnknownEnumValue))` - Stored status is not recognized
    pub fn from_entity(entity: entity::application::Model) -> Result<Self, AppError> {
        let status =
            ApplicationStatus::parse(&entity.status).ok_or(InternalError::UnknownEnumValue {
                kind: "application status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            job_id: entity.job_id,
            candidat_id: entity.candidat_id,
            cv_url: entity.cv_url,
            cover_letter: entity.cover_letter,
            status,
            applied_at: entity.applied_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateApplicationParams {
    pub job_id: i32,
    pub candidat_id: i32,
    pub cv_url: Option<String>,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
}

impl CreateApplicationParams {
    pub fn from_dto(dto: CreateApplicationDto) -> Self {
        Self {
            job_id: dto.job_id,
            candidat_id: dto.candidat_id,
            cv_url: dto.cv_url,
            cover_letter: dto.cover_letter,
            status: dto.status.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
}

impl ApplicationPatch {
    pub fn from_dto(dto: UpdateApplicationDto) -> Self {
        Self {
            cv_url: dto.cv_url,
            cover_letter: dto.cover_letter,
            status: dto.status,
        }
    }
}

impl PatchSchema for ApplicationPatch {
    type Entity = entity::application::Entity;

    const FIELDS: &'static [PatchField<Self, Column>] = &[
        PatchField {
            name: "cvUrl",
            column: Column::CvUrl,
            value: |p| p.cv_url.clone().map(Value::from),
        },
        PatchField {
            name: "coverLetter",
            column: Column::CoverLetter,
            value: |p| p.cover_letter.clone().map(Value::from),
        },
        PatchField {
            name: "status",
            column: Column::Status,
            value: |p| p.status.map(|status| Value::from(status.as_str())),
        },
    ];
}
