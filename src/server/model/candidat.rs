//! Candidate profile domain models and parameters.
//!
//! A user has at most one active candidate profile; profiles are soft-deleted.
//! Skills are an ordered list stored as a JSON column.

use chrono::{DateTime, Utc};
use sea_orm::Value;
use serde::Serialize;

use crate::{
    model::candidat::{CandidatDto, CreateCandidatDto, UpdateCandidatDto},
    server::{
        error::{internal::InternalError, AppError},
        patch::{PatchField, PatchSchema},
    },
};

use entity::candidat::Column;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidat {
    pub id: i32,
    pub user_id: i32,
    pub cv_url: Option<String>,
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Candidat {
    pub fn into_dto(self) -> CandidatDto {
        CandidatDto {
            id: self.id,
            user_id: self.user_id,
            cv_url: self.cv_url,
            skills: self.skills,
            experience: self.experience,
            education: self.education,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// # Returns
    /// - `Err(AppError::Internal(InvalidStoredJson))` - Stored skills are not a list of strings
    pub fn from_entity(entity: entity::candidat::Model) -> Result<Self, AppError> {
        let skills = serde_json::from_value(entity.skills).map_err(|source| {
            InternalError::InvalidStoredJson {
                field: "skills",
                source,
            }
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            cv_url: entity.cv_url,
            skills,
            experience: entity.experience,
            education: entity.education,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateCandidatParams {
    pub user_id: i32,
    pub cv_url: Option<String>,
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
}

impl CreateCandidatParams {
    pub fn from_dto(dto: CreateCandidatDto) -> Self {
        Self {
            user_id: dto.user_id,
            cv_url: dto.cv_url,
            skills: dto.skills,
            experience: dto.experience,
            education: dto.education,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
    /// Replaces the whole list when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
}

impl CandidatPatch {
    pub fn from_dto(dto: UpdateCandidatDto) -> Self {
        Self {
            cv_url: dto.cv_url,
            skills: dto.skills,
            experience: dto.experience,
            education: dto.education,
        }
    }
}

impl PatchSchema for CandidatPatch {
    type Entity = entity::candidat::Entity;

    const FIELDS: &'static [PatchField<Self, Column>] = &[
        PatchField {
            name: "cvUrl",
            column: Column::CvUrl,
            value: |p| p.cv_url.clone().map(Value::from),
        },
        PatchField {
            name: "skills",
            column: Column::Skills,
            value: |p| p.skills.as_ref().map(|skills| Value::from(serde_json::json!(skills))),
        },
        PatchField {
            name: "experience",
            column: Column::Experience,
            value: |p| p.experience.clone().map(Value::from),
        },
        PatchField {
            name: "education",
            column: Column::Education,
            value: |p| p.education.clone().map(Value::from),
        },
    ];
}
