//! Emploi (employment link) domain models and parameters.
//!
//! An emploi links a user to an entreprise. At most one active link may exist per
//! (user, entreprise) pair; emplois are soft-deleted.

use chrono::{DateTime, Utc};
use sea_orm::Value;
use serde::Serialize;

use crate::{
    model::emploi::{CreateEmploiDto, EmploiDto, UpdateEmploiDto},
    server::{
        error::AppError,
        patch::{PatchField, PatchSchema},
        util::validate::require_text,
    },
};

use entity::emploi::Column;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Emploi {
    pub id: i32,
    pub user_id: i32,
    pub entreprise_id: i32,
    pub position: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Emploi {
    pub fn into_dto(self) -> EmploiDto {
        EmploiDto {
            id: self.id,
            user_id: self.user_id,
            entreprise_id: self.entreprise_id,
            position: self.position,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::emploi::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            entreprise_id: entity.entreprise_id,
            position: entity.position,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEmploiParams {
    pub user_id: i32,
    pub entreprise_id: i32,
    pub position: String,
}

impl CreateEmploiParams {
    pub fn from_dto(dto: CreateEmploiDto) -> Self {
        Self {
            user_id: dto.user_id,
            entreprise_id: dto.entreprise_id,
            position: dto.position,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        require_text("position", &self.position)
    }
}

/// Only the position of an employment link can change; the pair it links is fixed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploiPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl EmploiPatch {
    pub fn from_dto(dto: UpdateEmploiDto) -> Self {
        Self {
            position: dto.position,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        match &self.position {
            Some(position) => require_text("position", position),
            None => Ok(()),
        }
    }
}

impl PatchSchema for EmploiPatch {
    type Entity = entity::emploi::Entity;

    const FIELDS: &'static [PatchField<Self, Column>] = &[PatchField {
        name: "position",
        column: Column::Position,
        value: |p| p.position.clone().map(Value::from),
    }];
}
