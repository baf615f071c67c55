//! Entreprise domain models and parameters.
//!
//! Entreprises are hard-deleted and unique by exact name.

use chrono::{DateTime, Utc};
use sea_orm::Value;
use serde::Serialize;

use crate::{
    model::entreprise::{CreateEntrepriseDto, EntrepriseDto, UpdateEntrepriseDto},
    server::{
        error::AppError,
        patch::{PatchField, PatchSchema},
        util::validate::require_text,
    },
};

use entity::entreprise::Column;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entreprise {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    /// Id of the user who registered the entreprise.
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entreprise {
    pub fn into_dto(self) -> EntrepriseDto {
        EntrepriseDto {
            id: self.id,
            name: self.name,
            description: self.description,
            logo: self.logo,
            website: self.website,
            location: self.location,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::entreprise::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            logo: entity.logo,
            website: entity.website,
            location: entity.location,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEntrepriseParams {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub created_by: i32,
}

impl CreateEntrepriseParams {
    pub fn from_dto(dto: CreateEntrepriseDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            logo: dto.logo,
            website: dto.website,
            location: dto.location,
            created_by: dto.created_by,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntreprisePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl EntreprisePatch {
    pub fn from_dto(dto: UpdateEntrepriseDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            description: dto.description,
            logo: dto.logo,
            website: dto.website,
            location: dto.location,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        match &self.name {
            Some(name) => require_text("name", name),
            None => Ok(()),
        }
    }
}

impl PatchSchema for EntreprisePatch {
    type Entity = entity::entreprise::Entity;

    const FIELDS: &'static [PatchField<Self, Column>] = &[
        PatchField {
            name: "name",
            column: Column::Name,
            value: |p| p.name.clone().map(Value::from),
        },
        PatchField {
            name: "description",
            column: Column::Description,
            value: |p| p.description.clone().map(Value::from),
        },
        PatchField {
            name: "logo",
            column: Column::Logo,
            value: |p| p.logo.clone().map(Value::from),
        },
        PatchField {
            name: "website",
            column: Column::Website,
            value: |p| p.website.clone().map(Value::from),
        },
        PatchField {
            name: "location",
            column: Column::Location,
            value: |p| p.location.clone().map(Value::from),
        },
    ];
}
