use crate::server::{
    data::entreprise::EntrepriseRepository,
    error::AppError,
    model::entreprise::{CreateEntrepriseParams, EntreprisePatch},
    patch::ChangeSet,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_name;
mod patch;
