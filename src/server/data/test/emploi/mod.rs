use crate::server::{
    data::emploi::EmploiRepository,
    error::AppError,
    model::emploi::{CreateEmploiParams, EmploiPatch},
    patch::ChangeSet,
    query::Filters,
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_pair;
mod find_page;
mod patch;
