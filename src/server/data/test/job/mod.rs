use crate::server::{
    data::job::JobRepository,
    error::AppError,
    model::job::{CreateJobParams, JobPatch},
    patch::ChangeSet,
    query::Filters,
};
use crate::model::job::JobStatus;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_page;
mod patch;
