use crate::server::{
    data::application::ApplicationRepository,
    error::AppError,
    model::application::{ApplicationPatch, CreateApplicationParams},
    patch::ChangeSet,
    query::Filters,
};
use crate::model::application::ApplicationStatus;
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_page;
mod patch;
