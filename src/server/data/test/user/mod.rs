use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UserPatch},
    patch::ChangeSet,
    query::Filters,
};
use crate::model::user::{Role, UserStatus};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod find_page;
mod patch;
