use crate::server::{
    data::candidat::CandidatRepository,
    error::AppError,
    model::candidat::{CandidatPatch, CreateCandidatParams},
    patch::ChangeSet,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_user_id;
mod patch;
