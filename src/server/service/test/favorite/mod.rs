use crate::server::{
    error::AppError,
    model::favorite::{FavoriteOutcome, UnfavoriteOutcome},
    service::favorite::FavoriteService,
};
use test_utils::{builder::TestBuilder, factory};

mod unfavorite;
