use crate::server::{
    data::favorite::FavoriteRepository, error::AppError, service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};
