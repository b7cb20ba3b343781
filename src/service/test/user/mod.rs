use crate::{
    error::AppError,
    model::user::{RegisterUserParams, Role},
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod authenticate;
