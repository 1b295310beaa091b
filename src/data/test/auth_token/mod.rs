use crate::data::auth_token::AuthTokenRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_user_by_token;
