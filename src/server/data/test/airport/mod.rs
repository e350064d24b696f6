use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::airport::AirportFactory};

use crate::server::data::airport::AirportRepository;

mod exists_by_code;
mod get_all;
