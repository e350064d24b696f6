use test_utils::{builder::TestBuilder, factory::passenger::PassengerFactory};

use crate::server::{
    data::passenger::PassengerRepository,
    error::AppError,
    model::passenger::{CompleteRegistrationParam, PassengerType},
};
