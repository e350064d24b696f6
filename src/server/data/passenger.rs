use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::passenger::{CompleteRegistrationParam, CreatePassengerParam, Passenger},
};

/// Repository providing database operations for passengers.
pub struct PassengerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PassengerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new passenger.
    pub async fn create(&self, param: CreatePassengerParam) -> Result<Passenger, AppError> {
        let entity = entity::passenger::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            name: ActiveValue::Set(param.name),
            passport_number: ActiveValue::Set(param.passport_number),
            passenger_type: ActiveValue::Set(param.passenger_type.into()),
            age: ActiveValue::Set(None),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Passenger::from_entity(entity)?)
    }

    /// Gets a non-deleted passenger by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Passenger>, AppError> {
        let entity = entity::prelude::Passenger::find_by_id(id)
            .filter(entity::passenger::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Passenger::from_entity).transpose()?)
    }

    /// Gets all non-deleted passengers ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Passenger>, AppError> {
        let entities = entity::prelude::Passenger::find()
            .filter(entity::passenger::Column::IsDeleted.eq(false))
            .order_by_asc(entity::passenger::Column::Id)
            .all(self.db)
            .await?;

        let passengers = entities
            .into_iter()
            .map(Passenger::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(passengers)
    }

    /// Sets type and age on the passenger holding the given passport number.
    ///
    /// # Returns
    /// - `Ok(Some(Passenger))` - The updated passenger
    /// - `Ok(None)` - No non-deleted passenger has this passport number
    pub async fn complete_registration(
        &self,
        param: CompleteRegistrationParam,
    ) -> Result<Option<Passenger>, AppError> {
        let Some(existing) = entity::prelude::Passenger::find()
            .filter(entity::passenger::Column::PassportNumber.eq(param.passport_number))
            .filter(entity::passenger::Column::IsDeleted.eq(false))
            .order_by_asc(entity::passenger::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::passenger::ActiveModel = existing.into();
        active_model.passenger_type = ActiveValue::Set(param.passenger_type.into());
        active_model.age = ActiveValue::Set(Some(param.age));

        let entity = active_model.update(self.db).await?;

        Ok(Some(Passenger::from_entity(entity)?))
    }

    /// Maps passenger IDs to names, deleted passengers included.
    pub async fn names_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, String>, AppError> {
        let entities = entity::prelude::Passenger::find()
            .filter(entity::passenger::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|p| (p.id, p.name)).collect())
    }
}
