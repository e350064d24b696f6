use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::aircraft::{Aircraft, CreateAircraftParam};

/// Repository providing database operations for aircraft.
pub struct AircraftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AircraftRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new aircraft.
    pub async fn create(&self, param: CreateAircraftParam) -> Result<Aircraft, DbErr> {
        let entity = entity::aircraft::ActiveModel {
            name: ActiveValue::Set(param.name),
            model: ActiveValue::Set(param.model),
            manufacturing_year: ActiveValue::Set(param.manufacturing_year),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Aircraft::from_entity(entity))
    }

    /// Checks whether a non-deleted aircraft with this ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Id.eq(id))
            .filter(entity::aircraft::Column::IsDeleted.eq(false))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a non-deleted aircraft already uses `model`.
    pub async fn exists_by_model(&self, model: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Model.eq(model))
            .filter(entity::aircraft::Column::IsDeleted.eq(false))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all non-deleted aircraft ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Aircraft>, DbErr> {
        let entities = entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::IsDeleted.eq(false))
            .order_by_asc(entity::aircraft::Column::Name)
            .order_by_asc(entity::aircraft::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Aircraft::from_entity).collect())
    }

    /// Soft-deletes every aircraft, returning how many rows changed.
    pub async fn soft_delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Aircraft::update_many()
            .col_expr(entity::aircraft::Column::IsDeleted, Expr::value(true))
            .filter(entity::aircraft::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
