use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::airport::{Airport, CreateAirportParam};

/// Repository providing database operations for airports.
pub struct AirportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new airport; the code is expected to be normalized already.
    pub async fn create(&self, param: CreateAirportParam) -> Result<Airport, DbErr> {
        let entity = entity::airport::ActiveModel {
            name: ActiveValue::Set(param.name),
            code: ActiveValue::Set(param.code),
            address: ActiveValue::Set(param.address),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Airport::from_entity(entity))
    }

    /// Gets a non-deleted airport by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Airport>, DbErr> {
        let entity = entity::prelude::Airport::find_by_id(id)
            .filter(entity::airport::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Airport::from_entity))
    }

    /// Checks whether a non-deleted airport with this ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Airport::find()
            .filter(entity::airport::Column::Id.eq(id))
            .filter(entity::airport::Column::IsDeleted.eq(false))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a non-deleted airport already uses `code`.
    pub async fn exists_by_code(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Airport::find()
            .filter(entity::airport::Column::Code.eq(code))
            .filter(entity::airport::Column::IsDeleted.eq(false))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all non-deleted airports ordered by code.
    pub async fn get_all(&self) -> Result<Vec<Airport>, DbErr> {
        let entities = entity::prelude::Airport::find()
            .filter(entity::airport::Column::IsDeleted.eq(false))
            .order_by_asc(entity::airport::Column::Code)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Airport::from_entity).collect())
    }

    /// Soft-deletes every airport, returning how many rows changed.
    pub async fn soft_delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Airport::update_many()
            .col_expr(entity::airport::Column::IsDeleted, Expr::value(true))
            .filter(entity::airport::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
