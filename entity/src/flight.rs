use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub flight_number: String,
    pub aircraft_id: i32,
    pub departure_airport_id: i32,
    pub arrival_airport_id: i32,
    pub departure_date: DateTimeUtc,
    pub arrival_date: DateTimeUtc,
    pub flight_date: DateTimeUtc,
    pub duration_minutes: i32,
    /// Stored `FlightStatus` discriminant.
    pub status: i32,
    pub price: f64,
    pub is_deleted: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aircraft::Entity",
        from = "Column::AircraftId",
        to = "super::aircraft::Column::Id"
    )]
    Aircraft,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::DepartureAirportId",
        to = "super::airport::Column::Id"
    )]
    DepartureAirport,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::ArrivalAirportId",
        to = "super::airport::Column::Id"
    )]
    ArrivalAirport,
    #[sea_orm(has_many = "super::seat::Entity")]
    Seat,
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircraft.def()
    }
}

impl Related<super::seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
