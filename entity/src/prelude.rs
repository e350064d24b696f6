pub use super::aircraft::Entity as Aircraft;
pub use super::airport::Entity as Airport;
pub use super::booking::Entity as Booking;
pub use super::flight::Entity as Flight;
pub use super::passenger::Entity as Passenger;
pub use super::seat::Entity as Seat;
pub use super::user::Entity as User;
