mod airport;
mod booking;
mod flight;
mod passenger;
mod seat;
