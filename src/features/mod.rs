pub mod auth;
pub mod bookings;
pub mod categories;
pub mod courts;
pub mod news;
pub mod settings;
pub mod users;
