pub mod admin;
pub mod bookings;
pub mod reviews;
pub mod scope;
pub mod tasks;
pub mod vendors;

pub use scope::ScreenScope;
