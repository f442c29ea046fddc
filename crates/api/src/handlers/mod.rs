pub mod admin;
pub mod albums;
pub mod auth;
pub mod profile;
pub mod reports;
pub mod users;
pub mod videos;
