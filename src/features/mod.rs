pub mod admin;
pub mod auth;
pub mod catalog;
pub mod purchases;
pub mod uploads;
