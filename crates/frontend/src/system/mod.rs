pub mod auth;
pub mod companies;
pub mod pages;
pub mod roles;
pub mod users;
