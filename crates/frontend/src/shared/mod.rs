pub mod api_client;
pub mod api_utils;
pub mod color_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod list_controller;
pub mod list_core;
pub mod list_utils;
pub mod messages;
pub mod uploads;
