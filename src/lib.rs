pub mod api;
pub mod handlers;
pub mod messages;
pub mod models;
pub mod service;
