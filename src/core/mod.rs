//! Configuration, data model and notification content

pub mod config;
pub mod models;
pub mod notification;
