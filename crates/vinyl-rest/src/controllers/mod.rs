//! REST API controllers.

pub mod album_controller;
pub mod auth_controller;
pub mod health_controller;
pub mod hello_controller;

pub use health_controller::*;
