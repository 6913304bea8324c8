// Presentation layer - HTTP handlers for serve mode
pub mod app_state;
pub mod handlers;
