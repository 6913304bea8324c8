// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod flood_monitoring_repository;
pub mod html_surface;
pub mod http_response;
